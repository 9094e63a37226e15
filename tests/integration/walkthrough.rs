//! Replaying the bundled walkthrough on the demo world

use std::path::Path;

use textadv_runtime::game::VICTORY;
use textadv_runtime::{Ending, Game, GameState, demo_world, replay, replay_file};

const MANOR_SCRIPT: &str = include_str!("../../crates/textadv_runtime/worlds/manor.script");

fn play(script: &str, echo: bool) -> (Ending, Game, String) {
    let mut game = Game::new(demo_world().unwrap());
    let mut out = Vec::new();
    let ending = replay(&mut game, script, echo, &mut out).unwrap();
    (ending, game, String::from_utf8(out).unwrap())
}

#[test]
fn walkthrough_wins_the_manor() {
    let (ending, game, text) = play(MANOR_SCRIPT, true);
    assert_eq!(ending, Ending::Won);
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.turns(), 32);
    assert!(text.starts_with("Greystone Manor\n"));
    assert!(text.contains("You are visitor, in the foyer. Find the treasure and take it!"));
    assert!(text.trim_end().ends_with(VICTORY));
}

#[test]
fn walkthrough_passes_every_obstacle() {
    let (_, _, text) = play(MANOR_SCRIPT, true);
    for expected in [
        "> open the oak-door with the key\nYou open the oak-door with the key.",
        "You break the piggybank.\nYou notice: coins.",
        "You fill the bucket from the well.\nYou notice: medallion.",
        "The merchant says: \"Fine tools, fair prices. Coins only.\"",
        "You pay the merchant with the coins. You now have: screwdriver.",
        "You pet the cat. Meow.",
        "You put out the fireplace with the bucket.\nYou notice: silver-key.",
        "You work the screw with the screwdriver. The trapdoor opens.",
        "The treasure is being watched. You cannot take it.",
        "You give the cat to the guard. The guard is distracted.",
    ] {
        assert!(text.contains(expected), "missing: {expected}");
    }
}

#[test]
fn stopping_short_of_the_treasure_is_lost() {
    let lines: Vec<&str> = MANOR_SCRIPT.lines().collect();
    let short = lines[..lines.len() - 1].join("\n");
    let (ending, game, text) = play(&short, false);
    assert_eq!(ending, Ending::Lost);
    assert_eq!(game.turns(), 31);
    assert!(!text.contains(VICTORY));
    assert!(game.world().carried("cat").is_none());
}

#[test]
fn commands_after_the_win_are_ignored() {
    let script = format!("{MANOR_SCRIPT}\ngo south\nlook\n");
    let (ending, game, _) = play(&script, false);
    assert_eq!(ending, Ending::Won);
    assert_eq!(game.turns(), 32);
}

#[test]
fn replay_file_reads_the_script_from_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("crates")
        .join("textadv_runtime")
        .join("worlds")
        .join("manor.script");
    let mut game = Game::new(demo_world().unwrap());
    let mut out = Vec::new();
    let ending = replay_file(&mut game, &path, false, &mut out).unwrap();
    assert_eq!(ending, Ending::Won);
}
