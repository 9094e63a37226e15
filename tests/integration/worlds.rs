//! JSON worlds played through the game loop

use std::path::Path;

use textadv_runtime::{Ending, Game, demo_world, load_world, parse_world};

const LIGHTHOUSE: &str = r#"{
  "world": { "name": "Lighthouse", "start": "shore" },
  "player": "keeper",
  "objects": [
    { "name": "crowbar", "kind": "tool" },
    { "name": "crate", "kind": "fragile", "targets": ["lens"] },
    { "name": "lens", "kind": "treasure" },
    { "name": "lantern", "kind": "fire", "lit": false }
  ],
  "links": [
    { "name": "hatch", "kind": "hatch", "rooms": ["shore", "tower"] }
  ],
  "rooms": [
    {
      "name": "shore",
      "description": "Waves break on the rocks.",
      "objects": ["crowbar", "lantern"],
      "exits": [["up", "tower"], ["north", "hatch"]]
    },
    {
      "name": "tower",
      "description": "A spiral of stairs.",
      "objects": ["crate"],
      "exits": [["down", "shore"], ["south", "hatch"]]
    }
  ]
}"#;

fn lighthouse() -> Game {
    let mut game = Game::new(parse_world(LIGHTHOUSE).unwrap());
    game.start();
    game
}

fn play(game: &mut Game, line: &str) -> String {
    game.play_line(line).unwrap().unwrap()
}

#[test]
fn treasure_defaults_to_the_treasure_object() {
    let mut game = Game::new(parse_world(LIGHTHOUSE).unwrap());
    let welcome = game.start();
    assert!(welcome.contains("You are keeper, in the shore. Find the lens and take it!"));
    assert!(welcome.contains("up: a passage to the tower"));
}

#[test]
fn loaded_world_plays_to_a_win() {
    let mut game = lighthouse();
    play(&mut game, "take the crowbar");
    play(&mut game, "go up");
    assert_eq!(
        play(&mut game, "smash the crate with the crowbar"),
        "You break the crate with the crowbar.\nYou notice: lens."
    );
    assert!(play(&mut game, "take lens").starts_with("You take the lens."));
    assert_eq!(game.ending(), Ending::Won);
    assert_eq!(game.turns(), 4);
}

#[test]
fn unlit_fires_can_be_lit() {
    let mut game = lighthouse();
    play(&mut game, "take crowbar");
    assert_eq!(play(&mut game, "use crowbar on lantern"), "You light the lantern.");
    assert_eq!(play(&mut game, "look at the lantern"), "The lantern (lit).");
}

#[test]
fn hatches_start_locked() {
    let mut game = lighthouse();
    assert_eq!(
        play(&mut game, "open hatch"),
        "The hatch is locked. You need something to open it."
    );
    assert_eq!(play(&mut game, "go north"), "The hatch is closed.");
    assert_eq!(game.world().current().name(), "shore");
}

#[test]
fn only_the_screwdriver_turns_the_screw() {
    let mut game = Game::new(demo_world().unwrap());
    game.start();
    for line in [
        "take hammer",
        "open desk",
        "take key from desk",
        "open the oak-door with the key",
        "go north",
    ] {
        play(&mut game, line);
    }
    assert_eq!(game.world().current().name(), "library");
    assert_eq!(
        play(&mut game, "use hammer on screw"),
        "The hammer does not fit the screw."
    );
    assert_eq!(play(&mut game, "go down"), "The trapdoor is closed.");
    assert_eq!(game.world().current().name(), "library");
}

#[test]
fn bundled_world_file_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("crates")
        .join("textadv_runtime")
        .join("worlds")
        .join("manor.json");
    let world = load_world(&path).unwrap();
    assert_eq!(world.name(), "Greystone Manor");
    assert_eq!(world.rooms().count(), 7);
    assert_eq!(world.current().name(), "foyer");
    let treasure = world.treasure().unwrap();
    assert_eq!(world.entity(treasure).name(), "treasure");
}
