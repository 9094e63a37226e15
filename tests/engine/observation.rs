//! Looking, talking, petting and the vocabulary

use textadv_engine::{CommandEngine, Verb};
use textadv_foundation::{Direction, ErrorKind};
use textadv_world::{
    Animal, Attention, Character, CharacterRole, EntityKind, ItemRole, World, WorldBuilder,
};

use crate::{command, exec, item, say};

fn den() -> World {
    WorldBuilder::new("den")
        .room("den", "Cosy.")
        .room("attic", "Dusty.")
        .exit("den", Direction::North, "attic")
        .entity("lamp", item(ItemRole::Plain))
        .entity(
            "cat",
            EntityKind::Character(Character::new(CharacterRole::Animal(Animal {
                sound: "Purr.".into(),
                carryable: true,
            }))),
        )
        .entity(
            "hermit",
            EntityKind::Character(
                Character::new(CharacterRole::Guard(Attention::Watchful))
                    .with_dialogue("Go away."),
            ),
        )
        .entity("mute", EntityKind::Character(Character::new(CharacterRole::Vendor)))
        .place("lamp", "den")
        .place("cat", "den")
        .place("hermit", "den")
        .place("mute", "den")
        .start("den")
        .player("ada")
        .build()
        .unwrap()
}

#[test]
fn look_describes_the_room() {
    let mut world = den();
    let outcome = exec(&mut world, "look").unwrap();
    assert_eq!(outcome.message, world.describe_room());
    assert!(outcome.message.starts_with("den\nCosy."));
    assert!(outcome.message.contains("You see: lamp, cat, hermit, mute."));
    assert!(!outcome.changed());
}

#[test]
fn look_at_things_and_directions() {
    let mut world = den();
    assert_eq!(say(&mut world, "look lamp"), "The lamp.");
    assert_eq!(say(&mut world, "x north"), "To the north: a passage to the attic.");
    assert_eq!(say(&mut world, "l west"), "There is nothing to the west.");

    let err = exec(&mut world, "examine ghost").unwrap_err();
    assert_eq!(err.kind, ErrorKind::EntityNotFound("ghost".into()));

    exec(&mut world, "take lamp").unwrap();
    assert_eq!(say(&mut world, "look lamp"), "The lamp.");
}

#[test]
fn inventory_lists_what_is_carried() {
    let mut world = den();
    assert_eq!(say(&mut world, "i"), "You are not carrying anything.");
    exec(&mut world, "take lamp").unwrap();
    assert_eq!(say(&mut world, "inventory"), "You are carrying:\n - lamp");
}

#[test]
fn talk_uses_fixed_dialogue() {
    let mut world = den();
    assert_eq!(say(&mut world, "talk hermit"), "The hermit says: \"Go away.\"");
    assert_eq!(say(&mut world, "ask mute"), "The mute has nothing to say.");
    assert_eq!(say(&mut world, "speak lamp"), "The lamp does not answer.");

    let err = exec(&mut world, "talk ghost").unwrap_err();
    assert_eq!(err.kind, ErrorKind::EntityNotFound("ghost".into()));
}

#[test]
fn only_animals_can_be_petted() {
    let mut world = den();
    assert_eq!(say(&mut world, "pet cat"), "You pet the cat. Purr.");
    assert_eq!(say(&mut world, "stroke lamp"), "You cannot pet the lamp.");

    exec(&mut world, "take cat").unwrap();
    assert_eq!(say(&mut world, "pet cat"), "You pet the cat. Purr.");
}

#[test]
fn unknown_verbs_and_arities_are_unsupported() {
    let mut world = den();
    let err = exec(&mut world, "dance").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UnsupportedOperation {
            verb: "dance".into(),
            arity: 0
        }
    );

    let err = exec(&mut world, "get lamp from shelf").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UnsupportedOperation {
            verb: "get".into(),
            arity: 3
        }
    );

    for line in ["inventory lamp", "talk", "go", "look lamp cat"] {
        let result = CommandEngine::new().respond(&mut world, &command(line));
        assert!(result.unwrap_err().is_unsupported(), "{line}");
    }
    assert!(world.carried("lamp").is_none());
}

#[test]
fn custom_synonyms_resolve() {
    let mut world = den();
    let mut engine = CommandEngine::new();
    engine.vocabulary_mut().add_synonym("peer", Verb::Look);
    let outcome = engine.execute(&mut world, &command("peer lamp")).unwrap();
    assert_eq!(outcome.message, "The lamp.");
}
