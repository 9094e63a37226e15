//! Taking, buying and giving

use textadv_engine::Event;
use textadv_foundation::{Direction, ErrorKind};
use textadv_world::{
    Animal, Attention, Character, CharacterRole, Container, EntityKind, Guarded, Item, ItemRole,
    Openable, World, WorldBuilder,
};

use crate::{exec, item, say};

fn animal(sound: &str, carryable: bool) -> EntityKind {
    EntityKind::Character(Character::new(CharacterRole::Animal(Animal {
        sound: sound.into(),
        carryable,
    })))
}

fn market() -> World {
    WorldBuilder::new("market")
        .room("plaza", "Stalls and shouting.")
        .room("vault", "Gold glints in the dark.")
        .exit("plaza", Direction::North, "vault")
        .exit("vault", Direction::South, "plaza")
        .entity("hammer", item(ItemRole::Powerful))
        .entity("coins", item(ItemRole::Money))
        .entity("lamp", EntityKind::Item(Item::new(ItemRole::Plain).for_sale()))
        .entity_with_targets(
            "merchant",
            EntityKind::Character(
                Character::new(CharacterRole::Vendor).with_dialogue("Lamps, fine lamps!"),
            ),
            ["lamp"],
        )
        .entity("cat", animal("Meow.", true))
        .entity("dog", animal("Woof.", false))
        .entity_with_targets(
            "chest",
            EntityKind::Container(Container {
                lid: Openable::plain(),
                spills: false,
            }),
            ["ring"],
        )
        .entity("ring", item(ItemRole::Plain))
        .entity("statue", EntityKind::Fixture)
        .entity("crown", item(ItemRole::Guarded(Guarded::free())))
        .entity("orb", item(ItemRole::Guarded(Guarded::free())))
        .entity_with_targets(
            "guard",
            EntityKind::Character(Character::new(CharacterRole::Guard(Attention::Watchful))),
            ["crown", "orb"],
        )
        .place("hammer", "plaza")
        .place("coins", "plaza")
        .place("lamp", "plaza")
        .place("merchant", "plaza")
        .place("cat", "plaza")
        .place("dog", "plaza")
        .place("chest", "plaza")
        .place("statue", "plaza")
        .place("crown", "vault")
        .place("orb", "vault")
        .place("guard", "vault")
        .start("plaza")
        .player("ada")
        .treasure("crown")
        .build()
        .unwrap()
}

// =============================================================================
// take
// =============================================================================

#[test]
fn take_moves_the_item_into_the_inventory() {
    let mut world = market();
    let outcome = exec(&mut world, "take hammer").unwrap();
    let hammer = world.entity_id("hammer").unwrap();
    assert_eq!(outcome.message, "You take the hammer.");
    assert_eq!(outcome.events, [Event::Taken(hammer)]);
    assert!(world.player().inventory().contains(hammer));
    assert!(!world.current().contains(hammer));

    assert_eq!(say(&mut world, "get hammer"), "You already have the hammer.");
}

#[test]
fn take_refuses_in_ladder_order() {
    let mut world = market();
    assert_eq!(say(&mut world, "take lamp"), "You have to pay for the lamp!");
    assert_eq!(say(&mut world, "take statue"), "The statue cannot be taken.");
    assert_eq!(say(&mut world, "take dog"), "The dog cannot be taken.");
    assert_eq!(
        say(&mut world, "take ring"),
        "You cannot get to the ring right now. Try the chest."
    );
    assert_eq!(say(&mut world, "take ghost"), "The ghost cannot be taken.");
    assert!(world.player().inventory().is_empty());
}

#[test]
fn carryable_animals_can_be_picked_up() {
    let mut world = market();
    exec(&mut world, "take cat").unwrap();
    assert!(world.carried("cat").is_some());
}

#[test]
fn take_from_needs_an_open_container() {
    let mut world = market();
    assert_eq!(say(&mut world, "take ring chest"), "The chest is closed.");

    exec(&mut world, "open chest").unwrap();
    assert_eq!(
        say(&mut world, "take ring chest"),
        "You take the ring from the chest."
    );
    assert!(world.carried("ring").is_some());
    assert!(!world.entity(world.entity_id("chest").unwrap()).knows("ring"));
    assert_eq!(
        say(&mut world, "take ring chest"),
        "There is no ring in the chest."
    );

    let err = exec(&mut world, "take ring crate").unwrap_err();
    assert_eq!(err.kind, ErrorKind::EntityNotFound("crate".into()));
}

// =============================================================================
// give
// =============================================================================

#[test]
fn paying_a_vendor_buys_its_wares() {
    let mut world = market();
    exec(&mut world, "take coins").unwrap();
    let outcome = exec(&mut world, "pay coins merchant").unwrap();

    let coins = world.entity_id("coins").unwrap();
    let lamp = world.entity_id("lamp").unwrap();
    let merchant = world.entity_id("merchant").unwrap();
    assert_eq!(
        outcome.message,
        "You pay the merchant with the coins. You now have: lamp."
    );
    assert_eq!(
        outcome.events,
        [
            Event::Given {
                item: coins,
                to: merchant
            },
            Event::Bought(lamp),
        ]
    );
    assert!(world.player().inventory().contains(lamp));
    assert!(!world.entity(lamp).is_for_sale());
    assert!(
        world
            .entity(merchant)
            .character()
            .unwrap()
            .inventory
            .contains(coins)
    );

    exec(&mut world, "take hammer").unwrap();
    let err = exec(&mut world, "give hammer merchant").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CannotBuy(_)));
}

#[test]
fn vendors_only_take_money() {
    let mut world = market();
    exec(&mut world, "take hammer").unwrap();
    assert_eq!(
        say(&mut world, "give hammer merchant"),
        "The merchant only accepts money."
    );
    assert!(world.carried("hammer").is_some());
    assert!(world.entity(world.entity_id("lamp").unwrap()).is_for_sale());
}

#[test]
fn an_animal_distracts_the_guard() {
    let mut world = market();
    exec(&mut world, "take cat").unwrap();
    exec(&mut world, "go north").unwrap();
    assert_eq!(
        say(&mut world, "take crown"),
        "The crown is being watched. You cannot take it."
    );

    let outcome = exec(&mut world, "give cat guard").unwrap();
    assert_eq!(
        outcome.message,
        "You give the cat to the guard. The guard is distracted."
    );

    let cat = world.entity_id("cat").unwrap();
    let guard = world.entity_id("guard").unwrap();
    let crown = world.entity_id("crown").unwrap();
    let orb = world.entity_id("orb").unwrap();
    assert_eq!(outcome.events[0], Event::Given { item: cat, to: guard });
    assert!(outcome.events.contains(&Event::Freed(crown)));
    assert!(outcome.events.contains(&Event::Freed(orb)));
    assert!(world.entity(guard).character().unwrap().inventory.contains(cat));
    assert!(world.carried("cat").is_none());

    exec(&mut world, "take crown").unwrap();
    exec(&mut world, "take orb").unwrap();
    assert!(world.has_won());
}

#[test]
fn other_gifts_leave_the_guard_watching() {
    let mut world = market();
    exec(&mut world, "take hammer").unwrap();
    exec(&mut world, "go north").unwrap();
    assert_eq!(
        say(&mut world, "give hammer guard"),
        "You give the hammer to the guard."
    );
    let crown = world.entity_id("crown").unwrap();
    assert!(world.entity(crown).guarded().unwrap().is_watched());
    assert!(world.carried("hammer").is_none());
}

#[test]
fn give_checks_item_and_recipient() {
    let mut world = market();
    assert_eq!(
        say(&mut world, "give lamp merchant"),
        "You are not carrying the lamp."
    );

    exec(&mut world, "take hammer").unwrap();
    assert_eq!(say(&mut world, "give hammer ghost"), "There is no ghost here.");
    assert_eq!(
        say(&mut world, "give hammer statue"),
        "The statue cannot take anything."
    );
    assert_eq!(
        say(&mut world, "give hammer cat"),
        "The cat is not interested in the hammer."
    );
    assert!(world.carried("hammer").is_some());
}
