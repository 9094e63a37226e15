//! The use ladder, breaking and opening with tools

use textadv_engine::Event;
use textadv_foundation::{Direction, ErrorKind};
use textadv_world::{
    Container, Door, EntityId, EntityKind, Fillable, Fragile, Ignitable, ItemRole, LinkKind,
    Openable, World, WorldBuilder,
};

use crate::{exec, item, say};

fn shed() -> World {
    WorldBuilder::new("shed")
        .room("shed", "Tools hang on the walls.")
        .room("cellar", "Cold.")
        .link("hatch", "shed", "cellar", LinkKind::Door(Door::hatch()))
        .exit("shed", Direction::Down, "hatch")
        .exit("cellar", Direction::Up, "hatch")
        .entity_with_targets("bolt", EntityKind::Fixture, ["hatch"])
        .entity("hammer", item(ItemRole::Powerful))
        .entity_with_targets("spanner", item(ItemRole::Plain), ["bolt"])
        .entity("bucket", item(ItemRole::Vessel(Fillable::empty())))
        .entity_with_targets("vase", EntityKind::Breakable(Fragile::sturdy()), ["coin"])
        .entity("coin", item(ItemRole::Money))
        .entity("pot", EntityKind::Breakable(Fragile::flimsy()))
        .entity_with_targets("well", EntityKind::Source(Fillable::full()), ["ring"])
        .entity("ring", item(ItemRole::Plain))
        .entity_with_targets("stove", EntityKind::Burner(Ignitable::lit()), ["poker"])
        .entity("poker", item(ItemRole::Plain))
        .entity("statue", EntityKind::Fixture)
        .entity_with_targets("tin-key", item(ItemRole::Key), ["box"])
        .entity_with_targets(
            "box",
            EntityKind::Container(Container {
                lid: Openable::lockable(),
                spills: true,
            }),
            ["gem"],
        )
        .entity("gem", item(ItemRole::Plain))
        .place("bolt", "shed")
        .place("hammer", "shed")
        .place("spanner", "shed")
        .place("bucket", "shed")
        .place("vase", "shed")
        .place("pot", "shed")
        .place("well", "shed")
        .place("stove", "shed")
        .place("statue", "shed")
        .place("tin-key", "shed")
        .place("box", "shed")
        .start("shed")
        .player("ada")
        .build()
        .unwrap()
}

fn id(world: &World, name: &str) -> EntityId {
    world.entity_id(name).unwrap()
}

// =============================================================================
// Breaking
// =============================================================================

#[test]
fn powerful_tools_break_fragile_things() {
    let mut world = shed();
    exec(&mut world, "take hammer").unwrap();
    let outcome = exec(&mut world, "use hammer vase").unwrap();
    assert_eq!(
        outcome.message,
        "You break the vase with the hammer.\nYou notice: coin."
    );
    assert_eq!(
        outcome.events,
        [Event::Broken(id(&world, "vase")), Event::Revealed(id(&world, "coin"))]
    );
    assert!(world.visible("coin").is_some());

    let err = exec(&mut world, "break vase hammer").unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlreadyBroken("vase".into()));
}

#[test]
fn bare_hands_break_only_flimsy_things() {
    let mut world = shed();
    assert_eq!(
        say(&mut world, "break vase"),
        "You need something powerful to break the vase."
    );
    assert_eq!(say(&mut world, "smash pot"), "You break the pot.");
    assert_eq!(say(&mut world, "break statue"), "The statue cannot be broken.");

    exec(&mut world, "take hammer").unwrap();
    assert_eq!(say(&mut world, "break vase"), "You break the vase.\nYou notice: coin.");
}

// =============================================================================
// Use ladder
// =============================================================================

#[test]
fn tool_must_be_carried() {
    let mut world = shed();
    assert_eq!(
        say(&mut world, "use hammer vase"),
        "You are not carrying the hammer."
    );
    assert!(world.visible("coin").is_none());
}

#[test]
fn no_rule_means_cannot_use() {
    let mut world = shed();
    exec(&mut world, "take spanner").unwrap();
    assert_eq!(
        say(&mut world, "use spanner vase"),
        "You cannot use the spanner on the vase."
    );
    assert_eq!(
        say(&mut world, "use spanner ghost"),
        "You cannot use the spanner on the ghost."
    );
}

#[test]
fn bucket_fills_from_the_well_and_puts_out_the_stove() {
    let mut world = shed();
    exec(&mut world, "take bucket").unwrap();
    assert_eq!(
        say(&mut world, "use bucket stove"),
        "You cannot put out the stove with the bucket."
    );

    let outcome = exec(&mut world, "use bucket well").unwrap();
    assert_eq!(
        outcome.message,
        "You fill the bucket from the well.\nYou notice: ring."
    );
    assert_eq!(
        outcome.events,
        [Event::Filled(id(&world, "bucket")), Event::Revealed(id(&world, "ring"))]
    );

    let outcome = exec(&mut world, "use bucket stove").unwrap();
    assert_eq!(
        outcome.message,
        "You put out the stove with the bucket.\nYou notice: poker."
    );
    assert_eq!(outcome.events[0], Event::Extinguished(id(&world, "stove")));
    assert!(!world.entity(id(&world, "bucket")).vessel().unwrap().is_full());

    let outcome = exec(&mut world, "use bucket stove").unwrap();
    assert_eq!(outcome.message, "You light the stove.");
    assert_eq!(outcome.events, [Event::Lit(id(&world, "stove"))]);

    assert_eq!(say(&mut world, "use bucket well"), "The well is dry.");
}

#[test]
fn fastener_opens_its_hatch() {
    let mut world = shed();
    exec(&mut world, "take spanner").unwrap();
    assert_eq!(say(&mut world, "go down"), "The hatch is closed.");
    let err = exec(&mut world, "open hatch").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CannotOpen(_)));

    let outcome = exec(&mut world, "use spanner bolt").unwrap();
    assert_eq!(
        outcome.message,
        "You work the bolt with the spanner. The hatch opens."
    );
    assert_eq!(
        outcome.events,
        [Event::OpenedLink(world.link_id("hatch").unwrap())]
    );

    exec(&mut world, "go down").unwrap();
    assert_eq!(world.current().name(), "cellar");
}

#[test]
fn fastener_refuses_a_tool_that_does_not_fit() {
    let mut world = shed();
    exec(&mut world, "take hammer").unwrap();
    assert_eq!(
        say(&mut world, "use hammer bolt"),
        "The hammer does not fit the bolt."
    );
    let err = exec(&mut world, "use hammer bolt").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CannotUse(_)));

    let hatch = world.link_id("hatch").unwrap();
    assert!(!world.link(hatch).openable().unwrap().is_open());
    assert_eq!(say(&mut world, "go down"), "The hatch is closed.");
    assert_eq!(world.current().name(), "shed");
}

#[test]
fn open_ignores_things_with_nothing_to_open() {
    let mut world = shed();
    let err = exec(&mut world, "open hammer").unwrap_err();
    assert_eq!(err.kind, ErrorKind::EntityNotFound("hammer".into()));
    let err = exec(&mut world, "open statue").unwrap_err();
    assert_eq!(err.kind, ErrorKind::EntityNotFound("statue".into()));

    exec(&mut world, "take hammer").unwrap();
    let err = exec(&mut world, "open hammer").unwrap_err();
    assert_eq!(err.kind, ErrorKind::EntityNotFound("hammer".into()));
}

// =============================================================================
// Opening with a key
// =============================================================================

#[test]
fn key_opens_in_either_order() {
    let mut world = shed();
    let err = exec(&mut world, "open box").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CannotOpen(_)));
    assert_eq!(
        say(&mut world, "open box tin-key"),
        "You are not carrying the tin-key."
    );
    assert_eq!(
        say(&mut world, "open tin-key box"),
        "You are not carrying the tin-key."
    );

    exec(&mut world, "take spanner").unwrap();
    let err = exec(&mut world, "open box spanner").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CannotOpen(_)));

    exec(&mut world, "take tin-key").unwrap();
    let outcome = exec(&mut world, "unlock box tin-key").unwrap();
    assert_eq!(
        outcome.message,
        "You open the box with the tin-key.\nYou notice: gem."
    );
    assert_eq!(outcome.events[0], Event::OpenedEntity(id(&world, "box")));
    assert!(world.visible("gem").is_some());
}
