//! World construction through the builder

use textadv_foundation::{Direction, ErrorKind};
use textadv_world::{
    Container, Door, EntityKind, Item, ItemRole, LinkKind, Openable, Target, Vehicle,
    WorldBuilder,
};

#[test]
fn several_links_share_a_direction_in_order() {
    let world = WorldBuilder::new("multi")
        .room("a", "")
        .room("b", "")
        .link("gate", "a", "b", LinkKind::Door(Door::door()))
        .link("bus", "a", "b", LinkKind::Transport(Vehicle::Bus))
        .exit("a", Direction::North, "gate")
        .exit("a", Direction::North, "bus")
        .start("a")
        .player("ada")
        .build()
        .unwrap();
    let gate = world.link_id("gate").unwrap();
    let bus = world.link_id("bus").unwrap();
    assert_eq!(world.current().links_toward(Direction::North), [gate, bus]);
    assert!(world.current().links_toward(Direction::South).is_empty());
    assert_eq!(world.current().direction_of(bus), Some(Direction::North));
}

#[test]
fn fixtures_fasten_hatches_and_keys_lock_containers() {
    let world = WorldBuilder::new("fasteners")
        .room("attic", "")
        .room("loft", "")
        .link("hatch", "attic", "loft", LinkKind::Door(Door::hatch()))
        .link("door", "attic", "loft", LinkKind::Door(Door::door()))
        .exit("attic", Direction::Up, "hatch")
        .entity_with_targets("bolt", EntityKind::Fixture, ["door"])
        .entity_with_targets("key", EntityKind::Item(Item::new(ItemRole::Key)), ["box"])
        .entity(
            "box",
            EntityKind::Container(Container {
                lid: Openable::lockable(),
                spills: true,
            }),
        )
        .start("attic")
        .player("ada")
        .build()
        .unwrap();

    let door = world.link(world.link_id("door").unwrap());
    assert!(door.openable().unwrap().needs_tool());
    let hatch = world.link(world.link_id("hatch").unwrap());
    assert!(hatch.openable().unwrap().needs_tool());
    let lid = world
        .entity(world.entity_id("box").unwrap())
        .openable()
        .unwrap();
    assert!(lid.needs_tool());
}

#[test]
fn targets_resolve_in_declaration_order() {
    let world = WorldBuilder::new("order")
        .room("a", "")
        .room("b", "")
        .link("gate", "a", "b", LinkKind::Opening)
        .entity_with_targets("map", EntityKind::Fixture, ["gate", "coin", "coin"])
        .entity("coin", EntityKind::Item(Item::new(ItemRole::Money)))
        .start("a")
        .player("ada")
        .build()
        .unwrap();
    let map = world.entity(world.entity_id("map").unwrap());
    let names: Vec<&str> = map.targets().iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["gate", "coin"]);
    assert_eq!(
        map.targets().get("gate"),
        Some(Target::Link(world.link_id("gate").unwrap()))
    );
    assert_eq!(
        map.targets().get("coin"),
        Some(Target::Entity(world.entity_id("coin").unwrap()))
    );
}

#[test]
fn unplaced_entities_start_nowhere() {
    let world = WorldBuilder::new("hidden")
        .room("a", "")
        .entity("coin", EntityKind::Item(Item::new(ItemRole::Money)))
        .start("a")
        .player("ada")
        .build()
        .unwrap();
    let coin = world.entity_id("coin").unwrap();
    assert_eq!(world.entity(coin).room(), None);
    assert!(world.visible("coin").is_none());
}

#[test]
fn placements_must_name_real_rooms() {
    let err = WorldBuilder::new("bad")
        .room("a", "")
        .entity("coin", EntityKind::Item(Item::new(ItemRole::Money)))
        .place("coin", "nowhere")
        .start("a")
        .player("ada")
        .build()
        .unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::InvalidWorld("unknown room nowhere".into())
    );
}
