//! Placement invariants
//!
//! A free-standing entity is listed in exactly the room it claims, and
//! carried entities follow their owner.

use proptest::prelude::*;
use textadv_foundation::Direction;
use textadv_world::{EntityKind, Holder, Item, ItemRole, RoomId, World, WorldBuilder};

// =============================================================================
// Helpers
// =============================================================================

fn ring(rooms: usize, items: usize) -> World {
    let mut builder = WorldBuilder::new("ring");
    for i in 0..rooms {
        builder = builder
            .room(format!("room{i}"), "")
            .exit(format!("room{i}"), Direction::East, format!("room{}", (i + 1) % rooms));
    }
    for j in 0..items {
        builder = builder
            .entity(format!("item{j}"), EntityKind::Item(Item::new(ItemRole::Plain)))
            .place(format!("item{j}"), format!("room{}", j % rooms));
    }
    builder.start("room0").player("ada").build().unwrap()
}

fn assert_placement(world: &World) {
    for (id, entity) in world.entities() {
        match (entity.room(), entity.holder()) {
            (Some(room), None) => {
                assert!(world.room(room).contains(id), "{} not listed", entity.name());
                let listed = world.rooms().filter(|(_, r)| r.contains(id)).count();
                assert_eq!(listed, 1, "{} listed in {listed} rooms", entity.name());
            }
            (Some(room), Some(Holder::Player)) => {
                assert_eq!(room, world.current_room());
                assert!(world.player().inventory().contains(id));
                assert!(world.rooms().all(|(_, r)| !r.contains(id)));
            }
            (_, Some(Holder::Character(_))) | (None, None) => {}
            (None, Some(Holder::Player)) => panic!("{} carried but nowhere", entity.name()),
        }
    }
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn built_world_respects_placement() {
    assert_placement(&ring(3, 7));
}

#[test]
fn picking_up_removes_from_room() {
    let mut world = ring(2, 2);
    let item = world.entity_id("item0").unwrap();
    world.pick_up(item);
    assert!(!world.current().contains(item));
    assert!(world.carried("item0").is_some());
    assert!(world.visible("item0").is_none());
    assert_placement(&world);
}

#[test]
fn moving_cascades_to_inventory() {
    let mut world = ring(3, 3);
    let item = world.entity_id("item0").unwrap();
    world.pick_up(item);
    let to = world.room_id("room2").unwrap();
    world.move_player(to);
    assert_eq!(world.entity(item).room(), Some(to));
    assert_placement(&world);
}

#[test]
fn placing_twice_moves_the_entity() {
    let mut world = ring(3, 1);
    let item = world.entity_id("item0").unwrap();
    world.place(item, RoomId::new(1));
    world.place(item, RoomId::new(2));
    assert!(!world.room(RoomId::new(0)).contains(item));
    assert!(!world.room(RoomId::new(1)).contains(item));
    assert!(world.room(RoomId::new(2)).contains(item));
    assert_placement(&world);
}

proptest! {
    #[test]
    fn random_walks_keep_placement(steps in prop::collection::vec((0usize..4, 0usize..6), 0..40)) {
        let mut world = ring(4, 6);
        for (room, item) in steps {
            let id = world.entity_id(&format!("item{item}")).unwrap();
            if world.player().inventory().contains(id) {
                world.place(id, world.current_room());
            } else {
                world.pick_up(id);
            }
            world.move_player(RoomId::new(room));
            assert_placement(&world);
        }
    }
}
