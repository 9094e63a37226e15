//! World model for textadv.
//!
//! This crate provides:
//! - [`capability`] - Small state machines (open, fill, break, light, watch)
//! - [`Entity`] - Objects and characters as closed tagged variants
//! - [`Link`] and [`Room`] - The directional navigation graph
//! - [`World`] - The explicit game context with movement and mechanics
//! - [`WorldBuilder`] - One-shot construction with validation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod capability;
mod describe;
pub mod entity;
pub mod id;
pub mod inventory;
pub mod link;
mod mechanics;
pub mod room;
pub mod world;

pub use builder::WorldBuilder;
pub use capability::{
    FillState, Fillable, Flame, Fragile, Guarded, Ignitable, Integrity, Lock, OpenState, Openable,
    Watch,
};
pub use entity::{
    Animal, Attention, Character, CharacterRole, Container, Entity, EntityKind, Holder, Item,
    ItemRole, Sale, Target, TargetTable,
};
pub use id::{EntityId, LinkId, RoomId};
pub use inventory::Inventory;
pub use link::{Door, DoorStyle, Link, LinkKind, Vehicle};
pub use room::Room;
pub use world::{Player, World};
