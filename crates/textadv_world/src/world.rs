//! The world context: arenas, name indexes, the player and movement.
//!
//! A [`World`] is built once by [`WorldBuilder`](crate::WorldBuilder) and then
//! mutated only through `&mut` methods, one command at a time. Every movement
//! goes through [`World::place`], [`World::pick_up`], [`World::hand_over`] or
//! [`World::move_player`], which keep rooms, holders and inventories in step.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::entity::{Entity, Holder, Target};
use crate::id::{EntityId, LinkId, RoomId};
use crate::inventory::Inventory;
use crate::link::Link;
use crate::room::Room;

/// The player character.
#[derive(Clone, Debug)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) room: RoomId,
    pub(crate) inventory: Inventory,
}

impl Player {
    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The room the player stands in.
    #[must_use]
    pub const fn room(&self) -> RoomId {
        self.room
    }

    /// What the player carries.
    #[must_use]
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}

/// A fully built adventure.
#[derive(Clone, Debug)]
pub struct World {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) rooms: Vec<Room>,
    pub(crate) entities: Vec<Entity>,
    pub(crate) links: Vec<Link>,
    pub(crate) room_names: HashMap<String, RoomId>,
    pub(crate) entity_names: HashMap<String, EntityId>,
    pub(crate) link_names: HashMap<String, LinkId>,
    pub(crate) player: Player,
    pub(crate) start: RoomId,
    pub(crate) treasure: Option<EntityId>,
}

impl World {
    /// The world's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The welcome text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// The room the game starts in.
    #[must_use]
    pub const fn start_room(&self) -> RoomId {
        self.start
    }

    /// The entity the player must carry to win.
    #[must_use]
    pub const fn treasure(&self) -> Option<EntityId> {
        self.treasure
    }

    /// Returns true once the treasure is in the player's inventory.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.treasure
            .is_some_and(|treasure| self.player.inventory.contains(treasure))
    }

    /// Room by id.
    #[must_use]
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    /// Entity by id.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.index()]
    }

    /// Link by id.
    #[must_use]
    pub fn link(&self, id: LinkId) -> &Link {
        &self.links[id.index()]
    }

    /// All rooms in declaration order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(index, room)| (RoomId::new(index), room))
    }

    /// All entities in declaration order.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(index, entity)| (EntityId::new(index), entity))
    }

    /// All links in declaration order.
    pub fn links(&self) -> impl Iterator<Item = (LinkId, &Link)> {
        self.links
            .iter()
            .enumerate()
            .map(|(index, link)| (LinkId::new(index), link))
    }

    /// Room by name.
    #[must_use]
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.room_names.get(name).copied()
    }

    /// Entity by name.
    #[must_use]
    pub fn entity_id(&self, name: &str) -> Option<EntityId> {
        self.entity_names.get(name).copied()
    }

    /// Link by name.
    #[must_use]
    pub fn link_id(&self, name: &str) -> Option<LinkId> {
        self.link_names.get(name).copied()
    }

    /// The room the player is in.
    #[must_use]
    pub fn current_room(&self) -> RoomId {
        self.player.room
    }

    /// The room the player is in.
    #[must_use]
    pub fn current(&self) -> &Room {
        self.room(self.player.room)
    }

    /// An entity visible in the current room.
    #[must_use]
    pub fn visible(&self, name: &str) -> Option<EntityId> {
        self.entity_id(name)
            .filter(|id| self.current().contains(*id))
    }

    /// An entity the player carries.
    #[must_use]
    pub fn carried(&self, name: &str) -> Option<EntityId> {
        self.entity_id(name)
            .filter(|id| self.player.inventory.contains(*id))
    }

    /// A link listed in the current room.
    #[must_use]
    pub fn link_here(&self, name: &str) -> Option<LinkId> {
        self.link_id(name)
            .filter(|id| self.current().has_link(*id))
    }

    /// The first visible entity that lists `name` among its targets.
    #[must_use]
    pub fn concealer_of(&self, name: &str) -> Option<EntityId> {
        self.current()
            .entities()
            .iter()
            .copied()
            .find(|id| self.entity(*id).knows(name))
    }

    /// Puts an entity in a room, detaching it from wherever it was.
    pub fn place(&mut self, id: EntityId, room: RoomId) {
        self.detach(id);
        self.rooms[room.index()].add_entity(id);
        self.entities[id.index()].room = Some(room);
    }

    /// Moves an entity into the player's inventory.
    pub fn pick_up(&mut self, id: EntityId) {
        self.detach(id);
        self.player.inventory.insert(id);
        let entity = &mut self.entities[id.index()];
        entity.room = Some(self.player.room);
        entity.holder = Some(Holder::Player);
        info!(entity = %entity.name, "picked up");
    }

    /// Moves an entity into a character's inventory.
    ///
    /// Does nothing if `character` is not a character.
    pub fn hand_over(&mut self, id: EntityId, character: EntityId) {
        if self.entity(character).character().is_none() {
            return;
        }
        self.detach(id);
        let room = self.entities[character.index()].room;
        if let Some(owner) = self.entities[character.index()].character_mut() {
            owner.inventory.insert(id);
        }
        let entity = &mut self.entities[id.index()];
        entity.room = room;
        entity.holder = Some(Holder::Character(character));
    }

    /// Moves the player, cascading the new room to everything carried.
    pub fn move_player(&mut self, room: RoomId) {
        self.player.room = room;
        for id in self.player.inventory.iter() {
            self.entities[id.index()].room = Some(room);
        }
        info!(room = %self.rooms[room.index()].name, "player moved");
    }

    /// Crosses a link from the current room. Returns the room reached.
    pub fn traverse(&mut self, link: LinkId) -> RoomId {
        let to = self.links[link.index()].other_end(self.player.room);
        self.move_player(to);
        to
    }

    /// Drops an entity's unplaced entity targets into its room and forgets
    /// them. Returns what appeared.
    pub(crate) fn reveal_targets(&mut self, holder: EntityId) -> Vec<EntityId> {
        let room = self.entities[holder.index()]
            .room
            .unwrap_or(self.player.room);
        let hidden: Vec<(String, EntityId)> = self.entities[holder.index()]
            .targets
            .iter()
            .filter_map(|(name, target)| match target {
                Target::Entity(id) => Some((name.to_owned(), id)),
                Target::Link(_) => None,
            })
            .filter(|(_, id)| {
                let entity = &self.entities[id.index()];
                entity.room.is_none() && entity.holder.is_none()
            })
            .collect();

        let mut revealed = Vec::with_capacity(hidden.len());
        for (name, id) in hidden {
            self.entities[holder.index()].targets.remove(&name);
            self.place(id, room);
            debug!(entity = %name, holder = %self.entities[holder.index()].name, "revealed");
            revealed.push(id);
        }
        revealed
    }

    fn detach(&mut self, id: EntityId) {
        let entity = &self.entities[id.index()];
        let (room, holder) = (entity.room, entity.holder);
        if let Some(room) = room {
            self.rooms[room.index()].remove_entity(id);
        }
        match holder {
            Some(Holder::Player) => {
                self.player.inventory.remove(id);
            }
            Some(Holder::Character(owner)) => {
                if let Some(character) = self.entities[owner.index()].character_mut() {
                    character.inventory.remove(id);
                }
            }
            None => {}
        }
        let entity = &mut self.entities[id.index()];
        entity.room = None;
        entity.holder = None;
    }
}
