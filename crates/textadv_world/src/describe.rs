//! Player-facing descriptions of rooms, entities, exits and the inventory.

use std::fmt::Write as _;

use textadv_foundation::Direction;

use crate::entity::{Attention, CharacterRole, EntityKind, Item, ItemRole};
use crate::id::{EntityId, LinkId};
use crate::world::World;

impl World {
    /// The current room: name, description, what is visible and the exits.
    #[must_use]
    pub fn describe_room(&self) -> String {
        let room = self.current();
        let mut out = format!("{}\n{}", room.name(), room.description());

        if !room.entities().is_empty() {
            let seen: Vec<String> = room
                .entities()
                .iter()
                .map(|id| self.entity(*id).to_string())
                .collect();
            let _ = write!(out, "\nYou see: {}.", seen.join(", "));
        }

        let mut exits = room.exits().peekable();
        if exits.peek().is_some() {
            out.push_str("\nExits:");
            for (direction, links) in exits {
                let _ = write!(out, "\n  {direction}: {}", self.link_list(links));
            }
        }
        out
    }

    /// What lies in one direction from the current room.
    #[must_use]
    pub fn describe_direction(&self, direction: Direction) -> String {
        let links = self.current().links_toward(direction);
        if links.is_empty() {
            format!("There is nothing to the {direction}.")
        } else {
            format!("To the {direction}: {}.", self.link_list(links))
        }
    }

    /// A close look at one entity.
    #[must_use]
    pub fn describe_entity(&self, id: EntityId) -> String {
        let entity = self.entity(id);
        let mut out = format!("The {entity}.");
        match entity.kind() {
            EntityKind::Item(Item {
                role: ItemRole::Collectible { description },
                ..
            }) => {
                let _ = write!(out, " {description}");
            }
            EntityKind::Item(Item {
                role: ItemRole::Guarded(guarded),
                ..
            }) if guarded.is_watched() => out.push_str(" Someone is keeping an eye on it."),
            EntityKind::Container(container) if container.lid.is_open() && !container.spills => {
                let contents: Vec<&str> = entity
                    .targets()
                    .iter()
                    .filter_map(|(name, target)| target.entity().map(|_| name))
                    .collect();
                if contents.is_empty() {
                    out.push_str(" It is empty.");
                } else {
                    let _ = write!(out, " Inside: {}.", contents.join(", "));
                }
            }
            EntityKind::Character(character) => {
                match &character.role {
                    CharacterRole::Guard(Attention::Watchful) => out.push_str(" It is on guard."),
                    CharacterRole::Guard(Attention::Distracted) => {
                        out.push_str(" It is busy with something else.");
                    }
                    CharacterRole::Vendor => {
                        let wares: Vec<&str> = entity
                            .targets()
                            .entities()
                            .map(|ware| self.entity(ware))
                            .filter(|ware| ware.is_for_sale())
                            .map(|ware| ware.name())
                            .collect();
                        if !wares.is_empty() {
                            let _ = write!(out, " It sells: {}.", wares.join(", "));
                        }
                    }
                    CharacterRole::Animal(_) => {}
                }
                if !character.inventory.is_empty() {
                    let held: Vec<&str> = character
                        .inventory
                        .iter()
                        .map(|held| self.entity(held).name())
                        .collect();
                    let _ = write!(out, " It has: {}.", held.join(", "));
                }
            }
            _ => {}
        }
        out
    }

    /// The player's inventory.
    #[must_use]
    pub fn describe_inventory(&self) -> String {
        let inventory = self.player().inventory();
        if inventory.is_empty() {
            return "You are not carrying anything.".to_owned();
        }
        let mut out = String::from("You are carrying:");
        for id in inventory.iter() {
            let _ = write!(out, "\n - {}", self.entity(id));
        }
        out
    }

    fn link_list(&self, links: &[LinkId]) -> String {
        let here = self.current_room();
        links
            .iter()
            .map(|id| {
                let link = self.link(*id);
                let there = self.room(link.other_end(here)).name();
                format!("{link} to the {there}")
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}
