//! One-shot world construction.
//!
//! [`WorldBuilder`] collects rooms, entities, links, exits and placements by
//! name, then [`build`](WorldBuilder::build) resolves every name, sets the
//! derived flags (tool-required locks, watched treasure) and places everything
//! in a single step. The result is either a complete [`World`] or an
//! `InvalidWorld` error; there is no half-built state to observe.

use std::collections::HashMap;

use textadv_foundation::{Direction, Error, Result};
use tracing::debug;

use crate::entity::{CharacterRole, Entity, EntityKind, Target};
use crate::id::{EntityId, LinkId, RoomId};
use crate::inventory::Inventory;
use crate::link::{Link, LinkKind};
use crate::room::Room;
use crate::world::{Player, World};

#[derive(Clone, Debug)]
struct EntityDecl {
    name: String,
    kind: EntityKind,
    targets: Vec<String>,
}

#[derive(Clone, Debug)]
struct LinkDecl {
    name: String,
    room1: String,
    room2: String,
    kind: LinkKind,
}

#[derive(Clone, Debug)]
struct ExitDecl {
    room: String,
    direction: Direction,
    to: String,
}

/// Builder for a [`World`].
#[derive(Clone, Debug, Default)]
pub struct WorldBuilder {
    name: String,
    description: String,
    rooms: Vec<(String, String)>,
    entities: Vec<EntityDecl>,
    links: Vec<LinkDecl>,
    exits: Vec<ExitDecl>,
    placements: Vec<(String, String)>,
    start: Option<String>,
    player: Option<String>,
    treasure: Option<String>,
}

impl WorldBuilder {
    /// Starts a world with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the welcome text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declares a room.
    #[must_use]
    pub fn room(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.rooms.push((name.into(), description.into()));
        self
    }

    /// Declares an entity with no targets.
    #[must_use]
    pub fn entity(self, name: impl Into<String>, kind: EntityKind) -> Self {
        self.entity_with_targets(name, kind, std::iter::empty::<String>())
    }

    /// Declares an entity and the names of the entities or links it knows
    /// about. Names resolve to entities first, then links.
    #[must_use]
    pub fn entity_with_targets<I, S>(
        mut self,
        name: impl Into<String>,
        kind: EntityKind,
        targets: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entities.push(EntityDecl {
            name: name.into(),
            kind,
            targets: targets.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Declares a named link between two rooms.
    #[must_use]
    pub fn link(
        mut self,
        name: impl Into<String>,
        room1: impl Into<String>,
        room2: impl Into<String>,
        kind: LinkKind,
    ) -> Self {
        self.links.push(LinkDecl {
            name: name.into(),
            room1: room1.into(),
            room2: room2.into(),
            kind,
        });
        self
    }

    /// Lists a way out of `room` in `direction`. `to` names a declared link,
    /// or a room, in which case a plain opening named `[room:to]` is used.
    #[must_use]
    pub fn exit(
        mut self,
        room: impl Into<String>,
        direction: Direction,
        to: impl Into<String>,
    ) -> Self {
        self.exits.push(ExitDecl {
            room: room.into(),
            direction,
            to: to.into(),
        });
        self
    }

    /// Puts an entity in a room.
    #[must_use]
    pub fn place(mut self, entity: impl Into<String>, room: impl Into<String>) -> Self {
        self.placements.push((entity.into(), room.into()));
        self
    }

    /// Sets the starting room.
    #[must_use]
    pub fn start(mut self, room: impl Into<String>) -> Self {
        self.start = Some(room.into());
        self
    }

    /// Names the player.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.player = Some(name.into());
        self
    }

    /// Sets the entity the player must carry to win.
    #[must_use]
    pub fn treasure(mut self, entity: impl Into<String>) -> Self {
        self.treasure = Some(entity.into());
        self
    }

    /// Resolves every name and returns the finished world.
    ///
    /// # Errors
    ///
    /// `InvalidWorld` on duplicate names, unresolved rooms, links, targets or
    /// placements, an exit through a link that does not touch its room, or a
    /// missing start room or player.
    pub fn build(self) -> Result<World> {
        let mut rooms = Vec::with_capacity(self.rooms.len());
        let mut room_names = HashMap::new();
        for (name, description) in self.rooms {
            let id = RoomId::new(rooms.len());
            if room_names.insert(name.clone(), id).is_some() {
                return Err(Error::invalid_world(format!("room {name} is declared twice")));
            }
            rooms.push(Room::new(name, description));
        }

        let mut entities = Vec::with_capacity(self.entities.len());
        let mut entity_names = HashMap::new();
        let mut declared_targets = Vec::with_capacity(self.entities.len());
        for decl in self.entities {
            let id = EntityId::new(entities.len());
            if entity_names.insert(decl.name.clone(), id).is_some() {
                return Err(Error::invalid_world(format!(
                    "entity {} is declared twice",
                    decl.name
                )));
            }
            entities.push(Entity::new(decl.name, decl.kind));
            declared_targets.push(decl.targets);
        }

        let mut links = Vec::with_capacity(self.links.len());
        let mut link_names = HashMap::new();
        for decl in self.links {
            let room1 = lookup(&room_names, &decl.room1, "room")?;
            let room2 = lookup(&room_names, &decl.room2, "room")?;
            let id = LinkId::new(links.len());
            if link_names.insert(decl.name.clone(), id).is_some() {
                return Err(Error::invalid_world(format!(
                    "link {} is declared twice",
                    decl.name
                )));
            }
            links.push(Link::new(decl.name, room1, room2, decl.kind));
        }

        for exit in self.exits {
            let from = lookup(&room_names, &exit.room, "room")?;
            let link = if let Some(&link) = link_names.get(&exit.to) {
                if !links[link.index()].connects(from) {
                    return Err(Error::invalid_world(format!(
                        "link {} does not touch room {}",
                        exit.to, exit.room
                    )));
                }
                link
            } else if let Some(&to) = room_names.get(&exit.to) {
                let forward = Link::opening_name(&exit.room, &exit.to);
                let backward = Link::opening_name(&exit.to, &exit.room);
                match link_names.get(&forward).or_else(|| link_names.get(&backward)) {
                    Some(&existing) => existing,
                    None => {
                        let id = LinkId::new(links.len());
                        links.push(Link::new(forward.clone(), from, to, LinkKind::Opening));
                        link_names.insert(forward, id);
                        id
                    }
                }
            } else {
                return Err(Error::invalid_world(format!(
                    "exit {} of room {} leads nowhere",
                    exit.to, exit.room
                )));
            };
            rooms[from.index()].add_link(exit.direction, link);
        }

        for (index, targets) in declared_targets.into_iter().enumerate() {
            for name in targets {
                let target = if let Some(&entity) = entity_names.get(&name) {
                    Target::Entity(entity)
                } else if let Some(&link) = link_names.get(&name) {
                    Target::Link(link)
                } else {
                    return Err(Error::invalid_world(format!(
                        "{} knows about {name}, which does not exist",
                        entities[index].name
                    )));
                };
                entities[index].targets.insert(name, target);
            }
        }

        apply_declared_flags(&mut entities, &mut links);

        let start = match &self.start {
            Some(name) => lookup(&room_names, name, "room")?,
            None => return Err(Error::invalid_world("no starting room")),
        };
        let Some(player) = self.player else {
            return Err(Error::invalid_world("no player"));
        };
        let treasure = match &self.treasure {
            Some(name) => Some(lookup(&entity_names, name, "entity")?),
            None => None,
        };

        let mut world = World {
            name: self.name,
            description: self.description,
            rooms,
            entities,
            links,
            room_names,
            entity_names,
            link_names,
            player: Player {
                name: player,
                room: start,
                inventory: Inventory::new(),
            },
            start,
            treasure,
        };

        for (entity, room) in self.placements {
            let entity = lookup(&world.entity_names, &entity, "entity")?;
            let room = lookup(&world.room_names, &room, "room")?;
            world.place(entity, room);
        }

        debug!(
            world = %world.name,
            rooms = world.rooms.len(),
            entities = world.entities.len(),
            links = world.links.len(),
            "world built"
        );
        Ok(world)
    }
}

/// Keys and fasteners lock what they list; guards watch what they list.
fn apply_declared_flags(entities: &mut [Entity], links: &mut [Link]) {
    let mut locked_entities = Vec::new();
    let mut locked_links = Vec::new();
    let mut watched = Vec::new();
    for entity in entities.iter() {
        let guard = matches!(
            entity.character().map(|c| &c.role),
            Some(CharacterRole::Guard(_))
        );
        if entity.is_key() || entity.is_fixture() {
            locked_entities.extend(entity.targets().entities());
            locked_links.extend(entity.targets().links());
        } else if guard {
            watched.extend(entity.targets().entities());
        }
    }

    for id in locked_entities {
        if let Some(lid) = entities[id.index()].openable_mut() {
            lid.require_tool();
        }
    }
    for id in locked_links {
        if let Some(lid) = links[id.index()].openable_mut() {
            lid.require_tool();
        }
    }
    for id in watched {
        if let Some(guarded) = entities[id.index()].guarded_mut() {
            guarded.watch();
        }
    }
}

fn lookup<T: Copy>(names: &HashMap<String, T>, name: &str, what: &str) -> Result<T> {
    names
        .get(name)
        .copied()
        .ok_or_else(|| Error::invalid_world(format!("unknown {what} {name}")))
}
