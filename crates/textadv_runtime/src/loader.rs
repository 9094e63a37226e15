//! JSON world definitions.
//!
//! A definition lists objects and characters (each with a kind and the names
//! it knows about), links between rooms, and rooms with their contents and
//! exits. Anything not listed in a room starts hidden inside whatever names
//! it as a target. Definitions go through [`WorldBuilder`], so every name is
//! checked before the world exists.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use textadv_foundation::{Direction, Error, Result};
use textadv_world::{
    Animal, Attention, Character, CharacterRole, Container, Door, EntityKind, Fillable, Fragile,
    Guarded, Ignitable, Item, ItemRole, LinkKind, Openable, Vehicle, World, WorldBuilder,
};
use tracing::info;

/// The bundled demo world.
pub const MANOR: &str = include_str!("../worlds/manor.json");

/// A complete world definition.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldFile {
    /// Name, welcome text and goal.
    pub world: WorldHeader,
    /// The player's name.
    pub player: String,
    /// Inanimate entities.
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
    /// Vendors, guards and animals.
    #[serde(default)]
    pub characters: Vec<CharacterDef>,
    /// Named links between rooms.
    #[serde(default)]
    pub links: Vec<LinkDef>,
    /// Rooms, their contents and exits.
    pub rooms: Vec<RoomDef>,
}

/// World-level settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldHeader {
    /// World name.
    pub name: String,
    /// Welcome text.
    #[serde(default)]
    pub description: String,
    /// Starting room.
    pub start: String,
    /// Entity to find. Defaults to the first object of kind `treasure`.
    #[serde(default)]
    pub treasure: Option<String>,
}

/// An object declaration.
#[derive(Clone, Debug, Deserialize)]
pub struct ObjectDef {
    /// Unique name.
    pub name: String,
    /// Kind and kind-specific settings.
    #[serde(flatten)]
    pub kind: ObjectKind,
    /// Must be bought from a vendor. Only meaningful for carryable kinds.
    #[serde(default)]
    pub for_sale: bool,
    /// Names of the entities and links this object knows about.
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Object kinds.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ObjectKind {
    /// Scenery; fastens the doors and hatches it lists.
    Fixture,
    /// A plain carryable item.
    Item,
    /// Unlocks what it lists.
    Key,
    /// Breaks fragile objects.
    Tool,
    /// Pays vendors.
    Money,
    /// A keepsake.
    Collectible {
        /// Shown when looked at.
        description: String,
    },
    /// A guardable item, usually the goal.
    Treasure,
    /// Holds water.
    Vessel {
        /// Starts full.
        #[serde(default)]
        full: bool,
    },
    /// Opens to give access to its targets.
    Container {
        /// Targets drop into the room once opened.
        #[serde(default)]
        spills: bool,
    },
    /// Breaks and scatters its targets.
    Fragile {
        /// Breaks without a tool.
        #[serde(default)]
        bare_handed: bool,
    },
    /// Burns, hiding its targets until put out.
    Fire {
        /// Starts lit.
        #[serde(default = "default_true")]
        lit: bool,
    },
    /// Water source; drawing from it reveals its targets.
    Source {
        /// Starts dry.
        #[serde(default)]
        dry: bool,
    },
}

/// A character declaration.
#[derive(Clone, Debug, Deserialize)]
pub struct CharacterDef {
    /// Unique name.
    pub name: String,
    /// Role and role-specific settings.
    #[serde(flatten)]
    pub kind: CharacterKind,
    /// Answer to `talk`.
    #[serde(default)]
    pub dialogue: Option<String>,
    /// Wares for a vendor, watched items for a guard.
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Character roles.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CharacterKind {
    /// Sells its for-sale targets.
    Vendor,
    /// Watches its guarded targets.
    Guard,
    /// Can be petted and distracts guards.
    Animal {
        /// Response to `pet`.
        sound: String,
        /// Whether the player can pick it up.
        #[serde(default)]
        carryable: bool,
    },
}

/// A named link.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkDef {
    /// Unique name.
    pub name: String,
    /// Link variant.
    pub kind: LinkKindDef,
    /// The two rooms it joins.
    pub rooms: [String; 2],
}

/// Link variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKindDef {
    /// Always passable.
    Opening,
    /// Opens by hand unless a key claims it.
    Door,
    /// Needs a tool.
    Hatch,
    /// Boarded with `use` or `take`.
    Bus,
    /// Boarded with `use` or `take`.
    Teleporter,
}

/// A room declaration.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomDef {
    /// Unique name.
    pub name: String,
    /// Shown by `look`.
    #[serde(default)]
    pub description: String,
    /// Objects placed here.
    #[serde(default)]
    pub objects: Vec<String>,
    /// Characters placed here.
    #[serde(default)]
    pub characters: Vec<String>,
    /// `[direction, link-or-room]` pairs, in order.
    #[serde(default)]
    pub exits: Vec<(Direction, String)>,
}

const fn default_true() -> bool {
    true
}

impl ObjectDef {
    fn entity_kind(&self) -> EntityKind {
        let role = match &self.kind {
            ObjectKind::Fixture => return EntityKind::Fixture,
            ObjectKind::Container { spills } => {
                return EntityKind::Container(Container {
                    lid: Openable::lockable(),
                    spills: *spills,
                });
            }
            ObjectKind::Fragile { bare_handed } => {
                return EntityKind::Breakable(if *bare_handed {
                    Fragile::flimsy()
                } else {
                    Fragile::sturdy()
                });
            }
            ObjectKind::Fire { lit } => {
                return EntityKind::Burner(if *lit {
                    Ignitable::lit()
                } else {
                    Ignitable::unlit()
                });
            }
            ObjectKind::Source { dry } => {
                return EntityKind::Source(if *dry {
                    Fillable::empty()
                } else {
                    Fillable::full()
                });
            }
            ObjectKind::Item => ItemRole::Plain,
            ObjectKind::Key => ItemRole::Key,
            ObjectKind::Tool => ItemRole::Powerful,
            ObjectKind::Money => ItemRole::Money,
            ObjectKind::Collectible { description } => ItemRole::Collectible {
                description: description.clone(),
            },
            ObjectKind::Treasure => ItemRole::Guarded(Guarded::free()),
            ObjectKind::Vessel { full } => ItemRole::Vessel(if *full {
                Fillable::full()
            } else {
                Fillable::empty()
            }),
        };
        let item = Item::new(role);
        EntityKind::Item(if self.for_sale { item.for_sale() } else { item })
    }
}

impl CharacterDef {
    fn entity_kind(&self) -> EntityKind {
        let role = match &self.kind {
            CharacterKind::Vendor => CharacterRole::Vendor,
            CharacterKind::Guard => CharacterRole::Guard(Attention::Watchful),
            CharacterKind::Animal { sound, carryable } => CharacterRole::Animal(Animal {
                sound: sound.clone(),
                carryable: *carryable,
            }),
        };
        let character = Character::new(role);
        EntityKind::Character(match &self.dialogue {
            Some(line) => character.with_dialogue(line.clone()),
            None => character,
        })
    }
}

impl LinkKindDef {
    const fn link_kind(self) -> LinkKind {
        match self {
            Self::Opening => LinkKind::Opening,
            Self::Door => LinkKind::Door(Door::door()),
            Self::Hatch => LinkKind::Door(Door::hatch()),
            Self::Bus => LinkKind::Transport(Vehicle::Bus),
            Self::Teleporter => LinkKind::Transport(Vehicle::Teleporter),
        }
    }
}

impl WorldFile {
    /// Parses a definition from JSON text.
    ///
    /// # Errors
    ///
    /// `InvalidWorld` if the text is not a well-formed definition.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| Error::invalid_world(err.to_string()))
    }

    /// Turns the definition into builder calls.
    #[must_use]
    pub fn into_builder(self) -> WorldBuilder {
        let treasure = self.world.treasure.clone().or_else(|| {
            self.objects
                .iter()
                .find(|object| object.kind == ObjectKind::Treasure)
                .map(|object| object.name.clone())
        });

        let mut builder = WorldBuilder::new(self.world.name)
            .description(self.world.description)
            .player(self.player)
            .start(self.world.start);
        if let Some(treasure) = treasure {
            builder = builder.treasure(treasure);
        }

        for room in &self.rooms {
            builder = builder.room(room.name.clone(), room.description.clone());
        }
        for object in self.objects {
            let kind = object.entity_kind();
            builder = builder.entity_with_targets(object.name, kind, object.targets);
        }
        for character in self.characters {
            let kind = character.entity_kind();
            builder = builder.entity_with_targets(character.name, kind, character.targets);
        }
        for link in self.links {
            let [room1, room2] = link.rooms;
            builder = builder.link(link.name, room1, room2, link.kind.link_kind());
        }
        for room in self.rooms {
            for (direction, to) in room.exits {
                builder = builder.exit(room.name.clone(), direction, to);
            }
            for name in room.objects.into_iter().chain(room.characters) {
                builder = builder.place(name, room.name.clone());
            }
        }
        builder
    }
}

/// Builds a world from JSON text.
///
/// # Errors
///
/// `InvalidWorld` if the text does not parse or the names do not resolve.
pub fn parse_world(json: &str) -> Result<World> {
    WorldFile::from_json(json)?.into_builder().build()
}

/// Builds a world from a JSON file.
///
/// # Errors
///
/// `Io` if the file cannot be read, otherwise as [`parse_world`].
pub fn load_world(path: &Path) -> Result<World> {
    let json = fs::read_to_string(path)?;
    let world = parse_world(&json)?;
    info!(path = %path.display(), world = %world.name(), "world loaded");
    Ok(world)
}

/// Builds the bundled demo world.
///
/// # Errors
///
/// Only if the bundled definition is broken.
pub fn demo_world() -> Result<World> {
    parse_world(MANOR)
}
