//! Entities: the objects and characters of a world.
//!
//! An entity's behaviour is fixed by its [`EntityKind`], a closed set of
//! variants each carrying only the capability state it needs. Capability
//! queries (`is_carryable`, `fragile`, ...) are exhaustive matches over the
//! kind, so adding a variant forces every query to decide about it.

use std::fmt;

use crate::capability::{Fillable, Fragile, Guarded, Ignitable, Openable};
use crate::id::{EntityId, LinkId, RoomId};
use crate::inventory::Inventory;

/// Something an entity knows about: another entity or a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// An object or character.
    Entity(EntityId),
    /// A link between rooms.
    Link(LinkId),
}

impl Target {
    /// Returns the entity, if this target is one.
    #[must_use]
    pub const fn entity(self) -> Option<EntityId> {
        match self {
            Self::Entity(id) => Some(id),
            Self::Link(_) => None,
        }
    }

    /// Returns the link, if this target is one.
    #[must_use]
    pub const fn link(self) -> Option<LinkId> {
        match self {
            Self::Link(id) => Some(id),
            Self::Entity(_) => None,
        }
    }
}

/// Ordered name to target table. Insertion order is kept; the first write
/// for a name wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetTable {
    entries: Vec<(String, Target)>,
}

impl TargetTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a target. Returns false, leaving the table untouched, if the
    /// name is already present.
    pub fn insert(&mut self, name: impl Into<String>, target: Target) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, target));
        true
    }

    /// Looks a target up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Target> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, target)| *target)
    }

    /// Returns true if the name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Removes a target by name, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Target> {
        let pos = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Target)> {
        self.entries
            .iter()
            .map(|(name, target)| (name.as_str(), *target))
    }

    /// Entity targets in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entries.iter().filter_map(|(_, target)| target.entity())
    }

    /// Link targets in insertion order.
    pub fn links(&self) -> impl Iterator<Item = LinkId> + '_ {
        self.entries.iter().filter_map(|(_, target)| target.link())
    }

    /// Number of targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether an item is on sale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sale {
    /// Free to take.
    #[default]
    NotForSale,
    /// Must be paid for.
    ForSale,
    /// Paid for.
    Sold,
}

/// What a carryable item is for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemRole {
    /// Nothing special.
    Plain,
    /// Opens the doors and containers it lists as targets.
    Key,
    /// Breaks fragile things.
    Powerful,
    /// Pays vendors.
    Money,
    /// A keepsake with its own description.
    Collectible {
        /// Shown when looked at.
        description: String,
    },
    /// May be watched by a guard.
    Guarded(Guarded),
    /// Holds water.
    Vessel(Fillable),
}

/// A carryable object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// What the item does.
    pub role: ItemRole,
    /// Sale state.
    pub sale: Sale,
}

impl Item {
    /// An item that is not for sale.
    #[must_use]
    pub const fn new(role: ItemRole) -> Self {
        Self {
            role,
            sale: Sale::NotForSale,
        }
    }

    /// Puts the item on sale.
    #[must_use]
    pub fn for_sale(mut self) -> Self {
        self.sale = Sale::ForSale;
        self
    }
}

/// An openable object holding other entities as targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Container {
    /// Open state and lock.
    pub lid: Openable,
    /// Contents drop into the room once opened.
    pub spills: bool,
}

/// Whether a guard is paying attention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Attention {
    /// Watching its targets.
    #[default]
    Watchful,
    /// Busy with something else.
    Distracted,
}

/// An animal's traits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animal {
    /// What it says when petted.
    pub sound: String,
    /// Whether the player can pick it up.
    pub carryable: bool,
}

/// What a character does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CharacterRole {
    /// Sells its for-sale targets for money.
    Vendor,
    /// Watches its guarded targets.
    Guard(Attention),
    /// Can be petted, and distracts guards.
    Animal(Animal),
}

/// A character other than the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    /// Role.
    pub role: CharacterRole,
    /// What the character carries.
    pub inventory: Inventory,
    /// Fixed answer when talked to.
    pub dialogue: Option<String>,
}

impl Character {
    /// A character with an empty inventory and nothing to say.
    #[must_use]
    pub fn new(role: CharacterRole) -> Self {
        Self {
            role,
            inventory: Inventory::new(),
            dialogue: None,
        }
    }

    /// Sets the fixed dialogue.
    #[must_use]
    pub fn with_dialogue(mut self, dialogue: impl Into<String>) -> Self {
        self.dialogue = Some(dialogue.into());
        self
    }
}

/// The closed set of entity variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// Inert scenery. May fasten a door or hatch it lists as a target.
    Fixture,
    /// A carryable object.
    Item(Item),
    /// An openable object with contents.
    Container(Container),
    /// Something that breaks and scatters its contents.
    Breakable(Fragile),
    /// Something that burns and hides things until put out.
    Burner(Ignitable),
    /// A liquid source such as a well. Drawing from it reveals its targets.
    Source(Fillable),
    /// A character.
    Character(Character),
}

impl EntityKind {
    /// Short lowercase label for logs and descriptions.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fixture => "fixture",
            Self::Item(_) => "item",
            Self::Container(_) => "container",
            Self::Breakable(_) => "fragile object",
            Self::Burner(_) => "fire",
            Self::Source(_) => "source",
            Self::Character(character) => match character.role {
                CharacterRole::Vendor => "vendor",
                CharacterRole::Guard(_) => "guard",
                CharacterRole::Animal(_) => "animal",
            },
        }
    }
}

/// Who carries an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Holder {
    /// The player.
    Player,
    /// Another character.
    Character(EntityId),
}

/// A named object or character.
#[derive(Clone, Debug)]
pub struct Entity {
    pub(crate) name: String,
    pub(crate) kind: EntityKind,
    pub(crate) room: Option<RoomId>,
    pub(crate) holder: Option<Holder>,
    pub(crate) targets: TargetTable,
}

impl Entity {
    /// Creates an unplaced entity with no targets.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            room: None,
            holder: None,
            targets: TargetTable::new(),
        }
    }

    /// Unique, case-sensitive name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variant and capability state.
    #[must_use]
    pub const fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Current room. `None` until the entity is placed or revealed.
    #[must_use]
    pub const fn room(&self) -> Option<RoomId> {
        self.room
    }

    /// Who carries it, if anyone.
    #[must_use]
    pub const fn holder(&self) -> Option<Holder> {
        self.holder
    }

    /// The entities and links this entity knows about.
    #[must_use]
    pub const fn targets(&self) -> &TargetTable {
        &self.targets
    }

    /// Returns true if the entity lists `name` among its targets.
    #[must_use]
    pub fn knows(&self, name: &str) -> bool {
        self.targets.contains(name)
    }

    /// Returns true if the player can pick it up.
    #[must_use]
    pub const fn is_carryable(&self) -> bool {
        match &self.kind {
            EntityKind::Item(_) => true,
            EntityKind::Character(Character {
                role: CharacterRole::Animal(animal),
                ..
            }) => animal.carryable,
            EntityKind::Character(_)
            | EntityKind::Fixture
            | EntityKind::Container(_)
            | EntityKind::Breakable(_)
            | EntityKind::Burner(_)
            | EntityKind::Source(_) => false,
        }
    }

    /// Returns true if the item must be paid for.
    #[must_use]
    pub const fn is_for_sale(&self) -> bool {
        matches!(
            &self.kind,
            EntityKind::Item(Item {
                sale: Sale::ForSale,
                ..
            })
        )
    }

    /// Returns true if it breaks fragile things.
    #[must_use]
    pub const fn is_powerful(&self) -> bool {
        matches!(
            &self.kind,
            EntityKind::Item(Item {
                role: ItemRole::Powerful,
                ..
            })
        )
    }

    /// Returns true if it is a key.
    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(
            &self.kind,
            EntityKind::Item(Item {
                role: ItemRole::Key,
                ..
            })
        )
    }

    /// Returns true if it pays vendors.
    #[must_use]
    pub const fn is_money(&self) -> bool {
        matches!(
            &self.kind,
            EntityKind::Item(Item {
                role: ItemRole::Money,
                ..
            })
        )
    }

    /// Returns true for fixtures.
    #[must_use]
    pub const fn is_fixture(&self) -> bool {
        matches!(&self.kind, EntityKind::Fixture)
    }

    /// Returns the character state, if it is one.
    #[must_use]
    pub const fn character(&self) -> Option<&Character> {
        match &self.kind {
            EntityKind::Character(character) => Some(character),
            _ => None,
        }
    }

    /// Returns the animal traits, if it is one.
    #[must_use]
    pub const fn animal(&self) -> Option<&Animal> {
        match &self.kind {
            EntityKind::Character(Character {
                role: CharacterRole::Animal(animal),
                ..
            }) => Some(animal),
            _ => None,
        }
    }

    /// Returns the guard state, if the entity is a guarded item.
    #[must_use]
    pub const fn guarded(&self) -> Option<Guarded> {
        match &self.kind {
            EntityKind::Item(Item {
                role: ItemRole::Guarded(guarded),
                ..
            }) => Some(*guarded),
            _ => None,
        }
    }

    /// Returns the fillable state of a vessel.
    #[must_use]
    pub const fn vessel(&self) -> Option<Fillable> {
        match &self.kind {
            EntityKind::Item(Item {
                role: ItemRole::Vessel(fillable),
                ..
            }) => Some(*fillable),
            _ => None,
        }
    }

    /// Returns the fragile state.
    #[must_use]
    pub const fn fragile(&self) -> Option<Fragile> {
        match &self.kind {
            EntityKind::Breakable(fragile) => Some(*fragile),
            _ => None,
        }
    }

    /// Returns the ignitable state.
    #[must_use]
    pub const fn ignitable(&self) -> Option<Ignitable> {
        match &self.kind {
            EntityKind::Burner(ignitable) => Some(*ignitable),
            _ => None,
        }
    }

    /// Returns the container's lid.
    #[must_use]
    pub const fn openable(&self) -> Option<Openable> {
        match &self.kind {
            EntityKind::Container(container) => Some(container.lid),
            _ => None,
        }
    }

    /// Returns the source state of a well or similar.
    #[must_use]
    pub const fn source(&self) -> Option<Fillable> {
        match &self.kind {
            EntityKind::Source(fillable) => Some(*fillable),
            _ => None,
        }
    }

    pub(crate) fn openable_mut(&mut self) -> Option<&mut Openable> {
        match &mut self.kind {
            EntityKind::Container(container) => Some(&mut container.lid),
            _ => None,
        }
    }

    pub(crate) fn character_mut(&mut self) -> Option<&mut Character> {
        match &mut self.kind {
            EntityKind::Character(character) => Some(character),
            _ => None,
        }
    }

    pub(crate) fn guarded_mut(&mut self) -> Option<&mut Guarded> {
        match &mut self.kind {
            EntityKind::Item(Item {
                role: ItemRole::Guarded(guarded),
                ..
            }) => Some(guarded),
            _ => None,
        }
    }

    pub(crate) fn vessel_mut(&mut self) -> Option<&mut Fillable> {
        match &mut self.kind {
            EntityKind::Item(Item {
                role: ItemRole::Vessel(fillable),
                ..
            }) => Some(fillable),
            _ => None,
        }
    }

    pub(crate) fn item_mut(&mut self) -> Option<&mut Item> {
        match &mut self.kind {
            EntityKind::Item(item) => Some(item),
            _ => None,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        match &self.kind {
            EntityKind::Container(container) if container.lid.is_open() => write!(f, " (open)"),
            EntityKind::Container(_) => write!(f, " (closed)"),
            EntityKind::Breakable(fragile) if fragile.is_broken() => write!(f, " (broken)"),
            EntityKind::Burner(fire) if fire.is_lit() => write!(f, " (lit)"),
            EntityKind::Burner(_) => write!(f, " (out)"),
            EntityKind::Source(source)
            | EntityKind::Item(Item {
                role: ItemRole::Vessel(source),
                ..
            }) => {
                if source.is_full() {
                    write!(f, " (full)")
                } else {
                    write!(f, " (empty)")
                }
            }
            EntityKind::Item(Item {
                sale: Sale::ForSale,
                ..
            }) => write!(f, " (for sale)"),
            _ => Ok(()),
        }
    }
}
