//! De-duplicated carried-entity collections.

use crate::id::EntityId;

/// What a character carries. Order of acquisition is kept for display.
///
/// The inventory only tracks membership; keeping the carried entities'
/// rooms in step with the owner is the world's job.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<EntityId>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity. Returns false if it was already held.
    pub fn insert(&mut self, id: EntityId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.items.push(id);
        true
    }

    /// Removes an entity. Returns false if it was not held.
    pub fn remove(&mut self, id: EntityId) -> bool {
        match self.items.iter().position(|held| *held == id) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns true if the entity is held.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.items.contains(&id)
    }

    /// Iterates in acquisition order.
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.items.iter().copied()
    }

    /// Number of held entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
