//! Rooms: visible entities plus a direction-indexed multimap of links.

use textadv_foundation::Direction;

use crate::id::{EntityId, LinkId};

/// A location in the navigation graph.
#[derive(Clone, Debug)]
pub struct Room {
    pub(crate) name: String,
    pub(crate) description: String,
    entities: Vec<EntityId>,
    links: Vec<(Direction, Vec<LinkId>)>,
}

impl Room {
    /// Creates an empty room.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            entities: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Unique name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Visible entities in discovery order.
    #[must_use]
    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    /// Returns true if the entity is visible here.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains(&id)
    }

    pub(crate) fn add_entity(&mut self, id: EntityId) {
        if !self.contains(id) {
            self.entities.push(id);
        }
    }

    pub(crate) fn remove_entity(&mut self, id: EntityId) -> bool {
        match self.entities.iter().position(|held| *held == id) {
            Some(pos) => {
                self.entities.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Links reachable in `direction`, in insertion order.
    #[must_use]
    pub fn links_toward(&self, direction: Direction) -> &[LinkId] {
        self.links
            .iter()
            .find(|(dir, _)| *dir == direction)
            .map(|(_, links)| links.as_slice())
            .unwrap_or_default()
    }

    /// Every direction with at least one link, with its links.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, &[LinkId])> {
        self.links
            .iter()
            .map(|(dir, links)| (*dir, links.as_slice()))
    }

    /// Returns true if the link is listed under any direction.
    #[must_use]
    pub fn has_link(&self, link: LinkId) -> bool {
        self.direction_of(link).is_some()
    }

    /// The first direction the link is listed under.
    #[must_use]
    pub fn direction_of(&self, link: LinkId) -> Option<Direction> {
        self.links
            .iter()
            .find(|(_, links)| links.contains(&link))
            .map(|(dir, _)| *dir)
    }

    pub(crate) fn add_link(&mut self, direction: Direction, link: LinkId) {
        match self.links.iter_mut().find(|(dir, _)| *dir == direction) {
            Some((_, links)) => {
                if !links.contains(&link) {
                    links.push(link);
                }
            }
            None => self.links.push((direction, vec![link])),
        }
    }
}
