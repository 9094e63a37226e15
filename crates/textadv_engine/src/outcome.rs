//! What a successful command did.

use std::fmt::Write as _;

use textadv_world::{EntityId, LinkId, RoomId, World};

/// A structured record of one state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The player reached a room.
    Moved(RoomId),
    /// An entity entered the player's inventory.
    Taken(EntityId),
    /// A hidden entity appeared in the room.
    Revealed(EntityId),
    /// A container was opened.
    OpenedEntity(EntityId),
    /// A door or hatch was opened.
    OpenedLink(LinkId),
    /// Something fragile broke.
    Broken(EntityId),
    /// A fire was lit.
    Lit(EntityId),
    /// A fire was put out.
    Extinguished(EntityId),
    /// A vessel was filled.
    Filled(EntityId),
    /// An item was bought.
    Bought(EntityId),
    /// An item was handed to a character.
    Given {
        /// The item.
        item: EntityId,
        /// The recipient.
        to: EntityId,
    },
    /// A guarded item stopped being watched.
    Freed(EntityId),
}

/// The result of a command: display text plus what changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Text for the player.
    pub message: String,
    /// State changes, in the order they happened.
    pub events: Vec<Event>,
}

impl Outcome {
    /// An outcome with a message and no state change.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            events: Vec::new(),
        }
    }

    /// Records an event.
    #[must_use]
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Records revealed entities and mentions them in the message.
    #[must_use]
    pub fn with_revealed(mut self, world: &World, revealed: &[EntityId]) -> Self {
        if revealed.is_empty() {
            return self;
        }
        let names: Vec<&str> = revealed.iter().map(|id| world.entity(*id).name()).collect();
        let _ = write!(self.message, "\nYou notice: {}.", names.join(", "));
        self.events.extend(revealed.iter().copied().map(Event::Revealed));
        self
    }

    /// Returns true if anything changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.events.is_empty()
    }
}
