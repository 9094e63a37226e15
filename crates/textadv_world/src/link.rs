//! Links between rooms.

use std::fmt;

use crate::capability::Openable;
use crate::id::RoomId;

/// How a door-like link looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DoorStyle {
    /// A door. Opens bare-handed unless a key claims it.
    Door,
    /// A hatch. Needs a tool from the start.
    Hatch,
}

/// A door or hatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Door {
    /// Door or hatch.
    pub style: DoorStyle,
    /// Open state and lock.
    pub lid: Openable,
}

impl Door {
    /// A closed door, openable bare-handed for now.
    #[must_use]
    pub const fn door() -> Self {
        Self {
            style: DoorStyle::Door,
            lid: Openable::lockable(),
        }
    }

    /// A closed hatch that needs a tool.
    #[must_use]
    pub const fn hatch() -> Self {
        Self {
            style: DoorStyle::Hatch,
            lid: Openable::locked(),
        }
    }
}

/// A means of transport. Always usable, but only explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vehicle {
    /// A bus.
    Bus,
    /// A teleporter.
    Teleporter,
}

/// The closed set of link variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// A plain opening, always traversable.
    Opening,
    /// A door or hatch, traversable once open.
    Door(Door),
    /// A transport, always traversable.
    Transport(Vehicle),
}

/// A connector between two rooms. Traversable in both directions.
#[derive(Clone, Debug)]
pub struct Link {
    pub(crate) name: String,
    pub(crate) room1: RoomId,
    pub(crate) room2: RoomId,
    pub(crate) kind: LinkKind,
}

impl Link {
    /// Creates a link.
    #[must_use]
    pub fn new(name: impl Into<String>, room1: RoomId, room2: RoomId, kind: LinkKind) -> Self {
        Self {
            name: name.into(),
            room1,
            room2,
            kind,
        }
    }

    /// The name synthesized for an implicit opening between two rooms.
    #[must_use]
    pub fn opening_name(room1: &str, room2: &str) -> String {
        format!("[{room1}:{room2}]")
    }

    /// Unique name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Both ends, in declaration order.
    #[must_use]
    pub const fn rooms(&self) -> (RoomId, RoomId) {
        (self.room1, self.room2)
    }

    /// Variant and capability state.
    #[must_use]
    pub const fn kind(&self) -> &LinkKind {
        &self.kind
    }

    /// Returns true if the link touches `room`.
    #[must_use]
    pub fn connects(&self, room: RoomId) -> bool {
        self.room1 == room || self.room2 == room
    }

    /// The end reached when leaving `from`.
    #[must_use]
    pub fn other_end(&self, from: RoomId) -> RoomId {
        if self.room1 == from {
            self.room2
        } else {
            self.room1
        }
    }

    /// The door's lid, if the link is a door or hatch.
    #[must_use]
    pub const fn openable(&self) -> Option<Openable> {
        match &self.kind {
            LinkKind::Door(door) => Some(door.lid),
            LinkKind::Opening | LinkKind::Transport(_) => None,
        }
    }

    /// Returns true for buses and teleporters.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self.kind, LinkKind::Transport(_))
    }

    pub(crate) fn openable_mut(&mut self) -> Option<&mut Openable> {
        match &mut self.kind {
            LinkKind::Door(door) => Some(&mut door.lid),
            LinkKind::Opening | LinkKind::Transport(_) => None,
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LinkKind::Opening => write!(f, "a passage"),
            LinkKind::Door(door) => {
                let what = match door.style {
                    DoorStyle::Door => "door",
                    DoorStyle::Hatch => "hatch",
                };
                let state = if door.lid.is_open() { "open" } else { "closed" };
                write!(f, "the {} ({what}, {state})", self.name)
            }
            LinkKind::Transport(Vehicle::Bus) => write!(f, "the {} (bus)", self.name),
            LinkKind::Transport(Vehicle::Teleporter) => {
                write!(f, "the {} (teleporter)", self.name)
            }
        }
    }
}
