//! Arena indices for rooms, entities and links.
//!
//! Every object in a [`World`](crate::World) lives in a per-kind arena and is
//! addressed by one of these copyable indices. Names are resolved to indices
//! once, at the edge of the engine.

use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            /// Creates an identifier for the given arena slot.
            #[must_use]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the arena slot.
            #[must_use]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $label, self.0)
            }
        }
    };
}

arena_id!(
    /// Identifier of a room.
    RoomId,
    "Room"
);

arena_id!(
    /// Identifier of an entity (object or character).
    EntityId,
    "Entity"
);

arena_id!(
    /// Identifier of a link between two rooms.
    LinkId,
    "Link"
);
