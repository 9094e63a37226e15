//! Per-verb resolution.
//!
//! Each function resolves names against the current room and inventory and
//! then drives the world's mechanics. Precedence inside a verb is fixed and
//! documented on the function that implements it.

pub(crate) mod acquisition;
pub(crate) mod manipulation;
pub(crate) mod navigation;
pub(crate) mod observation;
pub(crate) mod tools;
