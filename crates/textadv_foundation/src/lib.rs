//! Error taxonomy and compass directions for textadv.
//!
//! This crate provides:
//! - [`Error`] - Display-ready errors with a matchable [`ErrorKind`]
//! - [`Direction`] - Compass directions indexing a room's links

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod error;

pub use direction::Direction;
pub use error::{Error, ErrorContext, ErrorKind, Result};
