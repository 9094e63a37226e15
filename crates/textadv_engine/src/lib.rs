//! Command engine for textadv.
//!
//! This crate provides:
//! - [`Command`] - A verb with up to two arguments
//! - [`Vocabulary`] - Verb synonyms
//! - [`CommandEngine`] - Dispatch by verb and arity onto the resolution ladders
//! - [`Outcome`] - Display text plus structured [`Event`]s

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod engine;
pub mod outcome;
mod verbs;
pub mod vocabulary;

pub use command::Command;
pub use engine::CommandEngine;
pub use outcome::{Event, Outcome};
pub use vocabulary::{Verb, Vocabulary};
