//! Runtime for textadv.
//!
//! This crate provides:
//! - [`Game`] - Turn-by-turn game state and the win check
//! - [`InputTokenizer`] - Raw player input to engine commands
//! - [`loader`] - JSON world definitions and the bundled demo world
//! - [`script`] - Replaying a file of commands
//! - [`Repl`] - The interactive console
//! - [`GameConfig`] and [`init_logging`] for the `textadv` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod game;
pub mod loader;
pub mod logging;
pub mod repl;
pub mod script;
pub mod tokenizer;

pub use config::GameConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use game::{Ending, Game, GameState};
pub use loader::{WorldFile, demo_world, load_world, parse_world};
pub use logging::init_logging;
pub use repl::Repl;
pub use script::{replay, replay_file};
pub use tokenizer::InputTokenizer;
