//! textadv - Capability-driven text adventure engine
//!
//! This crate re-exports all layers of the textadv system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: textadv_runtime     - Game loop, console, script replay, world files, CLI
//! Layer 2: textadv_engine      - Commands, vocabulary, verb resolution
//! Layer 1: textadv_world       - Capabilities, entities, links, rooms, world builder
//! Layer 0: textadv_foundation  - Error taxonomy, directions
//! ```

pub use textadv_engine as engine;
pub use textadv_foundation as foundation;
pub use textadv_runtime as runtime;
pub use textadv_world as world;
