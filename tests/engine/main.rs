//! Engine integration tests for textadv
//!
//! Commands are resolved against small hand-built worlds through the public
//! engine API, checking both the text shown and the recorded events.

mod acquisition;
mod observation;
mod tools;

use textadv_engine::{Command, CommandEngine, Outcome};
use textadv_foundation::Result;
use textadv_world::{EntityKind, Item, ItemRole, World};

/// Splits a line on whitespace into a command, without dropping any words.
pub fn command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap();
    words.fold(Command::new(verb), |command, word| command.with_arg(word))
}

/// Executes `line` on `world` with the standard engine.
pub fn exec(world: &mut World, line: &str) -> Result<Outcome> {
    CommandEngine::new().execute(world, &command(line))
}

/// Executes `line` and returns the text the player would see.
pub fn say(world: &mut World, line: &str) -> String {
    CommandEngine::new().respond(world, &command(line)).unwrap()
}

pub fn item(role: ItemRole) -> EntityKind {
    EntityKind::Item(Item::new(role))
}
