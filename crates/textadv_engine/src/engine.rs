//! Command dispatch.
//!
//! [`CommandEngine::execute`] maps a verb and its arity onto a resolution
//! function. [`CommandEngine::respond`] is what a game loop calls: it turns
//! every failure into display text except unsupported operations, which the
//! loop decides how to treat.

use textadv_foundation::{Error, ErrorContext, Result};
use textadv_world::World;
use tracing::debug;

use crate::command::Command;
use crate::outcome::Outcome;
use crate::verbs::{acquisition, manipulation, navigation, observation, tools};
use crate::vocabulary::{Verb, Vocabulary};

/// Resolves commands against a world.
#[derive(Clone, Debug, Default)]
pub struct CommandEngine {
    vocabulary: Vocabulary,
}

impl CommandEngine {
    /// An engine with the standard vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with a custom vocabulary.
    #[must_use]
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary in use.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Mutable access to the vocabulary, for adding synonyms.
    pub fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }

    /// Executes one command.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` for an unknown verb or an arity the verb does
    /// not take, otherwise the kinded failure of the action. Errors carry the
    /// command and room as context.
    pub fn execute(&self, world: &mut World, command: &Command) -> Result<Outcome> {
        let room = world.current().name().to_owned();
        let result = match self.vocabulary.lookup(&command.verb) {
            Some(verb) => {
                debug!(%verb, args = ?command.args, %room, "resolving");
                dispatch(world, verb, &command.args)
                    .map_err(|err| unsupported_as_typed(err, command))
            }
            None => Err(Error::unsupported(&command.verb, command.arity())),
        };
        result.map_err(|err| {
            err.with_context(
                ErrorContext::new()
                    .with_command(command.to_string())
                    .with_room(room),
            )
        })
    }

    /// Executes one command and renders the result as text.
    ///
    /// # Errors
    ///
    /// Only `UnsupportedOperation` is returned; every other failure becomes
    /// the response text.
    pub fn respond(&self, world: &mut World, command: &Command) -> Result<String> {
        match self.execute(world, command) {
            Ok(outcome) => Ok(outcome.message),
            Err(err) if err.is_unsupported() => Err(err),
            Err(err) => {
                if let Some(context) = &err.context {
                    debug!(error = %err, %context, "command failed");
                }
                Ok(err.to_string())
            }
        }
    }
}

fn dispatch(world: &mut World, verb: Verb, args: &[String]) -> Result<Outcome> {
    match (verb, args) {
        (Verb::Look, []) => Ok(observation::look_around(world)),
        (Verb::Look, [name]) => observation::look_at(world, name),
        (Verb::Open, [name]) => manipulation::open(world, name),
        (Verb::Open, [tool, target]) => manipulation::open_with(world, tool, target),
        (Verb::Take, [name]) => acquisition::take(world, name),
        (Verb::Take, [item, holder]) => acquisition::take_from(world, item, holder),
        (Verb::Go, [direction]) => navigation::go(world, direction),
        (Verb::Enter, [place]) => navigation::enter(world, place),
        (Verb::Break, [name]) => manipulation::smash(world, name),
        (Verb::Break, [target, tool]) => tools::use_on(world, tool, target),
        (Verb::Use, [name]) => navigation::ride(world, name),
        (Verb::Use, [tool, target]) => tools::use_on(world, tool, target),
        (Verb::Give, [item, recipient]) => acquisition::give(world, item, recipient),
        (Verb::Talk, [name]) => observation::talk(world, name),
        (Verb::Pet, [name]) => observation::pet(world, name),
        (Verb::Inventory, []) => Ok(observation::inventory(world)),
        (verb, args) => Err(Error::unsupported(verb.name(), args.len())),
    }
}

/// Reports unsupported arities with the verb the player typed.
fn unsupported_as_typed(err: Error, command: &Command) -> Error {
    if err.is_unsupported() {
        Error::unsupported(&command.verb, command.arity())
    } else {
        err
    }
}
