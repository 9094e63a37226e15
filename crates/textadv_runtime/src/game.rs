//! Turn-by-turn game state.
//!
//! A [`Game`] owns the world and the engine. It starts [`Blocked`], becomes
//! [`Running`] once the welcome has been shown and ends [`Won`] as soon as the
//! treasure is in the player's inventory. Won is terminal.
//!
//! [`Blocked`]: GameState::Blocked
//! [`Running`]: GameState::Running
//! [`Won`]: GameState::Won

use std::fmt::{self, Write as _};

use textadv_engine::{Command, CommandEngine};
use textadv_foundation::Result;
use textadv_world::World;
use tracing::info;

use crate::tokenizer::InputTokenizer;

/// Printed when the treasure is picked up.
pub const VICTORY: &str = "*** Congratulations! You found the treasure and won the game! ***";

/// Where the game is in its life cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Not started.
    #[default]
    Blocked,
    /// Accepting commands.
    Running,
    /// The treasure has been found.
    Won,
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ending {
    /// The treasure was found.
    Won,
    /// Input ran out first.
    Lost,
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => f.write_str("won"),
            Self::Lost => f.write_str("lost"),
        }
    }
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    world: World,
    engine: CommandEngine,
    state: GameState,
    turns: usize,
}

impl Game {
    /// Creates a game on `world` with the standard engine.
    #[must_use]
    pub fn new(world: World) -> Self {
        Self::with_engine(world, CommandEngine::new())
    }

    /// Creates a game with a custom engine.
    #[must_use]
    pub fn with_engine(world: World, engine: CommandEngine) -> Self {
        Self {
            world,
            engine,
            state: GameState::Blocked,
            turns: 0,
        }
    }

    /// Returns the world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns the engine.
    #[must_use]
    pub const fn engine(&self) -> &CommandEngine {
        &self.engine
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Number of commands played.
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Won if the treasure was found, Lost otherwise.
    #[must_use]
    pub fn ending(&self) -> Ending {
        if self.state == GameState::Won {
            Ending::Won
        } else {
            Ending::Lost
        }
    }

    /// Starts the game and returns the welcome text.
    pub fn start(&mut self) -> String {
        self.state = GameState::Running;
        info!(world = %self.world.name(), player = %self.world.player().name(), "game started");

        let mut text = self.world.name().to_owned();
        if !self.world.description().is_empty() {
            let _ = write!(text, "\n{}", self.world.description());
        }
        let _ = write!(
            text,
            "\n\nYou are {}, in the {}.",
            self.world.player().name(),
            self.world.current().name()
        );
        if let Some(treasure) = self.world.treasure() {
            let _ = write!(
                text,
                " Find the {} and take it!",
                self.world.entity(treasure).name()
            );
        }
        let _ = write!(text, "\n\n{}", self.world.describe_room());
        text
    }

    /// Plays one command and returns the text to show.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` for an unknown verb or arity; every other
    /// failure is part of the returned text.
    pub fn play(&mut self, command: &Command) -> Result<String> {
        match self.state {
            GameState::Blocked => return Ok("The game has not started yet.".to_string()),
            GameState::Won => return Ok("The game is over. You already won!".to_string()),
            GameState::Running => {}
        }

        let mut text = self.engine.respond(&mut self.world, command)?;
        self.turns += 1;

        if self.world.has_won() {
            self.state = GameState::Won;
            info!(turns = self.turns, "treasure found, game won");
            let _ = write!(text, "\n\n{VICTORY}");
        }
        Ok(text)
    }

    /// Tokenizes and plays a line of input. Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// As [`play`](Self::play).
    pub fn play_line(&mut self, line: &str) -> Result<Option<String>> {
        match InputTokenizer::parse(line) {
            Some(command) => self.play(&command).map(Some),
            None => Ok(None),
        }
    }
}
