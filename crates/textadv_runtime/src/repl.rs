//! The interactive console.

use std::io::{self, Write};

use textadv_engine::Verb;
use textadv_foundation::{Direction, Result};
use tracing::debug;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::game::{Ending, Game, GameState};

/// Words that end the session.
const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

/// The interactive console.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The game being played.
    game: Game,

    /// Whether to show the usage hint after the welcome text.
    show_banner: bool,

    /// Prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a console with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(game: Game) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, game))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a console with the given editor.
    pub fn with_editor(editor: E, game: Game) -> Self {
        Self {
            editor,
            game,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the usage hint.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the console on stdout until the game is won or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<Ending> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Runs the console, writing game text to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run_with<W: Write>(&mut self, out: &mut W) -> Result<Ending> {
        if self.game.state() == GameState::Blocked {
            writeln!(out, "{}", self.game.start())?;
        }
        if self.show_banner {
            print_banner(out)?;
        }

        while self.game.state() == GameState::Running {
            let words = self.completions();
            self.editor.set_completions(words);
            out.flush()?;
            if !self.read_eval_print(out)? {
                break;
            }
        }

        let ending = self.game.ending();
        if ending == Ending::Lost {
            writeln!(out, "\nGoodbye!")?;
        }
        Ok(ending)
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print<W: Write>(&mut self, out: &mut W) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                writeln!(out)?;
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(trimmed);

        if QUIT_WORDS.contains(&trimmed.to_lowercase().as_str()) {
            debug!("quit requested");
            return Ok(false);
        }

        match self.game.play_line(trimmed) {
            Ok(Some(response)) => writeln!(out, "{response}")?,
            Ok(None) => {}
            Err(err) => writeln!(out, "I don't understand that ({err}).")?,
        }
        Ok(true)
    }

    /// Verbs, directions and the names of everything in reach.
    fn completions(&self) -> Vec<String> {
        let world = self.game.world();
        let mut words: Vec<String> = self
            .game
            .engine()
            .vocabulary()
            .words()
            .into_iter()
            .map(str::to_owned)
            .collect();
        words.extend(Direction::ALL.iter().map(|d| d.name().to_owned()));
        words.extend(
            world
                .current()
                .entities()
                .iter()
                .copied()
                .chain(world.player().inventory().iter())
                .map(|id| world.entity(id).name().to_owned()),
        );
        words.extend(
            world
                .current()
                .exits()
                .flat_map(|(_, links)| links.iter())
                .map(|link| world.link(*link).name().to_owned()),
        );
        words.extend(QUIT_WORDS.iter().map(|w| (*w).to_owned()));
        words.sort();
        words.dedup();
        words
    }
}

/// Prints the usage hint.
fn print_banner<W: Write>(out: &mut W) -> Result<()> {
    let verbs: Vec<&str> = Verb::ALL.iter().map(|verb| verb.name()).collect();
    writeln!(out, "\nVerbs: {}.", verbs.join(", "))?;
    writeln!(
        out,
        "Try `look`, `take key` or `go north`. Type `quit` or press Ctrl+D to leave."
    )?;
    Ok(())
}
