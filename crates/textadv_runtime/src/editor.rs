//! Console input.
//!
//! The console reads through [`LineEditor`]; [`RustylineEditor`] is the
//! terminal implementation, and tests substitute canned input.

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use std::borrow::Cow;
use textadv_foundation::{Error, ErrorKind, Result};

/// What one prompt produced.
#[derive(Debug)]
pub enum ReadResult {
    /// The player typed a line.
    Line(String),
    /// Ctrl+C: drop the current line.
    Interrupted,
    /// Ctrl+D, or input closed.
    Eof,
}

/// Source of player input lines.
pub trait LineEditor {
    /// Shows `prompt` and waits for a line.
    ///
    /// # Errors
    ///
    /// `Io` if the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Remembers a line for history and hints.
    fn add_history(&mut self, line: &str);

    /// Replace the words offered for tab completion.
    fn set_completions(&mut self, words: Vec<String>);
}

/// Helper for rustyline that provides completion, hints and prompt colouring.
#[derive(Helper, Completer, Hinter, Validator)]
struct ConsoleHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for ConsoleHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes the word under the cursor from a fixed list.
#[derive(Debug, Default)]
pub struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    /// A completer offering `words`.
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Words starting with the partial word that ends at `pos`, and where
    /// that word begins.
    #[must_use]
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let start = line[..pos].rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let word = line[start..pos].to_lowercase();
        let matches = self
            .words
            .iter()
            .filter(|candidate| candidate.starts_with(&word))
            .cloned()
            .collect();
        (start, matches)
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(line, pos);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

/// Terminal input with history, hints and tab completion.
pub struct RustylineEditor {
    editor: Editor<ConsoleHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Sets up the terminal editor.
    ///
    /// # Errors
    ///
    /// `Io` if the terminal cannot be configured.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(500)
            .map_err(|e| Error::new(ErrorKind::Io(e.to_string())))?
            .build();

        let helper = ConsoleHelper {
            completer: WordCompleter::default(),
            hinter: HistoryHinter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::new(ErrorKind::Io(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Io(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_completions(&mut self, words: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer = WordCompleter::new(words);
        }
    }
}
