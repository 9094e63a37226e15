//! Input tokenization.
//!
//! Turns a line of player input into a [`Command`]: words are lowercased,
//! punctuation is dropped and filler words are skipped, so that
//! `Use the KEY on the oak-door!` becomes `use key oak-door`.

use textadv_engine::Command;

/// Words that carry no meaning for the engine.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "to", "in", "into", "on", "onto", "at", "with", "from", "of", "for", "using",
];

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Splits raw input into lowercase words.
    ///
    /// - Converts words to lowercase
    /// - Strips punctuation, keeping `-` and `_` inside names
    /// - Drops [`STOP_WORDS`]
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut current = String::new();

        for ch in input.chars() {
            match ch {
                c if c.is_whitespace() => flush(&mut current, &mut words),
                '.' | ',' | '!' | '?' | ';' | ':' | '\'' | '"' => {}
                _ => current.extend(ch.to_lowercase()),
            }
        }
        flush(&mut current, &mut words);

        words
    }

    /// Tokenizes input into a command, or `None` when nothing is left.
    ///
    /// Extra arguments are kept; the engine rejects arities it does not
    /// support.
    #[must_use]
    pub fn parse(input: &str) -> Option<Command> {
        let mut words = Self::tokenize(input).into_iter();
        let verb = words.next()?;
        Some(words.fold(Command::new(verb), |cmd, word| cmd.with_arg(word)))
    }
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let word = std::mem::take(current);
    if !STOP_WORDS.contains(&word.as_str()) {
        words.push(word);
    }
}
