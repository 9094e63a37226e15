//! Verb vocabulary.
//!
//! Maps typed words to canonical verbs. The default table covers every verb
//! the engine understands plus common synonyms; worlds may add more.

use std::collections::HashMap;
use std::fmt;

/// A verb the engine can resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Describe the room, an entity or a direction.
    Look,
    /// Open a container, door or hatch.
    Open,
    /// Pick something up, or board a transport.
    Take,
    /// Walk in a direction.
    Go,
    /// Walk towards a named room or link.
    Enter,
    /// Break something fragile.
    Break,
    /// Use a tool on something, or ride a transport.
    Use,
    /// Hand something to a character.
    Give,
    /// Talk to a character.
    Talk,
    /// Pet an animal.
    Pet,
    /// List what the player carries.
    Inventory,
}

impl Verb {
    /// Every verb, in help order.
    pub const ALL: [Verb; 11] = [
        Verb::Look,
        Verb::Open,
        Verb::Take,
        Verb::Go,
        Verb::Enter,
        Verb::Break,
        Verb::Use,
        Verb::Give,
        Verb::Talk,
        Verb::Pet,
        Verb::Inventory,
    ];

    /// Canonical spelling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Verb::Look => "look",
            Verb::Open => "open",
            Verb::Take => "take",
            Verb::Go => "go",
            Verb::Enter => "enter",
            Verb::Break => "break",
            Verb::Use => "use",
            Verb::Give => "give",
            Verb::Talk => "talk",
            Verb::Pet => "pet",
            Verb::Inventory => "inventory",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const DEFAULT_SYNONYMS: &[(&str, Verb)] = &[
    ("l", Verb::Look),
    ("examine", Verb::Look),
    ("x", Verb::Look),
    ("unlock", Verb::Open),
    ("get", Verb::Take),
    ("grab", Verb::Take),
    ("board", Verb::Take),
    ("walk", Verb::Go),
    ("move", Verb::Go),
    ("smash", Verb::Break),
    ("shatter", Verb::Break),
    ("apply", Verb::Use),
    ("ride", Verb::Use),
    ("offer", Verb::Give),
    ("pay", Verb::Give),
    ("speak", Verb::Talk),
    ("ask", Verb::Talk),
    ("stroke", Verb::Pet),
    ("i", Verb::Inventory),
    ("inv", Verb::Inventory),
];

/// Word to verb registry.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    words: HashMap<String, Verb>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        let mut vocabulary = Self::empty();
        for verb in Verb::ALL {
            vocabulary.add_synonym(verb.name(), verb);
        }
        for (word, verb) in DEFAULT_SYNONYMS {
            vocabulary.add_synonym(*word, *verb);
        }
        vocabulary
    }
}

impl Vocabulary {
    /// The standard vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A vocabulary that knows no words.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Registers `word` as meaning `verb`. Later registrations win.
    pub fn add_synonym(&mut self, word: impl Into<String>, verb: Verb) {
        self.words.insert(word.into().to_lowercase(), verb);
    }

    /// Resolves a typed word, case-insensitively.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Verb> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Every known word, sorted, for completion.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
