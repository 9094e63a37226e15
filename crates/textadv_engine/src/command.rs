//! Segmented player commands.

use std::fmt;

/// A verb with up to two bare-word arguments, as handed over by the
/// tokenizer. Arity is checked by the engine, not here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Command {
    /// The verb as typed (synonyms are resolved by the engine).
    pub verb: String,
    /// Arguments in the order typed.
    pub args: Vec<String>,
}

impl Command {
    /// A command with no arguments.
    #[must_use]
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            args: Vec::new(),
        }
    }

    /// Builds a command from a `(verb, arg0?, arg1?)` triple.
    #[must_use]
    pub fn from_parts(
        verb: impl Into<String>,
        arg0: Option<impl Into<String>>,
        arg1: Option<impl Into<String>>,
    ) -> Self {
        let mut command = Self::new(verb);
        command.args.extend(arg0.map(Into::into));
        command.args.extend(arg1.map(Into::into));
        command
    }

    /// Appends an argument.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Number of arguments.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.verb)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
