//! Error types for the textadv system.
//!
//! Uses `thiserror` for ergonomic error definition. Every capability
//! operation fails with a precisely-kinded error whose message is ready to be
//! shown to the player.

use std::fmt;

use thiserror::Error;

/// The main error type for textadv operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Returns true if this error must be surfaced to the game loop instead
    /// of being shown as a regular command response.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind, ErrorKind::UnsupportedOperation { .. })
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::EntityNotFound(name.into()))
    }

    /// Creates a link not found error.
    #[must_use]
    pub fn link_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::LinkNotFound(name.into()))
    }

    /// Creates an unsupported operation error for a verb used with the given
    /// number of arguments.
    #[must_use]
    pub fn unsupported(verb: impl Into<String>, arity: usize) -> Self {
        Self::new(ErrorKind::UnsupportedOperation {
            verb: verb.into(),
            arity,
        })
    }

    /// Creates an already open error.
    #[must_use]
    pub fn already_open(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyOpen(name.into()))
    }

    /// Creates an already broken error.
    #[must_use]
    pub fn already_broken(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyBroken(name.into()))
    }

    /// Creates an already lit error.
    #[must_use]
    pub fn already_lit(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyLit(name.into()))
    }

    /// Creates an already unlit error.
    #[must_use]
    pub fn already_unlit(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyUnlit(name.into()))
    }

    /// Creates an already full error.
    #[must_use]
    pub fn already_full(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyFull(name.into()))
    }

    /// Creates an already empty error.
    #[must_use]
    pub fn already_empty(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyEmpty(name.into()))
    }

    /// Creates a cannot open error with a display-ready message.
    #[must_use]
    pub fn cannot_open(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CannotOpen(message.into()))
    }

    /// Creates a cannot break error with a display-ready message.
    #[must_use]
    pub fn cannot_break(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CannotBreak(message.into()))
    }

    /// Creates a cannot take error with a display-ready message.
    #[must_use]
    pub fn cannot_take(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CannotTake(message.into()))
    }

    /// Creates a cannot use error with a display-ready message.
    #[must_use]
    pub fn cannot_use(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CannotUse(message.into()))
    }

    /// Creates a cannot give error with a display-ready message.
    #[must_use]
    pub fn cannot_give(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CannotGive(message.into()))
    }

    /// Creates a cannot go error with a display-ready message.
    #[must_use]
    pub fn cannot_go(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CannotGo(message.into()))
    }

    /// Creates a cannot buy error with a display-ready message.
    #[must_use]
    pub fn cannot_buy(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CannotBuy(message.into()))
    }

    /// Creates a cannot fill error with a display-ready message.
    #[must_use]
    pub fn cannot_fill(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CannotFill(message.into()))
    }

    /// Creates a cannot interact error (talk, pet) with a display-ready message.
    #[must_use]
    pub fn cannot_interact(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CannotInteract(message.into()))
    }

    /// Creates an invalid world error.
    #[must_use]
    pub fn invalid_world(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidWorld(message.into()))
    }

    /// Creates a script error for the given 1-indexed line.
    #[must_use]
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Script {
            line,
            message: message.into(),
        })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// No entity with this name is reachable.
    #[error("there is no {0} here")]
    EntityNotFound(String),

    /// No link with this name exists from the current room.
    #[error("there is no way through {0} from here")]
    LinkNotFound(String),

    /// Unknown verb, or a known verb used with an unsupported number of arguments.
    #[error("unsupported operation: {verb} with {arity} argument(s)")]
    UnsupportedOperation {
        /// The verb as typed.
        verb: String,
        /// Number of arguments supplied.
        arity: usize,
    },

    /// Opening something that is already open.
    #[error("the {0} is already open")]
    AlreadyOpen(String),

    /// Breaking something that is already broken.
    #[error("the {0} is already broken")]
    AlreadyBroken(String),

    /// Lighting something that is already lit.
    #[error("the {0} is already lit")]
    AlreadyLit(String),

    /// Extinguishing something that is not lit.
    #[error("the {0} is already out")]
    AlreadyUnlit(String),

    /// Filling a full vessel.
    #[error("the {0} is already full")]
    AlreadyFull(String),

    /// Emptying an empty vessel.
    #[error("the {0} is already empty")]
    AlreadyEmpty(String),

    /// Wrong or missing tool.
    #[error("{0}")]
    CannotOpen(String),

    /// Not enough power to break the target.
    #[error("{0}")]
    CannotBreak(String),

    /// Guarded, for sale, hidden, or not carryable.
    #[error("{0}")]
    CannotTake(String),

    /// No rule applies to this tool and target.
    #[error("{0}")]
    CannotUse(String),

    /// The item is not carried, or the recipient cannot receive it.
    #[error("{0}")]
    CannotGive(String),

    /// No traversable link in that direction.
    #[error("{0}")]
    CannotGo(String),

    /// No valid payment, or nothing to buy.
    #[error("{0}")]
    CannotBuy(String),

    /// Invalid or empty liquid source.
    #[error("{0}")]
    CannotFill(String),

    /// The target does not talk back or cannot be petted.
    #[error("{0}")]
    CannotInteract(String),

    /// The world definition is inconsistent.
    #[error("invalid world: {0}")]
    InvalidWorld(String),

    /// A scripted session could not be replayed.
    #[error("script error at line {line}: {message}")]
    Script {
        /// Line number (1-indexed).
        line: usize,
        /// Description of the failure.
        message: String,
    },

    /// Reading input or a world file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The command being executed, as typed.
    pub command: Option<String>,
    /// The room the player was in.
    pub room: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the command being executed.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Sets the room the player was in.
    #[must_use]
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(command) = &self.command {
            write!(f, "while running `{command}`")?;
        }
        if let Some(room) = &self.room {
            if self.command.is_some() {
                write!(f, " ")?;
            }
            write!(f, "in {room}")?;
        }
        Ok(())
    }
}

/// Result type alias using the textadv error.
pub type Result<T> = std::result::Result<T, Error>;
