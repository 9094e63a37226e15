//! Configuration for a game session.

use std::path::PathBuf;

/// Filter used when neither `--log` nor `TEXTADV_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for a game session.
///
/// Controls where the world and commands come from and how the session
/// talks to the terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// World definition file; the bundled manor when `None`.
    pub world: Option<PathBuf>,

    /// Script to replay instead of reading the console.
    pub script: Option<PathBuf>,

    /// Console prompt.
    pub prompt: String,

    /// Print the welcome banner before the first command.
    pub show_banner: bool,

    /// Echo each scripted command before its response.
    pub echo: bool,

    /// `tracing` filter directive, overridden by `TEXTADV_LOG`.
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::interactive()
    }
}

impl GameConfig {
    /// Creates a configuration for playing at the console.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            world: None,
            script: None,
            prompt: "> ".to_string(),
            show_banner: true,
            echo: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Creates a configuration that replays `script`.
    #[must_use]
    pub fn scripted(script: impl Into<PathBuf>) -> Self {
        Self {
            script: Some(script.into()),
            echo: true,
            ..Self::interactive()
        }
    }

    /// Whether commands come from a script.
    #[must_use]
    pub fn is_scripted(&self) -> bool {
        self.script.is_some()
    }

    /// Builder method to set the world file.
    #[must_use]
    pub fn with_world(mut self, path: impl Into<PathBuf>) -> Self {
        self.world = Some(path.into());
        self
    }

    /// Builder method to set the script file.
    #[must_use]
    pub fn with_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.script = Some(path.into());
        self
    }

    /// Builder method to set the console prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to enable/disable the welcome banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to enable/disable echoing scripted commands.
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Builder method to set the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
