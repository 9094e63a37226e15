//! Script replay.
//!
//! A script is a text file with one command per line. Blank lines are
//! skipped, and so is everything after a `//` that starts a line or follows
//! whitespace. Replay stops at the first unsupported command, or as soon as
//! the game is won.

use std::fs;
use std::io::Write;
use std::path::Path;

use textadv_foundation::{Error, Result};
use tracing::{debug, info};

use crate::game::{Ending, Game, GameState};

/// Yields `(line number, command)` for every line holding a command.
/// Line numbers start at 1.
pub fn script_lines(script: &str) -> impl Iterator<Item = (usize, &str)> {
    script.lines().enumerate().filter_map(|(index, line)| {
        let command = strip_comment(line).trim();
        (!command.is_empty()).then_some((index + 1, command))
    })
}

fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with("//") {
        return "";
    }
    line.find(" //")
        .into_iter()
        .chain(line.find("\t//"))
        .min()
        .map_or(line, |cut| &line[..cut])
}

/// Replays `script` on `game`, writing the welcome (if the game has not
/// started), each command when `echo` is set, and every response to `out`.
///
/// # Errors
///
/// `Script` with the offending line number if a command is unsupported,
/// `Io` if writing to `out` fails.
pub fn replay<W: Write>(game: &mut Game, script: &str, echo: bool, out: &mut W) -> Result<Ending> {
    if game.state() == GameState::Blocked {
        writeln!(out, "{}", game.start())?;
    }

    for (line, command) in script_lines(script) {
        if game.state() == GameState::Won {
            debug!(line, "game won, ignoring the rest of the script");
            break;
        }
        if echo {
            writeln!(out, "\n> {command}")?;
        }
        match game.play_line(command) {
            Ok(Some(response)) => writeln!(out, "{response}")?,
            Ok(None) => {}
            Err(err) => return Err(Error::script(line, err.to_string())),
        }
    }

    let ending = game.ending();
    info!(%ending, turns = game.turns(), "script finished");
    Ok(ending)
}

/// Reads a script file and replays it.
///
/// # Errors
///
/// `Io` if the file cannot be read, otherwise as [`replay`].
pub fn replay_file<W: Write>(
    game: &mut Game,
    path: &Path,
    echo: bool,
    out: &mut W,
) -> Result<Ending> {
    let script = fs::read_to_string(path)?;
    replay(game, &script, echo, out)
}
