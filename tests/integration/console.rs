//! Player input through the tokenizer and the console

use textadv_engine::Command;
use textadv_foundation::Result;
use textadv_runtime::{Ending, Game, InputTokenizer, LineEditor, ReadResult, Repl, demo_world};

/// Feeds fixed lines to the console, then reports end of input.
struct ScriptedEditor {
    lines: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().rev().map(|line| (*line).to_string()).collect(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_completions(&mut self, _words: Vec<String>) {}
}

fn session(lines: &[&str]) -> (Ending, String, Repl<ScriptedEditor>) {
    let game = Game::new(demo_world().unwrap());
    let mut repl = Repl::with_editor(ScriptedEditor::new(lines), game);
    let mut out = Vec::new();
    let ending = repl.run_with(&mut out).unwrap();
    (ending, String::from_utf8(out).unwrap(), repl)
}

#[test]
fn natural_phrasing_reaches_the_engine() {
    assert_eq!(
        InputTokenizer::parse("Use the KEY on the oak-door!"),
        Some(Command::new("use").with_arg("key").with_arg("oak-door"))
    );
    assert_eq!(
        InputTokenizer::parse("take key from desk"),
        Some(Command::from_parts("take", Some("key"), Some("desk")))
    );
    assert_eq!(InputTokenizer::parse("  the  "), None);
}

#[test]
fn console_session_on_the_demo_world() {
    let (ending, text, repl) = session(&["take the hammer", "", "xyzzy", "look", "quit", "look"]);
    assert_eq!(ending, Ending::Lost);
    assert!(text.starts_with("Greystone Manor\n"));
    assert!(text.contains("Verbs: look, open, take"));
    assert!(text.contains("You take the hammer."));
    assert!(text.contains("I don't understand that (unsupported operation: xyzzy with 0 argument(s))."));
    assert!(text.ends_with("Goodbye!\n"));
    assert_eq!(repl.game().turns(), 2);
}

#[test]
fn console_plays_through_to_the_win() {
    let walkthrough: Vec<&str> = include_str!("../../crates/textadv_runtime/worlds/manor.script")
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with("//"))
        .map(|line| line.split("//").next().unwrap_or(line).trim())
        .collect();
    let (ending, text, repl) = session(&walkthrough);
    assert_eq!(ending, Ending::Won);
    assert!(!text.contains("Goodbye!"));
    assert_eq!(repl.game().turns(), 32);
}
