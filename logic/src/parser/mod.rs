//! Line command parsing.
//!
//! [`parse_command`] is the entry point: it splits an input line into a
//! command word and an argument tail, then routes the tail to the matching
//! per-command parser. The tail keeps its leading whitespace because the
//! [`tokenizer`] only recognizes field prefixes preceded by whitespace.

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod markpaid;
pub mod syntax;
pub mod tokenizer;
pub mod util;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::commands::Command;
use crate::error::ParseError;

/// Generic usage text shown when a line has no command word.
pub const BASIC_USAGE: &str =
    "Commands: add, edit, delete, find, markpaid, list, clear, help, exit";

/// Splits a line into command word and argument tail.
static COMMAND_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?<word>\S+)(?<args>.*)$").expect("static regex must compile")
});

/// Parses a full input line into an executable [`Command`].
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let captures = COMMAND_FORMAT
        .captures(input)
        .ok_or(ParseError::InvalidCommandFormat { usage: BASIC_USAGE })?;
    let word = &captures["word"];
    let args = captures.name("args").map_or("", |m| m.as_str());
    debug!(command = word, "dispatching command");

    match word {
        "add" => add::parse(args),
        "edit" => edit::parse(args),
        "delete" => delete::parse(args),
        "find" => find::parse(args),
        "markpaid" => markpaid::parse(args),
        // Trailing arguments after parameterless commands are ignored.
        "list" => Ok(Command::List),
        "clear" => Ok(Command::Clear),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand),
    }
}
