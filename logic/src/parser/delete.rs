//! Parser for the delete command.

use crate::commands::delete::{DELETE_USAGE, DeleteCommand};
use crate::commands::Command;
use crate::error::ParseError;
use crate::parser::util;

/// Parses the single display-index argument of a delete command.
pub fn parse(args: &str) -> Result<Command, ParseError> {
    let index = util::parse_index(args)
        .map_err(|_| ParseError::InvalidCommandFormat { usage: DELETE_USAGE })?;
    Ok(Command::Delete(DeleteCommand { index }))
}
