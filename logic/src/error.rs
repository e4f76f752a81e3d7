//! Error types for parsing and command execution.
//!
//! Every user-visible failure message lives in the `#[error]` attributes
//! here (plus the field constraint messages in `tutorbook-core`). Parsers
//! surface a single [`ParseError`] per failed parse; nothing is recovered
//! internally.

use thiserror::Error;
use tutorbook_core::FieldError;

/// Failures while turning an input line into a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Argument text does not fit the command's format; carries the usage
    /// string of the command being parsed.
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: &'static str },

    /// A single-valued field prefix appeared more than once. Carries the
    /// first duplicated prefix token found.
    #[error("Multiple values specified for the following single-valued field(s): {0}")]
    DuplicatePrefix(&'static str),

    /// Edit supplied an index but no field to change.
    #[error("At least one field to edit must be provided.")]
    NothingEdited,

    /// Find supplied a prefix with nothing to search for.
    #[error("Search value cannot be empty.")]
    EmptySearchValue,

    /// The command word is not recognized.
    #[error("Unknown command")]
    UnknownCommand,

    /// A display index argument is not a non-zero unsigned integer.
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    /// A field value failed its format constraint.
    #[error(transparent)]
    InvalidField(#[from] FieldError),
}

/// Failures while executing a parsed command against the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The display index does not refer to a listed person.
    #[error("The person index provided is invalid")]
    InvalidPersonIndex,

    /// The add or edit would collide with an existing person.
    #[error("This person already exists in the address book")]
    DuplicatePerson,
}
