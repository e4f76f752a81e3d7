//! Command parsing and execution for the tutorbook contact and fee tracker.
//!
//! Raw input lines flow through three stages:
//!
//! 1. [`parse_command`](parser::parse_command) splits the line into a command
//!    word and an argument tail, then routes the tail to a per-command
//!    parser. The argument parsers tokenize against field prefixes
//!    (`n/`, `p/`, `c/`, ...) via [`parser::tokenizer`], validate, and build
//!    a [`Command`].
//! 2. [`Command::execute`] applies the command to a [`Model`], the in-memory
//!    address book plus the currently displayed person list.
//! 3. The resulting [`CommandResult`] carries user feedback (and an exit
//!    flag) back to the front end.
//!
//! All parse failures are [`ParseError`] values whose display text is the
//! message shown to the user; execution failures are [`CommandError`]s.
//! Nothing is retried or recovered internally.

pub mod commands;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;

pub use commands::{Command, CommandResult, EditPersonDescriptor};
pub use error::{CommandError, ParseError};
pub use index::Index;
pub use model::Model;
pub use parser::parse_command;
