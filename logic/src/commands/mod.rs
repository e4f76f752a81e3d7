//! Executable commands produced by the parsers.

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod markpaid;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use find::FindCommand;
pub use markpaid::MarkPaidCommand;

use crate::error::CommandError;
use crate::model::Model;
use crate::parser::BASIC_USAGE;

pub const MESSAGE_CLEARED: &str = "Address book has been cleared!";
pub const MESSAGE_LISTED_ALL: &str = "Listed all persons";
pub const MESSAGE_EXITING: &str = "Exiting Address Book as requested ...";

/// A parsed, executable line command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    MarkPaid(MarkPaidCommand),
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    /// Applies the command to the model, producing user feedback.
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(cmd) => cmd.execute(model),
            Command::Edit(cmd) => cmd.execute(model),
            Command::Delete(cmd) => cmd.execute(model),
            Command::Find(cmd) => cmd.execute(model),
            Command::MarkPaid(cmd) => cmd.execute(model),
            Command::List => {
                model.show_all();
                Ok(CommandResult::new(MESSAGE_LISTED_ALL))
            }
            Command::Clear => {
                model.clear();
                Ok(CommandResult::new(MESSAGE_CLEARED))
            }
            Command::Help => Ok(CommandResult::new(BASIC_USAGE)),
            Command::Exit => Ok(CommandResult::exit(MESSAGE_EXITING)),
        }
    }

    /// Whether executing this command refreshes the displayed person list.
    ///
    /// Front ends use this to decide when to re-render the list.
    pub fn shows_list(&self) -> bool {
        matches!(self, Command::Find(_) | Command::List)
    }
}

/// Feedback from executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: true,
        }
    }
}
