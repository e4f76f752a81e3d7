//! The add command.

use tutorbook_core::Person;

use crate::commands::CommandResult;
use crate::error::CommandError;
use crate::model::Model;

pub const ADD_USAGE: &str = "add: Adds a person to the address book.\n\
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS f/FEES c/CLASS_ID [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2 f/300 c/1A t/new";

/// Adds a fully specified person to the book.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    pub person: Person,
}

impl AddCommand {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if model.book().has_person(&self.person) {
            return Err(CommandError::DuplicatePerson);
        }
        let feedback = format!("New person added: {}", self.person);
        model.add_person(self.person);
        Ok(CommandResult::new(feedback))
    }
}
