//! The delete command.

use crate::commands::CommandResult;
use crate::error::CommandError;
use crate::index::Index;
use crate::model::Model;

pub const DELETE_USAGE: &str = "delete: Deletes the person identified by the index number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

/// Deletes the person at a display index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    pub index: Index,
}

impl DeleteCommand {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .displayed_to_book_index(self.index)
            .ok_or(CommandError::InvalidPersonIndex)?;
        let removed = model.remove_person(target);
        Ok(CommandResult::new(format!("Deleted Person: {removed}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorbook_core::{Address, ClassId, Email, Fees, Name, Person, Phone};

    fn person(name: &str) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse("87652533").unwrap(),
            Email::parse("cornelia@example.com").unwrap(),
            Address::parse("10th street").unwrap(),
            Fees::parse("100").unwrap(),
            ClassId::parse("4D").unwrap(),
        )
    }

    #[test]
    fn test_execute_removes_displayed_person() {
        let mut model = Model::new();
        model.add_person(person("Daniel Meier"));
        model.add_person(person("Elle Meyer"));

        let result = DeleteCommand {
            index: Index::from_one_based(1).unwrap(),
        }
        .execute(&mut model)
        .unwrap();

        assert!(result.feedback.starts_with("Deleted Person: Daniel Meier"));
        assert_eq!(model.book().len(), 1);
        assert_eq!(model.displayed_persons().len(), 1);
    }

    #[test]
    fn test_execute_rejects_out_of_range_index() {
        let mut model = Model::new();
        let result = DeleteCommand {
            index: Index::from_one_based(1).unwrap(),
        }
        .execute(&mut model);
        assert_eq!(result, Err(CommandError::InvalidPersonIndex));
    }
}
