//! The markpaid command.

use std::collections::BTreeSet;

use tutorbook_core::MonthPaid;

use crate::commands::CommandResult;
use crate::error::CommandError;
use crate::index::Index;
use crate::model::Model;

pub const MARKPAID_USAGE: &str = "markpaid: Records fee payments for the person identified by the index number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer) m/YYYY-MM...\n\
Example: markpaid 1 m/2024-01 m/2024-02";

/// Adds paid months to the person at a display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkPaidCommand {
    pub index: Index,
    pub months: BTreeSet<MonthPaid>,
}

impl MarkPaidCommand {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .displayed_to_book_index(self.index)
            .ok_or(CommandError::InvalidPersonIndex)?;
        let mut person = model.book().persons()[target].clone();
        person.months_paid.extend(self.months);
        let feedback = format!("Marked months paid: {person}");
        model.set_person(target, person);
        Ok(CommandResult::new(feedback))
    }
}
