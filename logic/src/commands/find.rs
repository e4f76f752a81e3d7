//! The find command.

use tutorbook_core::PersonFilter;

use crate::commands::CommandResult;
use crate::error::CommandError;
use crate::model::Model;

pub const FIND_USAGE: &str = "find: Finds persons by name words, class id, or months paid. Supply exactly one of the forms below (keywords are case-insensitive).\n\
Parameters: n/NAME_KEYWORDS | c/CLASS_ID_KEYWORDS | n/NAME_KEYWORDS c/CLASS_ID_KEYWORDS | m/MONTH_PAID_KEYWORDS | nm/MONTH_PAID_KEYWORDS\n\
Example: find n/alice bob c/1A";

/// Filters the displayed person list with a keyword predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct FindCommand {
    pub filter: PersonFilter,
}

impl FindCommand {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let count = model.apply_filter(&self.filter);
        Ok(CommandResult::new(format!("{count} persons listed!")))
    }
}
