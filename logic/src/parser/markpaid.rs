//! Parser for the markpaid command.

use std::collections::BTreeSet;

use tutorbook_core::MonthPaid;

use crate::commands::markpaid::{MARKPAID_USAGE, MarkPaidCommand};
use crate::commands::Command;
use crate::error::ParseError;
use crate::parser::syntax::PREFIX_MONTH_PAID;
use crate::parser::tokenizer::tokenize;
use crate::parser::util;

/// Parses the argument tail of a markpaid command: a display index followed
/// by one or more `m/YYYY-MM` values.
pub fn parse(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_MONTH_PAID]);

    let index = util::parse_index(map.preamble()).map_err(|_| ParseError::InvalidCommandFormat {
        usage: MARKPAID_USAGE,
    })?;

    let values = map.all_values(PREFIX_MONTH_PAID);
    if values.is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: MARKPAID_USAGE,
        });
    }
    let mut months = BTreeSet::new();
    for value in values {
        months.insert(MonthPaid::parse(value)?);
    }

    Ok(Command::MarkPaid(MarkPaidCommand { index, months }))
}
