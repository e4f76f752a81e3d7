//! Parser for the find command.

use tracing::debug;
use tutorbook_core::PersonFilter;

use crate::commands::Command;
use crate::commands::find::{FIND_USAGE, FindCommand};
use crate::error::ParseError;
use crate::parser::syntax::{
    FIND_PREFIXES, PREFIX_CLASS_ID, PREFIX_MONTH_PAID, PREFIX_NAME, PREFIX_NOT_MONTH_PAID,
};
use crate::parser::tokenizer::tokenize;
use crate::parser::util::keywords;

/// The search mode selected by the combination of supplied prefixes.
///
/// Exactly one mode is valid per parse; any other combination (including no
/// prefixes at all) is `Invalid` and fails with the usage message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FindMode {
    Name,
    ClassId,
    NameAndClassId,
    MonthPaid,
    NotMonthPaid,
    Invalid,
}

/// Parses the argument tail of a find command.
///
/// The tail must have no preamble and no repeated prefix. The supplied
/// prefixes are classified into a single [`FindMode`]; the matched value(s)
/// are split on whitespace into search keywords.
pub fn parse(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &FIND_PREFIXES);

    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat { usage: FIND_USAGE });
    }
    map.verify_no_duplicate_prefixes(&FIND_PREFIXES)?;

    let mode = classify(
        map.has(PREFIX_NAME),
        map.has(PREFIX_CLASS_ID),
        map.has(PREFIX_MONTH_PAID),
        map.has(PREFIX_NOT_MONTH_PAID),
    );
    debug!(?mode, "classified find command");

    let filter = match mode {
        FindMode::Name => {
            let words = keywords(map.value_of(PREFIX_NAME).unwrap_or(""));
            if words.is_empty() {
                return Err(ParseError::EmptySearchValue);
            }
            PersonFilter::NameContainsKeywords(words)
        }
        FindMode::ClassId => {
            let words = keywords(map.value_of(PREFIX_CLASS_ID).unwrap_or(""));
            if words.is_empty() {
                return Err(ParseError::EmptySearchValue);
            }
            PersonFilter::ClassIdContainsKeywords(words)
        }
        FindMode::NameAndClassId => {
            let name_keywords = keywords(map.value_of(PREFIX_NAME).unwrap_or(""));
            let class_id_keywords = keywords(map.value_of(PREFIX_CLASS_ID).unwrap_or(""));
            // Only the fully empty combination is rejected; one empty side
            // yields a filter that matches nothing.
            if name_keywords.is_empty() && class_id_keywords.is_empty() {
                return Err(ParseError::EmptySearchValue);
            }
            PersonFilter::NameAndClassIdContainsKeywords {
                name_keywords,
                class_id_keywords,
            }
        }
        FindMode::MonthPaid => {
            let words = keywords(map.value_of(PREFIX_MONTH_PAID).unwrap_or(""));
            if words.is_empty() {
                return Err(ParseError::EmptySearchValue);
            }
            PersonFilter::MonthPaidContainsKeywords(words)
        }
        FindMode::NotMonthPaid => {
            let words = keywords(map.value_of(PREFIX_NOT_MONTH_PAID).unwrap_or(""));
            if words.is_empty() {
                return Err(ParseError::EmptySearchValue);
            }
            PersonFilter::NotMonthPaidContainsKeywords(words)
        }
        FindMode::Invalid => {
            return Err(ParseError::InvalidCommandFormat { usage: FIND_USAGE });
        }
    };

    Ok(Command::Find(FindCommand { filter }))
}

/// Pure classification of the four prefix-presence flags into a mode.
fn classify(name: bool, class_id: bool, month_paid: bool, not_month_paid: bool) -> FindMode {
    match (name, class_id, month_paid, not_month_paid) {
        (true, false, false, false) => FindMode::Name,
        (false, true, false, false) => FindMode::ClassId,
        (true, true, false, false) => FindMode::NameAndClassId,
        (false, false, true, false) => FindMode::MonthPaid,
        (false, false, false, true) => FindMode::NotMonthPaid,
        _ => FindMode::Invalid,
    }
}
