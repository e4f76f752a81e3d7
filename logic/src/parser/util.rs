//! Shared parsing helpers used by the per-command parsers.

use std::collections::BTreeSet;

use tutorbook_core::Tag;

use crate::error::ParseError;
use crate::index::Index;
use crate::parser::syntax::Prefix;
use crate::parser::tokenizer::ArgumentMultimap;

/// Parses a one-based display index.
///
/// Accepts a trimmed string of plain digits with value >= 1; rejects "0",
/// signs, non-digits, and values that overflow `usize`.
pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    let value: usize = trimmed.parse().map_err(|_| ParseError::InvalidIndex)?;
    Index::from_one_based(value).ok_or(ParseError::InvalidIndex)
}

/// Whether a single-valued prefix was supplied more than once.
pub fn has_duplicate(map: &ArgumentMultimap, prefix: Prefix) -> bool {
    map.all_values(prefix).len() > 1
}

/// Parses the tag values of an edit command.
///
/// - no `t/` at all → `None` (tags untouched)
/// - a single empty `t/` → `Some(empty set)` (clear all tags)
/// - otherwise every value must be a valid tag
pub fn parse_tags_for_edit(values: &[String]) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].is_empty() {
        return Ok(Some(BTreeSet::new()));
    }
    parse_tags(values).map(Some)
}

/// Parses a non-empty collection of tag values into a set.
pub fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    let mut tags = BTreeSet::new();
    for value in values {
        tags.insert(Tag::parse(value)?);
    }
    Ok(tags)
}

/// Splits a prefix value into whitespace-separated search keywords.
///
/// Values are trimmed by the tokenizer, so an empty value yields an empty
/// list rather than a list containing the empty string.
pub fn keywords(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}
