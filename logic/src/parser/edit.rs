//! Parser for the edit command.

use tracing::debug;
use tutorbook_core::{Address, ClassId, Email, Fees, Name, Phone};

use crate::commands::edit::{EDIT_USAGE, EditCommand};
use crate::commands::{Command, EditPersonDescriptor};
use crate::error::ParseError;
use crate::parser::syntax::{
    PERSON_FIELD_PREFIXES, PREFIX_ADDRESS, PREFIX_CLASS_ID, PREFIX_EMAIL, PREFIX_FEES, PREFIX_NAME,
    PREFIX_PHONE, PREFIX_TAG,
};
use crate::parser::tokenizer::tokenize;
use crate::parser::util;

/// Parses the argument tail of an edit command.
///
/// The preamble must be a valid one-based display index; every field prefix
/// is optional, but at least one must be supplied. The phone, email, and
/// address prefixes are single-valued; the first duplicated one found is
/// reported.
pub fn parse(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &PERSON_FIELD_PREFIXES);

    let index = util::parse_index(map.preamble())
        .map_err(|_| ParseError::InvalidCommandFormat { usage: EDIT_USAGE })?;

    for prefix in [PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS] {
        if util::has_duplicate(&map, prefix) {
            return Err(ParseError::DuplicatePrefix(prefix.token()));
        }
    }

    let mut descriptor = EditPersonDescriptor::default();
    if let Some(value) = map.value_of(PREFIX_NAME) {
        descriptor.name = Some(Name::parse(value)?);
    }
    if let Some(value) = map.value_of(PREFIX_PHONE) {
        descriptor.phone = Some(Phone::parse(value)?);
    }
    if let Some(value) = map.value_of(PREFIX_EMAIL) {
        descriptor.email = Some(Email::parse(value)?);
    }
    if let Some(value) = map.value_of(PREFIX_ADDRESS) {
        descriptor.address = Some(Address::parse(value)?);
    }
    if let Some(value) = map.value_of(PREFIX_FEES) {
        descriptor.fees = Some(Fees::parse(value)?);
    }
    if let Some(value) = map.value_of(PREFIX_CLASS_ID) {
        descriptor.class_id = Some(ClassId::parse(value)?);
    }
    descriptor.tags = util::parse_tags_for_edit(map.all_values(PREFIX_TAG))?;

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NothingEdited);
    }

    debug!(index = index.one_based(), "parsed edit command");
    Ok(Command::Edit(EditCommand { index, descriptor }))
}
