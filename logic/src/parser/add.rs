//! Parser for the add command.

use tutorbook_core::{Address, ClassId, Email, Fees, Name, Person, Phone};

use crate::commands::add::{ADD_USAGE, AddCommand};
use crate::commands::Command;
use crate::error::ParseError;
use crate::parser::syntax::{
    PERSON_FIELD_PREFIXES, PREFIX_ADDRESS, PREFIX_CLASS_ID, PREFIX_EMAIL, PREFIX_FEES, PREFIX_NAME,
    PREFIX_PHONE, PREFIX_TAG, Prefix,
};
use crate::parser::tokenizer::tokenize;
use crate::parser::util;

const REQUIRED_PREFIXES: [Prefix; 6] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_FEES,
    PREFIX_CLASS_ID,
];

/// Parses the argument tail of an add command.
///
/// All field prefixes except `t/` are required and single-valued; `t/` may
/// repeat. The preamble must be empty.
pub fn parse(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &PERSON_FIELD_PREFIXES);

    if !map.preamble().is_empty() || REQUIRED_PREFIXES.iter().any(|&prefix| !map.has(prefix)) {
        return Err(ParseError::InvalidCommandFormat { usage: ADD_USAGE });
    }
    map.verify_no_duplicate_prefixes(&REQUIRED_PREFIXES)?;

    let mut person = Person::new(
        Name::parse(map.value_of(PREFIX_NAME).unwrap_or(""))?,
        Phone::parse(map.value_of(PREFIX_PHONE).unwrap_or(""))?,
        Email::parse(map.value_of(PREFIX_EMAIL).unwrap_or(""))?,
        Address::parse(map.value_of(PREFIX_ADDRESS).unwrap_or(""))?,
        Fees::parse(map.value_of(PREFIX_FEES).unwrap_or(""))?,
        ClassId::parse(map.value_of(PREFIX_CLASS_ID).unwrap_or(""))?,
    );
    let tag_values = map.all_values(PREFIX_TAG);
    if !tag_values.is_empty() {
        person = person.with_tags(util::parse_tags(tag_values)?);
    }

    Ok(Command::Add(AddCommand { person }))
}
