//! Field prefix tokens for command argument text.

use std::fmt;

/// A short token marking the start of a field value in raw argument text,
/// e.g. `n/` in `edit 1 n/John`.
///
/// The tokenizer only recognizes a prefix when it is preceded by whitespace,
/// so a prefix-shaped substring glued to other text (as in `nm/`, which
/// contains `m/`) does not split a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    pub fn token(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_FEES: Prefix = Prefix::new("f/");
pub const PREFIX_CLASS_ID: Prefix = Prefix::new("c/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_MONTH_PAID: Prefix = Prefix::new("m/");
pub const PREFIX_NOT_MONTH_PAID: Prefix = Prefix::new("nm/");

/// All prefixes accepted by the add and edit commands.
pub const PERSON_FIELD_PREFIXES: [Prefix; 7] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_FEES,
    PREFIX_CLASS_ID,
    PREFIX_TAG,
];

/// All prefixes accepted by the find command.
pub const FIND_PREFIXES: [Prefix; 4] = [
    PREFIX_NAME,
    PREFIX_CLASS_ID,
    PREFIX_MONTH_PAID,
    PREFIX_NOT_MONTH_PAID,
];
