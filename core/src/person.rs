//! The person record tracked by the address book.

use std::collections::BTreeSet;
use std::fmt;

use crate::fields::{Address, ClassId, Email, Fees, MonthPaid, Name, Phone, Tag};

/// A tracked contact: identity fields plus fee-tracking state.
///
/// Field values are validated at construction of the field types, so a
/// `Person` is well formed by construction. The month and tag sets are
/// `BTreeSet`s so rendering order is deterministic.
///
/// # Examples
///
/// ```
/// use tutorbook_core::*;
///
/// let alice = Person::new(
///     Name::parse("Alice Pauline")?,
///     Phone::parse("94351253")?,
///     Email::parse("alice@example.com")?,
///     Address::parse("123, Jurong West Ave 6")?,
///     Fees::parse("300")?,
///     ClassId::parse("1A")?,
/// );
/// let shouty = alice.clone().with_name(Name::parse("ALICE PAULINE")?);
///
/// // Same-person identity is case-insensitive on the name.
/// assert!(alice.is_same_person(&shouty));
/// # Ok::<(), FieldError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub fees: Fees,
    pub class_id: ClassId,
    pub months_paid: BTreeSet<MonthPaid>,
    pub tags: BTreeSet<Tag>,
}

impl Person {
    /// Creates a person with no months paid and no tags.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        fees: Fees,
        class_id: ClassId,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            fees,
            class_id,
            months_paid: BTreeSet::new(),
            tags: BTreeSet::new(),
        }
    }

    /// Replaces the name, keeping every other field.
    pub fn with_name(mut self, name: Name) -> Self {
        self.name = name;
        self
    }

    /// Replaces the tag set, keeping every other field.
    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Whether two records refer to the same person.
    ///
    /// Identity is the name, compared case-insensitively. This is the notion
    /// of "duplicate" used by the add and edit commands.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name.as_str().eq_ignore_ascii_case(other.name.as_str())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Fees: {}; Class: {}",
            self.name, self.phone, self.email, self.address, self.fees, self.class_id
        )?;
        if !self.months_paid.is_empty() {
            let months: Vec<&str> = self.months_paid.iter().map(MonthPaid::as_str).collect();
            write!(f, "; Months paid: [{}]", months.join(", "))?;
        }
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
            write!(f, "; Tags: [{}]", tags.join(", "))?;
        }
        Ok(())
    }
}
