//! Domain model for the tutorbook contact and fee tracker.
//!
//! This crate defines the foundational types for modeling tracked contacts:
//!
//! - Validated field newtypes ([`Name`], [`Phone`], [`Email`], [`Address`],
//!   [`Fees`], [`ClassId`], [`Tag`], [`MonthPaid`]) — each constructed through
//!   a `parse` function that enforces its format constraint.
//! - [`Person`] — a full contact record combining one of each single-valued
//!   field plus ordered sets of paid months and tags.
//! - [`AddressBook`] — the in-memory, duplicate-free list of persons.
//! - [`PersonFilter`] — the keyword predicates backing the `find` command.
//!
//! # Example
//!
//! ```
//! use tutorbook_core::*;
//!
//! let person = Person::new(
//!     Name::parse("Alice Pauline")?,
//!     Phone::parse("94351253")?,
//!     Email::parse("alice@example.com")?,
//!     Address::parse("123, Jurong West Ave 6")?,
//!     Fees::parse("300")?,
//!     ClassId::parse("1A")?,
//! );
//!
//! let mut book = AddressBook::new();
//! assert!(!book.has_person(&person));
//! book.add_person(person);
//! assert_eq!(book.len(), 1);
//! # Ok::<(), FieldError>(())
//! ```

mod book;
mod fields;
mod filter;
mod person;

pub use book::AddressBook;
pub use fields::{Address, ClassId, Email, FieldError, Fees, MonthPaid, Name, Phone, Tag};
pub use filter::PersonFilter;
pub use person::Person;
