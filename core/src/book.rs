//! In-memory address book.

use crate::person::Person;

/// An ordered, duplicate-free list of persons.
///
/// Duplicate detection uses [`Person::is_same_person`]; callers are expected
/// to check [`has_person`](AddressBook::has_person) (or
/// [`has_other_person`](AddressBook::has_other_person) when replacing) before
/// mutating. Index-taking methods require an in-range index.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Whether the book already holds a record for the same person.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Whether any record other than the one at `except` is the same person.
    ///
    /// Used by the edit command so a person can be edited without colliding
    /// with their own old record.
    pub fn has_other_person(&self, person: &Person, except: usize) -> bool {
        self.persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != except && p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) {
        self.persons.push(person);
    }

    pub fn set_person(&mut self, index: usize, person: Person) {
        self.persons[index] = person;
    }

    pub fn remove_person(&mut self, index: usize) -> Person {
        self.persons.remove(index)
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }
}
