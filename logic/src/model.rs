//! The mutable application state commands execute against.

use tutorbook_core::{AddressBook, Person, PersonFilter};

use crate::index::Index;

/// The address book plus the currently displayed subset of it.
///
/// Display indices in user commands (edit, delete, markpaid) refer to the
/// result of the last `find`/`list`, so the model tracks which book slots are
/// currently visible. Mutations keep the two views consistent: adding or
/// editing resets the view to everyone, deleting removes the slot from both.
#[derive(Debug, Clone, Default)]
pub struct Model {
    book: AddressBook,
    displayed: Vec<usize>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// The persons currently visible, in display order.
    pub fn displayed_persons(&self) -> Vec<&Person> {
        self.displayed
            .iter()
            .map(|&slot| &self.book.persons()[slot])
            .collect()
    }

    /// Resolves a one-based display index to a book slot.
    pub fn displayed_to_book_index(&self, index: Index) -> Option<usize> {
        self.displayed.get(index.zero_based()).copied()
    }

    /// Shows every person.
    pub fn show_all(&mut self) {
        self.displayed = (0..self.book.len()).collect();
    }

    /// Restricts the view to persons matching the filter; returns the count.
    pub fn apply_filter(&mut self, filter: &PersonFilter) -> usize {
        self.displayed = self
            .book
            .persons()
            .iter()
            .enumerate()
            .filter(|(_, person)| filter.matches(person))
            .map(|(slot, _)| slot)
            .collect();
        self.displayed.len()
    }

    pub fn add_person(&mut self, person: Person) {
        self.book.add_person(person);
        self.show_all();
    }

    pub fn set_person(&mut self, slot: usize, person: Person) {
        self.book.set_person(slot, person);
    }

    /// Removes a person by book slot, keeping the rest of the current view.
    pub fn remove_person(&mut self, slot: usize) -> Person {
        let removed = self.book.remove_person(slot);
        self.displayed.retain(|&s| s != slot);
        for s in &mut self.displayed {
            if *s > slot {
                *s -= 1;
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        self.book.clear();
        self.displayed.clear();
    }
}
