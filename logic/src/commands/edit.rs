//! The edit command and its partial-update descriptor.

use std::collections::BTreeSet;

use tutorbook_core::{Address, ClassId, Email, Fees, Name, Person, Phone, Tag};

use crate::commands::CommandResult;
use crate::error::CommandError;
use crate::index::Index;
use crate::model::Model;

pub const EDIT_USAGE: &str = "edit: Edits the details of the person identified by the index number used in the displayed person list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [f/FEES] [c/CLASS_ID] [t/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

/// The fields a user chose to change, all optional.
///
/// `tags: Some(empty set)` means "clear all tags", distinct from `None`
/// (tags untouched). The parser guarantees at least one field is set before
/// an [`EditCommand`] is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub fees: Option<Fees>,
    pub class_id: Option<ClassId>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.fees.is_some()
            || self.class_id.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited person: descriptor fields override, everything else
    /// (including months paid) is kept from the existing record.
    pub fn apply_to(&self, existing: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| existing.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| existing.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| existing.address.clone()),
            fees: self.fees.clone().unwrap_or_else(|| existing.fees.clone()),
            class_id: self
                .class_id
                .clone()
                .unwrap_or_else(|| existing.class_id.clone()),
            months_paid: existing.months_paid.clone(),
            tags: self.tags.clone().unwrap_or_else(|| existing.tags.clone()),
        }
    }
}

/// Edits the person at a display index with a partial-update descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    pub index: Index,
    pub descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .displayed_to_book_index(self.index)
            .ok_or(CommandError::InvalidPersonIndex)?;
        let edited = self.descriptor.apply_to(&model.book().persons()[target]);
        if model.book().has_other_person(&edited, target) {
            return Err(CommandError::DuplicatePerson);
        }
        let feedback = format!("Edited Person: {edited}");
        model.set_person(target, edited);
        model.show_all();
        Ok(CommandResult::new(feedback))
    }
}
