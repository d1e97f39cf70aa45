//! In-memory contact collection.
//!
//! An ordered list of contacts, unique by ID, with insertion order as display
//! order. Every operation returns a `Result` with an explicit error kind and
//! logs the outcome.

use crate::domain::ValidationError;
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactRecord, ContactUpdate};
use tracing::{debug, error, info, warn};

/// Ordered, ID-unique set of contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactCollection {
    contacts: Vec<Contact>,
}

impl ContactCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts held.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact by ID.
    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.id() == id)
    }

    /// Append a contact.
    ///
    /// # Errors
    ///
    /// - `ContactError::Validation(EmptyName)` if the name is empty
    /// - `ContactError::DuplicateId` if the ID is already present
    pub fn add(&mut self, contact: Contact) -> ContactResult<&Contact> {
        if contact.name().is_empty() {
            error!("Cannot add contact: name is required");
            return Err(ValidationError::EmptyName.into());
        }

        if self.position(contact.id().as_str()).is_some() {
            error!("Cannot add contact: duplicate ID {}", contact.id());
            return Err(ContactError::DuplicateId(contact.id().to_string()));
        }

        info!("Added new contact: {}", contact.name());
        self.contacts.push(contact);
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    /// Replace the contact with `id` by one with `update` applied.
    ///
    /// The replacement keeps the same ID and list position.
    ///
    /// # Errors
    ///
    /// - `ContactError::NotFound` if no contact has `id`
    /// - `ContactError::Validation(EmptyName)` if the resulting name is empty
    pub fn update(&mut self, id: &str, update: &ContactUpdate) -> ContactResult<&Contact> {
        let Some(index) = self.position(id) else {
            error!("Contact not found with ID: {}", id);
            return Err(ContactError::NotFound(id.to_string()));
        };

        let replacement = self.contacts[index].apply(update);
        if replacement.name().is_empty() {
            error!("Cannot update contact: name is required");
            return Err(ValidationError::EmptyName.into());
        }

        info!("Updated contact: {}", replacement.name());
        self.contacts[index] = replacement;
        Ok(&self.contacts[index])
    }

    /// Remove the contact with `id`, returning it.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::NotFound` if no contact has `id`.
    pub fn delete(&mut self, id: &str) -> ContactResult<Contact> {
        let Some(index) = self.position(id) else {
            error!("Contact not found with ID: {}", id);
            return Err(ContactError::NotFound(id.to_string()));
        };

        let removed = self.contacts.remove(index);
        info!("Deleted contact: {}", removed.name());
        Ok(removed)
    }

    /// Contacts whose name, phone, email or address contains `query`,
    /// ignoring case. A blank query matches everything.
    ///
    /// Results keep collection order and are independent copies.
    pub fn search(&self, query: &str) -> Vec<Contact> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.contacts.clone();
        }

        let results: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|c| c.matches_lowercase(&needle))
            .cloned()
            .collect();
        debug!("Search for '{}' matched {} contacts", needle, results.len());
        results
    }

    /// Every contact, in order.
    pub fn list_all(&self) -> Vec<Contact> {
        self.search("")
    }

    /// Structured records for every contact, in order.
    pub fn export_all(&self) -> Vec<ContactRecord> {
        self.contacts.iter().map(Contact::to_structured).collect()
    }

    /// Build a collection from structured records.
    ///
    /// Records that cannot be added (empty name, repeated ID) are logged and
    /// skipped.
    pub fn import_all(records: impl IntoIterator<Item = ContactRecord>) -> Self {
        let mut collection = Self::new();
        for record in records {
            let contact = Contact::from(record);
            let id = contact.id().to_string();
            if let Err(e) = collection.add(contact) {
                warn!("Skipping stored contact {}: {}", id, e);
            }
        }
        collection
    }
}

impl<'a> IntoIterator for &'a ContactCollection {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
