use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A single contact record. The name is not part of the record itself;
/// it is the key in the [`ContactBook`] map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(phone: String, email: String) -> Self {
        Contact { phone, email }
    }
}

/// The in-memory contact mapping, keyed by name (unique, case-sensitive).
///
/// Backed by a BTreeMap so listing and serialization are deterministic:
/// contacts always come out sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactBook {
    entries: BTreeMap<String, Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new contact. Adding a name that is already present is
    /// rejected and leaves the book untouched.
    pub fn add(&mut self, name: String, contact: Contact) -> Result<(), AppError> {
        if self.entries.contains_key(&name) {
            return Err(AppError::AlreadyExists(name));
        }
        self.entries.insert(name, contact);
        Ok(())
    }

    /// Pure lookup by exact name.
    pub fn search(&self, name: &str) -> Option<&Contact> {
        self.entries.get(name)
    }

    /// Replaces only the fields for which a non-empty new value was
    /// supplied; a `None` or empty string keeps the previous value.
    pub fn update(
        &mut self,
        name: &str,
        new_phone: Option<String>,
        new_email: Option<String>,
    ) -> Result<(), AppError> {
        let contact = self
            .entries
            .get_mut(name)
            .ok_or_else(|| AppError::NotFound(name.to_string()))?;

        if let Some(phone) = new_phone.filter(|p| !p.is_empty()) {
            contact.phone = phone;
        }
        if let Some(email) = new_email.filter(|e| !e.is_empty()) {
            contact.email = email;
        }
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Result<Contact, AppError> {
        self.entries
            .remove(name)
            .ok_or_else(|| AppError::NotFound(name.to_string()))
    }

    /// Enumerates (name, contact) pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Contact)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
