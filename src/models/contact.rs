//! Contact model and its structured (storage/transport) form.

use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single contact.
///
/// Contacts are immutable: updating one means building a replacement with the
/// same ID. All text fields are trimmed at construction. An empty name is
/// representable here and rejected by [`ContactCollection`](crate::collection::ContactCollection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    name: String,
    phone: String,
    email: String,
    address: String,
}

impl Contact {
    /// Create a new contact with a freshly generated ID.
    pub fn new(
        name: impl AsRef<str>,
        phone: impl AsRef<str>,
        email: impl AsRef<str>,
        address: impl AsRef<str>,
    ) -> Self {
        Self::with_id(None, name, phone, email, address)
    }

    /// Create a contact, reusing `id` when one is supplied.
    ///
    /// The supplied ID is kept unchanged. A missing or empty ID gets a freshly
    /// generated one.
    pub fn with_id(
        id: Option<&str>,
        name: impl AsRef<str>,
        phone: impl AsRef<str>,
        email: impl AsRef<str>,
        address: impl AsRef<str>,
    ) -> Self {
        let id = id
            .and_then(|raw| ContactId::new(raw).ok())
            .unwrap_or_else(ContactId::generate);

        Self {
            id,
            name: name.as_ref().trim().to_string(),
            phone: phone.as_ref().trim().to_string(),
            email: email.as_ref().trim().to_string(),
            address: address.as_ref().trim().to_string(),
        }
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Build a replacement contact with the same ID, applying `update`.
    ///
    /// Fields left as `None` keep their current value.
    pub fn apply(&self, update: &ContactUpdate) -> Self {
        Self::with_id(
            Some(self.id.as_str()),
            update.name.as_deref().unwrap_or(&self.name),
            update.phone.as_deref().unwrap_or(&self.phone),
            update.email.as_deref().unwrap_or(&self.email),
            update.address.as_deref().unwrap_or(&self.address),
        )
    }

    /// Case-insensitive substring match across name, phone, email and address.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.name, &self.phone, &self.email, &self.address]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Export this contact as its structured record.
    pub fn to_structured(&self) -> ContactRecord {
        ContactRecord::from(self)
    }

    /// Rebuild a contact from a generic string-keyed map.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::MissingField` if any of the five record keys is
    /// absent and `ContactError::InvalidField` if one is not a string.
    pub fn from_structured(map: &Map<String, Value>) -> ContactResult<Self> {
        ContactRecord::from_map(map).map(Self::from)
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self::new("", "", "", "")
    }
}

/// Structured form of a contact, used for storage and API responses.
///
/// Field order matches the on-disk layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    pub contact_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactRecord {
    /// Read a record out of a JSON object, reporting the first missing key.
    pub fn from_map(map: &Map<String, Value>) -> ContactResult<Self> {
        let field = |key: &'static str| -> ContactResult<String> {
            match map.get(key) {
                None => Err(ContactError::MissingField(key)),
                Some(Value::String(s)) => Ok(s.clone()),
                Some(_) => Err(ContactError::InvalidField(key)),
            }
        };

        Ok(Self {
            contact_id: field("contact_id")?,
            name: field("name")?,
            phone: field("phone")?,
            email: field("email")?,
            address: field("address")?,
        })
    }
}

impl From<&Contact> for ContactRecord {
    fn from(contact: &Contact) -> Self {
        Self {
            contact_id: contact.id.to_string(),
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            address: contact.address.clone(),
        }
    }
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        Contact::with_id(
            Some(&record.contact_id),
            record.name,
            record.phone,
            record.email,
            record.address,
        )
    }
}

/// Raw fields for a contact that does not exist yet.
///
/// Missing keys deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl NewContact {
    /// Build the contact with a fresh ID.
    pub fn into_contact(self) -> Contact {
        Contact::new(self.name, self.phone, self.email, self.address)
    }
}

/// Partial update for an existing contact. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl ContactUpdate {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none() && self.address.is_none()
    }
}
