//! Contact model representing a NetBox tenancy contact.

use crate::domain::{ContactId, GroupId};
use crate::models::group::NestedGroup;
use serde::{Deserialize, Serialize};

/// A contact as returned by `/api/tenancy/contacts/`.
///
/// Contacts are read-only input; the exporter never writes them back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: ContactId,

    /// Full name of the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Primary email address, unvalidated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Primary phone number, unvalidated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Free-form postal address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Free-form comments (markdown in NetBox)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    /// Groups this contact belongs to (many-to-many)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<NestedGroup>,
}

impl Contact {
    /// Create a new contact with minimal required fields.
    pub fn new(id: ContactId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Whether this contact is a direct member of `group`.
    pub fn is_member_of(&self, group: GroupId) -> bool {
        self.groups.iter().any(|g| g.id == group)
    }

    /// Names of the groups this contact belongs to, in membership order.
    pub fn group_names(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.name.clone()).collect()
    }
}

/// A contact after sanitization, ready for vCard serialization.
///
/// Invariant: `name` is non-empty and at least one of `email` and `phone`
/// is non-empty. Empty strings stand for "not present".
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct NormalizedContact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
    pub address: String,
    pub comments: String,
    pub groups: Vec<String>,
}

impl NormalizedContact {
    /// Whether the record satisfies the name and contact-method invariant.
    pub fn is_exportable(&self) -> bool {
        !self.name.is_empty() && (!self.email.is_empty() || !self.phone.is_empty())
    }
}
