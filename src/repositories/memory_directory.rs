use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::domain::GroupId;
use crate::error::{NetBoxApiError, NetBoxResult};
use crate::models::{Contact, ContactGroup, GroupSelector};
use crate::repositories::traits::ContactDirectory;

/// A point-in-time copy of NetBox's contact groups and contacts.
///
/// The field layout matches the `results` arrays of the NetBox list
/// endpoints, so a snapshot can be assembled from saved API responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorySnapshot {
    pub groups: Vec<ContactGroup>,
    pub contacts: Vec<Contact>,
}

/// Contact directory held entirely in memory.
///
/// Lookups preserve insertion order, which makes export output
/// deterministic for a given snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    groups: Vec<ContactGroup>,
    contacts: Vec<Contact>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: DirectorySnapshot) -> Self {
        Self {
            groups: snapshot.groups,
            contacts: snapshot.contacts,
        }
    }

    /// Load a snapshot serialized as JSON.
    pub fn from_json_reader<R: Read>(reader: R) -> NetBoxResult<Self> {
        let snapshot: DirectorySnapshot = serde_json::from_reader(reader)?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn add_group(&mut self, group: ContactGroup) {
        self.groups.push(group);
    }

    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }
}

impl ContactDirectory for InMemoryDirectory {
    fn find_group(&self, selector: &GroupSelector) -> NetBoxResult<ContactGroup> {
        self.groups
            .iter()
            .find(|g| match selector {
                GroupSelector::Id(id) => g.id == *id,
                GroupSelector::Slug(slug) => g.slug == *slug,
            })
            .cloned()
            .ok_or_else(|| NetBoxApiError::NotFound(format!("contact group {}", selector)))
    }

    fn list_groups(&self) -> NetBoxResult<Vec<ContactGroup>> {
        Ok(self.groups.clone())
    }

    fn child_groups(&self, parent: GroupId) -> NetBoxResult<Vec<ContactGroup>> {
        Ok(self
            .groups
            .iter()
            .filter(|g| g.parent_id() == Some(parent))
            .cloned()
            .collect())
    }

    fn contacts_in_group(&self, group: GroupId) -> NetBoxResult<Vec<Contact>> {
        Ok(self
            .contacts
            .iter()
            .filter(|c| c.is_member_of(group))
            .cloned()
            .collect())
    }
}
