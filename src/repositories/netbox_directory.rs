use std::sync::Arc;

use crate::client::NetBoxClient;
use crate::domain::GroupId;
use crate::error::NetBoxResult;
use crate::models::{Contact, ContactGroup, GroupSelector};
use crate::repositories::traits::ContactDirectory;

/// Contact directory backed by the NetBox REST API.
///
/// This repository delegates all operations to the NetBoxClient,
/// keeping the export pipeline unaware of HTTP and pagination.
pub struct NetBoxDirectory {
    client: Arc<NetBoxClient>,
}

impl NetBoxDirectory {
    /// Create a new NetBoxDirectory with the given client.
    pub fn new(client: Arc<NetBoxClient>) -> Self {
        Self { client }
    }
}

impl ContactDirectory for NetBoxDirectory {
    fn find_group(&self, selector: &GroupSelector) -> NetBoxResult<ContactGroup> {
        match selector {
            GroupSelector::Id(id) => self.client.get_contact_group(*id),
            GroupSelector::Slug(slug) => self.client.find_contact_group_by_slug(slug),
        }
    }

    fn list_groups(&self) -> NetBoxResult<Vec<ContactGroup>> {
        self.client.list_contact_groups()
    }

    fn child_groups(&self, parent: GroupId) -> NetBoxResult<Vec<ContactGroup>> {
        self.client.get_child_groups(parent)
    }

    fn contacts_in_group(&self, group: GroupId) -> NetBoxResult<Vec<Contact>> {
        self.client.get_contacts_in_group(group)
    }
}
