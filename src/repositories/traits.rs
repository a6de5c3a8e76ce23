use crate::domain::GroupId;
use crate::error::NetBoxResult;
use crate::models::{Contact, ContactGroup, GroupSelector};

/// Read-only view of the contact data store.
///
/// Provides abstraction over where groups and contacts come from,
/// enabling different implementations (NetBox API client, in-memory fixtures).
pub trait ContactDirectory: Send + Sync {
    /// Resolve the group an operator asked for.
    fn find_group(&self, selector: &GroupSelector) -> NetBoxResult<ContactGroup>;

    /// List every contact group.
    fn list_groups(&self) -> NetBoxResult<Vec<ContactGroup>>;

    /// Groups whose parent is `parent`.
    fn child_groups(&self, parent: GroupId) -> NetBoxResult<Vec<ContactGroup>>;

    /// Contacts that are direct members of `group` (many-to-many lookup).
    fn contacts_in_group(&self, group: GroupId) -> NetBoxResult<Vec<Contact>>;
}
