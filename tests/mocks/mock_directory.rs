use netbox_vcf_export::domain::GroupId;
use netbox_vcf_export::error::{NetBoxApiError, NetBoxResult};
use netbox_vcf_export::models::{Contact, ContactGroup, GroupSelector};
use netbox_vcf_export::repositories::{ContactDirectory, InMemoryDirectory};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Mock contact directory for testing.
///
/// Serves data from an in-memory directory, tracks method calls for
/// verification and can be told to fail contact lookups for chosen groups.
#[allow(dead_code)]
pub struct MockDirectory {
    inner: Mutex<InMemoryDirectory>,
    failing_groups: Mutex<HashSet<GroupId>>,
    call_counts: Mutex<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockDirectory {
    /// Create a new empty MockDirectory.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(InMemoryDirectory::new()),
            failing_groups: Mutex::new(HashSet::new()),
            call_counts: Mutex::new(HashMap::new()),
        }
    }

    pub fn add_group(&self, group: ContactGroup) {
        self.inner.lock().unwrap().add_group(group);
    }

    pub fn add_contact(&self, contact: Contact) {
        self.inner.lock().unwrap().add_contact(contact);
    }

    /// Make `contacts_in_group` fail with a server error for `group`.
    pub fn fail_contacts_for(&self, group: GroupId) {
        self.failing_groups.lock().unwrap().insert(group);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactDirectory for MockDirectory {
    fn find_group(&self, selector: &GroupSelector) -> NetBoxResult<ContactGroup> {
        self.track_call("find_group");
        self.inner.lock().unwrap().find_group(selector)
    }

    fn list_groups(&self) -> NetBoxResult<Vec<ContactGroup>> {
        self.track_call("list_groups");
        self.inner.lock().unwrap().list_groups()
    }

    fn child_groups(&self, parent: GroupId) -> NetBoxResult<Vec<ContactGroup>> {
        self.track_call("child_groups");
        self.inner.lock().unwrap().child_groups(parent)
    }

    fn contacts_in_group(&self, group: GroupId) -> NetBoxResult<Vec<Contact>> {
        self.track_call("contacts_in_group");
        if self.failing_groups.lock().unwrap().contains(&group) {
            return Err(NetBoxApiError::ApiError {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        self.inner.lock().unwrap().contacts_in_group(group)
    }
}
