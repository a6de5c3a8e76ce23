//! Group traversal: gathers the unique contacts reachable from a root group.

use std::collections::{HashSet, VecDeque};

use crate::domain::{ContactId, GroupId};
use crate::error::NetBoxResult;
use crate::export::observer::ExportObserver;
use crate::models::{Contact, ContactGroup};
use crate::repositories::ContactDirectory;

/// Walks a contact group hierarchy with an explicit work-list.
///
/// Every group is visited at most once, so a malformed hierarchy containing a
/// parent cycle still terminates. Contacts are deduplicated by id and
/// returned in first-discovery order: the root's direct members, then
/// subgroups breadth-first.
pub struct GroupCollector<'a> {
    directory: &'a dyn ContactDirectory,
    observer: &'a dyn ExportObserver,
}

impl<'a> GroupCollector<'a> {
    pub fn new(directory: &'a dyn ContactDirectory, observer: &'a dyn ExportObserver) -> Self {
        Self {
            directory,
            observer,
        }
    }

    /// Collect the contacts of `root`, and of its descendants if `include_subgroups`.
    pub fn collect(&self, root: &ContactGroup, include_subgroups: bool) -> NetBoxResult<Vec<Contact>> {
        let mut queue: VecDeque<(GroupId, String)> = VecDeque::new();
        let mut visited: HashSet<GroupId> = HashSet::new();
        let mut seen: HashSet<ContactId> = HashSet::new();
        let mut contacts = Vec::new();
        let mut reached = 0usize;

        queue.push_back((root.id, root.name.clone()));
        visited.insert(root.id);

        while let Some((group_id, group_name)) = queue.pop_front() {
            if group_id != root.id {
                self.observer
                    .info(&format!("Processing subgroup: {}", group_name));
            }

            let members = self.directory.contacts_in_group(group_id)?;
            self.observer.info(&format!(
                "Found {} direct contacts in '{}'",
                members.len(),
                group_name
            ));

            for contact in members {
                reached += 1;
                if seen.insert(contact.id) {
                    contacts.push(contact);
                }
            }

            if !include_subgroups {
                continue;
            }

            for child in self.directory.child_groups(group_id)? {
                if visited.insert(child.id) {
                    queue.push_back((child.id, child.name));
                } else {
                    self.observer.warning(&format!(
                        "Group '{}' ({}) was already visited; skipping to avoid a cycle",
                        child.name, child.id
                    ));
                }
            }
        }

        let duplicates = reached - contacts.len();
        if duplicates > 0 {
            self.observer
                .info(&format!("Removed {} duplicate contacts", duplicates));
        }

        Ok(contacts)
    }
}
