//! Contact group models.

use crate::domain::GroupId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Brief group representation NetBox nests inside other objects
/// (a contact's `groups`, a group's `parent`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NestedGroup {
    pub id: GroupId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,
}

impl NestedGroup {
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: String::new(),
        }
    }
}

/// A contact group as returned by `/api/tenancy/contact-groups/`.
///
/// Groups form a tree through `parent`; contacts reference groups
/// many-to-many through their own `groups` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactGroup {
    pub id: GroupId,
    pub name: String,
    pub slug: String,

    /// Parent group, `None` for a root group
    pub parent: Option<NestedGroup>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl ContactGroup {
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper setting the parent group.
    pub fn with_parent(mut self, parent: &ContactGroup) -> Self {
        self.parent = Some(NestedGroup {
            id: parent.id,
            name: parent.name.clone(),
            slug: parent.slug.clone(),
        });
        self
    }

    pub fn parent_id(&self) -> Option<GroupId> {
        self.parent.as_ref().map(|p| p.id)
    }

    /// Nested form of this group, as it would appear in a contact's `groups`.
    pub fn as_nested(&self) -> NestedGroup {
        NestedGroup {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// How the operator names the group to export.
///
/// Purely numeric input is taken as a primary key, anything else as a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSelector {
    Id(GroupId),
    Slug(String),
}

impl FromStr for GroupSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("group cannot be empty".to_string());
        }
        match s.parse::<u64>() {
            Ok(id) => Ok(Self::Id(GroupId::new(id))),
            Err(_) => Ok(Self::Slug(s.to_string())),
        }
    }
}

impl fmt::Display for GroupSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{}", id),
            Self::Slug(slug) => write!(f, "'{}'", slug),
        }
    }
}
