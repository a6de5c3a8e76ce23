//! Data models for NetBox tenancy entities.
//!
//! This module contains the contact and contact-group records read from
//! NetBox, plus the normalized contact the export pipeline produces.

pub mod contact;
pub mod group;

pub use contact::{Contact, NormalizedContact};
pub use group::{ContactGroup, GroupSelector, NestedGroup};
