//! Domain value objects and field sanitizers.
//!
//! The value objects validate at construction time; the `sanitize_*`
//! functions wrap them for the export pipeline, where an unusable field is
//! silently reduced to an empty string instead of failing the record.

pub mod email;
pub mod errors;
pub mod ids;
pub mod name;
pub mod phone;

pub use email::{sanitize_email, EmailAddress};
pub use errors::ValidationError;
pub use ids::{ContactId, GroupId};
pub use name::{sanitize_name, PersonName};
pub use phone::{sanitize_phone, PhoneNumber};
