//! Contact validation: sanitizes raw contacts into exportable records.

use crate::domain::{sanitize_email, sanitize_name, sanitize_phone, ContactId, ValidationError};
use crate::export::observer::ExportObserver;
use crate::models::{Contact, NormalizedContact};

/// A contact left out of the export, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedContact {
    pub id: ContactId,
    pub error: ValidationError,
}

/// Outcome of validating a batch: accepted records plus rejected ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Exportable records, in input order
    pub accepted: Vec<NormalizedContact>,

    /// Records dropped from the export
    pub rejected: Vec<RejectedContact>,
}

/// Map one contact to its normalized form.
///
/// # Errors
///
/// - `ValidationError::MissingName` if the cleaned name is empty
/// - `ValidationError::NoContactMethod` if both cleaned email and phone are empty
pub fn normalize_contact(contact: &Contact) -> Result<NormalizedContact, ValidationError> {
    let name = sanitize_name(contact.name.as_deref());
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    let email = sanitize_email(contact.email.as_deref());
    let phone = sanitize_phone(contact.phone.as_deref());
    if email.is_empty() && phone.is_empty() {
        return Err(ValidationError::NoContactMethod(name));
    }

    Ok(NormalizedContact {
        id: contact.id,
        name,
        email,
        phone,
        title: contact.title.clone().unwrap_or_default(),
        address: contact.address.clone().unwrap_or_default(),
        comments: contact.comments.clone().unwrap_or_default(),
        groups: contact.group_names(),
    })
}

/// Validates contacts one at a time; a bad record never fails the batch.
pub struct ContactValidator<'a> {
    observer: &'a dyn ExportObserver,
}

impl<'a> ContactValidator<'a> {
    pub fn new(observer: &'a dyn ExportObserver) -> Self {
        Self { observer }
    }

    pub fn validate(&self, contacts: &[Contact]) -> ValidationReport {
        let mut report = ValidationReport::default();

        for contact in contacts {
            self.note_discarded_fields(contact);

            match normalize_contact(contact) {
                Ok(record) => report.accepted.push(record),
                Err(error) => {
                    let message = match &error {
                        ValidationError::NoContactMethod(name) => format!(
                            "Skipping contact '{}': No email or phone provided",
                            name
                        ),
                        _ => format!("Skipping contact with ID {}: {}", contact.id, error),
                    };
                    self.observer.warning(&message);
                    report.rejected.push(RejectedContact {
                        id: contact.id,
                        error,
                    });
                }
            }
        }

        report
    }

    /// Invalid emails and phones are dropped silently from the output; leave a debug trace.
    fn note_discarded_fields(&self, contact: &Contact) {
        if let Some(raw) = contact.email.as_deref().filter(|e| !e.trim().is_empty()) {
            if sanitize_email(Some(raw)).is_empty() {
                self.observer.debug(&format!(
                    "Contact {}: discarding invalid email '{}'",
                    contact.id, raw
                ));
            }
        }
        if let Some(raw) = contact.phone.as_deref().filter(|p| !p.trim().is_empty()) {
            if sanitize_phone(Some(raw)).is_empty() {
                self.observer.debug(&format!(
                    "Contact {}: discarding invalid phone '{}'",
                    contact.id, raw
                ));
            }
        }
    }
}
