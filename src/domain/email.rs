//! EmailAddress value object and the email sanitizer.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// A normalized, validated email address.
///
/// Construction trims surrounding whitespace and lowercases the address
/// before checking it against `local-part@domain.tld`.
///
/// # Example
///
/// ```
/// use netbox_vcf_export::domain::EmailAddress;
///
/// let email = EmailAddress::new(" John.Doe@EXAMPLE.com ").unwrap();
/// assert_eq!(email.as_str(), "john.doe@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, normalizing and validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Local part: one or more of `[A-Za-z0-9._%+-]`
    /// - Domain: one or more of `[A-Za-z0-9.-]`
    /// - Top-level label: at least two ASCII letters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = email.as_ref().trim().to_lowercase();

        if !EMAIL_PATTERN.is_match(&normalized) {
            return Err(ValidationError::InvalidEmail(email.as_ref().to_string()));
        }

        Ok(Self(normalized))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("")
    }
}

/// Clean an optional raw email into its normalized form.
///
/// Missing or invalid addresses yield an empty string; this never fails.
pub fn sanitize_email(email: Option<&str>) -> String {
    match email {
        Some(raw) if !raw.is_empty() => EmailAddress::new(raw)
            .map(EmailAddress::into_inner)
            .unwrap_or_default(),
        _ => String::new(),
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
