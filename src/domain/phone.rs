//! PhoneNumber value object and the phone sanitizer.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of digits for a phone number to be kept.
pub const MIN_PHONE_DIGITS: usize = 7;

/// A cleaned phone number made of ASCII digits and `+` only.
///
/// Separators such as spaces, hyphens, parentheses and periods are removed
/// at construction time.
///
/// # Example
///
/// ```
/// use netbox_vcf_export::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "+15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, stripping separators and checking the digit count.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if fewer than seven digits remain.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();

        let digits = cleaned.chars().filter(char::is_ascii_digit).count();
        if digits < MIN_PHONE_DIGITS {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(Self(cleaned))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no `+`).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

/// Clean an optional raw phone number.
///
/// Missing numbers and numbers with fewer than seven digits yield an empty
/// string; this never fails.
pub fn sanitize_phone(phone: Option<&str>) -> String {
    match phone {
        Some(raw) if !raw.is_empty() => PhoneNumber::new(raw)
            .map(PhoneNumber::into_inner)
            .unwrap_or_default(),
        _ => String::new(),
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
