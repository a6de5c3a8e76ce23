//! PersonName value object and the name sanitizer.

use super::errors::ValidationError;
use std::fmt;

/// Maximum length of a cleaned name, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// A display name safe to embed in a vCard property.
///
/// Only letters, digits, whitespace, hyphens and periods survive cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Clean a raw name.
    ///
    /// Surrounding whitespace is trimmed before disallowed characters are
    /// stripped, and the result is cut to [`MAX_NAME_CHARS`] characters.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingName` if nothing is left.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let cleaned: String = name
            .as_ref()
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '.')
            .take(MAX_NAME_CHARS)
            .collect();

        if cleaned.is_empty() {
            return Err(ValidationError::MissingName);
        }

        Ok(Self(cleaned))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Clean an optional raw name; missing or fully stripped names yield "".
pub fn sanitize_name(name: Option<&str>) -> String {
    name.and_then(|raw| PersonName::new(raw).ok())
        .map(PersonName::into_inner)
        .unwrap_or_default()
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
