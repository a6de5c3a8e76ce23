//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// These never abort an export: a rejected field is dropped to an empty
/// string, a rejected record is left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is empty once disallowed characters are stripped.
    MissingName,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// Neither a usable email nor a usable phone number is present.
    NoContactMethod(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "No name provided"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::NoContactMethod(name) => {
                write!(f, "Contact '{}' has no email or phone provided", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
