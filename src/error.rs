//! Error types for the NetBox VCF exporter.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Per-record validation failures live in [`crate::domain::ValidationError`] because they
//! never abort an export run.

use thiserror::Error;

/// Errors that can occur when fetching groups and contacts from NetBox.
#[derive(Error, Debug)]
pub enum NetBoxApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication failed (missing, expired or under-privileged token)
    #[error("Authentication failed")]
    Unauthorized,

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised while turning normalized contacts into vCard text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// A record that should have been rejected by validation reached the serializer
    #[error("Invalid record for contact {id}: {reason}")]
    InvalidRecord { id: u64, reason: String },
}

/// Errors raised by an export sink while persisting the finished file.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Filesystem write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Filename would escape the export directory
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),
}

/// A stage-level export failure, as seen by the export driver.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Group or contact lookup failed
    #[error("Error gathering contacts: {0}")]
    DataFetch(#[from] NetBoxApiError),

    /// vCard generation failed
    #[error("Error generating VCF content: {0}")]
    Serialization(#[from] SerializationError),

    /// Writing the output file failed
    #[error("Error saving VCF file: {0}")]
    Sink(#[from] SinkError),
}

/// Convenience type alias for Results with NetBoxApiError
pub type NetBoxResult<T> = Result<T, NetBoxApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SinkError
pub type SinkResult<T> = Result<T, SinkError>;
