//! NetBox VCF Export - export NetBox contact groups to vCard files.
//!
//! This library collects the contacts of a NetBox contact group (and,
//! optionally, all of its subgroups), sanitizes them and writes them as a
//! single vCard 3.0 or 4.0 file.
//!
//! # Architecture
//!
//! - **domain**: Value objects and field sanitizers (name, email, phone)
//! - **models**: Contacts, contact groups and normalized contacts
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: Blocking HTTP client for the NetBox REST API
//! - **repositories**: Read-only contact directory abstraction (NetBox, in-memory)
//! - **export**: The pipeline - collector, validator, vCard serializer, sink, driver
//! - **metrics**: Request counters for the NetBox client

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod metrics;
pub mod models;
pub mod repositories;

pub use client::NetBoxClient;
pub use config::Config;
pub use error::{ConfigError, ExportError, NetBoxApiError, SerializationError, SinkError};
pub use export::{ExportDriver, ExportRequest, ExportStatus, VcfVersion};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{Contact, ContactGroup, GroupSelector, NormalizedContact};
