//! The VCF export pipeline.
//!
//! Stages run in a fixed order, each in its own module:
//! [`collector`] → [`validator`] → [`vcard`] → [`filename`] → [`sink`],
//! orchestrated by [`driver::ExportDriver`].

pub mod collector;
pub mod driver;
pub mod filename;
pub mod observer;
pub mod sink;
pub mod validator;
pub mod vcard;

pub use collector::GroupCollector;
pub use driver::{ExportDriver, ExportRequest, ExportStatus};
pub use filename::{generate_filename, slugify};
pub use observer::{ExportObserver, LogLevel, MemoryObserver, TracingObserver};
pub use sink::{ExportLocation, ExportSink, FileSink};
pub use validator::{normalize_contact, ContactValidator, RejectedContact, ValidationReport};
pub use vcard::{serialize, serialize_at, VcfVersion};
