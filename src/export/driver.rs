//! The export pipeline: collect, validate, serialize, name and write.

use std::fmt;
use std::sync::Arc;

use chrono::Local;

use crate::error::ExportError;
use crate::export::collector::GroupCollector;
use crate::export::filename::{generate_filename, DEFAULT_PREFIX};
use crate::export::observer::ExportObserver;
use crate::export::sink::{ExportLocation, ExportSink};
use crate::export::validator::ContactValidator;
use crate::export::vcard::{self, VcfVersion};
use crate::models::GroupSelector;
use crate::repositories::ContactDirectory;

/// Parameters of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Group to export (required)
    pub group: GroupSelector,

    /// Also export contacts of all descendant groups (default: true)
    pub include_subgroups: bool,

    /// vCard version to write (default: 3.0)
    pub vcf_version: VcfVersion,

    /// Filename prefix (default: `netbox_contacts`)
    pub filename_prefix: String,
}

impl ExportRequest {
    pub fn new(group: GroupSelector) -> Self {
        Self {
            group,
            include_subgroups: true,
            vcf_version: VcfVersion::default(),
            filename_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Final result of an export run.
///
/// `Display` renders the human-readable status line reported to the operator.
#[derive(Debug)]
pub enum ExportStatus {
    /// File written
    Exported {
        count: usize,
        skipped: usize,
        filename: String,
        location: ExportLocation,
    },

    /// Nothing to export; no file was written
    NoContacts { skipped: usize },

    /// A stage failed; no later stage ran
    Failed(ExportError),
}

impl ExportStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for ExportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exported {
                count, filename, ..
            } => write!(f, "Successfully exported {} contacts to {}", count, filename),
            Self::NoContacts { skipped: 0 } => write!(f, "No contacts found to export"),
            Self::NoContacts { skipped } => write!(
                f,
                "No contacts found to export ({} skipped during validation)",
                skipped
            ),
            Self::Failed(err) => write!(f, "{}", err),
        }
    }
}

/// Runs the export pipeline against a directory and a sink.
pub struct ExportDriver {
    directory: Arc<dyn ContactDirectory>,
    sink: Arc<dyn ExportSink>,
    observer: Arc<dyn ExportObserver>,
}

impl ExportDriver {
    pub fn new(
        directory: Arc<dyn ContactDirectory>,
        sink: Arc<dyn ExportSink>,
        observer: Arc<dyn ExportObserver>,
    ) -> Self {
        Self {
            directory,
            sink,
            observer,
        }
    }

    /// Run one export. Never fails: stage errors become `ExportStatus::Failed`.
    pub fn run(&self, request: &ExportRequest) -> ExportStatus {
        match self.try_run(request) {
            Ok(status) => status,
            Err(err) => {
                self.observer.failure(&err.to_string());
                ExportStatus::Failed(err)
            }
        }
    }

    fn try_run(&self, request: &ExportRequest) -> Result<ExportStatus, ExportError> {
        let observer = self.observer.as_ref();

        let group = self.directory.find_group(&request.group)?;
        observer.info(&format!("Starting VCF export for group: {}", group.name));
        observer.info(&format!("Include subgroups: {}", request.include_subgroups));
        observer.info(&format!("VCF Version: {}", request.vcf_version));

        let contacts = GroupCollector::new(self.directory.as_ref(), observer)
            .collect(&group, request.include_subgroups)?;
        observer.info(&format!("Found {} contacts to export", contacts.len()));

        if contacts.is_empty() {
            observer.warning("No contacts found in the selected group");
            return Ok(ExportStatus::NoContacts { skipped: 0 });
        }

        let report = ContactValidator::new(observer).validate(&contacts);
        observer.info(&format!("Validated {} contacts", report.accepted.len()));
        let skipped = report.rejected.len();

        if report.accepted.is_empty() {
            observer.warning("No contacts passed validation");
            return Ok(ExportStatus::NoContacts { skipped });
        }

        let content = vcard::serialize(&report.accepted, request.vcf_version)?;
        observer.success("VCF content generated successfully");

        let filename = generate_filename(
            &request.filename_prefix,
            &group.name,
            Local::now().naive_local(),
        );
        let location = self.sink.write(&content, &filename)?;

        observer.info(&format!("VCF file saved to: {}", location.path.display()));
        if let Some(url) = &location.url {
            observer.info(&format!("File accessible at: {}", url));
        }
        observer.success(&format!("VCF file '{}' created successfully", filename));

        Ok(ExportStatus::Exported {
            count: report.accepted.len(),
            skipped,
            filename,
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactId, GroupId};
    use crate::error::{SinkError, SinkResult};
    use crate::export::observer::{LogLevel, MemoryObserver};
    use crate::models::{Contact, ContactGroup};
    use crate::repositories::InMemoryDirectory;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CapturingSink {
        writes: Mutex<Vec<(String, String)>>,
    }

    impl ExportSink for CapturingSink {
        fn write(&self, content: &str, filename: &str) -> SinkResult<ExportLocation> {
            self.writes
                .lock()
                .unwrap()
                .push((content.to_string(), filename.to_string()));
            Ok(ExportLocation {
                path: PathBuf::from(filename),
                url: None,
            })
        }
    }

    struct FailingSink;

    impl ExportSink for FailingSink {
        fn write(&self, _content: &str, _filename: &str) -> SinkResult<ExportLocation> {
            Err(SinkError::InvalidFilename("nope".to_string()))
        }
    }

    fn directory(contacts: Vec<Contact>) -> Arc<InMemoryDirectory> {
        let mut dir = InMemoryDirectory::new();
        dir.add_group(ContactGroup::new(GroupId::new(1), "Sales & Ops"));
        for contact in contacts {
            dir.add_contact(contact);
        }
        Arc::new(dir)
    }

    fn member(id: u64, name: &str, email: &str) -> Contact {
        let mut contact = Contact::new(ContactId::new(id), name);
        contact.email = Some(email.to_string());
        contact.groups = vec![ContactGroup::new(GroupId::new(1), "Sales & Ops").as_nested()];
        contact
    }

    fn request() -> ExportRequest {
        let mut request = ExportRequest::new(GroupSelector::Id(GroupId::new(1)));
        request.filename_prefix = "contacts".to_string();
        request
    }

    #[test]
    fn test_request_defaults() {
        let request = ExportRequest::new(GroupSelector::Slug("ops".to_string()));
        assert!(request.include_subgroups);
        assert_eq!(request.vcf_version, VcfVersion::V3);
        assert_eq!(request.filename_prefix, "netbox_contacts");
    }

    #[test]
    fn test_run_exports() {
        let sink = Arc::new(CapturingSink::default());
        let observer = Arc::new(MemoryObserver::new());
        let driver = ExportDriver::new(
            directory(vec![
                member(1, "Jane Doe", "jane@x.com"),
                member(2, "", "ghost@x.com"),
            ]),
            sink.clone(),
            observer.clone(),
        );

        let status = driver.run(&request());
        match &status {
            ExportStatus::Exported {
                count,
                skipped,
                filename,
                ..
            } => {
                assert_eq!(*count, 1);
                assert_eq!(*skipped, 1);
                assert!(filename.starts_with("contacts_sales-ops_"));
                assert!(filename.ends_with(".vcf"));
            }
            other => panic!("Expected Exported, got: {:?}", other),
        }
        assert!(status
            .to_string()
            .starts_with("Successfully exported 1 contacts to contacts_sales-ops_"));

        let writes = sink.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert!(writes[0].0.contains("FN:Jane Doe\r\n"));
        assert!(!observer.messages(LogLevel::Success).is_empty());
    }

    #[test]
    fn test_run_no_valid_contacts_skips_sink() {
        let sink = Arc::new(CapturingSink::default());
        let driver = ExportDriver::new(
            directory(vec![member(1, "Jane Q. Public", "")]),
            sink.clone(),
            Arc::new(MemoryObserver::new()),
        );

        let status = driver.run(&request());
        assert!(matches!(status, ExportStatus::NoContacts { skipped: 1 }));
        assert!(status.to_string().starts_with("No contacts found to export"));
        assert!(sink.writes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_run_empty_group() {
        let sink = Arc::new(CapturingSink::default());
        let driver = ExportDriver::new(
            directory(vec![]),
            sink.clone(),
            Arc::new(MemoryObserver::new()),
        );

        let status = driver.run(&request());
        assert_eq!(status.to_string(), "No contacts found to export");
        assert!(!status.is_failure());
        assert!(sink.writes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_run_unknown_group_fails() {
        let sink = Arc::new(CapturingSink::default());
        let observer = Arc::new(MemoryObserver::new());
        let driver = ExportDriver::new(directory(vec![]), sink.clone(), observer.clone());

        let status = driver.run(&ExportRequest::new(GroupSelector::Id(GroupId::new(42))));
        assert!(status.is_failure());
        assert_eq!(
            status.to_string(),
            "Error gathering contacts: Resource not found: contact group #42"
        );
        assert_eq!(observer.messages(LogLevel::Failure).len(), 1);
        assert!(sink.writes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_run_sink_failure_reported() {
        let driver = ExportDriver::new(
            directory(vec![member(1, "Jane Doe", "jane@x.com")]),
            Arc::new(FailingSink),
            Arc::new(MemoryObserver::new()),
        );

        let status = driver.run(&request());
        assert_eq!(
            status.to_string(),
            "Error saving VCF file: Invalid filename: nope"
        );
    }
}
