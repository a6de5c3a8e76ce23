//! Output sinks for finished VCF files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SinkError, SinkResult};

/// Where a written export can be retrieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLocation {
    /// Filesystem path (or sink-specific identifier) of the written file
    pub path: PathBuf,

    /// Public URL of the file, when the sink knows one
    pub url: Option<String>,
}

/// Accepts a finished VCF document and persists it.
pub trait ExportSink: Send + Sync {
    fn write(&self, content: &str, filename: &str) -> SinkResult<ExportLocation>;
}

/// Writes exports into a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    base_url: Option<String>,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            base_url: None,
        }
    }

    /// URL prefix under which the export directory is served.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// A filename must be a single path component naming a file.
    fn check_filename(filename: &str) -> SinkResult<()> {
        let invalid = matches!(filename, "" | "." | "..")
            || filename.contains(['/', '\\'])
            || filename.chars().any(char::is_control);
        if invalid {
            return Err(SinkError::InvalidFilename(filename.to_string()));
        }
        Ok(())
    }
}

impl ExportSink for FileSink {
    fn write(&self, content: &str, filename: &str) -> SinkResult<ExportLocation> {
        Self::check_filename(filename)?;

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, content)?;

        let url = self
            .base_url
            .as_ref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), filename));

        Ok(ExportLocation { path, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = FileSink::new(tmp.path().join("vcf_exports"));

        let location = sink.write("BEGIN:VCARD\r\n", "a.vcf").unwrap();
        assert_eq!(location.path, tmp.path().join("vcf_exports").join("a.vcf"));
        assert_eq!(location.url, None);
        assert_eq!(
            fs::read_to_string(&location.path).unwrap(),
            "BEGIN:VCARD\r\n"
        );
    }

    #[test]
    fn test_file_sink_reports_url() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = FileSink::new(tmp.path()).with_base_url("/media/vcf_exports/");

        let location = sink.write("x", "team.vcf").unwrap();
        assert_eq!(location.url.as_deref(), Some("/media/vcf_exports/team.vcf"));
    }

    #[test]
    fn test_file_sink_rejects_path_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = FileSink::new(tmp.path());

        for name in [
            "../evil.vcf",
            "..\\evil.vcf",
            "sub/dir.vcf",
            "win\\dir.vcf",
            "",
            ".",
            "..",
            "bad\nname.vcf",
        ] {
            assert!(
                matches!(sink.write("x", name), Err(SinkError::InvalidFilename(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_file_sink_accepts_dots_inside_name() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = FileSink::new(tmp.path());

        let location = sink
            .write("x", "v1..2_sales_20250131_090507.vcf")
            .unwrap();
        assert_eq!(
            location.path,
            tmp.path().join("v1..2_sales_20250131_090507.vcf")
        );
        assert!(location.path.exists());
    }

    #[test]
    fn test_file_sink_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not_a_dir");
        fs::write(&blocker, "file").unwrap();

        let sink = FileSink::new(&blocker);
        assert!(matches!(sink.write("x", "a.vcf"), Err(SinkError::Io(_))));
    }
}
