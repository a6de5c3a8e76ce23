use netbox_vcf_export::error::SinkResult;
use netbox_vcf_export::export::{ExportLocation, ExportSink};
use std::path::PathBuf;
use std::sync::Mutex;

/// A file handed to the sink.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedWrite {
    pub filename: String,
    pub content: String,
}

/// Sink that keeps every write in memory.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingSink {
    writes: Mutex<Vec<RecordedWrite>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.lock().unwrap().clone()
    }
}

impl ExportSink for RecordingSink {
    fn write(&self, content: &str, filename: &str) -> SinkResult<ExportLocation> {
        self.writes.lock().unwrap().push(RecordedWrite {
            filename: filename.to_string(),
            content: content.to_string(),
        });
        Ok(ExportLocation {
            path: PathBuf::from("memory").join(filename),
            url: None,
        })
    }
}
