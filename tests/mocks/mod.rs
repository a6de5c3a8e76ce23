//! Test doubles shared by the integration tests.

mod mock_directory;
mod recording_sink;

#[allow(unused_imports)]
pub use mock_directory::MockDirectory;
#[allow(unused_imports)]
pub use recording_sink::{RecordedWrite, RecordingSink};
