mod memory_directory;
mod netbox_directory;
mod traits;

pub use memory_directory::{DirectorySnapshot, InMemoryDirectory};
pub use netbox_directory::NetBoxDirectory;
pub use traits::ContactDirectory;
