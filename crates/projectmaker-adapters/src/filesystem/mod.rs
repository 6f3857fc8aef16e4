//! Filesystem adapters.
//!
//! [`LocalFilesystem`] writes to disk; [`MemoryFilesystem`] keeps the tree
//! in memory for tests and failure injection.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
