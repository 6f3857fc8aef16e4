//! Infrastructure adapters for ProjectMaker.
//!
//! This crate implements the ports defined in
//! `projectmaker-core::application::ports`. It contains all I/O: the local
//! and in-memory filesystems, and the TOML template-manifest loader.

pub mod builtin_templates;
pub mod filesystem;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use builtin_templates::{BUILTIN_MANIFEST, CatalogSource, load_catalog};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_loader::{ManifestError, ManifestLoader};
pub use template_store::InMemoryStore;
