//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `projectmaker-adapters` crate provides implementations.

use std::io;
use std::path::Path;

use crate::domain::{ProjectType, TemplateDefinition};
use crate::error::MakerResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `projectmaker_adapters::filesystem::LocalFilesystem` (production)
/// - `projectmaker_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Methods return raw `io::Result`s; the materializer attaches the
/// project-relative path when it turns a failure into `WriteFailed`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a single directory. Fails with `AlreadyExists` if it is present.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Create a directory and all missing parents. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate a file and write `content` to it.
    ///
    /// The file handle must be released before this returns, on success
    /// and on failure.
    fn write_file(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template definition lookup.
///
/// Implemented by:
/// - `projectmaker_adapters::template_store::InMemoryStore` (catalog loaded at startup)
pub trait TemplateStore: Send + Sync {
    /// Get the definition for a project type, if configured.
    fn get(&self, project_type: ProjectType) -> MakerResult<Option<TemplateDefinition>>;

    /// List all configured definitions in `ProjectType` order.
    fn list(&self) -> MakerResult<Vec<TemplateDefinition>>;
}
