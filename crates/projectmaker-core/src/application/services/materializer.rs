//! Project Materializer - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the project name
//! 2. Render the template definition into a write plan
//! 3. Refuse to touch an existing project root
//! 4. Create directories, then files, in listed order
//!
//! There is no rollback: a failure part-way leaves the partial tree in place
//! and reports the offending path.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::registry::TemplateRegistry,
    },
    domain::{DomainValidator as validator, FsEntry, ProjectStructure, ProjectType, TemplateDefinition},
    error::MakerResult,
};

/// Main scaffolding service.
///
/// Owns the registry it renders with and the filesystem it writes to.
pub struct ProjectMaterializer {
    registry: TemplateRegistry,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectMaterializer {
    /// Create a new materializer with the given registry and filesystem adapter.
    pub fn new(registry: TemplateRegistry, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            registry,
            filesystem,
        }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Resolve `project_type` and materialize it under `root_dir`.
    pub fn scaffold(
        &self,
        project_type: ProjectType,
        project_name: &str,
        root_dir: impl AsRef<Path>,
    ) -> MakerResult<PathBuf> {
        let definition = self.registry.resolve(project_type)?;
        self.materialize(root_dir, project_name, &definition)
    }

    /// Build the write plan without touching the filesystem.
    pub fn plan(
        &self,
        root_dir: impl AsRef<Path>,
        project_name: &str,
        definition: &TemplateDefinition,
    ) -> MakerResult<ProjectStructure> {
        let name = validator::validate_project_name(project_name)?;
        self.registry.render(definition, &name, root_dir.as_ref())
    }

    /// Create `root_dir/project_name` and populate it from `definition`.
    ///
    /// Returns the project root on success.
    #[instrument(
        skip_all,
        fields(
            project = %project_name,
            project_type = %definition.project_type,
            root_dir = %root_dir.as_ref().display()
        )
    )]
    pub fn materialize(
        &self,
        root_dir: impl AsRef<Path>,
        project_name: &str,
        definition: &TemplateDefinition,
    ) -> MakerResult<PathBuf> {
        let structure = self.plan(root_dir, project_name, definition)?;
        self.materialize_structure(&structure)
    }

    /// Write an already-rendered plan.
    pub fn materialize_structure(&self, structure: &ProjectStructure) -> MakerResult<PathBuf> {
        let root = structure.root();

        if self.filesystem.exists(root) {
            return Err(ApplicationError::ProjectAlreadyExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        self.create_root(root)?;
        debug!(path = %root.display(), "Project root created");

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = root.join(dir.path.as_path());
                    self.filesystem
                        .create_dir_all(&path)
                        .map_err(|e| write_failed(dir.path.as_path(), e))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(file.path.as_path());

                    if let Some(parent) = path.parent() {
                        self.filesystem
                            .create_dir_all(parent)
                            .map_err(|e| write_failed(file.path.as_path(), e))?;
                    }

                    self.filesystem
                        .write_file(&path, &file.content)
                        .map_err(|e| write_failed(file.path.as_path(), e))?;
                    debug!(file = %file.path, bytes = file.size(), "File written");
                }
            }
        }

        info!(
            path = %root.display(),
            entries = structure.entry_count(),
            "Project materialized"
        );
        Ok(root.to_path_buf())
    }

    /// Create the project root with an exclusive create.
    ///
    /// An `AlreadyExists` here means the directory appeared after the
    /// existence check, and is reported the same way.
    fn create_root(&self, root: &Path) -> MakerResult<()> {
        if let Some(parent) = root.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem
                .create_dir_all(parent)
                .map_err(|e| write_failed(Path::new("."), e))?;
        }

        match self.filesystem.create_dir(root) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(ApplicationError::ProjectAlreadyExists {
                    path: root.to_path_buf(),
                }
                .into())
            }
            Err(e) => Err(write_failed(Path::new("."), e).into()),
        }
    }
}

fn write_failed(relative: &Path, err: io::Error) -> ApplicationError {
    ApplicationError::WriteFailed {
        path: relative.to_path_buf(),
        reason: err.to_string(),
    }
}
