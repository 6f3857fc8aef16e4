//! Core domain layer for ProjectMaker.
//!
//! This module contains pure data and rules with no I/O. Reading manifests
//! and writing project trees are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No I/O**: no filesystem, network, or process calls
//! - **Immutable entities**: definitions are read-only once loaded
//! - **Validated at construction**: paths and names cannot be built invalid

// Public API
pub mod content;
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use content::{CONTENT_REGISTRY, ContentContext, ContentRule, GeneratedContent, Generator};
pub use entities::{
    common::RelativePath,
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    template::{TemplateCatalog, TemplateDefinition},
};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::{ProjectName, ProjectType};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_rejects_duplicate_files() {
        let readme = RelativePath::try_new("README.md").unwrap();
        let structure = ProjectStructure::new("out/demo")
            .with_file(readme.clone(), "a")
            .with_file(readme, "b");

        assert!(matches!(
            DomainValidator::validate_project_structure(&structure),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn structure_counts_entries_by_kind() {
        let structure = ProjectStructure::new("out/demo")
            .with_directory(RelativePath::try_new("src").unwrap())
            .with_file(RelativePath::try_new("src/index.js").unwrap(), "");

        assert_eq!(structure.directories().count(), 1);
        assert_eq!(structure.files().count(), 1);
        assert_eq!(structure.entry_count(), 2);
        assert!(structure.files().all(FileToWrite::is_empty));
    }

    #[test]
    fn catalog_validation_checks_every_definition() {
        let bad = TemplateDefinition::new(ProjectType::Web)
            .with_file(RelativePath::try_new("a").unwrap())
            .with_file(RelativePath::try_new("a").unwrap());
        let catalog = TemplateCatalog::new().with_definition(bad);

        assert!(DomainValidator::validate_catalog(&catalog).is_err());
    }

    #[test]
    fn builtin_content_covers_every_special_file() {
        let content = GeneratedContent::builtin();
        assert_eq!(content.len(), CONTENT_REGISTRY.len());
        assert!(content.is_special("README.md", ProjectType::Unity));
        assert!(!content.is_special("style.css", ProjectType::Web));
    }
}
