//! Template Registry - project type to blueprint resolution.
//!
//! Pairs a [`TemplateStore`] (which folders and files a type has) with a
//! [`GeneratedContent`] table (what goes inside the special files). It does
//! no I/O of its own.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{
        ContentContext, DomainValidator as validator, GeneratedContent, ProjectName,
        ProjectStructure, ProjectType, TemplateDefinition,
    },
    error::MakerResult,
};

/// Resolves template definitions and produces file content.
pub struct TemplateRegistry {
    store: Box<dyn TemplateStore>,
    content: GeneratedContent,
}

impl TemplateRegistry {
    /// Create a registry backed by `store` with the built-in content rules.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self::with_content(store, GeneratedContent::builtin())
    }

    /// Create a registry with a custom content table.
    pub fn with_content(store: Box<dyn TemplateStore>, content: GeneratedContent) -> Self {
        Self { store, content }
    }

    /// Look up the definition for `project_type`.
    ///
    /// Fails with `UnknownProjectType` when the configuration has no entry.
    #[instrument(skip(self))]
    pub fn resolve(&self, project_type: ProjectType) -> MakerResult<TemplateDefinition> {
        let definition = self
            .store
            .get(project_type)?
            .ok_or(ApplicationError::UnknownProjectType { project_type })?;

        debug!(
            folders = definition.folder_count(),
            files = definition.file_count(),
            "Template resolved"
        );
        Ok(definition)
    }

    /// All configured definitions.
    pub fn list(&self) -> MakerResult<Vec<TemplateDefinition>> {
        self.store.list()
    }

    /// Content for one listed file.
    ///
    /// Only the final path component is matched, so `docs/README.md` gets
    /// the same content as `README.md`. Unrecognised names yield `""`.
    pub fn generate_content(
        &self,
        file_path: impl AsRef<Path>,
        project_name: &str,
        project_type: ProjectType,
    ) -> String {
        let file_name = file_path
            .as_ref()
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        self.content
            .generate(file_name, &ContentContext::new(project_name, project_type))
    }

    /// Turn a definition into a write plan rooted at `output_root/project_name`.
    ///
    /// Directories come first in listed order, then files in listed order.
    pub fn render(
        &self,
        definition: &TemplateDefinition,
        project_name: &ProjectName,
        output_root: &Path,
    ) -> MakerResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(output_root.join(project_name.as_str()));

        for folder in &definition.folders {
            structure.add_directory(folder.clone());
        }

        for file in &definition.files {
            let content =
                self.generate_content(file, project_name.as_str(), definition.project_type);
            structure.add_file(file.clone(), content);
        }

        validator::validate_project_structure(&structure)?;
        Ok(structure)
    }

    pub fn content(&self) -> &GeneratedContent {
        &self.content
    }
}
