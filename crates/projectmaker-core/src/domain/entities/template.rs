//! Template definitions: the ordered folder/file blueprint per project type.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TemplateCatalog                                            │
//! │  └── ProjectType -> TemplateDefinition                      │
//! │        ├── folders: [RelativePath]   (created first)        │
//! │        └── files:   [RelativePath]   (created in order)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Definitions carry no content. Content for special files is produced by
//! [`GeneratedContent`](crate::domain::GeneratedContent) at render time, so a
//! manifest only ever lists paths.

use std::collections::{BTreeMap, HashSet};

use crate::domain::{entities::common::RelativePath, error::DomainError, value_objects::ProjectType};

/// Blueprint for one project type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDefinition {
    pub project_type: ProjectType,
    pub folders: Vec<RelativePath>,
    pub files: Vec<RelativePath>,
}

impl TemplateDefinition {
    pub fn new(project_type: ProjectType) -> Self {
        Self {
            project_type,
            folders: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Build a definition from raw path strings, validating every entry.
    pub fn from_paths<F, P>(
        project_type: ProjectType,
        folders: F,
        files: P,
    ) -> Result<Self, DomainError>
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let folders = folders
            .into_iter()
            .map(|f| RelativePath::try_new(f.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let files = files
            .into_iter()
            .map(|f| RelativePath::try_new(f.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let definition = Self {
            project_type,
            folders,
            files,
        };
        definition.validate()?;
        Ok(definition)
    }

    pub fn with_folder(mut self, path: RelativePath) -> Self {
        self.folders.push(path);
        self
    }

    pub fn with_file(mut self, path: RelativePath) -> Self {
        self.files.push(path);
        self
    }

    /// Files must be unique; folders may overlap (creation is idempotent).
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(file.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: file.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Every configured definition, keyed by type.
///
/// Built once from configuration and handed to a template store by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCatalog {
    definitions: BTreeMap<ProjectType, TemplateDefinition>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition, replacing any previous one for the same type.
    pub fn insert(&mut self, definition: TemplateDefinition) -> Option<TemplateDefinition> {
        self.definitions.insert(definition.project_type, definition)
    }

    pub fn with_definition(mut self, definition: TemplateDefinition) -> Self {
        self.insert(definition);
        self
    }

    pub fn get(&self, project_type: ProjectType) -> Option<&TemplateDefinition> {
        self.definitions.get(&project_type)
    }

    /// Definitions in `ProjectType` declaration order.
    pub fn definitions(&self) -> impl Iterator<Item = &TemplateDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.definitions.values().try_for_each(TemplateDefinition::validate)
    }
}

impl IntoIterator for TemplateCatalog {
    type Item = TemplateDefinition;
    type IntoIter = std::collections::btree_map::IntoValues<ProjectType, TemplateDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.into_values()
    }
}
