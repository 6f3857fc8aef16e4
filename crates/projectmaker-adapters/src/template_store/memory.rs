//! In-memory template store backed by a loaded catalog.

use std::sync::{Arc, RwLock};

use projectmaker_core::{
    application::ports::TemplateStore,
    domain::{DomainValidator as validator, ProjectType, TemplateCatalog, TemplateDefinition},
    error::{MakerError, MakerResult},
};

use crate::builtin_templates;

/// Thread-safe in-memory template store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<TemplateCatalog>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-loaded catalog.
    pub fn from_catalog(catalog: TemplateCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Create a store with the built-in templates loaded.
    pub fn with_builtin() -> MakerResult<Self> {
        Ok(Self::from_catalog(builtin_templates::builtin_catalog()?))
    }

    /// Add or replace the definition for its project type.
    pub fn insert(&self, definition: TemplateDefinition) -> MakerResult<()> {
        validator::validate_definition(&definition)?;

        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;
        inner.insert(definition);
        Ok(())
    }

    /// Get the number of configured types.
    pub fn len(&self) -> usize {
        self.inner.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, project_type: ProjectType) -> MakerResult<Option<TemplateDefinition>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned())?;
        Ok(inner.get(project_type).cloned())
    }

    fn list(&self) -> MakerResult<Vec<TemplateDefinition>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned())?;
        Ok(inner.definitions().cloned().collect())
    }
}

fn lock_poisoned() -> MakerError {
    MakerError::config_load("template store lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_type_is_none_not_error() {
        let store = InMemoryStore::new();
        assert!(store.get(ProjectType::Web).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn insert_replaces_existing_definition() {
        let store = InMemoryStore::with_builtin().unwrap();
        let before = store.len();

        let replacement =
            TemplateDefinition::from_paths(ProjectType::Web, ["public"], ["index.html"]).unwrap();
        store.insert(replacement.clone()).unwrap();

        assert_eq!(store.len(), before);
        assert_eq!(store.get(ProjectType::Web).unwrap(), Some(replacement));
    }

    #[test]
    fn list_is_in_project_type_order() {
        let store = InMemoryStore::with_builtin().unwrap();
        let types: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|d| d.project_type)
            .collect();
        assert_eq!(types, ProjectType::ALL);
    }

    #[test]
    fn clones_share_the_catalog() {
        let store = InMemoryStore::new();
        let other = store.clone();
        other
            .insert(TemplateDefinition::new(ProjectType::Unity))
            .unwrap();
        assert_eq!(store.len(), 1);
    }
}
