use crate::domain::{
    entities::{ProjectStructure, TemplateCatalog, TemplateDefinition},
    error::DomainError,
    value_objects::ProjectName,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_name(name: &str) -> Result<ProjectName, DomainError> {
        ProjectName::new(name)
    }

    pub fn validate_definition(definition: &TemplateDefinition) -> Result<(), DomainError> {
        definition.validate()
    }

    pub fn validate_catalog(catalog: &TemplateCatalog) -> Result<(), DomainError> {
        catalog.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
