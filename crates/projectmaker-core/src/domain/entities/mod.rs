pub mod common;
pub mod project_structure;
pub mod template;

pub use project_structure::ProjectStructure;
pub use template::{TemplateCatalog, TemplateDefinition};
