// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can be wrapped without losing detail)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Path Errors
    // ========================================================================
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Duplicate path in template: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unknown project type '{key}'")]
    UnknownProjectTypeKey { key: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use a plain directory name without path separators".into(),
                "Examples: my-site, MyGame, api_server".into(),
            ],
            Self::UnknownProjectTypeKey { key } => vec![
                format!("'{}' is not a known project type", key),
                "Known types: web, godot, unity, nodejs".into(),
            ],
            Self::AbsolutePathNotAllowed { path } | Self::PathEscapesRoot { path } => vec![
                format!("Template path '{}' must stay inside the project", path),
                "Use paths relative to the project root without '..'".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("'{}' is listed more than once", path),
                "Remove the duplicate entry from the template manifest".into(),
            ],
            Self::InvalidPath { .. } => vec!["Check the template manifest for empty paths".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::UnknownProjectTypeKey { .. } => ErrorCategory::NotFound,
            Self::InvalidPath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::DuplicatePath { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
}
