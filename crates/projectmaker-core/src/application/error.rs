//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Domain rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ProjectType;
use crate::error::ErrorCategory;

/// Errors that occur while resolving or materializing a project.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The configuration has no template for the requested type.
    #[error("No template configured for project type '{project_type}'")]
    UnknownProjectType { project_type: ProjectType },

    /// The project root already exists; nothing was written.
    #[error("Project already exists at {path}")]
    ProjectAlreadyExists { path: PathBuf },

    /// The template configuration could not be read or parsed.
    #[error("Failed to load template configuration: {message}")]
    ConfigLoad { message: String },

    /// Creating a directory or writing a file failed part-way.
    ///
    /// `path` is relative to the project root (`.` for the root itself).
    #[error("Failed to write '{}': {reason}", path.display())]
    WriteFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownProjectType { project_type } => vec![
                format!("Add a [{}] table to your template manifest", project_type),
                "Run 'projectmaker list' to see configured project types".into(),
            ],
            Self::ProjectAlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::ConfigLoad { message } => vec![
                format!("Configuration issue: {}", message),
                "Check the file passed via --templates or PROJECTMAKER_TEMPLATES".into(),
                "Run 'projectmaker init --force' to restore the default manifest".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed while creating: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Files written before the failure were left in place".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownProjectType { .. } => ErrorCategory::NotFound,
            Self::ProjectAlreadyExists { .. } => ErrorCategory::Conflict,
            Self::ConfigLoad { .. } => ErrorCategory::Configuration,
            Self::WriteFailed { .. } => ErrorCategory::Internal,
        }
    }
}
