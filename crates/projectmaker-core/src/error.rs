//! Unified error handling for ProjectMaker Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for ProjectMaker Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MakerError {
    /// Errors from the domain layer (invalid names, paths, templates).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (resolution and materialization).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl MakerError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the project root was already present and nothing was written.
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::ProjectAlreadyExists { .. })
        )
    }

    /// Shorthand for a configuration-load failure.
    pub fn config_load(message: impl Into<String>) -> Self {
        ApplicationError::ConfigLoad {
            message: message.into(),
        }
        .into()
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type MakerResult<T> = Result<T, MakerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectType;
    use std::path::PathBuf;

    #[test]
    fn categories_follow_wrapped_error() {
        let unknown: MakerError = ApplicationError::UnknownProjectType {
            project_type: ProjectType::Unity,
        }
        .into();
        assert_eq!(unknown.category(), ErrorCategory::NotFound);

        let bad_name: MakerError = DomainError::InvalidProjectName {
            name: "a/b".into(),
            reason: "separator".into(),
        }
        .into();
        assert_eq!(bad_name.category(), ErrorCategory::Validation);

        assert_eq!(
            MakerError::config_load("bad toml").category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn already_exists_is_detected() {
        let err: MakerError = ApplicationError::ProjectAlreadyExists {
            path: PathBuf::from("Demo"),
        }
        .into();
        assert!(err.is_already_exists());
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(!MakerError::config_load("x").is_already_exists());
    }

    #[test]
    fn write_failed_message_names_relative_path() {
        let err: MakerError = ApplicationError::WriteFailed {
            path: PathBuf::from("assets"),
            reason: "permission denied".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Failed to write 'assets': permission denied");
        assert!(err.suggestions().iter().any(|s| s.contains("assets")));
    }
}
