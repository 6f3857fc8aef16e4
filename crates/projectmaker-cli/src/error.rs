//! CLI-level errors and their mapping to exit codes.
//!
//! Everything that can stop a command ends up as a [`CliError`]; `main`
//! prints it once and exits with [`CliError::exit_code`].

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use projectmaker_core::error::MakerError;

pub use projectmaker_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `projectmaker-core` or the adapters.
    #[error(transparent)]
    Core(#[from] MakerError),

    /// The application configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O operation outside of materialization failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(err) => err.suggestions(),

            Self::ConfigError { .. } => vec![
                "Check the file passed via --config".into(),
                "Environment overrides use the PROJECTMAKER__SECTION__KEY form".into(),
            ],

            Self::IoError { .. } => vec![
                "Make sure the configuration directory is writable".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Process exit status: 1 internal, 2 bad input, 3 unknown project
    /// type, 4 unreadable configuration.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Render the error for stderr with ANSI styling.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same layout as [`Self::format_colored`] without escape codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_string() }
        };

        let mut lines = vec![
            String::new(),
            format!(
                "{} {}",
                paint("error:", |t| t.red().bold().to_string()),
                paint(&self.to_string(), |t| t.bold().to_string())
            ),
        ];

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                lines.push(paint(&format!("  caused by: {err}"), |t| t.dimmed().to_string()));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push(paint("hint:", |t| t.yellow().bold().to_string()));
            lines.extend(suggestions.iter().map(|s| format!("  - {s}")));
        }

        if !verbose {
            lines.push(String::new());
            lines.push(paint("Re-run with -v for details.", |t| t.dimmed().to_string()));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Record the error for `-vv` diagnostics. The user-facing report is
    /// printed separately, so this stays below the default `warn` level.
    pub fn log(&self) {
        tracing::debug!(
            exit_code = self.exit_code(),
            category = ?self.category(),
            error = %self,
            "Command failed"
        );
    }
}

/// Coarse grouping behind the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad name, bad path, or the project already exists.
    UserError,
    /// The manifest has no entry for the requested type.
    NotFound,
    Configuration,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use projectmaker_core::{application::ApplicationError, domain::{DomainError, ProjectType}};
    use std::io;
    use std::path::PathBuf;

    fn core(err: impl Into<MakerError>) -> CliError {
        CliError::Core(err.into())
    }

    #[test]
    fn exit_code_invalid_name() {
        let err = core(DomainError::InvalidProjectName {
            name: "a/b".into(),
            reason: "contains a path separator".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_unknown_project_type() {
        let err = core(ApplicationError::UnknownProjectType {
            project_type: ProjectType::Unity,
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(core(MakerError::config_load("bad manifest")).exit_code(), 4);
        let missing = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(missing.exit_code(), 4);
    }

    #[test]
    fn exit_code_write_failed_is_internal() {
        let err = core(ApplicationError::WriteFailed {
            path: PathBuf::from("assets"),
            reason: "permission denied".into(),
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn exit_code_io_is_internal() {
        let err: CliError = io::Error::other("e").into();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn anyhow_errors_are_configuration_errors() {
        let err: CliError = anyhow::anyhow!("no such file").into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn format_plain_contains_message_and_suggestions() {
        let err = core(ApplicationError::UnknownProjectType {
            project_type: ProjectType::Godot,
        });
        let s = err.format_plain(false);
        assert!(s.contains("error: No template configured for project type 'godot'"));
        assert!(s.contains("hint:"));
        assert!(s.contains("[godot]"));
        assert!(s.contains("-v for details"));
    }

    #[test]
    fn verbose_output_drops_rerun_hint() {
        let err = core(MakerError::config_load("x"));
        assert!(!err.format_plain(true).contains("Re-run"));
    }

    #[test]
    fn format_plain_verbose_shows_causes() {
        let err = CliError::IoError {
            message: "writing manifest".into(),
            source: io::Error::other("disk full"),
        };
        assert!(err.format_plain(true).contains("caused by: disk full"));
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let err = core(MakerError::config_load("bad manifest"));
        assert!(!err.format_plain(false).contains('\u{1b}'));
    }
}
