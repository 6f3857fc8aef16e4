//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PROJECTMAKER__OUTPUT__NO_COLOR`,
//!    `PROJECTMAKER__TEMPLATES__PATH`
//! 3. Config file: `--config <FILE>` (must exist), otherwise `config.toml`
//!    in the platform config directory (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template manifest to load instead of the built-in one.
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the default location is read if present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
            }
            None => {
                if let Some(path) = Self::config_path() {
                    builder = builder.add_source(
                        File::from(path.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder
            .add_source(
                Environment::with_prefix("PROJECTMAKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Platform config directory, e.g. `~/.config/projectmaker` on Linux.
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "projectmaker", "projectmaker")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Path to the default configuration file.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Where `init` writes the editable template manifest.
    pub fn user_manifest_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("templates.toml"))
    }

    /// Pick the template manifest to load, if any.
    ///
    /// `cli_override` is `--templates` / `PROJECTMAKER_TEMPLATES`. `None`
    /// means the built-in manifest.
    pub fn manifest_path(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.templates.path.clone())
            .or_else(|| Self::user_manifest_path().filter(|path| path.is_file()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn loads_values_from_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[output]\nno_color = true\n\n[templates]\npath = \"custom.toml\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.output.no_color);
        assert_eq!(cfg.templates.path, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[output]\nno_color = true\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.templates, TemplateConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&temp.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[output\nno_color = ").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn cli_override_beats_config_path() {
        let cfg = AppConfig {
            templates: TemplateConfig {
                path: Some(PathBuf::from("from-config.toml")),
            },
            ..AppConfig::default()
        };

        assert_eq!(
            cfg.manifest_path(Some(Path::new("from-cli.toml"))),
            Some(PathBuf::from("from-cli.toml"))
        );
        assert_eq!(cfg.manifest_path(None), Some(PathBuf::from("from-config.toml")));
    }
}
