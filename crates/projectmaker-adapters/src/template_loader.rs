//! TOML template-manifest loader.
//!
//! Parses a manifest into a domain [`TemplateCatalog`]. A manifest has one
//! table per project type and nothing else:
//!
//! ```toml
//! [web]
//! folders = ["assets"]
//! files   = ["index.html", "style.css", "script.js", "README.md"]
//!
//! [godot]
//! folders = ["scenes", "scripts"]
//! files   = ["project.godot", ".gitignore", ".gitattributes", "README.md"]
//! ```
//!
//! Table keys are project types (`web`, `godot`, `unity`, `nodejs`; `node`
//! is accepted for `nodejs`). Both arrays are optional and default to empty.
//! A type that has no table is simply not configured; asking for it later
//! fails at resolve time, not here.
//!
//! Every failure in this module surfaces to callers as a configuration-load
//! error.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use projectmaker_core::{
    domain::{DomainError, DomainValidator as validator, ProjectType, TemplateCatalog, TemplateDefinition},
    error::MakerError,
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// One `[<type>]` table.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    /// Folders created before any file, in listed order.
    #[serde(default)]
    pub folders: Vec<String>,
    /// Files written in listed order.
    #[serde(default)]
    pub files: Vec<String>,
}

/// Deserialised manifest, keyed by the raw table name.
pub type TemplateManifest = BTreeMap<String, ManifestEntry>;

// ── Errors ────────────────────────────────────────────────────────────────────

/// Why a manifest could not be turned into a catalog.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("invalid entry in {origin}: {source}")]
    Invalid {
        origin: String,
        #[source]
        source: DomainError,
    },
}

impl From<ManifestError> for MakerError {
    fn from(err: ManifestError) -> Self {
        MakerError::config_load(err.to_string())
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads a [`TemplateCatalog`] from manifest text or a manifest file.
///
/// # Example
///
/// ```
/// use projectmaker_adapters::ManifestLoader;
/// use projectmaker_core::domain::ProjectType;
///
/// let catalog = ManifestLoader::load_from_str(
///     "[web]\nfolders = [\"assets\"]\nfiles = [\"index.html\"]\n",
/// )?;
/// assert!(catalog.get(ProjectType::Web).is_some());
/// # Ok::<(), projectmaker_adapters::ManifestError>(())
/// ```
pub struct ManifestLoader;

impl ManifestLoader {
    /// Parse manifest text. Errors name the manifest as `<inline>`.
    pub fn load_from_str(raw: &str) -> Result<TemplateCatalog, ManifestError> {
        Self::parse(raw, "<inline>")
    }

    /// Read and parse the manifest at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<TemplateCatalog, ManifestError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&raw, &format!("'{}'", path.display()))
    }

    fn parse(raw: &str, origin: &str) -> Result<TemplateCatalog, ManifestError> {
        let manifest: TemplateManifest =
            toml::from_str(raw).map_err(|e| ManifestError::Parse {
                origin: origin.to_string(),
                message: e.message().trim().to_string(),
            })?;

        let invalid = |source: DomainError| ManifestError::Invalid {
            origin: origin.to_string(),
            source,
        };

        let mut catalog = TemplateCatalog::new();
        for (key, entry) in manifest {
            let project_type: ProjectType = key.parse().map_err(invalid)?;
            let definition = TemplateDefinition::from_paths(project_type, &entry.folders, &entry.files)
                .map_err(invalid)?;

            // `node` and `nodejs` in the same manifest would silently shadow each other.
            if catalog.insert(definition).is_some() {
                return Err(invalid(DomainError::DuplicatePath { path: key }));
            }
        }

        validator::validate_catalog(&catalog).map_err(invalid)?;
        debug!(types = catalog.len(), "template manifest parsed");
        Ok(catalog)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
