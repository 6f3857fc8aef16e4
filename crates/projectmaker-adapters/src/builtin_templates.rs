//! Built-in template manifest and catalog resolution.
//!
//! This module provides [`load_catalog`], the single entry-point for getting
//! the template catalog the CLI runs with. It abstracts over where the
//! manifest lives so callers only pass along what the user asked for.
//!
//! # Resolution order
//!
//! 1. **An explicit manifest path**: `--templates`, `PROJECTMAKER_TEMPLATES`,
//!    or `templates.path` in the application config (the CLI picks the first
//!    one set and hands it over).
//! 2. **The built-in manifest**: [`BUILTIN_MANIFEST`], embedded in the binary
//!    at compile time.
//!
//! An explicit path that cannot be read or parsed is an error. There is no
//! silent fallback to the built-ins, so a typo in a custom manifest is
//! reported rather than ignored.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use projectmaker_core::{domain::TemplateCatalog, error::MakerResult};

use crate::template_loader::ManifestLoader;

/// The manifest shipped with ProjectMaker. `projectmaker init` writes this
/// text to the user's config directory as a starting point for edits.
pub const BUILTIN_MANIFEST: &str = include_str!("../templates/builtin.toml");

/// Where a loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("built-in"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse the embedded manifest.
pub fn builtin_catalog() -> MakerResult<TemplateCatalog> {
    Ok(ManifestLoader::load_from_str(BUILTIN_MANIFEST)?)
}

/// Load the catalog from `manifest` if given, otherwise from the built-ins.
#[instrument(skip_all, fields(manifest = ?manifest))]
pub fn load_catalog(manifest: Option<&Path>) -> MakerResult<(TemplateCatalog, CatalogSource)> {
    let (catalog, source) = match manifest {
        Some(path) => {
            debug!(path = %path.display(), "loading template manifest from file");
            (
                ManifestLoader::load_from_path(path)?,
                CatalogSource::File(path.to_path_buf()),
            )
        }
        None => {
            debug!("no manifest override, using built-in templates");
            (builtin_catalog()?, CatalogSource::Builtin)
        }
    };

    info!(source = %source, types = catalog.len(), "template catalog loaded");
    Ok((catalog, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use projectmaker_core::domain::ProjectType;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_manifest_configures_every_type() {
        let catalog = builtin_catalog().unwrap();
        for project_type in ProjectType::ALL {
            assert!(catalog.get(project_type).is_some(), "{project_type} missing");
        }
    }

    #[test]
    fn builtin_web_layout() {
        let catalog = builtin_catalog().unwrap();
        let web = catalog.get(ProjectType::Web).unwrap();
        let files: Vec<_> = web.files.iter().map(|f| f.to_string()).collect();
        assert_eq!(files, ["index.html", "style.css", "script.js", "README.md"]);
    }

    #[test]
    fn explicit_path_wins_over_builtin() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[web]\nfiles = [\"only.txt\"]\n").unwrap();

        let (catalog, source) = load_catalog(Some(&path)).unwrap();
        assert_eq!(source, CatalogSource::File(path));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(ProjectType::Godot).is_none());
    }

    #[test]
    fn broken_explicit_path_does_not_fall_back() {
        let err = load_catalog(Some(Path::new("/no/such/templates.toml"))).unwrap_err();
        assert_eq!(
            err.category(),
            projectmaker_core::error::ErrorCategory::Configuration
        );
    }

    #[test]
    fn no_path_means_builtin() {
        let (_, source) = load_catalog(None).unwrap();
        assert_eq!(source, CatalogSource::Builtin);
        assert_eq!(source.to_string(), "built-in");
    }
}
