//! `projectmaker init`: write an editable copy of the template manifest.

use std::fs;

use projectmaker_adapters::BUILTIN_MANIFEST;
use tracing::info;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Write the built-in manifest to the user config directory.
///
/// Once written, it is picked up automatically by every `create-*` command
/// unless `--templates` or `templates.path` points elsewhere.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let manifest_path = AppConfig::user_manifest_path().ok_or_else(|| CliError::ConfigError {
        message: "Could not determine a configuration directory for this platform".into(),
        source: None,
    })?;

    if manifest_path.exists() && !args.force {
        output.warning(&format!(
            "Template manifest already exists at {}  (use --force to overwrite)",
            manifest_path.display(),
        ))?;
        return Ok(());
    }

    if let Some(parent) = manifest_path.parent() {
        fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    fs::write(&manifest_path, BUILTIN_MANIFEST).map_err(|e| CliError::IoError {
        message: format!("Failed to write manifest to '{}'", manifest_path.display()),
        source: e,
    })?;

    info!(path = %manifest_path.display(), "template manifest written");
    output.success(&format!(
        "Template manifest written to {}",
        manifest_path.display(),
    ))?;

    Ok(())
}
