//! Command handlers, one module per subcommand.

pub mod completions;
pub mod create;
pub mod init;
pub mod list;

use projectmaker_adapters::{CatalogSource, InMemoryStore, load_catalog};
use projectmaker_core::application::TemplateRegistry;
use tracing::debug;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

/// Load the template manifest the user selected and wrap it in a registry.
pub(crate) fn build_registry(
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<(TemplateRegistry, CatalogSource)> {
    let manifest = config.manifest_path(global.templates.as_deref());
    debug!(manifest = ?manifest, "resolving template manifest");

    let (catalog, source) = load_catalog(manifest.as_deref())?;
    let store = InMemoryStore::from_catalog(catalog);
    Ok((TemplateRegistry::new(Box::new(store)), source))
}
