//! Implementation of the `projectmaker list` command.

use serde::Serialize;

use projectmaker_core::domain::TemplateDefinition;

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    commands::build_registry,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One row of `list --format json`.
#[derive(Debug, Serialize)]
struct TemplateSummary {
    #[serde(rename = "type")]
    key: &'static str,
    label: &'static str,
    folders: Vec<String>,
    files: Vec<String>,
}

impl From<&TemplateDefinition> for TemplateSummary {
    fn from(definition: &TemplateDefinition) -> Self {
        Self {
            key: definition.project_type.as_str(),
            label: definition.project_type.label(),
            folders: definition.folders.iter().map(ToString::to_string).collect(),
            files: definition.files.iter().map(ToString::to_string).collect(),
        }
    }
}

pub fn execute(
    args: ListArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (registry, source) = build_registry(global, config)?;
    let definitions = registry.list()?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Configured project types ({source} templates):"))?;
            for definition in &definitions {
                output.print(&format!(
                    "  {:<8} {:<8} {} folders, {} files",
                    definition.project_type.as_str(),
                    definition.project_type.label(),
                    definition.folder_count(),
                    definition.file_count(),
                ))?;
            }
        }

        ListFormat::List => {
            for definition in &definitions {
                println!("{}", definition.project_type);
            }
        }

        ListFormat::Json => {
            // Bypasses OutputManager: JSON must stay parseable even with --quiet.
            let summaries: Vec<TemplateSummary> = definitions.iter().map(Into::into).collect();
            let json = serde_json::to_string_pretty(&summaries).map_err(|e| CliError::IoError {
                message: "Failed to serialise template list".into(),
                source: e.into(),
            })?;
            println!("{json}");
        }
    }

    Ok(())
}
