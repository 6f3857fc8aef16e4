//! Implementation of the `create-*` commands.
//!
//! Responsibility: turn CLI arguments into a materializer call and display
//! the result. No business logic lives here.

use tracing::{info, instrument};

use projectmaker_adapters::LocalFilesystem;
use projectmaker_core::{
    application::{ApplicationError, ProjectMaterializer},
    domain::{FsEntry, ProjectStructure, ProjectType},
    error::MakerError,
};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    commands::build_registry,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute a `create-*` command.
///
/// Dispatch sequence:
/// 1. Load the template manifest and resolve `project_type`
/// 2. Early-exit with the plan if `--dry-run`
/// 3. Materialize the project under `--dir`
/// 4. Report success, or warn and stop if the project already exists
#[instrument(skip_all, fields(project = %args.name, project_type = %project_type))]
pub fn execute(
    project_type: ProjectType,
    args: CreateArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (registry, source) = build_registry(global, config)?;
    let definition = registry.resolve(project_type)?;
    info!(templates = %source, "template resolved");

    let materializer = ProjectMaterializer::new(registry, Box::new(LocalFilesystem::new()));

    if args.dry_run {
        let plan = materializer.plan(&args.dir, &args.name, &definition)?;
        return show_plan(&plan, &output);
    }

    let spinner = output.spinner(format!(
        "Creating {} project '{}'...",
        project_type.label(),
        args.name
    ));
    let result = materializer.materialize(&args.dir, &args.name, &definition);
    spinner.finish_and_clear();

    match result {
        Ok(root) => {
            output.success(&format!(
                "Project '{}' created at {}",
                args.name,
                root.display()
            ))?;
            Ok(())
        }
        // Nothing was written; this is informational rather than a failure.
        Err(MakerError::Application(ApplicationError::ProjectAlreadyExists { path })) => {
            info!(path = %path.display(), "project already exists, nothing written");
            output.warning(&format!(
                "Project already exists at {}; nothing was written",
                path.display()
            ))?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn show_plan(plan: &ProjectStructure, output: &OutputManager) -> CliResult<()> {
    output.info(&format!("Dry run: would create {}", plan.root().display()))?;

    for entry in plan.entries() {
        let line = match entry {
            FsEntry::Directory(dir) => format!("  {}/", dir.path),
            FsEntry::File(file) if file.is_empty() => format!("  {}", file.path),
            FsEntry::File(file) => format!("  {}  ({} bytes)", file.path, file.size()),
        };
        output.print(&line)?;
    }

    if plan.root().exists() {
        output.warning(&format!(
            "{} already exists; a real run would write nothing",
            plan.root().display()
        ))?;
    }

    Ok(())
}
