//! `projectmaker` binary entry point.
//!
//! Arguments are parsed before logging is set up, so clap's own `--help`
//! and usage errors bypass tracing entirely. Configuration is loaded next,
//! then one command runs and its [`CliError`], if any, is turned into a
//! message on stderr plus an exit code:
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success (also: project already existed)   |
//! |  1   | Write failure or other I/O problem        |
//! |  2   | Bad arguments or project name             |
//! |  3   | Project type not configured               |
//! |  4   | Unreadable configuration or manifest      |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use projectmaker_core::domain::ProjectType;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is normal; real deployments use the environment.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, on stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("projectmaker: {e}");
        return ExitCode::from(1);
    }

    debug!(command = ?cli.command, "Arguments parsed");

    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(CliError::from(e), &cli.global),
    };

    let output = OutputManager::new(&cli.global, &config);
    let no_color = !output.supports_color();

    let global = GlobalArgs {
        no_color,
        ..cli.global.clone()
    };
    match run(cli, config, output) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, &global),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let global = &cli.global;

    match cli.command {
        Commands::CreateWeb(args) => {
            commands::create::execute(ProjectType::Web, args, global, &config, output)
        }
        Commands::CreateGodot(args) => {
            commands::create::execute(ProjectType::Godot, args, global, &config, output)
        }
        Commands::CreateUnity(args) => {
            commands::create::execute(ProjectType::Unity, args, global, &config, output)
        }
        Commands::CreateNodejs(args) => {
            commands::create::execute(ProjectType::NodeJs, args, global, &config, output)
        }
        Commands::List(args) => commands::list::execute(args, global, &config, output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Report `err` once on stderr and pick the exit code.
fn handle_error(err: CliError, global: &GlobalArgs) -> ExitCode {
    err.log();

    let verbose = global.verbose > 0;
    let msg = if !global.no_color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_comes_from_the_package() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn help_is_not_an_error_exit() {
        let err = Cli::try_parse_from(["projectmaker", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
        let err = Cli::try_parse_from(["projectmaker", "create-web"]).unwrap_err();
        assert!(err.use_stderr());
    }
}
