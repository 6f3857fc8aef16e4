//! Diagnostic logging for the `projectmaker` binary.
//!
//! The library crates only emit spans and events. This module installs the
//! one subscriber that renders them, always on stderr so scaffold output on
//! stdout stays clean.
//!
//! `-v` raises the level one step per flag starting from `warn`, `--quiet`
//! pins it to `error`, and a non-empty `RUST_LOG` replaces both.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the selected level.
const CRATES: [&str; 3] = ["projectmaker", "projectmaker_core", "projectmaker_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(filter_directives(derive_level(args))),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("could not install log subscriber: {e}"))
}

fn derive_level(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn filter_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            ..GlobalArgs::default()
        }
    }

    #[test]
    fn verbosity_steps_up_from_warn() {
        let cases = [
            (0, LevelFilter::WARN),
            (1, LevelFilter::INFO),
            (2, LevelFilter::DEBUG),
            (3, LevelFilter::TRACE),
            (9, LevelFilter::TRACE),
        ];
        for (verbose, expected) in cases {
            assert_eq!(derive_level(&args_with(verbose, false)), expected, "-v x{verbose}");
        }
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(derive_level(&args_with(0, true)), LevelFilter::ERROR);
        assert_eq!(derive_level(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            filter_directives(LevelFilter::DEBUG),
            "projectmaker=debug,projectmaker_core=debug,projectmaker_adapters=debug"
        );
    }
}
