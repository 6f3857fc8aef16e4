//! Flags accepted by every subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, builder::FalseyValueParser};

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Log more detail to stderr; repeat for debug (-vv) and trace (-vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes (also set by any non-empty NO_COLOR)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read application settings from FILE
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Load project templates from a TOML manifest
    #[arg(long, global = true, env = "PROJECTMAKER_TEMPLATES", value_name = "FILE")]
    pub templates: Option<PathBuf>,
}
