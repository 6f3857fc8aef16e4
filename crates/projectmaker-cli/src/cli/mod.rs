//! Command-line surface of `projectmaker`.
//!
//! One `create-*` subcommand per project type, plus `list`, `init` and
//! `completions`. Parsing only; handlers live in `crate::commands`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

#[derive(Debug, Parser)]
#[command(
    name    = "projectmaker",
    bin_name = "projectmaker",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create starter projects for the web, Godot, Unity and Node.js",
    long_about = "ProjectMaker creates a new project directory with the folders \
                  and starter files each project type expects.",
    after_help = "EXAMPLES:\n\
        \x20 projectmaker create-godot MyGame\n\
        \x20 projectmaker create-web site --dir ~/work\n\
        \x20 projectmaker create-nodejs api --dry-run\n\
        \x20 projectmaker list --format json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a static web project.
    #[command(about = "Create a web project (index.html, style.css, script.js)")]
    CreateWeb(CreateArgs),

    /// Create a Godot 4 project.
    #[command(about = "Create a Godot project (project.godot, scenes, scripts)")]
    CreateGodot(CreateArgs),

    /// Create a Unity project layout.
    #[command(about = "Create a Unity project (Assets, Packages, ProjectSettings)")]
    CreateUnity(CreateArgs),

    /// Create a Node.js project.
    #[command(
        visible_alias = "create-node",
        about = "Create a Node.js project (package.json, src, tests)"
    )]
    CreateNodejs(CreateArgs),

    /// List configured project types.
    #[command(
        visible_alias = "ls",
        about = "List configured project types",
        after_help = "EXAMPLES:\n\
            \x20 projectmaker list\n\
            \x20 projectmaker list --format json"
    )]
    List(ListArgs),

    /// Write the built-in template manifest where it can be edited.
    #[command(
        about = "Write an editable copy of the template manifest",
        after_help = "EXAMPLES:\n\
            \x20 projectmaker init\n\
            \x20 projectmaker init --force  # restore the defaults"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 projectmaker completions bash > ~/.local/share/bash-completion/completions/projectmaker\n\
            \x20 projectmaker completions zsh  > ~/.zfunc/_projectmaker\n\
            \x20 projectmaker completions fish > ~/.config/fish/completions/projectmaker.fish"
    )]
    Completions(CompletionsArgs),
}

/// Arguments shared by every `create-*` command.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Name of the project directory to create.
    #[arg(value_name = "NAME", help = "Project name (becomes the directory name)")]
    pub name: String,

    /// Parent directory for the new project.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory to create the project in"
    )]
    pub dir: PathBuf,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Arguments for `projectmaker list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One type key per line.
    List,
    /// JSON array.
    Json,
}

/// Arguments for `projectmaker init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing manifest.
    #[arg(short = 'f', long = "force", help = "Overwrite an existing manifest")]
    pub force: bool,
}

/// Arguments for `projectmaker completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
