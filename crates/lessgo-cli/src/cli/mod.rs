//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lessgo_core::domain::BlueprintId;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "lessgo",
    bin_name = "lessgo",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold LessGo web applications",
    long_about = "LessGo creates a ready-to-run Go web application: entry point, \
                  root module, controller and service, plus Docker, Makefile and \
                  live-reload configuration, then initialises the Go module.",
    after_help = "EXAMPLES:\n\
        \x20 lessgo new demo\n\
        \x20 lessgo new shop-api -o ~/src --dry-run\n\
        \x20 lessgo list --format json\n\
        \x20 lessgo completions bash > /usr/share/bash-completion/completions/lessgo",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from a blueprint.
    #[command(
        visible_alias = "n",
        about = "Create a new LessGo project",
        after_help = "EXAMPLES:\n\
            \x20 lessgo new demo\n\
            \x20 lessgo new            # prompts for the name\n\
            \x20 lessgo new demo --output ../services --yes"
    )]
    New(NewArgs),

    /// List available blueprints.
    #[command(
        visible_alias = "ls",
        about = "List available blueprints",
        after_help = "EXAMPLES:\n\
            \x20 lessgo list\n\
            \x20 lessgo list --format json"
    )]
    List(ListArgs),

    /// Initialise a LessGo configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 lessgo init\n\
            \x20 lessgo init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 lessgo completions bash > ~/.local/share/bash-completion/completions/lessgo\n\
            \x20 lessgo completions zsh  > ~/.zfunc/_lessgo\n\
            \x20 lessgo completions fish > ~/.config/fish/completions/lessgo.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the LessGo configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 lessgo config get toolchain.program\n\
            \x20 lessgo config list\n\
            \x20 lessgo config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `lessgo new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name.  Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Project name (prompted for when omitted)")]
    pub name: Option<String>,

    /// Blueprint to scaffold from.
    #[arg(
        short = 'b',
        long = "blueprint",
        value_name = "BLUEPRINT",
        value_parser = parse_blueprint,
        help = "Blueprint to use [default: from config, else web-starter]"
    )]
    pub blueprint: Option<BlueprintId>,

    /// Parent directory for the project.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

fn parse_blueprint(raw: &str) -> Result<BlueprintId, String> {
    raw.parse::<BlueprintId>().map_err(|e| {
        let known: Vec<&str> = BlueprintId::ALL.iter().map(|id| id.as_str()).collect();
        format!("{e} (available: {})", known.join(", "))
    })
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `lessgo list`.
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
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `lessgo init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `lessgo completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `lessgo config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `toolchain.program`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
