//! Flags accepted by every `lessgo` subcommand.

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Show what the scaffolder is doing on stderr (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        global = true,
        long_help = "Show what the scaffolder is doing on stderr:
    (none)  - nothing beyond the final error report
    -v      - each state transition and toolchain command
    -vv     - every directory created and file written
    -vvv    - adapter calls"
    )]
    pub verbose: u8,

    /// Print only errors; also skips the confirmation prompt of `new`
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print without ANSI colours (also set by NO_COLOR)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user lessgo.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results such as the dry-run plan and blueprint list are printed
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped, unless lessgo.toml says otherwise
    #[default]
    Auto,
    /// Coloured status lines, spinner and banner
    Human,
    /// Same text without colours or spinner
    Plain,
    /// Dry-run plans and listings as JSON on stdout
    Json,
}
