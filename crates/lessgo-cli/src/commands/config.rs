//! `lessgo config`: inspect configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            println!("{value}");
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            for (key, value) in config.entries() {
                output.print(&format!("  {key} = {value}"))?;
            }
        }

        ConfigCommands::Path => {
            println!("{}", AppConfig::active_path(global.config.as_ref()).display());
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| {
        let known: Vec<String> = config.entries().into_iter().map(|(k, _)| k).collect();
        CliError::ConfigError {
            message: format!("Unknown config key: '{key}' (known: {})", known.join(", ")),
            source: None,
        }
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
