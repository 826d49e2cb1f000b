//! Implementation of the `lessgo list` command.

use lessgo_adapters::BuiltinCatalog;
use lessgo_core::application::{BlueprintInfo, BlueprintService};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let service = BlueprintService::new(Box::new(BuiltinCatalog::new()));
    let blueprints = service.list()?;

    match args.format {
        ListFormat::Table => {
            output.header("Available Blueprints:")?;
            for line in table_rows(&blueprints) {
                output.print(&line)?;
            }
        }

        // JSON and bare ids must stay parseable when piped, so quiet does
        // not apply.
        ListFormat::Json => output.json(&blueprints)?,

        ListFormat::List => {
            for blueprint in &blueprints {
                println!("{}", blueprint.id);
            }
        }
    }

    Ok(())
}

fn table_rows(blueprints: &[BlueprintInfo]) -> Vec<String> {
    let width = blueprints.iter().map(|b| b.id.len()).max().unwrap_or(0);
    blueprints
        .iter()
        .flat_map(|b| {
            [
                format!("  {:width$}  {}", b.id, b.description),
                format!(
                    "  {:width$}  {} directories, {} files; runs: {}",
                    "",
                    b.directories,
                    b.files,
                    b.commands.join(" && ")
                ),
            ]
        })
        .collect()
}
