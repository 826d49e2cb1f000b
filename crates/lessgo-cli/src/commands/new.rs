//! Implementation of the `lessgo new` command.
//!
//! Responsibility: turn CLI arguments into a `ProjectContext` and a resolved
//! `Blueprint`, call the core scaffold service, and display results. No
//! business logic lives here.

use std::io::{self, BufRead, IsTerminal, Write};

use tracing::{debug, info, instrument};

use lessgo_adapters::{BuiltinCatalog, LocalFilesystem, SystemCommandRunner};
use lessgo_core::{
    application::{BlueprintService, ScaffoldPlan, ScaffoldService},
    domain::{Blueprint, BlueprintId, DomainError, ProjectContext, ProjectName},
    error::LessgoError,
};

use crate::{
    cli::{NewArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Go gopher logo shown before a scaffold starts.
const BANNER: &str = include_str!("../../assets/banner.txt");

/// Execute the `lessgo new` command.
///
/// Dispatch sequence:
/// 1. Take the project name from the argument or a prompt, and validate it
/// 2. Resolve the blueprint (flag, else `defaults.blueprint`)
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Confirm with the user unless `--yes`, `--quiet` or no TTY
/// 5. Run the scaffold via `ScaffoldService`
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(project = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Name
    let raw_name = match args.name {
        Some(name) => name,
        None => prompt_name()?,
    };
    let name = ProjectName::parse(&raw_name).map_err(LessgoError::from)?;

    let project = match &args.output {
        Some(parent) => ProjectContext::new(name, parent),
        None => ProjectContext::in_current_dir(name),
    };

    // 2. Blueprint
    let blueprint_id = resolve_blueprint_id(args.blueprint, &config)?;
    let blueprints = BlueprintService::new(Box::new(BuiltinCatalog::new()));
    let blueprint = blueprints
        .resolve(blueprint_id)?
        .with_toolchain_program(&config.toolchain.program);

    debug!(
        blueprint = %blueprint_id,
        root = %project.root().display(),
        toolchain = %config.toolchain.program,
        "Project resolved"
    );

    if project.root().exists() {
        output.warning(&format!(
            "{} already exists; existing files with the same names will be overwritten",
            project.root().display()
        ))?;
    }

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let plan = blueprints.plan(&blueprint, &project)?;
        return show_plan(&plan, &output);
    }

    // 4. Confirm
    if !output.is_quiet() && !args.yes && io::stdin().is_terminal() {
        show_configuration(&blueprint, &project, &config, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Scaffold
    output.header(BANNER.trim_end())?;
    output.print(&initializing_line(&project))?;
    output.print("")?;
    info!(project = %project.name(), root = %project.root().display(), "Scaffold started");

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemCommandRunner::new()),
    );

    let spinner = output.spinner(&format!(
        "Creating files and running `{} mod tidy`...",
        config.toolchain.program
    ));
    let result = service.scaffold(&blueprint, &project);
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let report = result?;

    info!(project = %report.project, "Scaffold completed");

    // 6. Success + next steps
    output.success(&format!("Project '{}' created!", report.project))?;
    output.print(&format!("  {}", report.progress.summary()))?;
    output.print("")?;
    output.print("Next steps:")?;
    for step in next_steps(&project) {
        output.print(&format!("  {step}"))?;
    }

    Ok(())
}

/// The blueprint to use: the `--blueprint` flag, else the configured default.
fn resolve_blueprint_id(flag: Option<BlueprintId>, config: &AppConfig) -> CliResult<BlueprintId> {
    match flag {
        Some(id) => Ok(id),
        None => config
            .defaults
            .blueprint
            .parse()
            .map_err(|e: DomainError| CliError::ConfigError {
                message: format!("defaults.blueprint: {e}"),
                source: Some(Box::new(e)),
            }),
    }
}

fn initializing_line(project: &ProjectContext) -> String {
    format!("\u{1f680} Initializing your Less{} project...", project.name())
}

fn next_steps(project: &ProjectContext) -> Vec<String> {
    vec![
        format!("cd {}", project.root().display()),
        "go run ./app/cmd/main.go".into(),
        "# or, with live reload: air".into(),
    ]
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(plan: &ScaffoldPlan, out: &OutputManager) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        out.json(plan)?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create '{}' at {} from {}",
        plan.project,
        plan.root.display(),
        plan.blueprint,
    ))?;
    out.print("Directories:")?;
    for dir in &plan.directories {
        out.print(&format!("  {}/", dir.display()))?;
    }
    out.print("Files:")?;
    for file in &plan.files {
        out.print(&format!("  {} ({} bytes)", file.path.display(), file.bytes))?;
    }
    out.print("Commands:")?;
    for command in &plan.commands {
        out.print(&format!("  {command}"))?;
    }
    Ok(())
}

fn show_configuration(
    blueprint: &Blueprint,
    project: &ProjectContext,
    config: &AppConfig,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:    {}", project.name()))?;
    out.print(&format!("  Blueprint:  {}", blueprint.id()))?;
    out.print(&format!("  Location:   {}", project.root().display()))?;
    out.print(&format!("  Toolchain:  {}", config.toolchain.program))?;
    out.print("")?;
    Ok(())
}

// ── Prompts ───────────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn prompt_name() -> CliResult<String> {
    if io::stdin().is_terminal() {
        return dialoguer::Input::<String>::new()
            .with_prompt("Enter project name")
            .interact_text()
            .map_err(|e| CliError::InvalidInput {
                message: "failed to read project name".into(),
                source: Some(Box::new(e)),
            });
    }
    prompt_name_from_stdin()
}

#[cfg(not(feature = "interactive"))]
fn prompt_name() -> CliResult<String> {
    prompt_name_from_stdin()
}

fn prompt_name_from_stdin() -> CliResult<String> {
    print!("Enter project name: ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;
    read_name(&mut io::stdin().lock())
}

/// One line of input, trimmed. End of input yields an empty name, which
/// validation rejects.
fn read_name(input: &mut impl BufRead) -> CliResult<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_cli_context(|| "failed to read project name")?;
    Ok(line.trim().to_string())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "failed to read confirmation".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
