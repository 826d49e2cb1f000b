//! End-to-end scaffolds of the built-in blueprint against real adapters.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use lessgo_adapters::{
    BuiltinCatalog, LocalFilesystem, MemoryFilesystem, ScriptedCommandRunner,
};
use lessgo_core::prelude::*;
use lessgo_core::application::ApplicationError;
use lessgo_core::domain::{PROJECT_NAME, placeholder_count};
use walkdir::WalkDir;

fn web_starter() -> Blueprint {
    BlueprintService::new(Box::new(BuiltinCatalog::new()))
        .resolve(BlueprintId::WebStarter)
        .unwrap()
}

fn project(name: &str, parent: &Path) -> ProjectContext {
    ProjectContext::new(ProjectName::parse(name).unwrap(), parent)
}

/// Every entry under `root`, relative, with directories suffixed by `/`.
fn tree(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().display().to_string();
            if e.file_type().is_dir() {
                format!("{rel}/")
            } else {
                rel
            }
        })
        .collect()
}

fn has_placeholder_syntax(text: &str) -> bool {
    text.match_indices("{{").any(|(i, _)| {
        text[i + 2..]
            .split("}}")
            .next()
            .is_some_and(|inner| {
                !inner.is_empty()
                    && inner
                        .chars()
                        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
            })
    })
}

#[test]
fn test_demo_project_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let runner = ScriptedCommandRunner::new();
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(runner.clone()));

    let report = service
        .scaffold(&web_starter(), &project("demo", tmp.path()))
        .unwrap();
    let root = tmp.path().join("demo");
    assert_eq!(report.root(), root);

    let expected: BTreeSet<String> = [
        "app/",
        "app/cmd/",
        "app/src/",
        "app/cmd/main.go",
        ".env",
        "Makefile",
        ".air.toml",
        "docker-compose.yml",
        "Dockerfile",
        "app/src/app_controller.go",
        "app/src/app_module.go",
        "app/src/app_service.go",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(tree(&root), expected, "engine must create nothing else");

    let src_files = fs::read_dir(root.join("app/src")).unwrap().count();
    assert_eq!(src_files, 3);

    let main = fs::read_to_string(root.join("app/cmd/main.go")).unwrap();
    assert!(main.contains("demo \"demo/app/src\""), "{main}");

    for file in [".env", "Makefile", ".air.toml", "docker-compose.yml", "Dockerfile"] {
        let content = fs::read_to_string(root.join(file)).unwrap();
        assert!(!has_placeholder_syntax(&content), "{file} kept a placeholder");
    }

    let air = fs::read_to_string(root.join(".air.toml")).unwrap();
    assert!(air.contains("./app/cmd/app_binary"));

    let commands: Vec<String> = runner.invocations().iter().map(|i| i.to_string()).collect();
    assert_eq!(commands, vec!["go mod init demo", "go mod tidy"]);
    assert!(runner.invocations().iter().all(|i| i.working_dir == root));
}

#[test]
fn test_rendered_files_carry_the_name_at_every_substitution_point() {
    let blueprint = web_starter();
    let tmp = tempfile::tempdir().unwrap();

    for name in ["demo", "shop_api", "x1.v2"] {
        let service = ScaffoldService::new(
            Box::new(LocalFilesystem::new()),
            Box::new(ScriptedCommandRunner::new()),
        );
        let report = service
            .scaffold(&blueprint, &project(name, tmp.path()))
            .unwrap();

        for spec in blueprint.files() {
            let rendered = fs::read_to_string(report.root().join(spec.path.as_path())).unwrap();
            assert!(!has_placeholder_syntax(&rendered), "{name}: {}", spec.path);
            assert!(
                rendered.matches(name).count() >= placeholder_count(&spec.template, PROJECT_NAME),
                "{name}: {}",
                spec.path
            );
        }
    }
}

#[test]
fn test_scaffold_twice_is_idempotent_for_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let project = project("demo", tmp.path());
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ScriptedCommandRunner::new()),
    );

    service.scaffold(&web_starter(), &project).unwrap();
    let first = tree(project.root());
    service.scaffold(&web_starter(), &project).unwrap();

    assert_eq!(tree(project.root()), first);
}

#[test]
fn test_existing_files_are_overwritten() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("demo");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("Makefile"), "stale").unwrap();

    ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ScriptedCommandRunner::new()),
    )
    .scaffold(&web_starter(), &project("demo", tmp.path()))
    .unwrap();

    assert_ne!(fs::read_to_string(root.join("Makefile")).unwrap(), "stale");
}

#[test]
fn test_third_write_failure_leaves_first_two() {
    let parent = PathBuf::from("/work");
    let root = parent.join("demo");
    let fs = MemoryFilesystem::new().fail_writes_to(root.join("Makefile"));
    let runner = ScriptedCommandRunner::new();
    let service = ScaffoldService::new(Box::new(fs.clone()), Box::new(runner.clone()));

    let err = service
        .scaffold(&web_starter(), &project("demo", &parent))
        .unwrap_err();

    let failure = err.scaffold_failure().unwrap();
    assert_eq!(failure.stage, ScaffoldStage::Files);
    assert_eq!(
        fs.list_files(),
        vec![root.join(".env"), root.join("app/cmd/main.go")]
    );
    assert!(runner.invocations().is_empty());
    assert!(failure.partial_state().contains("2 of 9 files written"));
}

#[test]
fn test_vanished_directory_fails_before_any_write() {
    let parent = PathBuf::from("/work");
    let fs = MemoryFilesystem::new().vanish_directory(parent.join("demo/app/src"));
    let service = ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(ScriptedCommandRunner::new()),
    );

    let err = service
        .scaffold(&web_starter(), &project("demo", &parent))
        .unwrap_err();

    let failure = err.scaffold_failure().unwrap();
    assert_eq!(failure.stage, ScaffoldStage::Directories);
    assert_eq!(
        failure.cause,
        ApplicationError::DirectoryVerificationFailed {
            path: parent.join("demo/app/src"),
        }
    );
    assert!(fs.list_files().is_empty());
}

#[test]
fn test_failed_init_never_runs_tidy() {
    let runner = ScriptedCommandRunner::new().with_outcome(
        BootstrapStep::InitManifest,
        CommandOutcome::failure(1, "go: cannot determine module path"),
    );
    let service = ScaffoldService::new(Box::new(MemoryFilesystem::new()), Box::new(runner.clone()));

    let err = service
        .scaffold(&web_starter(), &project("demo", Path::new("/work")))
        .unwrap_err();

    let failure = err.scaffold_failure().unwrap();
    assert_eq!(failure.stage, ScaffoldStage::Bootstrap);
    assert!(matches!(
        failure.cause,
        ApplicationError::CommandInitFailed { .. }
    ));
    assert_eq!(runner.invocations().len(), 1);
    assert_eq!(failure.progress.files_written.len(), 9);
}

#[test]
fn test_dry_run_plan_touches_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let service = BlueprintService::new(Box::new(BuiltinCatalog::new()));
    let blueprint = service.resolve(BlueprintId::WebStarter).unwrap();

    let plan = service
        .plan(&blueprint, &project("demo", tmp.path()))
        .unwrap();

    assert_eq!(plan.files.len(), 9);
    assert_eq!(plan.directories.len(), 4);
    assert_eq!(plan.commands, vec!["go mod init demo", "go mod tidy"]);
    assert!(!tmp.path().join("demo").exists());
}
