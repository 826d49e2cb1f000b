//! Blueprint Service - catalog lookup and dry-run plans.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::BlueprintCatalog,
    domain::{Blueprint, BlueprintId, ProjectContext},
    error::LessgoResult,
};

/// Information about a blueprint for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlueprintInfo {
    pub id: String,
    pub description: String,
    pub directories: usize,
    pub files: usize,
    /// Unrendered command lines, e.g. `go mod init {{PROJECT_NAME}}`.
    pub commands: Vec<String>,
}

impl From<&Blueprint> for BlueprintInfo {
    fn from(blueprint: &Blueprint) -> Self {
        Self {
            id: blueprint.id().to_string(),
            description: blueprint.description().to_string(),
            directories: blueprint.directories().len(),
            files: blueprint.files().len(),
            commands: blueprint
                .commands()
                .iter()
                .map(|c| {
                    std::iter::once(c.program.as_str())
                        .chain(c.args.iter().map(String::as_str))
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect(),
        }
    }
}

/// A file the scaffold would write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Everything a scaffold would do, computed without touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub blueprint: BlueprintId,
    pub project: String,
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PlannedFile>,
    pub commands: Vec<String>,
}

/// Service for blueprint resolution and planning.
pub struct BlueprintService {
    catalog: Box<dyn BlueprintCatalog>,
}

impl BlueprintService {
    pub fn new(catalog: Box<dyn BlueprintCatalog>) -> Self {
        Self { catalog }
    }

    /// Look up a blueprint and check its structural invariants.
    #[instrument(skip(self))]
    pub fn resolve(&self, id: BlueprintId) -> LessgoResult<Blueprint> {
        let blueprint = self.catalog.get(id)?;
        blueprint.validate()?;
        debug!(
            directories = blueprint.directories().len(),
            files = blueprint.files().len(),
            "Blueprint resolved"
        );
        Ok(blueprint)
    }

    /// Every blueprint the catalog can resolve, in catalog order.
    pub fn list(&self) -> LessgoResult<Vec<BlueprintInfo>> {
        self.catalog
            .list()
            .into_iter()
            .map(|id| self.catalog.get(id).map(|bp| BlueprintInfo::from(&bp)))
            .collect()
    }

    /// Render every template and command for `project` without writing.
    ///
    /// Fails exactly where a real scaffold would fail to render.
    #[instrument(skip_all, fields(blueprint = %blueprint.id(), project = %project.name()))]
    pub fn plan(&self, blueprint: &Blueprint, project: &ProjectContext) -> LessgoResult<ScaffoldPlan> {
        let root = project.root();
        let ctx = blueprint.render_context(project);

        let files = blueprint
            .files()
            .iter()
            .map(|spec| {
                ctx.render(&spec.template).map(|content| PlannedFile {
                    path: root.join(spec.path.as_path()),
                    bytes: content.len(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let commands = blueprint
            .command_invocations(project)?
            .iter()
            .map(ToString::to_string)
            .collect();

        Ok(ScaffoldPlan {
            blueprint: blueprint.id(),
            project: project.name().to_string(),
            root: root.to_path_buf(),
            directories: std::iter::once(root.to_path_buf())
                .chain(
                    blueprint
                        .directories()
                        .iter()
                        .map(|d| root.join(d.path.as_path())),
                )
                .collect(),
            files,
            commands,
        })
    }
}
