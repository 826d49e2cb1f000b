//! `blueprint.toml` manifests.
//!
//! A manifest lists, in order, the directories, the files (each pointing at
//! a template by name) and the toolchain commands of one blueprint:
//!
//! ```toml
//! [blueprint]
//! id          = "web-starter"
//! description = "LessGo web application"
//!
//! [variables]
//! APP_DIR = "app"
//!
//! [[directories]]
//! path = "app"
//!
//! [[files]]
//! path     = "app/cmd/main.go"
//! template = "main.go.tmpl"
//!
//! [[commands]]
//! step    = "init-manifest"        # init-manifest | resolve-dependencies
//! program = "go"
//! args    = ["mod", "init", "{{PROJECT_NAME}}"]
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use lessgo_core::domain::{Blueprint, BlueprintId, BootstrapStep, DomainError, RelativePath};

/// Errors raised while turning a manifest into a [`Blueprint`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("manifest for '{blueprint}' is not valid TOML: {source}")]
    Parse {
        blueprint: BlueprintId,
        #[source]
        source: toml::de::Error,
    },

    #[error("manifest declares '{declared}' but is registered as '{blueprint}'")]
    IdMismatch {
        blueprint: BlueprintId,
        declared: String,
    },

    #[error("'{path}' in '{blueprint}' references unknown template '{template}'")]
    MissingTemplate {
        blueprint: BlueprintId,
        path: String,
        template: String,
    },

    #[error("bad path in '{blueprint}': {source}")]
    Path {
        blueprint: BlueprintId,
        #[source]
        source: DomainError,
    },
}

/// Deserialised `blueprint.toml`.
#[derive(Debug, Deserialize, Clone)]
pub struct BlueprintManifest {
    pub blueprint: BlueprintSection,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
    #[serde(default)]
    pub directories: Vec<DirectoryEntry>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
    #[serde(default)]
    pub commands: Vec<CommandEntry>,
}

/// `[blueprint]` section.
#[derive(Debug, Deserialize, Clone)]
pub struct BlueprintSection {
    pub id: String,
    pub description: String,
}

/// One entry under `[[directories]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct DirectoryEntry {
    pub path: String,
}

/// One entry under `[[files]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct FileEntry {
    /// Destination, relative to the project root.
    pub path: String,
    /// Name of an embedded template.
    pub template: String,
}

/// One entry under `[[commands]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct CommandEntry {
    pub step: BootstrapStep,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl BlueprintManifest {
    pub fn parse(id: BlueprintId, source: &str) -> Result<Self, CatalogError> {
        let manifest: Self = toml::from_str(source).map_err(|source| CatalogError::Parse {
            blueprint: id,
            source,
        })?;

        if manifest.blueprint.id != id.as_str() {
            return Err(CatalogError::IdMismatch {
                blueprint: id,
                declared: manifest.blueprint.id,
            });
        }

        Ok(manifest)
    }

    /// Build the blueprint, resolving template names through `lookup`.
    pub fn into_blueprint<'t>(
        self,
        id: BlueprintId,
        lookup: impl Fn(&str) -> Option<&'t str>,
    ) -> Result<Blueprint, CatalogError> {
        let check = |path: &str| {
            RelativePath::try_new(path).map_err(|source| CatalogError::Path {
                blueprint: id,
                source,
            })
        };

        let mut blueprint = Blueprint::new(id, self.blueprint.description);

        for (key, value) in self.variables {
            blueprint = blueprint.with_variable(key, value);
        }

        for dir in &self.directories {
            check(&dir.path)?;
            blueprint = blueprint.with_directory(&dir.path);
        }

        for file in &self.files {
            check(&file.path)?;
            let template = lookup(&file.template).ok_or_else(|| CatalogError::MissingTemplate {
                blueprint: id,
                path: file.path.clone(),
                template: file.template.clone(),
            })?;
            blueprint = blueprint.with_file(&file.path, template);
        }

        for command in &self.commands {
            let args: Vec<&str> = command.args.iter().map(String::as_str).collect();
            blueprint = blueprint.with_command(command.step, &command.program, &args);
        }

        debug!(
            blueprint = %id,
            directories = self.directories.len(),
            files = self.files.len(),
            commands = self.commands.len(),
            "Blueprint manifest loaded"
        );
        Ok(blueprint)
    }
}
