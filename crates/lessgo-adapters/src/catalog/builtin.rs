//! Compiled-in blueprints.
//!
//! Every manifest and template under `templates/` is embedded with
//! `include_str!`, so the binary scaffolds without any files on disk.

use tracing::instrument;

use lessgo_core::{
    application::{ApplicationError, ports::BlueprintCatalog},
    domain::{Blueprint, BlueprintId},
    error::LessgoResult,
};

use super::manifest::BlueprintManifest;

struct Embedded {
    id: BlueprintId,
    manifest: &'static str,
    templates: &'static [(&'static str, &'static str)],
}

macro_rules! template {
    ($dir:literal, $name:literal) => {
        (
            $name,
            include_str!(concat!("../../templates/", $dir, "/", $name)),
        )
    };
}

const WEB_STARTER: Embedded = Embedded {
    id: BlueprintId::WebStarter,
    manifest: include_str!("../../templates/web-starter/blueprint.toml"),
    templates: &[
        template!("web-starter", "main.go.tmpl"),
        template!("web-starter", "env.tmpl"),
        template!("web-starter", "Makefile.tmpl"),
        template!("web-starter", "air.toml.tmpl"),
        template!("web-starter", "docker-compose.yml.tmpl"),
        template!("web-starter", "Dockerfile.tmpl"),
        template!("web-starter", "app_controller.go.tmpl"),
        template!("web-starter", "app_module.go.tmpl"),
        template!("web-starter", "app_service.go.tmpl"),
    ],
};

const EMBEDDED: &[Embedded] = &[WEB_STARTER];

/// Catalog of the blueprints shipped inside the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl BlueprintCatalog for BuiltinCatalog {
    #[instrument(skip(self))]
    fn get(&self, id: BlueprintId) -> LessgoResult<Blueprint> {
        let embedded = EMBEDDED
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| ApplicationError::BlueprintNotFound { id: id.to_string() })?;

        let lookup = |name: &str| {
            embedded
                .templates
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, body)| *body)
        };

        BlueprintManifest::parse(id, embedded.manifest)
            .and_then(|m| m.into_blueprint(id, lookup))
            .map_err(|e| ApplicationError::InvalidBlueprint { reason: e.to_string() }.into())
    }

    fn list(&self) -> Vec<BlueprintId> {
        EMBEDDED.iter().map(|e| e.id).collect()
    }
}
