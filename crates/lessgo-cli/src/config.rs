//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `LESSGO_<SECTION>__<KEY>`
//!    (e.g. `LESSGO_TOOLCHAIN__PROGRAM=/usr/local/go/bin/go`)
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`]); a
//!    missing file is not an error
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "LESSGO";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// External toolchain settings.
    pub toolchain: ToolchainConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Blueprint used when `lessgo new` gets no `--blueprint`.
    pub blueprint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Program run for `mod init` / `mod tidy`.
    pub program: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            blueprint: "web-starter".into(),
        }
    }
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            program: "go".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default location).
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = Self::active_path(config_file);
        Self::load_from(&path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, env: Environment) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// The file `load` reads: `--config` if given, else the default path.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.lessgo.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "lessgo", "lessgo")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".lessgo.toml"))
    }

    /// Every leaf value as a `(dotted.key, value)` pair, in declaration order.
    pub fn entries(&self) -> Vec<(String, String)> {
        vec![
            ("defaults.blueprint".into(), self.defaults.blueprint.clone()),
            ("toolchain.program".into(), self.toolchain.program.clone()),
            ("output.no_color".into(), self.output.no_color.to_string()),
            ("output.format".into(), self.output.format.clone()),
        ]
    }

    /// Value of a dotted key, `None` if the key does not exist.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// TOML text suitable for a config file.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.blueprint, "web-starter");
        assert_eq!(cfg.toolchain.program, "go");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("absent.toml"), no_env()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn file_overrides_defaults_partially() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[toolchain]\nprogram = \"/opt/go/bin/go\"\n").unwrap();

        let cfg = AppConfig::load_from(&path, no_env()).unwrap();
        assert_eq!(cfg.toolchain.program, "/opt/go/bin/go");
        assert_eq!(cfg.defaults.blueprint, "web-starter");
    }

    #[test]
    fn environment_overrides_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[toolchain]\nprogram = \"from-file\"\n").unwrap();

        let cfg = AppConfig::load_from(
            &path,
            env(&[
                ("LESSGO_TOOLCHAIN__PROGRAM", "from-env"),
                ("LESSGO_OUTPUT__NO_COLOR", "true"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.toolchain.program, "from-env");
        assert!(cfg.output.no_color);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[toolchain\nprogram = ").unwrap();

        assert!(AppConfig::load_from(&path, no_env()).is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("toolchain.program").as_deref(), Some("go"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn toml_round_trips_through_the_loader() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        let mut custom = AppConfig::default();
        custom.output.format = "plain".into();
        std::fs::write(&path, custom.to_toml().unwrap()).unwrap();

        assert_eq!(AppConfig::load_from(&path, no_env()).unwrap(), custom);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
