//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`CREATIONAL__DEMO__FAMILIES=2,1`)
//! 3. Config file (`--config FILE` or the platform default location)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use creational_core::domain::{Family, Variant};

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "CREATIONAL";

/// Settings that hold lists. The environment may hand them over as one
/// scalar (`CREATIONAL__DEMO__FAMILIES=2` parses as an integer).
const LIST_KEYS: [&str; 2] = ["demo.families", "demo.creators"];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Which variants run when no selection flag is given.
    pub demo: DemoConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub families: Vec<Family>,
    pub creators: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            families: Family::ALL.to_vec(),
            creators: Variant::ALL.to_vec(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist when `must_exist` is set; the
    /// default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, must_exist: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), must_exist),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Self::environment())
    }

    fn environment() -> Environment {
        let env = Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .list_separator(",");
        LIST_KEYS
            .iter()
            .fold(env, |env, key| env.with_list_parse_key(key))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "Loading configuration");

        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env)
            .build()
            .and_then(lists_from_scalars)
            .with_context(|| {
                format!(
                    "Failed to merge configuration from '{}' and {ENV_PREFIX}__* variables",
                    path.display()
                )
            })?;

        settings.try_deserialize().with_context(|| {
            format!(
                "Invalid configuration in '{}' or {ENV_PREFIX}__* variables",
                path.display()
            )
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.creational.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "creational", "creational")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".creational.toml"))
    }

    /// The file `init` and `config set` write to.
    pub fn target_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }
}

/// Rewrite a scalar under any of [`LIST_KEYS`] as a comma-split list.
fn lists_from_scalars(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings.clone());
    for key in LIST_KEYS {
        if settings.get_array(key).is_ok() {
            continue;
        }
        if let Ok(scalar) = settings.get_string(key) {
            let items: Vec<String> = scalar
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_owned)
                .collect();
            builder = builder.set_override(key, items)?;
        }
    }
    builder.build()
}
