//! `creational config` — read and write configuration values.

use std::path::Path;

use creational_core::domain::{Family, Variant};

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    commands::init::write_text,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `get` and `set`.
const KNOWN_KEYS: [&str; 4] = [
    "demo.families",
    "demo.creators",
    "output.no_color",
    "output.format",
];

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
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::target_path(global.config.as_ref());
            set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::target_path(global.config.as_ref());
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "demo.families" => Ok(join(&config.demo.families)),
        "demo.creators" => Ok(join(&config.demo.creators)),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Update one key in the TOML file at `path`, keeping every other entry.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    if !KNOWN_KEYS.contains(&key) {
        return Err(CliError::UnknownConfigKey { key: key.into() });
    }
    let value = parse_value(key, raw)?;

    let mut table = if path.exists() {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::IoError {
            message: format!("Failed to read config '{}'", path.display()),
            source: e,
        })?;
        text.parse::<toml::Table>()
            .map_err(|e| CliError::ConfigError {
                message: format!("'{}' is not valid TOML", path.display()),
                source: Some(Box::new(e)),
            })?
    } else {
        toml::Table::new()
    };

    let (section, field) = key
        .split_once('.')
        .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() })?;

    let entry = table
        .entry(section)
        .or_insert(toml::Value::Table(toml::Table::new()));
    let toml::Value::Table(section_table) = entry else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        });
    };
    section_table.insert(field.to_string(), value);

    let text = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    write_text(path, &text)
}

/// Validate a raw CLI string for `key` and convert it to a TOML value.
fn parse_value(key: &str, raw: &str) -> CliResult<toml::Value> {
    let invalid = |reason: String| CliError::ConfigError {
        message: format!("Invalid value '{raw}' for {key}: {reason}"),
        source: None,
    };

    match key {
        "demo.families" => {
            let families = split_list::<Family>(raw).map_err(|e| CliError::Core(e.into()))?;
            Ok(toml::Value::Array(
                families.into_iter().map(|f| String::from(f).into()).collect(),
            ))
        }
        "demo.creators" => {
            let creators = split_list::<Variant>(raw).map_err(|e| CliError::Core(e.into()))?;
            Ok(toml::Value::Array(
                creators.into_iter().map(|v| String::from(v).into()).collect(),
            ))
        }
        "output.no_color" => raw
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .map_err(|e| invalid(e.to_string())),
        "output.format" => match raw {
            "auto" | "human" | "plain" | "json" => Ok(toml::Value::String(raw.into())),
            _ => Err(invalid("expected auto, human, plain or json".into())),
        },
        _ => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

fn split_list<T: std::str::FromStr>(raw: &str) -> Result<Vec<T>, T::Err> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────
