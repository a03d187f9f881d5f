//! Configuration file support for xray-load.
//!
//! Provides YAML-based configuration through `xray-load.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::application::dto::OutputFormat;
use crate::scan_pipeline::domain::{LoadProfile, WaitTime};
use crate::shared::error::LoadTestError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "xray-load.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub users: Option<usize>,
    pub spawn_rate: Option<f64>,
    /// Seconds
    pub run_time: Option<u64>,
    pub iterations: Option<u64>,
    pub wait_min: Option<f64>,
    pub wait_max: Option<f64>,
    pub host: Option<String>,
    pub format: Option<OutputFormat>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load-profile values given on the command line; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct LoadOverrides {
    pub users: Option<usize>,
    pub spawn_rate: Option<f64>,
    pub run_time: Option<u64>,
    pub iterations: Option<u64>,
    pub wait_min: Option<f64>,
    pub wait_max: Option<f64>,
    pub host: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Settings after merging CLI, config file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub profile: LoadProfile,
    pub host: Option<String>,
    pub format: OutputFormat,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file").map_err(|e| LoadTestError::ConfigReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata of {}", path.display()))?;
    validate_file_size(metadata.len(), path, MAX_CONFIG_FILE_SIZE)?;

    let content = std::fs::read_to_string(path).map_err(|e| LoadTestError::ConfigReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| LoadTestError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate values that make no sense regardless of the CLI.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(host) = config.host.as_deref() {
        if host.trim().is_empty() {
            bail!(
                "Invalid config: host must not be empty.\n\n\
                 💡 Hint: Remove the 'host' key to target https://<platform id>.jfrog.io."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}

/// Merge CLI values over config file values over built-in defaults.
///
/// The resulting profile is validated before it is returned.
pub fn resolve_settings(cli: LoadOverrides, file: Option<ConfigFile>) -> Result<ResolvedSettings> {
    let file = file.unwrap_or_default();
    let defaults = LoadProfile::default();

    let wait = WaitTime::between(
        cli.wait_min
            .or(file.wait_min)
            .unwrap_or(defaults.wait.min_secs()),
        cli.wait_max
            .or(file.wait_max)
            .unwrap_or(defaults.wait.max_secs()),
    );

    let profile = LoadProfile {
        users: cli.users.or(file.users).unwrap_or(defaults.users),
        spawn_rate: cli
            .spawn_rate
            .or(file.spawn_rate)
            .unwrap_or(defaults.spawn_rate),
        run_time: cli.run_time.or(file.run_time).map(Duration::from_secs),
        iterations: cli.iterations.or(file.iterations),
        wait,
    };
    profile.validate()?;

    Ok(ResolvedSettings {
        profile,
        host: cli.host.or(file.host),
        format: cli.format.or(file.format).unwrap_or_default(),
    })
}
