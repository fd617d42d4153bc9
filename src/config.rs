//! Optional JSON configuration.
//!
//! Configuration only widens the noise policy or relaxes elapsed-time
//! suppression; the condensing rules themselves are fixed.
use crate::condense::{NoiseFilter, Suppression};
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;
pub const CONFIG_ENV_VAR: &str = "BEHAVE_CONDENSE_CONFIG";
const CONFIG_DIR_NAME: &str = "behave-condense";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CondenseConfig {
    pub schema_version: u32,
    /// Extra line prefixes dropped alongside the test database messages.
    #[serde(default)]
    pub extra_noise_prefixes: Vec<String>,
    /// Print the `Took ...` line instead of hiding it.
    #[serde(default)]
    pub keep_elapsed: bool,
}

impl Default for CondenseConfig {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION,
            extra_noise_prefixes: Vec::new(),
            keep_elapsed: false,
        }
    }
}

impl CondenseConfig {
    pub fn noise_filter(&self) -> NoiseFilter {
        NoiseFilter::new(self.extra_noise_prefixes.iter().cloned())
    }

    pub fn suppression(&self) -> Suppression {
        if self.keep_elapsed {
            Suppression::None
        } else {
            Suppression::Elapsed
        }
    }
}

/// Default config location under the user's config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Resolve the effective config.
///
/// An explicit path or the environment override must point at a readable
/// file; the per-user default is only used when it exists.
pub fn resolve_config(explicit: Option<&Path>) -> Result<CondenseConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
        return load_config(Path::new(&path)).with_context(|| format!("from ${CONFIG_ENV_VAR}"));
    }
    match default_config_path() {
        Some(path) if path.is_file() => load_config(&path),
        _ => {
            tracing::debug!("no config file found; using defaults");
            Ok(CondenseConfig::default())
        }
    }
}

pub fn load_config(path: &Path) -> Result<CondenseConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: CondenseConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    validate_config(&config).with_context(|| format!("validate config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn validate_config(config: &CondenseConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported config schema_version {}",
            config.schema_version
        ));
    }
    if let Some(idx) = config
        .extra_noise_prefixes
        .iter()
        .position(|prefix| prefix.trim().is_empty())
    {
        return Err(anyhow!("extra_noise_prefixes[{idx}] must be non-empty"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
