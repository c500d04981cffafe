//! Credential configuration for the enrichment LM.
//!
//! The config file lives in the per-user application data directory and is
//! shared with the rest of the metadata tooling, so unknown keys are ignored.
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the platform config dir that holds `config.json`.
pub const APP_DIR_NAME: &str = "metadata-filler-v3";
pub const CONFIG_FILE_NAME: &str = "config.json";
/// Environment override for the config file location.
pub const CONFIG_PATH_ENV: &str = "METADATA_FILLER_CONFIG";
pub const DEFAULT_MODEL: &str = "gpt-5-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    openai_credentials: Option<OpenAiCredentials>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenAiCredentials {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    base_url: Option<String>,
}

/// Everything the enrichment client needs to reach the LM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

/// Default location: `<config dir>/metadata-filler-v3/config.json`.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| anyhow!("cannot determine config directory"))?;
    Ok(base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Resolve the config path: explicit arg > env var > default.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_config_path()
}

/// Load and validate the config at `path`.
///
/// A missing file or a missing/blank API key is an error; the caller treats
/// both as fatal before any LM call is made.
pub fn load_config(path: &Path) -> Result<EnrichmentConfig> {
    if !path.is_file() {
        return Err(anyhow!("config file not found: {}", path.display()));
    }
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let file: ConfigFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    let credentials = file.openai_credentials.unwrap_or_default();

    let api_key = credentials
        .api_key
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| anyhow!("API key not found in config file {}", path.display()))?;

    Ok(EnrichmentConfig {
        api_key,
        model: non_blank(credentials.model).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        base_url: non_blank(credentials.base_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
