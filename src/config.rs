//! Where the console keeps its state and which API it talks to.

use std::path::PathBuf;

use crate::error::{ConsoleError, ConsoleResult};
use crate::model::ConsoleConfig;

pub const ENV_HOME: &str = "ADCONSOLE_HOME";
pub const ENV_API_URL: &str = "ADCONSOLE_API_URL";
pub const ENV_LOG: &str = "ADCONSOLE_LOG";
pub const ENV_PASSWORD: &str = "ADCONSOLE_PASSWORD";

const DEFAULT_LOG_FILTER: &str = "info";

/// `--state-dir`, then `ADCONSOLE_HOME`, then the platform config dir.
pub fn resolve_state_dir(flag: Option<PathBuf>) -> ConsoleResult<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = non_empty_env(ENV_HOME) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|d| d.join("adconsole"))
        .ok_or_else(|| {
            ConsoleError::Config(format!(
                "no config directory on this platform (set {} or pass --state-dir)",
                ENV_HOME
            ))
        })
}

/// `--api-url`, then `ADCONSOLE_API_URL`, then `config.json`.
pub fn resolve_api_url(
    flag: Option<&str>,
    env: Option<String>,
    cfg: &ConsoleConfig,
) -> ConsoleResult<String> {
    flag.map(str::to_string)
        .filter(|s| !s.trim().is_empty())
        .or(env.filter(|s| !s.trim().is_empty()))
        .or_else(|| cfg.api_url.clone().filter(|s| !s.trim().is_empty()))
        .ok_or_else(|| {
            ConsoleError::Config(format!(
                "no api url configured (pass --api-url, set {}, or run `adconsole config set --api-url ...`)",
                ENV_API_URL
            ))
        })
}

/// `ADCONSOLE_LOG`, then `config.json`, then `info`.
pub fn resolve_log_filter(env: Option<String>, cfg: &ConsoleConfig) -> String {
    env.filter(|s| !s.trim().is_empty())
        .or_else(|| cfg.log_filter.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

pub fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
