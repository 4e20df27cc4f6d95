use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::format::OutputFormat;
use crate::error::AppError;

pub const DEFAULT_CODEFORCES_URL: &str = "https://codeforces.com/api/problemset.problems";
pub const DEFAULT_UVA_URL: &str = "https://uhunt.onlinejudge.org/api/p";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const CONFIG_KEYS: [&str; 4] = ["codeforces-url", "uva-url", "timeout", "format"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub codeforces_url: String,
    pub uva_url: String,
    pub request_timeout_secs: u64,
    pub default_format: OutputFormat,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            codeforces_url: DEFAULT_CODEFORCES_URL.to_string(),
            uva_url: DEFAULT_UVA_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            default_format: OutputFormat::default(),
        }
    }
}

impl UserConfig {
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let value = value.trim();
        match key {
            "codeforces-url" => self.codeforces_url = parse_url(key, value)?,
            "uva-url" => self.uva_url = parse_url(key, value)?,
            "timeout" => {
                let secs = value.parse::<u64>().map_err(|_| {
                    AppError::Config(format!(
                        "timeout must be a whole number of seconds, got '{}'",
                        value
                    ))
                })?;
                if secs == 0 {
                    return Err(AppError::Config("timeout must be greater than zero".to_string()));
                }
                self.request_timeout_secs = secs;
            }
            "format" => {
                self.default_format = OutputFormat::parse(value).ok_or_else(|| {
                    AppError::Config(format!("format must be text, html or json, got '{}'", value))
                })?;
            }
            _ => {
                return Err(AppError::Config(format!(
                    "unknown key '{}' (expected one of: {})",
                    key,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_url(key: &str, value: &str) -> Result<String, AppError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.to_string())
    } else {
        Err(AppError::Config(format!("{} must be an http(s) URL, got '{}'", key, value)))
    }
}

pub fn get_config_path() -> Result<PathBuf, AppError> {
    let home = dirs::home_dir()
        .ok_or_else(|| AppError::Config("could not determine home directory".to_string()))?;
    Ok(home.join(".config").join("cplist").join("config.json"))
}

pub fn load_config() -> UserConfig {
    let path = match get_config_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("{}, using default config", e);
            return UserConfig::default();
        }
    };
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            warn!("Failed to read {}: {}, using default config", path.display(), e);
            UserConfig::default()
        }
    }
}

fn parse_config(contents: &str) -> UserConfig {
    serde_json::from_str(contents).unwrap_or_else(|e| {
        warn!("Invalid config file: {}, using default config", e);
        UserConfig::default()
    })
}

pub fn save_config(config: &UserConfig) -> Result<PathBuf, AppError> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(config)?;
    fs::write(&path, contents)?;
    Ok(path)
}
