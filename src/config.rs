use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::errors::{Error, Result};

/// config file read when no path is given, missing is fine
pub const DEFAULT_CONFIG_FILE: &str = "mortgage.toml";

/// server and logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bind_addr: String,
    pub log_filter: String,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            log_filter: "mortgage_calculator_rs=info,mortgage=info,tower_http=info".into(),
            log_json: false,
        }
    }
}

impl Settings {
    /// parse a toml document, missing keys fall back to defaults
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::InvalidConfiguration {
            message: e.to_string(),
        })
    }

    /// apply `APP__*` overrides
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(v) = lookup("APP__BIND_ADDR") {
            self.bind_addr = v;
        }
        if let Some(v) = lookup("APP__LOG_FILTER") {
            self.log_filter = v;
        }
        if let Some(v) = lookup("APP__LOG_JSON") {
            self.log_json = parse_bool(&v).ok_or_else(|| Error::InvalidConfiguration {
                message: format!("APP__LOG_JSON must be true or false, got {v:?}"),
            })?;
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr.parse().map_err(|_| Error::InvalidConfiguration {
            message: format!("invalid bind address: {}", self.bind_addr),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// defaults, then the config file, then environment
///
/// an explicit path must exist; the default file is optional.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|e| Error::InvalidConfiguration {
                message: format!("cannot read {}: {e}", path.display()),
            })?;
            Settings::from_toml(&raw)?
        }
        None => match fs::read_to_string(DEFAULT_CONFIG_FILE) {
            Ok(raw) => Settings::from_toml(&raw)?,
            Err(_) => Settings::default(),
        },
    };

    settings.apply_env(|key| std::env::var(key).ok())?;
    Ok(settings)
}
