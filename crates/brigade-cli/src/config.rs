//! Layered configuration loading using figment.
//!
//! Sources in priority order, highest wins:
//! 1. Environment variables (`BRIGADE_*` prefix, `__` as separator)
//! 2. `--config FILE`
//! 3. `./brigade.toml`
//! 4. `~/.config/brigade/config.toml`
//! 5. Built-in defaults
//!
//! `BRIGADE_DEFAULTS__GUESTS=200` maps to `defaults.guests`.

use std::path::{Path, PathBuf};

use brigade::{EventType, Season};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::{
    MAX_CUSTOMERS, MAX_DURATION_WEEKS, MAX_GUESTS, MIN_CUSTOMERS, MIN_DURATION_WEEKS, MIN_GUESTS,
};

const LOCAL_CONFIG_FILE: &str = "brigade.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A file passed with `--config` does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BrigadeConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// Menu file loaded at startup.
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("italian_food_clean.csv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3141,
        }
    }
}

/// Values used when a command or request leaves a parameter out.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub expected_customers: u32,
    pub guests: u32,
    pub season: Season,
    pub event: EventType,
    pub duration_weeks: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            expected_customers: 120,
            guests: 150,
            season: Season::Summer,
            event: EventType::NormalDay,
            duration_weeks: 12,
        }
    }
}

impl BrigadeConfig {
    /// Load configuration from all sources and validate it.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
        }
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("BRIGADE_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("brigade").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let defaults = &self.defaults;
        check_range(
            "defaults.expected_customers",
            defaults.expected_customers,
            MIN_CUSTOMERS,
            MAX_CUSTOMERS,
        )?;
        check_range("defaults.guests", defaults.guests, MIN_GUESTS, MAX_GUESTS)?;
        check_range(
            "defaults.duration_weeks",
            defaults.duration_weeks,
            MIN_DURATION_WEEKS,
            MAX_DURATION_WEEKS,
        )?;
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn check_range(field: &str, value: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("{} is outside {}..={}", value, min, max),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_extract_without_files() {
        let config: BrigadeConfig = Figment::from(Serialized::defaults(BrigadeConfig::default()))
            .extract()
            .unwrap();
        assert_eq!(config, BrigadeConfig::default());
        assert_eq!(config.defaults.guests, 150);
        assert_eq!(config.server.port, 3141);
    }

    #[test]
    fn local_file_and_env_are_layered() {
        Jail::expect_with(|jail| {
            jail.create_file(
                LOCAL_CONFIG_FILE,
                r#"
                [server]
                port = 9000

                [defaults]
                season = "Winter"
                event = "Wedding"
                "#,
            )?;
            jail.set_env("BRIGADE_DEFAULTS__GUESTS", "300");

            let config = BrigadeConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.server.port, 9000);
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.defaults.season, Season::Winter);
            assert_eq!(config.defaults.event, EventType::Wedding);
            assert_eq!(config.defaults.guests, 300);
            assert_eq!(config.defaults.expected_customers, 120);
            Ok(())
        });
    }

    #[test]
    fn explicit_file_overrides_local() {
        Jail::expect_with(|jail| {
            jail.create_file(LOCAL_CONFIG_FILE, "[dataset]\npath = \"local.csv\"\n")?;
            jail.create_file("custom.toml", "[dataset]\npath = \"custom.csv\"\n")?;

            let config =
                BrigadeConfig::load(Some(Path::new("custom.toml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.dataset.path, PathBuf::from("custom.csv"));
            Ok(())
        });
    }

    #[test]
    fn out_of_range_default_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("BRIGADE_DEFAULTS__DURATION_WEEKS", "40");
            let err = BrigadeConfig::load(None).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "defaults.duration_weeks"));
            Ok(())
        });
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let err = BrigadeConfig::load(Some(Path::new("nope.toml"))).unwrap_err();
            assert!(matches!(err, ConfigError::NotFound(_)));
            Ok(())
        });
    }
}
