use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::RadiusLimits;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Search radius bounds per subscription tier, in meters
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_radius")]
    pub min_radius_m: f64,
    #[serde(default = "default_free_max_radius")]
    pub free_max_radius_m: f64,
    #[serde(default = "default_premium_max_radius")]
    pub premium_max_radius_m: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_radius_m: default_min_radius(),
            free_max_radius_m: default_free_max_radius(),
            premium_max_radius_m: default_premium_max_radius(),
        }
    }
}

impl MatchingSettings {
    pub fn radius_limits(&self) -> RadiusLimits {
        RadiusLimits {
            min: self.min_radius_m,
            free_max: self.free_max_radius_m,
            premium_max: self.premium_max_radius_m,
        }
    }
}

fn default_min_radius() -> f64 { 10.0 }
fn default_free_max_radius() -> f64 { 50.0 }
fn default_premium_max_radius() -> f64 { 100.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RADAR__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RADAR__MATCHING__FREE_MAX_RADIUS_M -> matching.free_max_radius_m
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("RADAR")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
