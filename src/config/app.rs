// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

use crate::consts::{CONFIG_ENV, DEFAULT_CONFIG_PATH, OUTPUT_FORMAT_ENV};
use crate::enums::OutputFormat;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: Output,
    pub logging: Logging,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Output {
    pub format: OutputFormat,
    pub trailing_newline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// `EnvFilter` directive, e.g. `"warn"` or `"crypto_interop_harness=debug"`
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: default_output(),
            logging: default_logging(),
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        default_output()
    }
}

impl Default for Logging {
    fn default() -> Self {
        default_logging()
    }
}

/// Config plus whatever was rejected while building it
#[derive(Debug, Default)]
pub struct Loaded {
    pub config: Config,
    pub warnings: Vec<ConfigError>,
}

static CONFIG: OnceLock<Loaded> = OnceLock::new();

fn loaded() -> &'static Loaded {
    CONFIG.get_or_init(|| {
        let format = std::env::var(OUTPUT_FORMAT_ENV).ok();
        layer(read_file(), format.as_deref())
    })
}

/// Load config once; bad layers are skipped and kept for [`warnings`]
pub fn load() -> &'static Config {
    &loaded().config
}

/// Settings rejected by [`load`]. Logged by the binary once tracing is up.
pub fn warnings() -> &'static [ConfigError] {
    &loaded().warnings
}

/// Reads `$CIH_CONFIG` (or `interop-harness.toml`); a missing file is the defaults
pub fn read_file() -> Result<Config, ConfigError> {
    let config_path =
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    if Path::new(&config_path).exists() {
        from_toml_str(&std::fs::read_to_string(&config_path)?)
    } else {
        Ok(Config::default())
    }
}

/// Built-in defaults, then the file, then the env override
pub fn layer(file: Result<Config, ConfigError>, format_override: Option<&str>) -> Loaded {
    let mut warnings = Vec::new();

    let mut config = file.unwrap_or_else(|e| {
        warnings.push(e);
        Config::default()
    });

    if let Some(format) = format_override {
        match format.parse() {
            Ok(format) => config.output.format = format,
            Err(e) => warnings.push(e),
        }
    }

    Loaded { config, warnings }
}

pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}
