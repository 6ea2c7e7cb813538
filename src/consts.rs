// src/consts.rs
//! Shared constants: flag names, environment variables, defaults

/// Long flags understood by the harness (Go-style single dash is accepted too)
pub const FLAG_NAMES: [&str; 4] = ["primitive", "algorithm", "nonce", "key"];

/// Environment variable naming the TOML config file
pub const CONFIG_ENV: &str = "CIH_CONFIG";

/// Config file looked up in the working directory when `CIH_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "interop-harness.toml";

/// Environment override for `[output] format`
pub const OUTPUT_FORMAT_ENV: &str = "CIH_OUTPUT_FORMAT";

/// Log filter used when neither `RUST_LOG` nor `-v` says otherwise
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Exit status for any validation or handler failure
pub const FAILURE_EXIT_CODE: u8 = 1;
