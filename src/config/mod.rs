// src/config/mod.rs
//! Configuration system for the harness
//!
//! Central, lazy-loaded global config with TOML + env overrides. Nothing in
//! here changes what is validated or dispatched; it only shapes output and
//! logging.

pub use app::{from_toml_str, layer, load, read_file, warnings, Config, Loaded, Logging, Output};

mod app;
mod defaults;
