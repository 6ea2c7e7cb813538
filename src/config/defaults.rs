// src/config/defaults.rs
use crate::config::app::{Logging, Output};
use crate::consts::DEFAULT_LOG_FILTER;
use crate::enums::OutputFormat;

pub fn default_output() -> Output {
    Output {
        format: OutputFormat::Base64,
        trailing_newline: true,
    }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}
