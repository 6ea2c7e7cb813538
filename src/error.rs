// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

use crate::algo::Algorithm;
use crate::enums::Primitive;
use crate::input::InputField;

/// Terminal failures of the validate → dispatch pipeline.
///
/// `Display` is the single diagnostic line printed on stderr.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("missing primitive")]
    MissingPrimitive,

    #[error("missing algorithm")]
    MissingAlgorithm,

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("invalid {field}: {source}")]
    Decode {
        field: InputField,
        #[source]
        source: base64::DecodeError,
    },

    #[error("invalid input: {0}")]
    InputRead(#[from] std::io::Error),

    #[error("Unknown primitive: {0}")]
    UnknownPrimitive(String),

    #[error("{primitive} failed: {source}")]
    Handler {
        primitive: Primitive,
        #[source]
        source: HandlerError,
    },
}

/// Failures reported by a primitive handler
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("{algorithm} is not supported for {primitive}")]
    UnsupportedAlgorithm {
        primitive: Primitive,
        algorithm: Algorithm,
    },

    #[error("invalid key length for {algorithm}: {len} bytes")]
    InvalidKeyLength { algorithm: Algorithm, len: usize },

    #[error("invalid nonce length for {algorithm}: expected {expected} bytes, got {actual}")]
    InvalidNonceLength {
        algorithm: Algorithm,
        expected: usize,
        actual: usize,
    },

    #[error("invalid key for {algorithm}: {reason}")]
    InvalidKey { algorithm: Algorithm, reason: String },

    #[error("{algorithm} operation failed: {reason}")]
    Crypto { algorithm: Algorithm, reason: String },
}

/// Problems reading the optional TOML config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown output format: {0}")]
    OutputFormat(String),
}
