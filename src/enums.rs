// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the closed sets a caller picks from on the
//! command line or in the config file: primitive families and output
//! encodings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, HarnessError};

/// Cryptographic capability family requested with `-primitive`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    #[serde(rename = "MAC")]
    Mac,
    #[serde(rename = "AEAD")]
    Aead,
    #[serde(rename = "DAEAD")]
    Daead,
    #[serde(rename = "HPKE")]
    Hpke,
    #[serde(rename = "HKDF")]
    Hkdf,
    Signature,
    Agreement,
}

impl Primitive {
    pub const ALL: [Primitive; 7] = [
        Primitive::Mac,
        Primitive::Aead,
        Primitive::Daead,
        Primitive::Hpke,
        Primitive::Hkdf,
        Primitive::Signature,
        Primitive::Agreement,
    ];

    /// Exact, case-sensitive name used on the command line
    pub const fn as_str(self) -> &'static str {
        match self {
            Primitive::Mac => "MAC",
            Primitive::Aead => "AEAD",
            Primitive::Daead => "DAEAD",
            Primitive::Hpke => "HPKE",
            Primitive::Hkdf => "HKDF",
            Primitive::Signature => "Signature",
            Primitive::Agreement => "Agreement",
        }
    }

    /// AEAD and DAEAD are the only families whose handlers take a nonce
    pub const fn takes_nonce(self) -> bool {
        matches!(self, Primitive::Aead | Primitive::Daead)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Primitive {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Primitive::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| HarnessError::UnknownPrimitive(s.to_owned()))
    }
}

/// How a completed artifact is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Base64,
    Hex,
    Json,
    Raw,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base64" => Ok(OutputFormat::Base64),
            "hex" => Ok(OutputFormat::Hex),
            "json" => Ok(OutputFormat::Json),
            "raw" => Ok(OutputFormat::Raw),
            other => Err(ConfigError::OutputFormat(other.to_owned())),
        }
    }
}
