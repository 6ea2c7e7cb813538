// src/input.rs
//! Input normalizer: nonce, key and payload bytes
//!
//! Nonce and key always come from their flags as standard base64 (with
//! padding). The payload has two sources:
//!
//! - positional arguments after the first, joined with spaces and decoded
//!   as base64 text (the first positional is a mode token owned by
//!   whoever invokes the harness, never payload)
//! - standard input, taken verbatim as raw bytes, when the positional
//!   text is blank
//!
//! Standard input is only read in the second case.

use std::fmt;
use std::io::Read;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::error::HarnessError;

/// Which piece of input failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Nonce,
    Key,
    Input,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputField::Nonce => "nonce",
            InputField::Key => "key",
            InputField::Input => "input",
        })
    }
}

/// Standard base64 → bytes, tagging failures with the field name
pub fn decode_field(field: InputField, text: &str) -> Result<Vec<u8>, HarnessError> {
    STANDARD
        .decode(text)
        .map_err(|source| HarnessError::Decode { field, source })
}

/// Joins every positional argument after the first, each with a leading space
pub fn joined_positional(args: &[String]) -> String {
    args.iter().skip(1).fold(String::new(), |mut acc, arg| {
        acc.push(' ');
        acc.push_str(arg);
        acc
    })
}

/// Resolves the payload from positional text, falling back to `stdin`
pub fn resolve_payload<R: Read>(args: &[String], mut stdin: R) -> Result<Vec<u8>, HarnessError> {
    let joined = joined_positional(args);
    let text = joined.trim();

    if text.is_empty() {
        let mut buf = Vec::new();
        stdin.read_to_end(&mut buf)?;
        debug!(bytes = buf.len(), "payload read from stdin");
        return Ok(buf);
    }

    let payload = decode_field(InputField::Input, text)?;
    debug!(bytes = payload.len(), "payload decoded from arguments");
    Ok(payload)
}

