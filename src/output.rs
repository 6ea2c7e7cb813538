// src/output.rs
//! Writes a completed artifact to stdout in the configured encoding

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;

use crate::algo::Algorithm;
use crate::config::Output;
use crate::enums::{OutputFormat, Primitive};

/// Renders `artifact` for a text format; `None` for [`OutputFormat::Raw`]
pub fn render(
    format: OutputFormat,
    primitive: Primitive,
    algorithm: Algorithm,
    artifact: &[u8],
) -> Option<String> {
    match format {
        OutputFormat::Base64 => Some(STANDARD.encode(artifact)),
        OutputFormat::Hex => Some(hex::encode(artifact)),
        OutputFormat::Json => Some(
            json!({
                "primitive": primitive,
                "algorithm": algorithm,
                "output": STANDARD.encode(artifact),
            })
            .to_string(),
        ),
        OutputFormat::Raw => None,
    }
}

pub fn emit<W: Write>(
    mut out: W,
    settings: &Output,
    primitive: Primitive,
    algorithm: Algorithm,
    artifact: &[u8],
) -> io::Result<()> {
    match render(settings.format, primitive, algorithm, artifact) {
        Some(text) => {
            out.write_all(text.as_bytes())?;
            if settings.trailing_newline {
                out.write_all(b"\n")?;
            }
        }
        None => out.write_all(artifact)?,
    }
    out.flush()
}
