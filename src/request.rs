// src/request.rs
//! Request validator: the one place preconditions are enforced
//!
//! Checks run in a fixed order so the same bad invocation always yields
//! the same diagnostic:
//!
//! 1. primitive present
//! 2. algorithm present
//! 3. algorithm known
//! 4. algorithm ignored → [`Validated::Skipped`], nothing else runs
//! 5. nonce decodes
//! 6. key decodes
//! 7. payload resolves (may read stdin)
//! 8. primitive routes to a handler

use std::fmt;
use std::io::Read;

use tracing::{debug, info};

use crate::algo::Algorithm;
use crate::aliases::{KeyBytes, PlainText};
use crate::catalog;
use crate::dispatch::route;
use crate::enums::Primitive;
use crate::error::HarnessError;
use crate::input::{decode_field, resolve_payload, InputField};

/// Raw flag values and positional arguments, exactly as parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub primitive: String,
    pub algorithm: String,
    pub nonce: String,
    pub key: String,
    /// Positional arguments; the first one is the mode token
    pub args: Vec<String>,
}

/// A fully validated unit of work, consumed once by the dispatcher
pub struct Request {
    primitive: Primitive,
    algorithm: Algorithm,
    nonce: Vec<u8>,
    key: KeyBytes,
    payload: PlainText,
}

impl Request {
    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn nonce(&self) -> &[u8] {
        &self.nonce
    }

    pub fn key(&self) -> &[u8] {
        self.key.expose_secret().as_slice()
    }

    pub fn payload(&self) -> &[u8] {
        self.payload.expose_secret().as_slice()
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("primitive", &self.primitive)
            .field("algorithm", &self.algorithm)
            .field("nonce_len", &self.nonce.len())
            .field("key", &"[REDACTED]")
            .field("payload_len", &self.payload().len())
            .finish()
    }
}

/// Result of a successful validation pass
#[derive(Debug)]
pub enum Validated {
    Ready(Request),
    /// Known but ignored algorithm: a success that runs nothing
    Skipped(Algorithm),
}

/// Validates `flags`, reading `stdin` only when no positional payload is given
pub fn validate<R: Read>(flags: &Flags, stdin: R) -> Result<Validated, HarnessError> {
    if flags.primitive.is_empty() {
        return Err(HarnessError::MissingPrimitive);
    }
    if flags.algorithm.is_empty() {
        return Err(HarnessError::MissingAlgorithm);
    }

    let id = flags.algorithm.as_str();
    let algorithm = match Algorithm::from_id(id) {
        Some(a) if catalog::is_known(id) => a,
        _ => return Err(HarnessError::UnknownAlgorithm(flags.algorithm.clone())),
    };

    if catalog::is_ignored(id) {
        info!(%algorithm, "ignored algorithm, skipping");
        return Ok(Validated::Skipped(algorithm));
    }

    let nonce = decode_field(InputField::Nonce, &flags.nonce)?;
    let key = KeyBytes::new(decode_field(InputField::Key, &flags.key)?);
    let payload = PlainText::new(resolve_payload(&flags.args, stdin)?);

    let primitive = route(&flags.primitive)?;

    debug!(
        %primitive,
        %algorithm,
        families = ?catalog::families_of(algorithm),
        "request validated"
    );

    Ok(Validated::Ready(Request {
        primitive,
        algorithm,
        nonce,
        key,
        payload,
    }))
}
