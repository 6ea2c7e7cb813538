// src/dispatch.rs
//! Primitive dispatcher and the end-to-end pipeline
//!
//! Routing is an exact string match on the primitive name. The dispatcher
//! does no cryptography; it hands each handler only the inputs its family
//! uses (nonce goes to AEAD and DAEAD alone).

use std::io::Read;

use tracing::debug;

use crate::algo::Algorithm;
use crate::enums::Primitive;
use crate::error::HarnessError;
use crate::handler::PrimitiveHandler;
use crate::request::{validate, Flags, Request, Validated};

/// Terminal success states of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed {
        primitive: Primitive,
        algorithm: Algorithm,
        artifact: Vec<u8>,
    },
    Skipped {
        algorithm: Algorithm,
    },
}

/// Maps a primitive name to its route, rejecting anything else
pub fn route(name: &str) -> Result<Primitive, HarnessError> {
    name.parse()
}

/// Invokes the handler for `request.primitive()`
pub fn dispatch<H: PrimitiveHandler + ?Sized>(
    handler: &H,
    request: Request,
) -> Result<Vec<u8>, HarnessError> {
    let primitive = request.primitive();
    let algorithm = request.algorithm();
    let (nonce, key, payload) = (request.nonce(), request.key(), request.payload());

    debug!(%primitive, %algorithm, "dispatching");

    let artifact = match primitive {
        Primitive::Mac => handler.mac(algorithm, key, payload),
        Primitive::Aead => handler.aead(algorithm, nonce, key, payload),
        Primitive::Daead => handler.daead(algorithm, nonce, key, payload),
        Primitive::Hpke => handler.hpke(algorithm, key, payload),
        Primitive::Hkdf => handler.hkdf(algorithm, key, payload),
        Primitive::Signature => handler.signature(algorithm, key, payload),
        Primitive::Agreement => handler.agreement(algorithm, key, payload),
    };

    artifact.map_err(|source| HarnessError::Handler { primitive, source })
}

/// Validate, then dispatch: the whole pipeline for one invocation
pub fn run<R: Read, H: PrimitiveHandler + ?Sized>(
    flags: &Flags,
    stdin: R,
    handler: &H,
) -> Result<Outcome, HarnessError> {
    match validate(flags, stdin)? {
        Validated::Skipped(algorithm) => Ok(Outcome::Skipped { algorithm }),
        Validated::Ready(request) => {
            let primitive = request.primitive();
            let algorithm = request.algorithm();
            let artifact = dispatch(handler, request)?;
            Ok(Outcome::Completed {
                primitive,
                algorithm,
                artifact,
            })
        }
    }
}
