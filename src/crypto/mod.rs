// src/crypto/mod.rs
//! RustCrypto-backed primitive handlers
//!
//! Pure functions over byte slices, no I/O. Every handler rejects
//! algorithms outside its family with `UnsupportedAlgorithm`, which is how
//! a mismatched `-primitive`/`-algorithm` pair is finally caught.

pub mod aead;
pub mod daead;
pub mod kdf;
pub mod mac;
pub mod signature;

use crate::algo::Algorithm;
use crate::enums::Primitive;
use crate::error::HandlerError;
use crate::handler::{PrimitiveHandler, Result};

/// Default handler set used by the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoHandler;

impl PrimitiveHandler for RustCryptoHandler {
    fn mac(&self, algorithm: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
        mac::compute(algorithm, key, payload)
    }

    fn aead(
        &self,
        algorithm: Algorithm,
        nonce: &[u8],
        key: &[u8],
        payload: &[u8],
    ) -> Result<Vec<u8>> {
        aead::seal(algorithm, nonce, key, payload)
    }

    fn daead(
        &self,
        algorithm: Algorithm,
        nonce: &[u8],
        key: &[u8],
        payload: &[u8],
    ) -> Result<Vec<u8>> {
        daead::seal(algorithm, nonce, key, payload)
    }

    // No HPKE suite is catalogued yet
    fn hpke(&self, algorithm: Algorithm, _key: &[u8], _payload: &[u8]) -> Result<Vec<u8>> {
        Err(HandlerError::UnsupportedAlgorithm {
            primitive: Primitive::Hpke,
            algorithm,
        })
    }

    fn hkdf(&self, algorithm: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
        kdf::derive(algorithm, key, payload)
    }

    fn signature(&self, algorithm: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
        signature::sign(algorithm, key, payload)
    }

    // Same for key agreement
    fn agreement(&self, algorithm: Algorithm, _key: &[u8], _payload: &[u8]) -> Result<Vec<u8>> {
        Err(HandlerError::UnsupportedAlgorithm {
            primitive: Primitive::Agreement,
            algorithm,
        })
    }
}
