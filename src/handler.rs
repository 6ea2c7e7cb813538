// src/handler.rs
//! The seam between the dispatcher and the code doing the cryptography

use crate::algo::Algorithm;
use crate::error::HandlerError;

pub type Result<T> = std::result::Result<T, HandlerError>;

/// One method per primitive family.
///
/// Each call performs exactly one operation and returns the artifact the
/// other implementations are compared against (tag, ciphertext, derived
/// key, signature, ...). Handlers must reject algorithms they do not
/// implement rather than fall through silently.
pub trait PrimitiveHandler {
    fn mac(&self, algorithm: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>>;

    fn aead(
        &self,
        algorithm: Algorithm,
        nonce: &[u8],
        key: &[u8],
        payload: &[u8],
    ) -> Result<Vec<u8>>;

    fn daead(
        &self,
        algorithm: Algorithm,
        nonce: &[u8],
        key: &[u8],
        payload: &[u8],
    ) -> Result<Vec<u8>>;

    fn hpke(&self, algorithm: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>>;

    fn hkdf(&self, algorithm: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>>;

    fn signature(&self, algorithm: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>>;

    fn agreement(&self, algorithm: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>>;
}

