// src/crypto/daead.rs
//! Deterministic AEAD handler: AES-SIV (RFC 5297)
//!
//! The nonce bytes are passed as the single associated-data header, so an
//! empty nonce means one empty header. Same key and inputs always give the
//! same output: synthetic IV ‖ ciphertext.

use aes_siv::aead::KeyInit;
use aes_siv::siv::{Aes128Siv, Aes256Siv};

use crate::algo::Algorithm;
use crate::enums::Primitive;
use crate::error::HandlerError;
use crate::handler::Result;

pub fn seal(algorithm: Algorithm, nonce: &[u8], key: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    if algorithm != Algorithm::AesSiv {
        return Err(HandlerError::UnsupportedAlgorithm {
            primitive: Primitive::Daead,
            algorithm,
        });
    }

    let invalid_key = |_| HandlerError::InvalidKeyLength {
        algorithm,
        len: key.len(),
    };
    let headers = [nonce];

    // AES-SIV keys are double length: 32 bytes → AES-128, 64 → AES-256
    let sealed = match key.len() {
        32 => Aes128Siv::new_from_slice(key)
            .map_err(invalid_key)?
            .encrypt(headers, payload),
        64 => Aes256Siv::new_from_slice(key)
            .map_err(invalid_key)?
            .encrypt(headers, payload),
        len => return Err(HandlerError::InvalidKeyLength { algorithm, len }),
    };

    sealed.map_err(|e| HandlerError::Crypto {
        algorithm,
        reason: e.to_string(),
    })
}
