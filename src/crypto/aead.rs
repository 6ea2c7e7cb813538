// src/crypto/aead.rs
//! AEAD handler: AES-GCM and (X)ChaCha20-Poly1305 seal
//!
//! Associated data is always empty. The artifact is ciphertext ‖ tag.

use aes_gcm::aead::generic_array::typenum::Unsigned;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes128Gcm, Aes256Gcm};
use chacha20poly1305::{ChaCha20Poly1305, XChaCha20Poly1305};

use crate::algo::Algorithm;
use crate::enums::Primitive;
use crate::error::HandlerError;
use crate::handler::Result;

pub fn seal(algorithm: Algorithm, nonce: &[u8], key: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Aes128Gcm => seal_with::<Aes128Gcm>(algorithm, nonce, key, payload),
        Algorithm::Aes256Gcm => seal_with::<Aes256Gcm>(algorithm, nonce, key, payload),
        Algorithm::ChaCha20Poly1305 => {
            seal_with::<ChaCha20Poly1305>(algorithm, nonce, key, payload)
        }
        Algorithm::XChaCha20Poly1305 => {
            seal_with::<XChaCha20Poly1305>(algorithm, nonce, key, payload)
        }
        _ => Err(HandlerError::UnsupportedAlgorithm {
            primitive: Primitive::Aead,
            algorithm,
        }),
    }
}

fn seal_with<C: Aead + KeyInit>(
    algorithm: Algorithm,
    nonce: &[u8],
    key: &[u8],
    payload: &[u8],
) -> Result<Vec<u8>> {
    let cipher = C::new_from_slice(key).map_err(|_| HandlerError::InvalidKeyLength {
        algorithm,
        len: key.len(),
    })?;

    let expected = C::NonceSize::USIZE;
    if nonce.len() != expected {
        return Err(HandlerError::InvalidNonceLength {
            algorithm,
            expected,
            actual: nonce.len(),
        });
    }

    cipher
        .encrypt(GenericArray::from_slice(nonce), payload)
        .map_err(|e| HandlerError::Crypto {
            algorithm,
            reason: e.to_string(),
        })
}
