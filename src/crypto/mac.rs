// src/crypto/mac.rs
//! MAC handler: HMAC over SHA-2/SHA-3, AES-CMAC

use aes::{Aes128, Aes256};
use cmac::Cmac;
use hmac::digest::KeyInit;
use hmac::{Mac, SimpleHmac};
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_384, Sha3_512};

use crate::algo::Algorithm;
use crate::enums::Primitive;
use crate::error::HandlerError;
use crate::handler::Result;

/// Tag over `payload` keyed with `key`
pub fn compute(algorithm: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Sha2_256 => tag::<SimpleHmac<Sha256>>(algorithm, key, payload),
        Algorithm::Sha2_384 => tag::<SimpleHmac<Sha384>>(algorithm, key, payload),
        Algorithm::Sha2_512 => tag::<SimpleHmac<Sha512>>(algorithm, key, payload),
        Algorithm::Sha3_256 => tag::<SimpleHmac<Sha3_256>>(algorithm, key, payload),
        Algorithm::Sha3_384 => tag::<SimpleHmac<Sha3_384>>(algorithm, key, payload),
        Algorithm::Sha3_512 => tag::<SimpleHmac<Sha3_512>>(algorithm, key, payload),
        Algorithm::Aes128 => tag::<Cmac<Aes128>>(algorithm, key, payload),
        Algorithm::Aes256 => tag::<Cmac<Aes256>>(algorithm, key, payload),
        _ => Err(HandlerError::UnsupportedAlgorithm {
            primitive: Primitive::Mac,
            algorithm,
        }),
    }
}

fn tag<M: Mac + KeyInit>(algorithm: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(key).map_err(|_| HandlerError::InvalidKeyLength {
        algorithm,
        len: key.len(),
    })?;
    mac.update(payload);
    Ok(mac.finalize().into_bytes().to_vec())
}
