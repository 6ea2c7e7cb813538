// src/crypto/kdf.rs
//! HKDF handler (RFC 5869)
//!
//! IKM is the key, there is no salt, info is the payload and the output
//! length equals the hash output length.

use hkdf::SimpleHkdf;
use hmac::digest::core_api::BlockSizeUser;
use hmac::digest::Digest;
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_384, Sha3_512};

use crate::algo::Algorithm;
use crate::enums::Primitive;
use crate::error::HandlerError;
use crate::handler::Result;

pub fn derive(algorithm: Algorithm, ikm: &[u8], info: &[u8]) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Sha2_256 => expand::<Sha256>(algorithm, ikm, info),
        Algorithm::Sha2_384 => expand::<Sha384>(algorithm, ikm, info),
        Algorithm::Sha2_512 => expand::<Sha512>(algorithm, ikm, info),
        Algorithm::Sha3_256 => expand::<Sha3_256>(algorithm, ikm, info),
        Algorithm::Sha3_384 => expand::<Sha3_384>(algorithm, ikm, info),
        Algorithm::Sha3_512 => expand::<Sha3_512>(algorithm, ikm, info),
        _ => Err(HandlerError::UnsupportedAlgorithm {
            primitive: Primitive::Hkdf,
            algorithm,
        }),
    }
}

fn expand<D>(algorithm: Algorithm, ikm: &[u8], info: &[u8]) -> Result<Vec<u8>>
where
    D: Digest + BlockSizeUser + Clone,
{
    let hk = SimpleHkdf::<D>::new(None, ikm);
    let mut okm = vec![0u8; <D as Digest>::output_size()];
    hk.expand(info, &mut okm)
        .map_err(|e| HandlerError::Crypto {
            algorithm,
            reason: e.to_string(),
        })?;
    Ok(okm)
}
