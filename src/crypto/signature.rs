// src/crypto/signature.rs
//! Signature handler: signs the payload with the given private key
//!
//! Key encodings:
//! - `Ed25519`: 32-byte seed
//! - `ES256`/`ES384`: big-endian secret scalar; RFC 6979 deterministic,
//!   fixed-width r ‖ s output
//! - `RS*` (PKCS#1 v1.5) and `PS*` (PSS, random salt): PKCS#8 or PKCS#1 DER
//!
//! `ES512` has no backend and is reported as unsupported.

use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;
use sha2::{Sha256, Sha384, Sha512};

use crate::algo::Algorithm;
use crate::enums::Primitive;
use crate::error::HandlerError;
use crate::handler::Result;

pub fn sign(algorithm: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Ed25519 => sign_ed25519(key, payload),
        Algorithm::Es256 => sign_p256(key, payload),
        Algorithm::Es384 => sign_p384(key, payload),
        Algorithm::Rs256 | Algorithm::Rs384 | Algorithm::Rs512 => {
            sign_pkcs1v15(algorithm, rsa_key(algorithm, key)?, payload)
        }
        Algorithm::Ps256 | Algorithm::Ps384 | Algorithm::Ps512 => {
            sign_pss(algorithm, rsa_key(algorithm, key)?, payload)
        }
        _ => Err(HandlerError::UnsupportedAlgorithm {
            primitive: Primitive::Signature,
            algorithm,
        }),
    }
}

fn failed(algorithm: Algorithm) -> impl Fn(rsa::signature::Error) -> HandlerError {
    move |e| HandlerError::Crypto {
        algorithm,
        reason: e.to_string(),
    }
}

fn sign_ed25519(key: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    use ed25519_dalek::{Signer, SigningKey};

    let seed: &[u8; 32] = key
        .try_into()
        .map_err(|_| HandlerError::InvalidKeyLength {
            algorithm: Algorithm::Ed25519,
            len: key.len(),
        })?;
    let signature = SigningKey::from_bytes(seed).sign(payload);
    Ok(signature.to_bytes().to_vec())
}

fn sign_p256(key: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    use p256::ecdsa::signature::Signer;
    use p256::ecdsa::{Signature, SigningKey};

    let algorithm = Algorithm::Es256;
    let signing_key = SigningKey::from_slice(key).map_err(|e| HandlerError::InvalidKey {
        algorithm,
        reason: e.to_string(),
    })?;
    let signature: Signature = signing_key.try_sign(payload).map_err(failed(algorithm))?;
    Ok(signature.to_bytes().to_vec())
}

fn sign_p384(key: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    use p384::ecdsa::signature::Signer;
    use p384::ecdsa::{Signature, SigningKey};

    let algorithm = Algorithm::Es384;
    let signing_key = SigningKey::from_slice(key).map_err(|e| HandlerError::InvalidKey {
        algorithm,
        reason: e.to_string(),
    })?;
    let signature: Signature = signing_key.try_sign(payload).map_err(failed(algorithm))?;
    Ok(signature.to_bytes().to_vec())
}

fn rsa_key(algorithm: Algorithm, der: &[u8]) -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_der(der)
        .or_else(|_| RsaPrivateKey::from_pkcs1_der(der))
        .map_err(|e| HandlerError::InvalidKey {
            algorithm,
            reason: e.to_string(),
        })
}

fn sign_pkcs1v15(algorithm: Algorithm, key: RsaPrivateKey, payload: &[u8]) -> Result<Vec<u8>> {
    use rsa::pkcs1v15::SigningKey;
    use rsa::signature::{SignatureEncoding, Signer};

    let signature = match algorithm {
        Algorithm::Rs256 => SigningKey::<Sha256>::new(key).try_sign(payload),
        Algorithm::Rs384 => SigningKey::<Sha384>::new(key).try_sign(payload),
        _ => SigningKey::<Sha512>::new(key).try_sign(payload),
    };
    Ok(signature.map_err(failed(algorithm))?.to_vec())
}

fn sign_pss(algorithm: Algorithm, key: RsaPrivateKey, payload: &[u8]) -> Result<Vec<u8>> {
    use rand_core::OsRng;
    use rsa::pss::SigningKey;
    use rsa::signature::{RandomizedSigner, SignatureEncoding};

    let mut rng = OsRng;
    let signature = match algorithm {
        Algorithm::Ps256 => SigningKey::<Sha256>::new(key).try_sign_with_rng(&mut rng, payload),
        Algorithm::Ps384 => SigningKey::<Sha384>::new(key).try_sign_with_rng(&mut rng, payload),
        _ => SigningKey::<Sha512>::new(key).try_sign_with_rng(&mut rng, payload),
    };
    Ok(signature.map_err(failed(algorithm))?.to_vec())
}
