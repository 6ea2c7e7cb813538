// src/catalog.rs
//! Algorithm catalog: which identifiers exist and which are skipped
//!
//! Each family is a static, append-only table. Registering a new algorithm
//! is one line here plus one variant in [`Algorithm`]. The tables are meant
//! to be diffed against the other harnesses, so keep their order stable.
//!
//! Membership is many-to-many (`SHA2-256` is a MAC, HMAC and HKDF id) and
//! the catalog never checks that a requested primitive fits the algorithm.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

use crate::algo::Algorithm;

/// Known but deliberately not run by this harness
pub const IGNORED_ALGORITHMS: &[Algorithm] = &[Algorithm::Blake3];

pub const MAC_ALGORITHMS: &[Algorithm] = &[
    Algorithm::Sha2_256,
    Algorithm::Sha2_384,
    Algorithm::Sha2_512,
    Algorithm::Sha3_256,
    Algorithm::Sha3_384,
    Algorithm::Sha3_512,
    Algorithm::Aes128,
    Algorithm::Aes256,
];

pub const HMAC_ALGORITHMS: &[Algorithm] = &[
    Algorithm::Sha2_256,
    Algorithm::Sha2_384,
    Algorithm::Sha2_512,
    Algorithm::Sha3_256,
    Algorithm::Sha3_384,
    Algorithm::Sha3_512,
];

pub const HKDF_ALGORITHMS: &[Algorithm] = &[
    Algorithm::Sha2_256,
    Algorithm::Sha2_384,
    Algorithm::Sha2_512,
    Algorithm::Sha3_256,
    Algorithm::Sha3_384,
    Algorithm::Sha3_512,
];

pub const AEAD_ALGORITHMS: &[Algorithm] = &[
    Algorithm::Aes128Gcm,
    Algorithm::Aes256Gcm,
    Algorithm::ChaCha20Poly1305,
    Algorithm::XChaCha20Poly1305,
];

pub const DAEAD_ALGORITHMS: &[Algorithm] = &[Algorithm::AesSiv];

pub const SIGNATURE_ALGORITHMS: &[Algorithm] = &[
    Algorithm::Es256,
    Algorithm::Es384,
    Algorithm::Es512, // no RustCrypto/ring backend; handler reports unsupported
    Algorithm::Ed25519,
    Algorithm::Rs256,
    Algorithm::Rs384,
    Algorithm::Rs512,
    Algorithm::Ps256,
    Algorithm::Ps384,
    Algorithm::Ps512,
];

pub const AGREEMENT_ALGORITHMS: &[Algorithm] = &[];

pub const HPKE_ALGORITHMS: &[Algorithm] = &[];

/// Every table by name, in registration order
pub const FAMILIES: &[(&str, &[Algorithm])] = &[
    ("ignored", IGNORED_ALGORITHMS),
    ("MAC", MAC_ALGORITHMS),
    ("HMAC", HMAC_ALGORITHMS),
    ("HKDF", HKDF_ALGORITHMS),
    ("AEAD", AEAD_ALGORITHMS),
    ("DAEAD", DAEAD_ALGORITHMS),
    ("Signature", SIGNATURE_ALGORITHMS),
    ("Agreement", AGREEMENT_ALGORITHMS),
    ("HPKE", HPKE_ALGORITHMS),
];

/// Union of all tables, built once on first lookup
static KNOWN: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    FAMILIES
        .iter()
        .flat_map(|(_, table)| table.iter())
        .map(|a| a.id())
        .collect()
});

static IGNORED: Lazy<BTreeSet<&'static str>> =
    Lazy::new(|| IGNORED_ALGORITHMS.iter().map(|a| a.id()).collect());

pub fn is_known(id: &str) -> bool {
    KNOWN.contains(id)
}

pub fn is_ignored(id: &str) -> bool {
    IGNORED.contains(id)
}

/// Names of the tables listing `algorithm`
pub fn families_of(algorithm: Algorithm) -> Vec<&'static str> {
    FAMILIES
        .iter()
        .filter(|(_, table)| table.contains(&algorithm))
        .map(|(name, _)| *name)
        .collect()
}

/// All known identifiers in sorted order
pub fn known_ids() -> impl Iterator<Item = &'static str> {
    KNOWN.iter().copied()
}
