// tests/validator_tests.rs
mod support;
use support::{b64, flags, UntouchableStdin};

use crypto_interop_harness::input::InputField;
use crypto_interop_harness::{validate, Algorithm, Flags, HarnessError, Primitive, Validated};

fn ready(v: Validated) -> crypto_interop_harness::Request {
    match v {
        Validated::Ready(request) => request,
        Validated::Skipped(a) => panic!("unexpected skip of {a}"),
    }
}

#[test]
fn test_missing_primitive_is_reported_before_missing_algorithm() {
    let err = validate(&Flags::default(), UntouchableStdin).unwrap_err();
    assert!(matches!(err, HarnessError::MissingPrimitive));
    assert_eq!(err.to_string(), "missing primitive");
}

#[test]
fn test_missing_algorithm() {
    let err = validate(&flags("MAC", "", "", "", &[]), UntouchableStdin).unwrap_err();
    assert_eq!(err.to_string(), "missing algorithm");
}

#[test]
fn test_unknown_algorithm_fails_before_decoding() {
    // nonce and key are garbage: the algorithm check must come first
    let f = flags("AEAD", "UNKNOWN-ALGO", "%%%", "%%%", &["%%%"]);
    let err = validate(&f, UntouchableStdin).unwrap_err();
    assert_eq!(err.to_string(), "unknown algorithm: UNKNOWN-ALGO");
}

#[test]
fn test_ignored_algorithm_is_skipped_without_touching_input() {
    let f = flags("MAC", "BLAKE3", "%%%", "%%%", &[]);
    let v = validate(&f, UntouchableStdin).unwrap();
    assert!(matches!(v, Validated::Skipped(Algorithm::Blake3)));
}

#[test]
fn test_invalid_nonce() {
    let f = flags("AEAD", "AES-256-GCM", "not-b64!", &b64(&[7; 32]), &[b64(b"x").as_str()]);
    let err = validate(&f, UntouchableStdin).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Decode {
            field: InputField::Nonce,
            ..
        }
    ));
    assert!(err.to_string().starts_with("invalid nonce: "));
}

#[test]
fn test_invalid_key_is_checked_after_nonce() {
    let f = flags("AEAD", "AES-256-GCM", &b64(&[0; 12]), "%%%", &["%%%"]);
    let err = validate(&f, UntouchableStdin).unwrap_err();
    assert!(err.to_string().starts_with("invalid key: "));
}

#[test]
fn test_invalid_payload_is_checked_after_key() {
    let f = flags("AEAD", "AES-256-GCM", &b64(&[0; 12]), &b64(&[1; 32]), &["%%%"]);
    let err = validate(&f, UntouchableStdin).unwrap_err();
    assert!(err.to_string().starts_with("invalid input: "));
}

#[test]
fn test_unknown_primitive_is_reported_last() {
    let f = flags("Cipher", "AES-256-GCM", "", "", &[b64(b"x").as_str()]);
    let err = validate(&f, UntouchableStdin).unwrap_err();
    assert_eq!(err.to_string(), "Unknown primitive: Cipher");

    // primitive names are case-sensitive
    let f = flags("mac", "SHA2-256", "", "", &[b64(b"x").as_str()]);
    assert!(matches!(
        validate(&f, UntouchableStdin),
        Err(HarnessError::UnknownPrimitive(p)) if p == "mac"
    ));
}

#[test]
fn test_request_carries_decoded_material() {
    let f = flags("DAEAD", "AES-SIV", &b64(b"nonce"), &b64(b"key"), &[b64(b"msg").as_str()]);
    let request = ready(validate(&f, UntouchableStdin).unwrap());
    assert_eq!(request.primitive(), Primitive::Daead);
    assert_eq!(request.algorithm(), Algorithm::AesSiv);
    assert_eq!(request.nonce(), b"nonce");
    assert_eq!(request.key(), b"key");
    assert_eq!(request.payload(), b"msg");
}

#[test]
fn test_request_debug_redacts_key() {
    let f = flags("MAC", "SHA2-256", "", &b64(b"super-secret"), &[b64(b"m").as_str()]);
    let request = ready(validate(&f, UntouchableStdin).unwrap());
    let debug = format!("{request:?}");
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("super-secret"));
}

#[test]
fn test_primitive_algorithm_mismatch_is_not_rejected() {
    // family consistency is left to the handler
    let f = flags("Signature", "AES-128-GCM", "", &b64(b"k"), &[b64(b"m").as_str()]);
    let request = ready(validate(&f, UntouchableStdin).unwrap());
    assert_eq!(request.primitive(), Primitive::Signature);
    assert_eq!(request.algorithm(), Algorithm::Aes128Gcm);
}
