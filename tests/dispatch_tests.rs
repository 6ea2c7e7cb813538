// tests/dispatch_tests.rs
mod common;
mod support;
use support::{b64, flags, RecordingHandler, UntouchableStdin};

use crypto_interop_harness::dispatch::route;
use crypto_interop_harness::{
    run, Algorithm, HandlerError, HarnessError, Outcome, Primitive, RustCryptoHandler,
};

#[test]
fn test_ignored_algorithm_invokes_no_handler() {
    common::setup();
    let handler = RecordingHandler::default();
    let f = flags("MAC", "BLAKE3", "", &b64(b"k"), &[b64(b"anything").as_str()]);
    let outcome = run(&f, UntouchableStdin, &handler).unwrap();
    assert_eq!(
        outcome,
        Outcome::Skipped {
            algorithm: Algorithm::Blake3
        }
    );
    assert!(handler.calls().is_empty());
}

#[test]
fn test_unknown_algorithm_invokes_no_handler() {
    let handler = RecordingHandler::default();
    let f = flags("AEAD", "UNKNOWN-ALGO", &b64(&[0; 12]), &b64(&[0; 16]), &[]);
    let err = run(&f, UntouchableStdin, &handler).unwrap_err();
    assert_eq!(err.to_string(), "unknown algorithm: UNKNOWN-ALGO");
    assert!(handler.calls().is_empty());
}

#[test]
fn test_mac_with_stdin_payload() {
    let handler = RecordingHandler::default();
    let f = flags("MAC", "SHA2-256", "", &b64(b"k"), &[]);
    let stdin: &[u8] = &[0, 1, 2];
    let outcome = run(&f, stdin, &handler).unwrap();

    let calls = handler.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].primitive, Primitive::Mac);
    assert_eq!(calls[0].algorithm, Algorithm::Sha2_256);
    assert_eq!(calls[0].nonce, None);
    assert_eq!(calls[0].key, b"k");
    assert_eq!(calls[0].payload, vec![0, 1, 2]);
    assert!(matches!(outcome, Outcome::Completed { artifact, .. } if artifact == b"MAC"));
}

#[test]
fn test_aead_with_positional_payload() {
    let nonce: [u8; 12] = rand::random();
    let key: [u8; 16] = rand::random();
    let handler = RecordingHandler::default();
    let payload = b64(b"hello");
    let f = flags("AEAD", "AES-128-GCM", &b64(&nonce), &b64(&key), &[payload.as_str()]);

    run(&f, UntouchableStdin, &handler).unwrap();

    let calls = handler.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].nonce.as_deref(), Some(&nonce[..]));
    assert_eq!(calls[0].key, key);
    assert_eq!(calls[0].payload, b"hello");
}

#[test]
fn test_each_primitive_routes_to_its_handler() {
    let cases = [
        ("MAC", "SHA2-384", Primitive::Mac),
        ("AEAD", "ChaCha20Poly1305", Primitive::Aead),
        ("DAEAD", "AES-SIV", Primitive::Daead),
        ("HPKE", "SHA2-256", Primitive::Hpke),
        ("HKDF", "SHA3-512", Primitive::Hkdf),
        ("Signature", "Ed25519", Primitive::Signature),
        ("Agreement", "SHA2-256", Primitive::Agreement),
    ];

    for (name, algorithm, expected) in cases {
        let handler = RecordingHandler::default();
        let f = flags(name, algorithm, &b64(b"n"), &b64(b"k"), &[b64(b"p").as_str()]);
        run(&f, UntouchableStdin, &handler).unwrap();

        let calls = handler.calls();
        assert_eq!(calls.len(), 1, "{name}");
        assert_eq!(calls[0].primitive, expected);
        assert_eq!(calls[0].nonce.is_some(), expected.takes_nonce(), "{name}");
    }
}

#[test]
fn test_route_rejects_unknown_primitive() {
    for name in ["", "Mac", "KEM", "AEAD "] {
        let err = route(name).unwrap_err();
        assert_eq!(err.to_string(), format!("Unknown primitive: {name}"));
    }
    for p in Primitive::ALL {
        assert_eq!(route(p.as_str()).unwrap(), p);
    }
}

#[test]
fn test_mismatched_family_is_rejected_by_handler() {
    let f = flags("Signature", "AES-128-GCM", "", &b64(&[0; 16]), &[b64(b"m").as_str()]);
    let err = run(&f, UntouchableStdin, &RustCryptoHandler).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Handler {
            primitive: Primitive::Signature,
            source: HandlerError::UnsupportedAlgorithm { .. },
        }
    ));
}

#[test]
fn test_rustcrypto_pipeline_end_to_end() {
    common::setup();
    // RFC 4231 test case 2
    let f = flags("MAC", "SHA2-256", "", &b64(b"Jefe"), &[]);
    let stdin: &[u8] = b"what do ya want for nothing?";
    let outcome = run(&f, stdin, &RustCryptoHandler).unwrap();
    let Outcome::Completed { artifact, .. } = outcome else {
        panic!("expected a completed outcome");
    };
    assert_eq!(
        hex::encode(artifact),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}
