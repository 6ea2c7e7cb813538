// tests/support.rs
//! Test doubles: a handler that records calls, stdin that must not be read

use std::cell::RefCell;
use std::io::{self, Read};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crypto_interop_harness::{Algorithm, Flags, HandlerError, Primitive, PrimitiveHandler};

/// One handler invocation as seen by the handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub primitive: Primitive,
    pub algorithm: Algorithm,
    /// `None` for families whose handler takes no nonce
    pub nonce: Option<Vec<u8>>,
    pub key: Vec<u8>,
    pub payload: Vec<u8>,
}

/// Records every call and answers with the primitive name as the artifact
#[derive(Default)]
pub struct RecordingHandler {
    calls: RefCell<Vec<Call>>,
}

#[allow(dead_code)]
impl RecordingHandler {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(
        &self,
        primitive: Primitive,
        algorithm: Algorithm,
        nonce: Option<&[u8]>,
        key: &[u8],
        payload: &[u8],
    ) -> Result<Vec<u8>, HandlerError> {
        self.calls.borrow_mut().push(Call {
            primitive,
            algorithm,
            nonce: nonce.map(<[u8]>::to_vec),
            key: key.to_vec(),
            payload: payload.to_vec(),
        });
        Ok(primitive.as_str().as_bytes().to_vec())
    }
}

impl PrimitiveHandler for RecordingHandler {
    fn mac(&self, a: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>, HandlerError> {
        self.record(Primitive::Mac, a, None, key, payload)
    }

    fn aead(
        &self,
        a: Algorithm,
        nonce: &[u8],
        key: &[u8],
        payload: &[u8],
    ) -> Result<Vec<u8>, HandlerError> {
        self.record(Primitive::Aead, a, Some(nonce), key, payload)
    }

    fn daead(
        &self,
        a: Algorithm,
        nonce: &[u8],
        key: &[u8],
        payload: &[u8],
    ) -> Result<Vec<u8>, HandlerError> {
        self.record(Primitive::Daead, a, Some(nonce), key, payload)
    }

    fn hpke(&self, a: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>, HandlerError> {
        self.record(Primitive::Hpke, a, None, key, payload)
    }

    fn hkdf(&self, a: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>, HandlerError> {
        self.record(Primitive::Hkdf, a, None, key, payload)
    }

    fn signature(&self, a: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>, HandlerError> {
        self.record(Primitive::Signature, a, None, key, payload)
    }

    fn agreement(&self, a: Algorithm, key: &[u8], payload: &[u8]) -> Result<Vec<u8>, HandlerError> {
        self.record(Primitive::Agreement, a, None, key, payload)
    }
}

#[allow(dead_code)]
/// Stdin stand-in that fails the pipeline if anything reads it
pub struct UntouchableStdin;

impl Read for UntouchableStdin {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("stdin must not be read"))
    }
}

#[allow(dead_code)]
pub fn b64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Flags with a mode token followed by `payload` positionals
#[allow(dead_code)]
pub fn flags(primitive: &str, algorithm: &str, nonce: &str, key: &str, payload: &[&str]) -> Flags {
    let mut args = vec!["mode".to_owned()];
    args.extend(payload.iter().map(|s| s.to_string()));
    Flags {
        primitive: primitive.to_owned(),
        algorithm: algorithm.to_owned(),
        nonce: nonce.to_owned(),
        key: key.to_owned(),
        args,
    }
}
