// src/aliases.rs
//! secure-gate wrappers for request material
//!
//! Keys and payloads are zeroized when the request is dropped.

pub use secure_gate::dynamic_alias;

dynamic_alias!(KeyBytes, Vec<u8>); // decoded `-key`
dynamic_alias!(PlainText, Vec<u8>); // resolved payload
