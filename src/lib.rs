// src/lib.rs
//! crypto-interop-harness: front end for cross-implementation crypto tests
//!
//! Features:
//! - Static algorithm catalog shared with the other language harnesses
//! - Fixed-order request validation with one diagnostic per failure
//! - Primitive dispatch to pluggable handlers (RustCrypto by default)
//! - Base64 / hex / JSON / raw artifact output

pub mod algo;
pub mod aliases;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod dispatch;
pub mod enums;
pub mod error;
pub mod handler;
pub mod input;
pub mod output;
pub mod request;

// Re-export everything users need at the crate root
pub use algo::Algorithm;
pub use catalog::{is_ignored, is_known};
pub use config::load as load_config;
pub use crypto::RustCryptoHandler;
pub use dispatch::{dispatch, run, Outcome};
pub use enums::{OutputFormat, Primitive};
pub use error::{ConfigError, HandlerError, HarnessError};
pub use handler::PrimitiveHandler;
pub use request::{validate, Flags, Request, Validated};
