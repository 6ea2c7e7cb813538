// src/cli.rs
//! Command-line surface
//!
//! The other harnesses are driven with Go-style single-dash long flags
//! (`-key=...`, `-key ...`). clap only knows `--key`, so those are
//! rewritten before parsing. Rewriting stops at the first positional
//! argument; from there on everything is positional, flag-looking or not.

use clap::{ArgAction, Parser};

use crate::consts::FLAG_NAMES;
use crate::request::Flags;

/// Cross-implementation crypto interop harness
#[derive(Debug, Parser)]
#[command(name = "interop_harness", version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Primitive family: MAC | AEAD | DAEAD | HPKE | HKDF | Signature | Agreement
    #[arg(long, default_value = "")]
    pub primitive: String,

    /// Algorithm identifier, e.g. AES-256-GCM or Ed25519
    #[arg(long, default_value = "")]
    pub algorithm: String,

    /// Nonce, standard base64
    #[arg(long, default_value = "")]
    pub nonce: String,

    /// Key, standard base64
    #[arg(long, default_value = "")]
    pub key: String,

    /// Log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Mode token followed by the base64 payload; payload comes from stdin if absent
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parses `argv` after rewriting Go-style flags
    pub fn parse_go_style<I, T>(argv: I) -> Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Cli::try_parse_from(normalize_flag_args(argv))
    }

    pub fn into_flags(self) -> Flags {
        Flags {
            primitive: self.primitive,
            algorithm: self.algorithm,
            nonce: self.nonce,
            key: self.key,
            args: self.args,
        }
    }
}

/// `-name[=value]` → `--name[=value]` for the harness flags, up to the first positional.
///
/// `argv[0]` is kept as is.
pub fn normalize_flag_args<I, T>(argv: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut iter = argv.into_iter().map(Into::into);
    let mut out: Vec<String> = iter.next().into_iter().collect();
    let mut expect_value = false;

    while let Some(arg) = iter.next() {
        if expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        if arg == "--" || !arg.starts_with('-') {
            // first positional: hand the rest over untouched
            out.push(arg);
            out.extend(iter.by_ref());
            break;
        }

        let bare = arg.trim_start_matches('-');
        let (name, has_value) = match bare.split_once('=') {
            Some((name, _)) => (name, true),
            None => (bare, false),
        };

        if FLAG_NAMES.contains(&name) {
            expect_value = !has_value;
            out.push(format!("--{bare}"));
        } else {
            out.push(arg);
        }
    }

    out
}
