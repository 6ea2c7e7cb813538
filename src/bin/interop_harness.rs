// src/bin/interop_harness.rs
//! Interop harness entry point: parse → validate → dispatch → emit

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use crypto_interop_harness::cli::Cli;
use crypto_interop_harness::consts::FAILURE_EXIT_CODE;
use crypto_interop_harness::{config, load_config, output, run, Outcome, RustCryptoHandler};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = match Cli::parse_go_style(std::env::args()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let conf = load_config();
    init_logging(cli.verbose, &conf.logging.filter);
    for e in config::warnings() {
        warn!("ignoring config setting: {e}");
    }

    let flags = cli.into_flags();
    let outcome = match run(&flags, io::stdin().lock(), &RustCryptoHandler) {
        Ok(outcome) => outcome,
        Err(e) => {
            debug!(error = ?e, "invocation failed");
            eprintln!("{e}");
            return ExitCode::from(FAILURE_EXIT_CODE);
        }
    };

    match emit(outcome, conf) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

fn emit(outcome: Outcome, conf: &config::Config) -> Result<()> {
    match outcome {
        Outcome::Skipped { algorithm } => {
            info!(%algorithm, "skipped");
            eprintln!("ignored algorithm: {algorithm}");
            Ok(())
        }
        Outcome::Completed {
            primitive,
            algorithm,
            artifact,
        } => output::emit(
            io::stdout().lock(),
            &conf.output,
            primitive,
            algorithm,
            &artifact,
        )
        .context("Failed to write output"),
    }
}

/// `RUST_LOG` wins, then `-v`, then the configured filter
fn init_logging(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = match verbose {
            0 => configured,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
