// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! msgcheck - Git commit message hook
//!
//! Entry point: runs the validator and translates its verdict into the
//! exit code git acts on.

use clap::Parser;
use msgcheck::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit status for an accepted message.
const SUCCESS_EXIT_CODE: i32 = 0;

/// Exit status for a rejected message.
const FAILURE_EXIT_CODE: i32 = 1;

/// Exit status for environmental failures, e.g. an unreadable message file.
/// Kept outside the accept/reject pair so callers can tell the two apart.
const FATAL_EXIT_CODE: i32 = 2;

fn main() {
    // Parse CLI arguments; clap itself reports a missing path on stderr.
    let cli = Cli::parse();

    // Set up logging
    setup_logging();

    match run(cli) {
        Ok(verdict) => {
            let code = if verdict.is_accepted() {
                SUCCESS_EXIT_CODE
            } else {
                FAILURE_EXIT_CODE
            };
            std::process::exit(code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(FATAL_EXIT_CODE);
        }
    }
}

/// Set up logging/tracing.
///
/// Diagnostics own stdout, so log output goes to stderr. Quiet beyond
/// warnings unless `RUST_LOG` says otherwise.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
