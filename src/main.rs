// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! vcm - Commit Message Validator
//!
//! Exits with 0 when the message is accepted, 1 when it is rejected and 2
//! on any other error.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vcm::cli::{run, Cli};

const EXIT_REJECTED: i32 = 1;
const EXIT_FATAL: i32 = 2;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug);

    // Run the CLI
    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_REJECTED),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FATAL);
        }
    }
}

/// Set up logging/tracing.
///
/// Logs go to stderr; stdout carries the messages git shows the user.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("vcm=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
