// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the Nulist CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! nulist hide Foo 1.0.0
//!
//! # Show the pre-request message (verb + URL) and other progress
//! RUST_LOG=nulist=info nulist hide Foo 1.0.0
//!
//! # Debug output for troubleshooting
//! RUST_LOG=nulist=debug nulist hide Foo 1.0.0
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::OutputFormat;

/// Initialize the logging subsystem.
///
/// The `verbose` flag raises the default level to info so the pre-request
/// observational message is visible without setting `RUST_LOG`. Structured
/// output formats stay quiet so stdout remains parseable.
pub fn init_logging(format: OutputFormat, verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let quiet = matches!(format, OutputFormat::Json);

    let default_filter = if quiet {
        "nulist=error,reqwest=error"
    } else if verbose {
        "nulist=info,nulist_core=info,reqwest=warn"
    } else {
        "nulist=warn,nulist_core=warn,reqwest=error"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
