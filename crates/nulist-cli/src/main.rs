// SPDX-License-Identifier: Apache-2.0

//! Nulist - toggle the listed visibility of a NuGet package.
//!
//! A CLI tool that hides (unlists) or shows (relists) a package version on
//! a NuGet gallery with a single authenticated REST call.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use nulist_core::config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.output, cli.verbose);

    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    // Load config early to validate it works
    let mut config = config::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    // Apply CLI overrides to config
    if let Some(gallery) = &cli.gallery {
        config.gallery.url.clone_from(gallery);
        debug!("Overriding gallery URL to: {gallery}");
    }

    if let Some(api_key) = cli.api_key {
        config.gallery.api_key = Some(api_key);
        debug!("Using API key from command line");
    }

    match commands::run(cli.command, output_ctx, &config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            Err(e)
        }
    }
}
