// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for Nulist.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Suppress non-essential output
    pub quiet: bool,
    /// Enable verbose output (debug-level logging)
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// Nulist - toggle the listed visibility of a NuGet package.
///
/// Issues a single authenticated request against a gallery's
/// `/api/v2/Package` endpoint: DELETE to unlist (hide), POST to relist
/// (show). Unlisted packages stay installable by exact version but stop
/// appearing in search and browse views.
#[derive(Parser)]
#[command(name = "nulist")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Override the configured gallery base URL (default: https://nuget.org)
    #[arg(long, global = true)]
    pub gallery: Option<String>,

    /// API key authorizing the operation (overrides config/environment)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Hide (unlist) a package version
    Hide {
        /// Package identifier (e.g., "Newtonsoft.Json")
        package_id: String,

        /// Package version (e.g., "13.0.3")
        package_version: String,
    },

    /// Show (relist) a package version
    Show {
        /// Package identifier (e.g., "Newtonsoft.Json")
        package_id: String,

        /// Package version (e.g., "13.0.3")
        package_version: String,
    },

    /// Set visibility from a raw action string (anything matching "hide" or "show")
    Set {
        /// Action to perform; matched loosely against "hide" and "show"
        action: String,

        /// Package identifier
        package_id: String,

        /// Package version
        package_version: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
