// SPDX-License-Identifier: Apache-2.0

//! Error types for Nulist.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.
//!
//! A non-success HTTP status from the gallery is deliberately NOT an error:
//! it comes back to the caller as data inside a
//! [`VisibilityResult`](crate::gallery::VisibilityResult). Only validation
//! failures and transport-level failures surface through this type.

use thiserror::Error;

/// Errors that can occur during Nulist operations.
#[derive(Error, Debug)]
pub enum NulistError {
    /// A required request parameter is missing or empty.
    #[error("Missing required parameter: {name}")]
    MissingParameter {
        /// Name of the parameter that was absent.
        name: &'static str,
    },

    /// The action string matched neither "hide" nor "show".
    #[error("Invalid action '{action}' - expected a value matching \"hide\" or \"show\"")]
    InvalidAction {
        /// The action string as given by the caller.
        action: String,
    },

    /// Network/HTTP transport error from reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl From<config::ConfigError> for NulistError {
    fn from(err: config::ConfigError) -> Self {
        NulistError::Config {
            message: err.to_string(),
        }
    }
}
