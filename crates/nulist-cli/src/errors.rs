// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! This module provides a formatting layer that downcasts `anyhow::Error` to
//! `NulistError` and adds hints for different error types. This separates
//! structured error data (library) from user-friendly presentation (CLI).

use anyhow::Error;
use nulist_core::NulistError;

/// Formats an error for CLI display with helpful hints.
///
/// Downcasts `anyhow::Error` to `NulistError` and adds a hint per variant.
/// If the error is not a `NulistError`, returns the original error message.
pub fn format_error(error: &Error) -> String {
    if let Some(nulist_err) = error.downcast_ref::<NulistError>() {
        match nulist_err {
            NulistError::MissingParameter { name: "api key" } => {
                format!(
                    "{nulist_err}\n\nTip: Pass --api-key, or set NULIST_GALLERY__API_KEY, or add api_key to {}",
                    nulist_core::config_file_path().display()
                )
            }
            NulistError::MissingParameter { name: _ } => nulist_err.to_string(),
            NulistError::InvalidAction { action: _ } => {
                format!("{nulist_err}\n\nTip: Use `nulist hide` or `nulist show` directly.")
            }
            NulistError::Network(_) => {
                format!("{nulist_err}\n\nTip: Check your internet connection and the gallery URL, then try again.")
            }
            NulistError::Config { message: _ } => {
                format!(
                    "{nulist_err}\n\nTip: Check your config file at {}",
                    nulist_core::config_file_path().display()
                )
            }
        }
    } else {
        // Not a NulistError, return the original error chain
        error.to_string()
    }
}
