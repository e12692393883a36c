// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Nulist Core
//!
//! Core library for Nulist - toggling the "listed" visibility of a package
//! on a NuGet gallery.
//!
//! The whole surface is one operation: map a hide/show action to an HTTP
//! verb (DELETE unlists, POST relists), build the well-known gallery URL,
//! submit a single authenticated request, and report the outcome. There is
//! no retry logic, no batching, and no state beyond the parameters of one
//! call.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nulist_core::{GalleryClient, GalleryConfig};
//! use secrecy::SecretString;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GalleryClient::new(&GalleryConfig::default())?;
//! let api_key = SecretString::new("KEY123".to_string().into());
//!
//! let result = client.hide("Foo", "1.0.0", &api_key).await?;
//! println!("{}", result.message);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`gallery`] - Visibility operations and the transport seam

// ============================================================================
// Error Handling
// ============================================================================

pub use error::NulistError;

/// Convenience Result type for Nulist operations.
///
/// This is equivalent to `std::result::Result<T, NulistError>`.
pub type Result<T> = std::result::Result<T, NulistError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, GalleryConfig, config_dir, config_file_path, load_config};

// ============================================================================
// Gallery Visibility
// ============================================================================

pub use gallery::transport::{HttpTransport, VisibilityTransport};
pub use gallery::{
    Action, DEFAULT_GALLERY_URL, GalleryClient, VisibilityRequest, VisibilityResult,
};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod gallery;
