// SPDX-License-Identifier: Apache-2.0

//! Configuration management for Nulist.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `NULIST_`)
//! 2. Config file: `~/.config/nulist/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Point at a staging gallery via environment variable
//! NULIST_GALLERY__URL=https://preview.nuget.org nulist hide Foo 1.0.0
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::NulistError;
use crate::gallery::DEFAULT_GALLERY_URL;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gallery endpoint settings.
    pub gallery: GalleryConfig,
}

/// Gallery endpoint settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Base URL of the package gallery.
    pub url: String,
    /// API key authorizing package management operations.
    ///
    /// Optional here so a key given on the command line can fill it in;
    /// the visibility request itself still requires one.
    pub api_key: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_GALLERY_URL.to_string(),
            api_key: None,
            timeout_seconds: 30,
        }
    }
}

/// Returns the Nulist configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/nulist`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("nulist");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".config")
        .join("nulist")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `NULIST_` and double underscore
/// for nested keys (e.g., `NULIST_GALLERY__API_KEY`).
///
/// # Errors
///
/// Returns `NulistError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, NulistError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("NULIST")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_config_defaults() {
        // Without any config file or env vars, should return defaults
        let config = load_config().expect("should load with defaults");

        assert_eq!(config.gallery.url, "https://nuget.org");
        assert_eq!(config.gallery.api_key, None);
        assert_eq!(config.gallery.timeout_seconds, 30);
    }

    #[test]
    fn test_config_dir_ends_with_nulist() {
        let dir = config_dir();
        assert!(dir.ends_with("nulist"));
    }

    #[test]
    fn test_config_file_path() {
        let path = config_file_path();
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_config_from_toml() {
        let config_str = r#"
[gallery]
url = "https://preview.nuget.org"
api_key = "KEY123"
timeout_seconds = 5
"#;

        let config = Config::builder()
            .add_source(config::File::from_str(config_str, config::FileFormat::Toml))
            .build()
            .expect("should build config");

        let app_config: AppConfig = config.try_deserialize().expect("should deserialize");

        assert_eq!(app_config.gallery.url, "https://preview.nuget.org");
        assert_eq!(app_config.gallery.api_key, Some("KEY123".to_string()));
        assert_eq!(app_config.gallery.timeout_seconds, 5);
    }

    #[test]
    fn test_config_partial_toml_keeps_defaults() {
        let config_str = r#"
[gallery]
api_key = "KEY123"
"#;

        let config = Config::builder()
            .add_source(config::File::from_str(config_str, config::FileFormat::Toml))
            .build()
            .expect("should build config");

        let app_config: AppConfig = config.try_deserialize().expect("should deserialize");

        assert_eq!(app_config.gallery.url, "https://nuget.org");
        assert_eq!(app_config.gallery.api_key, Some("KEY123".to_string()));
        assert_eq!(app_config.gallery.timeout_seconds, 30);
    }

    #[test]
    #[serial]
    fn test_config_dir_respects_xdg_config_home() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "/custom/config");
        }

        let dir = config_dir();
        assert_eq!(dir, PathBuf::from("/custom/config/nulist"));

        // Cleanup
        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_ignores_empty_xdg_config_home() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "");
        }

        let dir = config_dir();
        assert!(dir.ends_with("nulist"));

        // Cleanup
        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }
}
