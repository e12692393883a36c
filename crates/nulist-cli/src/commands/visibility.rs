// SPDX-License-Identifier: Apache-2.0

//! Hide/show command handlers.
//!
//! Thin layer over [`nulist_core::GalleryClient`]: resolve the API key from
//! config, build the client, run the one operation, hand the result back
//! for rendering.

use anyhow::Result;
use nulist_core::{AppConfig, GalleryClient, VisibilityResult};
use secrecy::SecretString;

/// Resolves the API key from configuration.
///
/// The key itself may be empty here; the core operation reports the missing
/// parameter so the failure message is the same across entry points.
fn resolve_api_key(config: &AppConfig) -> SecretString {
    let raw = config.gallery.api_key.clone().unwrap_or_default();
    SecretString::new(raw.into())
}

/// Hides (unlists) a package version.
pub async fn run_hide(
    package_id: &str,
    package_version: &str,
    config: &AppConfig,
) -> Result<VisibilityResult> {
    let client = GalleryClient::new(&config.gallery)?;
    let api_key = resolve_api_key(config);
    let result = client.hide(package_id, package_version, &api_key).await?;
    Ok(result)
}

/// Shows (relists) a package version.
pub async fn run_show(
    package_id: &str,
    package_version: &str,
    config: &AppConfig,
) -> Result<VisibilityResult> {
    let client = GalleryClient::new(&config.gallery)?;
    let api_key = resolve_api_key(config);
    let result = client.show(package_id, package_version, &api_key).await?;
    Ok(result)
}

/// Sets visibility from a raw action string (loose hide/show matching).
pub async fn run_set(
    action: &str,
    package_id: &str,
    package_version: &str,
    config: &AppConfig,
) -> Result<VisibilityResult> {
    let client = GalleryClient::new(&config.gallery)?;
    let api_key = resolve_api_key(config);
    let result = client
        .set_visibility(action, package_id, package_version, &api_key)
        .await?;
    Ok(result)
}
