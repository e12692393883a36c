// SPDX-License-Identifier: Apache-2.0

//! Package visibility operations against a NuGet gallery.
//!
//! One core operation: map a hide/show action to an HTTP verb, build the
//! well-known gallery URL, submit a single body-less request, and report
//! the outcome. `hide` and `show` are thin wrappers that fix the action.

pub mod transport;

use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::GalleryConfig;
use crate::error::NulistError;
use self::transport::{HttpTransport, VisibilityTransport};

/// Gallery used when the caller does not supply one.
pub const DEFAULT_GALLERY_URL: &str = "https://nuget.org";

/// The two recognized visibility actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Unlist the package (HTTP DELETE).
    Hide,
    /// Relist the package (HTTP POST).
    Show,
}

impl Action {
    /// Parses an action string.
    ///
    /// Matching is a case-insensitive substring test: anything containing
    /// "hide" hides, anything containing "show" shows. That means "unhide"
    /// hides too. This loose matching is inherited behavior - it may have
    /// been meant to tolerate inputs like "please hide", or it may be an
    /// oversight - and is kept as-is rather than tightened to equality.
    ///
    /// # Errors
    ///
    /// Returns [`NulistError::InvalidAction`] when the string matches
    /// neither action.
    pub fn parse(raw: &str) -> Result<Self, NulistError> {
        let lowered = raw.to_lowercase();
        if lowered.contains("hide") {
            Ok(Action::Hide)
        } else if lowered.contains("show") {
            Ok(Action::Show)
        } else {
            Err(NulistError::InvalidAction {
                action: raw.to_string(),
            })
        }
    }

    /// HTTP verb the gallery expects for this action.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Action::Hide => Method::DELETE,
            Action::Show => Method::POST,
        }
    }

    /// Past-tense description used in the success message.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Action::Hide => "hidden (unlisted)",
            Action::Show => "shown (listed)",
        }
    }
}

/// Transient parameters of a single visibility request.
///
/// Nothing here outlives the call; there is no cache or retry state.
#[derive(Debug)]
pub struct VisibilityRequest {
    /// Action to perform.
    pub action: Action,
    /// Package identifier.
    pub package_id: String,
    /// Package version.
    pub package_version: String,
    /// API key authorizing the operation.
    pub api_key: SecretString,
    /// Base URL of the gallery.
    pub gallery_url: String,
}

impl VisibilityRequest {
    /// Target URL: `{gallery}/api/v2/Package/{id}/{version}?apiKey={key}`.
    ///
    /// Straightforward substitution, no URL-encoding. The path shape and the
    /// `apiKey` query parameter name are fixed by the gallery API.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "{}/api/v2/Package/{}/{}?apiKey={}",
            self.gallery_url,
            self.package_id,
            self.package_version,
            self.api_key.expose_secret()
        )
    }
}

/// Outcome of a visibility request.
///
/// A non-success HTTP status lands here with `succeeded: false` - it is
/// data, not an error. Only validation and transport failures are errors.
#[derive(Debug, Clone, Serialize)]
pub struct VisibilityResult {
    /// HTTP status code returned by the gallery.
    pub status: u16,
    /// Whether the gallery answered with an OK-class status.
    pub succeeded: bool,
    /// Human-readable outcome message.
    pub message: String,
}

/// Client for package visibility operations on one gallery.
pub struct GalleryClient {
    /// Transport used to submit requests (swappable for tests).
    transport: Box<dyn VisibilityTransport>,
    /// Base URL of the gallery.
    gallery_url: String,
}

impl GalleryClient {
    /// Creates a client from configuration, using the real HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &GalleryConfig) -> Result<Self, NulistError> {
        let transport = HttpTransport::new(std::time::Duration::from_secs(
            config.timeout_seconds,
        ))?;
        Ok(Self {
            transport: Box::new(transport),
            gallery_url: config.url.clone(),
        })
    }

    /// Creates a client over an explicit transport.
    ///
    /// Used by tests to substitute a mock transport, and available to
    /// embedders with their own HTTP stack.
    pub fn with_transport(
        transport: Box<dyn VisibilityTransport>,
        gallery_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            gallery_url: gallery_url.into(),
        }
    }

    /// Base URL this client submits to.
    #[must_use]
    pub fn gallery_url(&self) -> &str {
        &self.gallery_url
    }

    /// Sets the listed/unlisted state of a package from a raw action string.
    ///
    /// Validates parameters, maps the action (see [`Action::parse`]), builds
    /// the gallery URL, and submits one request. No retries, no response
    /// body parsing.
    ///
    /// # Errors
    ///
    /// Returns an error for missing parameters, an unrecognized action, or a
    /// transport failure. A non-success HTTP status is reported in the
    /// returned [`VisibilityResult`], not as an error.
    pub async fn set_visibility(
        &self,
        action: &str,
        package_id: &str,
        package_version: &str,
        api_key: &SecretString,
    ) -> Result<VisibilityResult, NulistError> {
        if action.is_empty() {
            return Err(NulistError::MissingParameter { name: "action" });
        }
        let action = Action::parse(action)?;
        self.submit(action, package_id, package_version, api_key)
            .await
    }

    /// Unlists a package. Delegates to the core operation with the action fixed.
    ///
    /// # Errors
    ///
    /// See [`GalleryClient::set_visibility`].
    pub async fn hide(
        &self,
        package_id: &str,
        package_version: &str,
        api_key: &SecretString,
    ) -> Result<VisibilityResult, NulistError> {
        self.submit(Action::Hide, package_id, package_version, api_key)
            .await
    }

    /// Relists a package. Delegates to the core operation with the action fixed.
    ///
    /// # Errors
    ///
    /// See [`GalleryClient::set_visibility`].
    pub async fn show(
        &self,
        package_id: &str,
        package_version: &str,
        api_key: &SecretString,
    ) -> Result<VisibilityResult, NulistError> {
        self.submit(Action::Show, package_id, package_version, api_key)
            .await
    }

    /// Validates parameters and performs the single gallery request.
    async fn submit(
        &self,
        action: Action,
        package_id: &str,
        package_version: &str,
        api_key: &SecretString,
    ) -> Result<VisibilityResult, NulistError> {
        if package_id.is_empty() {
            return Err(NulistError::MissingParameter { name: "package id" });
        }
        if package_version.is_empty() {
            return Err(NulistError::MissingParameter {
                name: "package version",
            });
        }
        if api_key.expose_secret().is_empty() {
            return Err(NulistError::MissingParameter { name: "api key" });
        }
        if self.gallery_url.is_empty() {
            return Err(NulistError::MissingParameter { name: "gallery url" });
        }

        let request = VisibilityRequest {
            action,
            package_id: package_id.to_string(),
            package_version: package_version.to_string(),
            api_key: api_key.clone(),
            gallery_url: self.gallery_url.clone(),
        };

        let method = action.method();
        let url = request.url();
        info!(verb = %method, url = %url, "Submitting visibility request");

        let status = self.transport.send(method, &url).await?;
        debug!(status = status.as_u16(), "Gallery responded");

        Ok(build_result(&request, status))
    }
}

/// Turns a response status into the caller-facing result.
fn build_result(request: &VisibilityRequest, status: StatusCode) -> VisibilityResult {
    let message = if status.is_success() {
        format!(
            "Package '{}' Version '{}' has been {}.",
            request.package_id,
            request.package_version,
            request.action.description()
        )
    } else {
        format!("Gallery responded with status {status}.")
    };

    VisibilityResult {
        status: status.as_u16(),
        succeeded: status.is_success(),
        message,
    }
}
