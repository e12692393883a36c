// SPDX-License-Identifier: Apache-2.0

//! HTTP transport seam for gallery requests.
//!
//! The gallery client only ever needs "send this verb to this URL, tell me
//! the status", so that single capability is behind a trait and tests can
//! substitute a recording double without touching the network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_LENGTH;
use reqwest::{Client, Method, StatusCode};

use crate::error::NulistError;

/// Minimal transport capability: submit a body-less request, return the status.
///
/// Transport-level failures (DNS, refused connection, TLS) surface as
/// [`NulistError::Network`]. A non-success HTTP status is NOT a transport
/// failure and comes back as a plain `StatusCode`.
#[async_trait]
pub trait VisibilityTransport: Send + Sync {
    /// Sends a single request with an empty body and returns the response status.
    async fn send(&self, method: Method, url: &str) -> Result<StatusCode, NulistError>;
}

/// Real transport backed by a pooled reqwest client.
#[derive(Debug)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Creates a transport with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(timeout: Duration) -> Result<Self, NulistError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl VisibilityTransport for HttpTransport {
    async fn send(&self, method: Method, url: &str) -> Result<StatusCode, NulistError> {
        // The gallery endpoint expects an explicit Content-Length: 0 on the
        // body-less DELETE/POST.
        let response = self
            .http
            .request(method, url)
            .header(CONTENT_LENGTH, 0)
            .send()
            .await?;

        Ok(response.status())
    }
}
