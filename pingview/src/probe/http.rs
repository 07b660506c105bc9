//! HTTP health probe.
//!
//! This implementation of [`HealthProbe`] issues a plain
//! `GET {base}/health` with `reqwest`:
//!
//! ```text
//! GET /health
//! (no body, no custom headers, no query parameters)
//! ```
//!
//! The response body is never read. Whatever status comes back is the
//! result of the ping; only errors raised before a response exists
//! (DNS, connect, TLS, malformed URL) are reported as [`ProbeError`].

use reqwest::Client;

use crate::error::ProbeError;
use crate::probe::HealthProbe;

/// HTTP-based health probe.
///
/// The client is cheap to clone and safe to share between concurrent
/// pings. No request timeout is configured.
#[derive(Clone, Debug)]
pub struct HttpHealthProbe {
    client: Client,
}

impl HttpHealthProbe {
    /// Builds a probe with a fresh `reqwest` client.
    pub fn new() -> Result<Self, ProbeError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ProbeError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Builds a probe around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl HealthProbe for HttpHealthProbe {
    async fn probe(&self, url: &str) -> Result<u16, ProbeError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::Transport(format!("HTTP GET {url} failed: {e}")))?;

        Ok(resp.status().as_u16())
    }
}
