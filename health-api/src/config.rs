//! Health API configuration.
//!
//! Two settings, both read from the environment:
//!
//! - `HEALTH_API_ADDR`: listen address (default `0.0.0.0:8081`),
//! - `FRONT_ORIGIN`: origin allowed by CORS (default `*`, any origin).

use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;

pub const LISTEN_ADDR_VAR: &str = "HEALTH_API_ADDR";
pub const FRONT_ORIGIN_VAR: &str = "FRONT_ORIGIN";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8081";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HEALTH_API_ADDR={value:?} is not a socket address: {reason}")]
    InvalidListenAddr { value: String, reason: String },
    #[error("FRONT_ORIGIN={value:?} is not a valid header value")]
    InvalidOrigin { value: String },
}

/// Origin the browser front end is served from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrontOrigin {
    /// Allow any origin (`*`).
    Any,
    /// Allow exactly this origin.
    Exact(HeaderValue),
}

impl FrontOrigin {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "*" {
            return Ok(FrontOrigin::Any);
        }

        HeaderValue::from_str(trimmed)
            .map(FrontOrigin::Exact)
            .map_err(|_| ConfigError::InvalidOrigin {
                value: trimmed.to_string(),
            })
    }
}

/// Configuration for the health API HTTP server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP server to.
    pub listen_addr: SocketAddr,
    /// Origin allowed to call the API from a browser.
    pub front_origin: FrontOrigin,
}

impl Default for ApiConfig {
    fn default() -> Self {
        // Safe to unwrap: fixed, valid address literal.
        // Bind to all interfaces so a container port mapping is reachable.
        let addr: SocketAddr = DEFAULT_LISTEN_ADDR
            .parse()
            .expect("hard-coded API listen address should parse");
        Self {
            listen_addr: addr,
            front_origin: FrontOrigin::Any,
        }
    }
}

impl ApiConfig {
    /// Reads the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(LISTEN_ADDR_VAR).ok().as_deref(),
            std::env::var(FRONT_ORIGIN_VAR).ok().as_deref(),
        )
    }

    pub fn from_values(
        listen_addr: Option<&str>,
        front_origin: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(raw) = listen_addr.filter(|v| !v.trim().is_empty()) {
            cfg.listen_addr =
                raw.trim()
                    .parse()
                    .map_err(|e: std::net::AddrParseError| ConfigError::InvalidListenAddr {
                        value: raw.to_string(),
                        reason: e.to_string(),
                    })?;
        }

        if let Some(raw) = front_origin {
            cfg.front_origin = FrontOrigin::parse(raw)?;
        }

        Ok(cfg)
    }
}
