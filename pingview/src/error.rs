use thiserror::Error;

/// Errors returned by [`crate::PingView`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// No base URL is configured, so no ping was sent.
    #[error("{variable} is not set; cannot ping the backend")]
    ConfigurationMissing { variable: &'static str },
}

/// Errors that can occur while contacting the health endpoint.
///
/// The view does not distinguish between causes; every variant ends up as
/// the `NG` sentinel in the log.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// Transport-level error (DNS, connection refused, TLS, bad URL, ...).
    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors found while validating configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
    #[error("unsupported scheme {scheme:?} in base URL {value:?} (expected http or https)")]
    UnsupportedScheme { value: String, scheme: String },
}
