//! Configuration for the ping view.
//!
//! The only setting is the backend base URL. It is resolved once at
//! startup (usually from `API_BASE_URL`) and injected into the view, so the
//! view never reads the environment itself.
//!
//! An absent or empty value is a legal state: the view starts normally and
//! only complains when a ping is attempted.

use url::Url;

use crate::error::ConfigError;

/// Name of the environment variable holding the backend base URL.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Path of the health endpoint, relative to the base URL.
pub const HEALTH_PATH: &str = "health";

/// Root address of the backend, e.g. `"https://api.example.com"`.
///
/// Any non-empty value is accepted as configured. Values that are not valid
/// http(s) URLs are still kept: pinging them fails at the transport level
/// and is logged as `NG`. Use [`BaseUrl::validate`] to warn about such
/// values early.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Wraps a raw base URL. Returns `None` for empty or whitespace-only input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins `path` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        // Avoid accidental double slashes.
        format!(
            "{}/{}",
            self.0.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Full URL of the health endpoint: `{base}/health`.
    pub fn health_url(&self) -> String {
        self.endpoint(HEALTH_PATH)
    }

    /// Checks that the value parses as an absolute http or https URL.
    pub fn validate(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.0).map_err(|e| ConfigError::InvalidUrl {
            value: self.0.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::UnsupportedScheme {
                value: self.0.clone(),
                scheme: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only configuration handed to a [`crate::PingView`] at construction.
#[derive(Clone, Debug, Default)]
pub struct ViewConfig {
    /// Backend root address; `None` when unset or empty.
    pub base_url: Option<BaseUrl>,
}

impl ViewConfig {
    /// Configuration pointing at `base_url`.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: BaseUrl::new(base_url),
        }
    }

    /// Resolves the configuration from `API_BASE_URL`.
    ///
    /// A value that is set but not a valid http(s) URL is kept and reported
    /// with a warning.
    pub fn from_env() -> Self {
        let raw = std::env::var(API_BASE_URL_VAR).ok();
        let cfg = Self::from_value(raw.as_deref());

        match &cfg.base_url {
            None => {
                tracing::warn!("{API_BASE_URL_VAR} is not set; pings will be refused");
            }
            Some(base) => match base.validate() {
                Ok(_) => tracing::info!(base_url = %base, "resolved backend base URL"),
                Err(e) => tracing::warn!("{e}; pings will be logged as NG"),
            },
        }

        cfg
    }

    /// Builds the configuration from an optional raw value.
    pub fn from_value(raw: Option<&str>) -> Self {
        Self {
            base_url: raw.and_then(BaseUrl::new),
        }
    }

    /// Returns `true` if a base URL is configured.
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_values_are_absent() {
        assert!(ViewConfig::from_value(None).base_url.is_none());
        assert!(ViewConfig::from_value(Some("")).base_url.is_none());
        assert!(ViewConfig::from_value(Some("   ")).base_url.is_none());
    }

    #[test]
    fn health_url_has_single_slash() {
        let base = BaseUrl::new("https://api.example.com").unwrap();
        assert_eq!(base.health_url(), "https://api.example.com/health");

        let trailing = BaseUrl::new("https://api.example.com/").unwrap();
        assert_eq!(trailing.health_url(), "https://api.example.com/health");
    }

    #[test]
    fn health_url_keeps_base_path() {
        let base = BaseUrl::new("http://127.0.0.1:8081/api").unwrap();
        assert_eq!(base.health_url(), "http://127.0.0.1:8081/api/health");
    }

    #[test]
    fn validate_accepts_http_and_https() {
        assert!(BaseUrl::new("http://localhost:8081").unwrap().validate().is_ok());
        assert!(BaseUrl::new("https://api.example.com").unwrap().validate().is_ok());
    }

    #[test]
    fn validate_rejects_garbage_and_other_schemes() {
        let garbage = BaseUrl::new("not a url").unwrap();
        assert!(matches!(
            garbage.validate(),
            Err(ConfigError::InvalidUrl { .. })
        ));

        let ftp = BaseUrl::new("ftp://files.example.com").unwrap();
        match ftp.validate() {
            Err(ConfigError::UnsupportedScheme { scheme, .. }) => assert_eq!(scheme, "ftp"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn invalid_values_still_count_as_configured() {
        let cfg = ViewConfig::from_value(Some("not a url"));
        assert!(cfg.is_configured());
    }
}
