//! Health probes.
//!
//! A [`HealthProbe`] performs the network half of a ping: one GET against
//! the health URL, reporting either the HTTP status code or a transport
//! error. The view only depends on this trait, so tests and demos can
//! swap the real HTTP client for a [`ScriptedProbe`].

use std::future::Future;

use crate::error::ProbeError;

pub mod http;
pub mod scripted;

pub use http::HttpHealthProbe;
pub use scripted::{ScriptedProbe, ScriptedReply};

/// Performs a single health request.
///
/// Implementations must not retry and must report *any* received response
/// as `Ok(status)`, regardless of the status class. Only failures that
/// prevent a response from arriving are errors.
pub trait HealthProbe: Send + Sync + 'static {
    fn probe(&self, url: &str) -> impl Future<Output = Result<u16, ProbeError>> + Send;
}
