//! Ping view library crate.
//!
//! This crate holds everything about the ping view that does not depend on
//! a particular front end:
//!
//! - configuration resolved from the environment (`config`),
//! - error types (`error`),
//! - the append-only ping log and its line format (`log`),
//! - user-facing notifications (`notify`),
//! - health probes, real and scripted (`probe`),
//! - and the view itself (`view`).
//!
//! Front ends (see the `pingview-console` binary) own a [`PingView`], feed it
//! user edits and ping requests, and render its state.

pub mod config;
pub mod error;
pub mod log;
pub mod notify;
pub mod probe;
pub mod view;

// Re-export configuration types.
pub use config::{API_BASE_URL_VAR, BaseUrl, ViewConfig};

// Re-export error types.
pub use error::{ConfigError, ProbeError, ViewError};

// Re-export the log model.
pub use log::{PingId, PingLog, PingRecord, PingStatus};

// Re-export notification hooks.
pub use notify::{LogNotifier, Notice, Notifier, RecordingNotifier};

// Re-export probes.
pub use probe::{HealthProbe, HttpHealthProbe, ScriptedProbe, ScriptedReply};

pub use view::PingView;

/// Type alias for the view wired to the real HTTP probe.
pub type DefaultPingView<N> = PingView<HttpHealthProbe, N>;
