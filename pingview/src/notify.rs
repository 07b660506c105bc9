//! User-facing notifications.
//!
//! The view reports conditions the user must acknowledge (currently only a
//! missing base URL) through a [`Notifier`]. Front ends decide how to show
//! them; the console opens a modal alert.

use std::fmt;
use std::sync::Mutex;

use crate::config::API_BASE_URL_VAR;

/// A condition that must be shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// A ping was requested but no base URL is configured.
    ConfigurationMissing { variable: &'static str },
}

impl Notice {
    pub fn configuration_missing() -> Self {
        Notice::ConfigurationMissing {
            variable: API_BASE_URL_VAR,
        }
    }

    /// Short title for alert dialogs.
    pub fn title(&self) -> &'static str {
        match self {
            Notice::ConfigurationMissing { .. } => "Configuration missing",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ConfigurationMissing { variable } => write!(
                f,
                "{variable} is not set. Set it to the backend base URL to enable pings."
            ),
        }
    }
}

/// Sink for user-facing notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that only writes notices to the trace log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        tracing::warn!("{notice}");
    }
}

/// Notifier that keeps every notice it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.notices.lock().map(|guard| guard.len()).unwrap_or(0)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut guard) = self.notices.lock() {
            guard.push(notice);
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}
