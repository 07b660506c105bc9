//! The ping view: input text, ping log, and the ping action.
//!
//! [`PingView`] owns two pieces of state, the current input text and the
//! [`PingLog`]. Pings run as tasks in a [`JoinSet`] owned by the view:
//!
//! - [`PingView::ping`] checks the configuration and dispatches a probe,
//!   returning immediately;
//! - [`PingView::next_result`] waits for whichever ping finishes next and
//!   appends its entry to the log.
//!
//! Overlapping pings are allowed and land in the log in the order they
//! resolve. Dropping the view aborts every ping still in flight, and their
//! results are discarded.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::config::{API_BASE_URL_VAR, BaseUrl, ViewConfig};
use crate::error::ViewError;
use crate::log::{PingId, PingLog, PingRecord, PingStatus};
use crate::notify::{Notice, Notifier};
use crate::probe::HealthProbe;

/// View state plus the ping action.
///
/// `P` performs the network request, `N` shows notices to the user.
pub struct PingView<P, N> {
    cfg: ViewConfig,
    probe: Arc<P>,
    notifier: N,
    input: String,
    log: PingLog,
    in_flight: JoinSet<PingRecord>,
    next_id: u64,
}

impl<P, N> PingView<P, N>
where
    P: HealthProbe,
    N: Notifier,
{
    /// Creates a view with empty input and an empty log.
    pub fn new(cfg: ViewConfig, probe: P, notifier: N) -> Self {
        Self {
            cfg,
            probe: Arc::new(probe),
            notifier,
            input: String::new(),
            log: PingLog::new(),
            in_flight: JoinSet::new(),
            next_id: 0,
        }
    }

    /// Replaces the input text. Never touches the log.
    pub fn update_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Ping results so far, in resolution order.
    pub fn log(&self) -> &PingLog {
        &self.log
    }

    /// Log entries joined by newlines, oldest first.
    pub fn log_text(&self) -> String {
        self.log.to_string()
    }

    pub fn base_url(&self) -> Option<&BaseUrl> {
        self.cfg.base_url.as_ref()
    }

    /// Number of pings dispatched but not yet appended to the log.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Starts one ping against `{base}/health`.
    ///
    /// If no base URL is configured the notifier receives exactly one
    /// [`Notice::ConfigurationMissing`], nothing is sent, and the log is
    /// left untouched. Otherwise the request is spawned and its id returned;
    /// the result is appended once [`PingView::next_result`] observes it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn ping(&mut self) -> Result<PingId, ViewError> {
        let Some(base) = self.cfg.base_url.as_ref() else {
            tracing::warn!("ping refused: {API_BASE_URL_VAR} is not set");
            self.notifier.notify(Notice::configuration_missing());
            return Err(ViewError::ConfigurationMissing {
                variable: API_BASE_URL_VAR,
            });
        };

        self.next_id += 1;
        let id = PingId(self.next_id);
        let url = base.health_url();
        let probe = Arc::clone(&self.probe);

        tracing::debug!(ping = %id, %url, "dispatching ping");

        self.in_flight.spawn(async move {
            let status = match probe.probe(&url).await {
                Ok(code) => PingStatus::Http(code),
                Err(e) => {
                    tracing::warn!(ping = %id, "ping failed: {e}");
                    PingStatus::TransportFailure
                }
            };
            PingRecord { id, status }
        });

        Ok(id)
    }

    /// Waits for the next ping to finish and appends its entry to the log.
    ///
    /// Returns `None` immediately when no ping is in flight. Cancel-safe:
    /// if the returned future is dropped before completion, no result is
    /// lost.
    pub async fn next_result(&mut self) -> Option<PingRecord> {
        loop {
            match self.in_flight.join_next().await? {
                Ok(record) => {
                    tracing::info!(ping = %record.id, status = %record.status, "ping completed");
                    self.log.push(record.clone());
                    return Some(record);
                }
                // A probe that panicked or was aborted never produced a
                // result; there is nothing to append for it.
                Err(e) => {
                    tracing::error!("ping task ended without a result: {e}");
                }
            }
        }
    }

    /// Waits for every in-flight ping and appends their entries.
    ///
    /// Returns the number of entries appended.
    pub async fn settle(&mut self) -> usize {
        let mut appended = 0;
        while self.next_result().await.is_some() {
            appended += 1;
        }
        appended
    }
}
