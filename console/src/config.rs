//! Console configuration.
//!
//! The backend address belongs to the view (`pingview::ViewConfig`); this
//! only covers the terminal front end itself.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const TICK_MS_VAR: &str = "PINGVIEW_TICK_MS";
pub const LOG_DIR_VAR: &str = "PINGVIEW_LOG_DIR";

/// Configuration for the terminal front end.
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    /// Interval between redraw ticks.
    pub tick_rate: Duration,
    /// Directory for the rolling trace log. The terminal is owned by the
    /// UI, so diagnostics never go to stdout/stderr.
    pub log_dir: PathBuf,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var(TICK_MS_VAR).ok().as_deref(),
            std::env::var(LOG_DIR_VAR).ok().as_deref(),
        )
    }

    pub fn from_values(tick_ms: Option<&str>, log_dir: Option<&str>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(raw) = tick_ms.map(str::trim).filter(|v| !v.is_empty()) {
            let ms: u64 = raw
                .parse()
                .with_context(|| format!("{TICK_MS_VAR}={raw:?} is not a number of milliseconds"))?;
            cfg.tick_rate = Duration::from_millis(ms.max(1));
        }

        if let Some(raw) = log_dir.map(str::trim).filter(|v| !v.is_empty()) {
            cfg.log_dir = PathBuf::from(raw);
        }

        Ok(cfg)
    }
}
