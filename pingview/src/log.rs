//! Append-only ping log.
//!
//! Every completed ping produces one [`PingRecord`], rendered as
//! `ping -> <status>`. Records are only ever appended; the log keeps them
//! in the order the pings resolved.

use std::fmt;

/// Token written instead of a status code when the request never got a
/// response.
pub const NG_SENTINEL: &str = "NG";

/// Sequence number assigned to a ping when it is dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PingId(pub u64);

impl fmt::Display for PingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of a single ping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PingStatus {
    /// A response arrived with this HTTP status code (any code, 4xx/5xx included).
    Http(u16),
    /// The request failed before any response was received.
    TransportFailure,
}

impl PingStatus {
    /// Returns `true` if a response was received.
    pub fn is_response(&self) -> bool {
        matches!(self, PingStatus::Http(_))
    }
}

impl fmt::Display for PingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PingStatus::Http(code) => write!(f, "{code}"),
            PingStatus::TransportFailure => f.write_str(NG_SENTINEL),
        }
    }
}

/// One entry of the ping log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PingRecord {
    /// Dispatch sequence number of the ping that produced this entry.
    pub id: PingId,
    pub status: PingStatus,
}

impl fmt::Display for PingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ping -> {}", self.status)
    }
}

/// Ordered, append-only sequence of ping results.
#[derive(Clone, Debug, Default)]
pub struct PingLog {
    entries: Vec<PingRecord>,
}

impl PingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end of the log.
    pub fn push(&mut self, record: PingRecord) {
        self.entries.push(record);
    }

    /// Records in append order, oldest first.
    pub fn entries(&self) -> &[PingRecord] {
        &self.entries
    }

    /// Rendered log lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for PingLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
