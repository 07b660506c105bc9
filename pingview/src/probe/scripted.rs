//! Scripted health probe.
//!
//! Answers pings from a queue of prepared replies instead of the network.
//! Each reply can be delayed, which makes it possible to control the order
//! in which overlapping pings complete.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::error::ProbeError;
use crate::probe::HealthProbe;

/// A prepared answer for one ping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptedReply {
    /// Respond with this HTTP status code.
    Status(u16),
    /// Fail as if the connection could not be made.
    TransportFailure,
}

#[derive(Clone, Copy, Debug)]
struct Step {
    reply: ScriptedReply,
    delay: Duration,
}

/// Probe that replays scripted replies in call order.
///
/// Once the script is exhausted every further call gets the fallback reply.
#[derive(Debug)]
pub struct ScriptedProbe {
    steps: Mutex<VecDeque<Step>>,
    fallback: ScriptedReply,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProbe {
    /// Probe that answers every call with `reply`.
    pub fn always(reply: ScriptedReply) -> Self {
        Self {
            steps: Mutex::new(VecDeque::new()),
            fallback: reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queues `reply` for the next unanswered call.
    pub fn then(self, reply: ScriptedReply) -> Self {
        self.then_after(reply, Duration::ZERO)
    }

    /// Queues `reply`, delivered `delay` after the call starts.
    pub fn then_after(self, reply: ScriptedReply, delay: Duration) -> Self {
        if let Ok(mut steps) = self.steps.lock() {
            steps.push_back(Step { reply, delay });
        }
        self
    }

    /// URLs requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn next_step(&self, url: &str) -> Step {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(url.to_string());
        }

        self.steps
            .lock()
            .ok()
            .and_then(|mut steps| steps.pop_front())
            .unwrap_or(Step {
                reply: self.fallback,
                delay: Duration::ZERO,
            })
    }
}

impl Default for ScriptedProbe {
    fn default() -> Self {
        Self::always(ScriptedReply::Status(200))
    }
}

impl HealthProbe for ScriptedProbe {
    fn probe(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<u16, ProbeError>> + Send {
        let step = self.next_step(url);
        let url = url.to_string();

        async move {
            if !step.delay.is_zero() {
                tokio::time::sleep(step.delay).await;
            }

            match step.reply {
                ScriptedReply::Status(code) => Ok(code),
                ScriptedReply::TransportFailure => Err(ProbeError::Transport(format!(
                    "scripted connection refused for {url}"
                ))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_script_then_falls_back() {
        let probe = ScriptedProbe::always(ScriptedReply::Status(204))
            .then(ScriptedReply::Status(500))
            .then(ScriptedReply::TransportFailure);

        assert_eq!(probe.probe("http://a/health").await, Ok(500));
        assert!(probe.probe("http://a/health").await.is_err());
        assert_eq!(probe.probe("http://a/health").await, Ok(204));
        assert_eq!(probe.calls().len(), 3);
    }
}
