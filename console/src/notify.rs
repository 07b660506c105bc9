use tokio::sync::mpsc;

use pingview::{Notice, Notifier};

use crate::event::Event;

/// Forwards view notices into the event loop, which opens them as a modal.
#[derive(Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Event>,
}

impl ChannelNotifier {
    pub fn new(tx: mpsc::UnboundedSender<Event>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        tracing::warn!("{notice}");
        if self.tx.send(Event::Notice(notice)).is_err() {
            tracing::warn!("event loop closed; notice dropped");
        }
    }
}
