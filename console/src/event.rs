use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

use pingview::Notice;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// Notice raised by the view that must be shown as an alert.
    Notice(Notice),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _task: tokio::task::JoinHandle<()>,
    /// Sender for injecting events from outside the terminal reader.
    pub inject_tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let inject_tx = tx.clone();

        let task = tokio::spawn(Self::event_loop(tx, tick_rate));

        Self {
            rx,
            _task: task,
            inject_tx,
        }
    }

    async fn event_loop(tx: mpsc::UnboundedSender<Event>, tick_rate: Duration) {
        let mut reader = EventStream::new();
        let mut tick = tokio::time::interval(tick_rate);

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            let _ = tx.send(Event::Key(key));
                        }
                        Some(Ok(CrosstermEvent::Resize(w, h))) => {
                            let _ = tx.send(Event::Resize(w, h));
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            tracing::warn!("terminal event error: {e}");
                        }
                        None => break,
                    }
                }
                _ = tick.tick() => {
                    if tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
