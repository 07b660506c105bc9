// console/src/main.rs

//! Ping console binary.
//!
//! Terminal front end for the ping view: a text field, a `Ping` button and
//! a log of results. The backend is taken from `API_BASE_URL`; when it is
//! missing the console still starts and pinging shows an alert instead.

mod app;
mod config;
mod event;
mod notify;
mod tui;
mod ui;

use anyhow::{Context, Result};

use pingview::{DefaultPingView, HttpHealthProbe, PingView, ViewConfig};

use app::App;
use config::ConsoleConfig;
use event::EventHandler;
use notify::ChannelNotifier;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let console_cfg = ConsoleConfig::from_env()?;

    // The UI owns the terminal, so traces go to a daily rolling file.
    std::fs::create_dir_all(&console_cfg.log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            console_cfg.log_dir.display()
        )
    })?;
    let file_appender = tracing_appender::rolling::daily(&console_cfg.log_dir, "console.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "pingview_console=info,pingview=info".to_string()),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let view_cfg = ViewConfig::from_env();
    let probe = HttpHealthProbe::new().context("failed to create HTTP health probe")?;

    let mut events = EventHandler::new(console_cfg.tick_rate);
    let notifier = ChannelNotifier::new(events.inject_tx.clone());
    let view: DefaultPingView<ChannelNotifier> = PingView::new(view_cfg, probe, notifier);
    let mut app = App::new(view);

    tracing::info!("starting ping console");

    tui::install_panic_hook();
    let mut terminal = tui::init().context("failed to initialise terminal")?;
    let result = event_loop(&mut terminal, &mut app, &mut events).await;
    tui::restore().context("failed to restore terminal")?;

    tracing::info!(entries = app.view.log().len(), "ping console stopped");
    result
}

async fn event_loop(
    terminal: &mut tui::Tui,
    app: &mut App<HttpHealthProbe, ChannelNotifier>,
    events: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(event) => app.handle_event(event),
                None => break,
            },
            // The entry is appended by the view; the loop only redraws.
            Some(_) = app.view.next_result(), if app.view.in_flight() > 0 => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
