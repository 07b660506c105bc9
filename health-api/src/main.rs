// health-api/src/main.rs

//! Health API binary.
//!
//! Serves `GET /health` for the ping console and any browser front end
//! allowed by `FRONT_ORIGIN`.

use anyhow::Context;
use tokio::signal;

use health_api::{ApiConfig, FrontOrigin, create_app};

#[tokio::main]
async fn main() {
    // Basic tracing setup.
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "health_api=info,tower_http=info".to_string()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = ApiConfig::from_env().context("invalid configuration")?;

    match &cfg.front_origin {
        FrontOrigin::Any => tracing::info!("CORS allows any origin"),
        FrontOrigin::Exact(origin) => tracing::info!(?origin, "CORS restricted to front origin"),
    }

    let app = create_app(&cfg);

    tracing::info!("health API listening on http://{}", cfg.listen_addr);

    let listener = tokio::net::TcpListener::bind(cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API server error")?;

    Ok(())
}

/// Waits for Ctrl-C and returns, used for graceful shutdown.
async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
