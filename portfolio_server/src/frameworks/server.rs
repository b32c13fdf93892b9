// Framework bootstrap for the static site server.

use crate::frameworks::config;
use crate::interface_adapters::routes::{ENTRY_DOCUMENT, app};

use std::io::Result;
use std::net::SocketAddr;
use std::path::Path;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, dist_dir: impl AsRef<Path>) -> Result<()> {
    let address = listener.local_addr()?;
    let dist_dir = dist_dir.as_ref();

    if !dist_dir.join(ENTRY_DOCUMENT).is_file() {
        // Still serve: assets may be deployed after startup.
        tracing::warn!(dist_dir = %dist_dir.display(), "entry document not found");
    }

    let app = app(dist_dir);

    tracing::info!(%address, dist_dir = %dist_dir.display(), "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::new(config::http_host(), config::http_port());

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config::dist_dir()).await
}
