use std::path::Path;

use axum::{Router, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

// Entry document returned for every path that is not a file on disk, so the
// client-side router can resolve it.
pub const ENTRY_DOCUMENT: &str = "index.html";

pub fn app(dist_dir: impl AsRef<Path>) -> Router {
    let dist_dir = dist_dir.as_ref();
    let assets = ServeDir::new(dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(dist_dir.join(ENTRY_DOCUMENT)));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}
