// One static-site server per test binary, shared by every test in it.
use std::{net::TcpListener, sync::OnceLock};

// Base URL of the shared server, set once on first use.
static SERVER_URL: OnceLock<String> = OnceLock::new();

// Prebuilt bundle the server under test serves.
pub fn fixture_dist() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/dist")
}

// Start the server on first call and return its base URL.
pub fn ensure_server() -> &'static str {
    SERVER_URL.get_or_init(|| {
        // Bind here, before spawning, so the port already accepts connections
        // when this returns; no readiness polling needed.
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral test port");
        let addr = listener.local_addr().expect("get local addr");
        listener
            .set_nonblocking(true)
            .expect("tokio requires a non-blocking listener");

        // A dedicated OS thread with its own runtime outlives each `#[tokio::test]` runtime.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("adopt test listener");
                portfolio_server::run(listener, fixture_dist())
                    .await
                    .expect("server failed");
            });
        });

        format!("http://{addr}")
    })
}
