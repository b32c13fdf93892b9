use std::{env, net::IpAddr, path::PathBuf};

// Runtime/server settings read from the environment (and `.env` when present).

pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn http_host() -> IpAddr {
    env::var("HOST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::from([0, 0, 0, 0]))
}

// Directory holding the prebuilt site bundle.
pub fn dist_dir() -> PathBuf {
    env::var("DIST_DIR")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"))
}
