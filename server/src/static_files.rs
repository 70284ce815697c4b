//! Static asset serving for the UI
//!
//! Files are read from `STATIC_DIR` (default `./static`): `/` serves
//! the index page and `/static/...` serves assets with the URL prefix
//! stripped, so `/static/js/app.js` reads `STATIC_DIR/js/app.js`.
//! Paths containing `..` are rejected outright.

use hyper::{Body, Response, StatusCode};
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

static STATIC_DIR: Lazy<PathBuf> = Lazy::new(|| {
    std::env::var("STATIC_DIR")
        .unwrap_or_else(|_| "./static".to_string())
        .into()
});

pub async fn serve_static(path: &str) -> Response<Body> {
    // Mirror the original's mount points: the index at the root, and
    // the asset tree under /static/ with the prefix stripped before
    // hitting the filesystem.
    let rel = if path == "/" {
        "index.html"
    } else if let Some(asset) = path.strip_prefix("/static/") {
        asset
    } else {
        return not_found();
    };

    if rel.is_empty() || rel.split('/').any(|seg| seg == "..") {
        return not_found();
    }

    let full = STATIC_DIR.join(rel);
    match tokio::fs::read(&full).await {
        Ok(bytes) => Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", content_type(&full))
            .body(Body::from(bytes))
            .unwrap(),
        Err(_) => not_found(),
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

fn not_found() -> Response<Body> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from("Not Found"))
        .unwrap()
}
