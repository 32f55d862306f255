//! Client bundle serving for the Stroop page.
//!
//! The wasm-pack output in `web/pkg` is embedded in release builds so the
//! server binary is self-contained. Debug builds read the folder from disk,
//! so a rebuilt client is picked up without recompiling the server.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

/// Embedded client bundle (`stroop.js`, `stroop_bg.wasm`).
///
/// Produced by
/// `wasm-pack build --target web --out-dir web/pkg --no-default-features --features hydrate`.
/// When the bundle has not been built the folder only holds a placeholder and
/// every bundle request returns 404.
#[derive(Embed)]
#[folder = "web/pkg"]
pub struct ClientBundle;

/// File names are unhashed, so browsers must revalidate to avoid running a
/// stale client against fresh server markup.
const BUNDLE_CACHE_CONTROL: &str = "no-cache, must-revalidate";

/// GET /pkg/{*path} - Serves one file of the client bundle.
pub async fn serve_bundle(Path(path): Path<String>) -> Response {
    if validate_asset_path(&path).is_err() {
        return (StatusCode::BAD_REQUEST, "Invalid asset path").into_response();
    }

    match ClientBundle::get(&path) {
        Some(content) => file_response(&path, content.data.as_ref()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Rejects empty, absolute, hidden and traversing asset paths.
fn validate_asset_path(path: &str) -> Result<(), &'static str> {
    if path.is_empty() {
        return Err("Asset path cannot be empty");
    }

    if path.starts_with('/') || path.starts_with('\\') {
        return Err("Invalid asset path: absolute paths not allowed");
    }

    if path.split(['/', '\\']).any(|segment| segment == ".." || segment.starts_with('.')) {
        return Err("Invalid asset path: hidden files and traversal not allowed");
    }

    Ok(())
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8]) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, BUNDLE_CACHE_CONTROL)
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// Returns true if the bundle contains `path` (relative to `web/pkg`).
#[must_use]
pub fn has_asset(path: &str) -> bool {
    validate_asset_path(path).is_ok() && ClientBundle::get(path).is_some()
}
