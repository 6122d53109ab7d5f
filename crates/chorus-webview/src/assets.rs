//! Bundled prompt bar served through the `chorus://` custom protocol.
//!
//! The files are compiled into the binary, so lookups never touch the
//! filesystem and there is nothing to traverse.

use std::borrow::Cow;

use tracing::warn;

/// Custom protocol scheme registered on the chrome view.
pub const CHROME_SCHEME: &str = "chorus";

const ASSETS: &[(&str, &str, &[u8])] = &[
    (
        "index.html",
        "text/html",
        include_bytes!("../assets/chrome/index.html"),
    ),
    (
        "chrome.css",
        "text/css",
        include_bytes!("../assets/chrome/chrome.css"),
    ),
    (
        "chrome.js",
        "application/javascript",
        include_bytes!("../assets/chrome/chrome.js"),
    ),
];

/// Entry URL of the prompt bar.
///
/// WebView2 rewrites custom schemes to `http://<scheme>.localhost/`, so
/// Windows gets that form directly.
pub fn chrome_url() -> &'static str {
    if cfg!(windows) {
        "http://chorus.localhost/index.html"
    } else {
        "chorus://localhost/index.html"
    }
}

/// Extract the asset path from a request URI, dropping the scheme, host,
/// query and fragment.
pub fn request_path(uri: &str) -> &str {
    let rest = uri
        .strip_prefix("chorus://localhost")
        .or_else(|| uri.strip_prefix("http://chorus.localhost"))
        .or_else(|| uri.strip_prefix("https://chorus.localhost"))
        .or_else(|| uri.strip_prefix("chorus://"))
        .unwrap_or(uri);
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    rest[..end].trim_start_matches('/')
}

/// Look up a bundled asset. An empty path serves `index.html`.
pub fn resolve(path: &str) -> Option<(&'static str, &'static [u8])> {
    let path = if path.is_empty() { "index.html" } else { path };
    ASSETS
        .iter()
        .find(|(name, _, _)| *name == path)
        .map(|(_, mime, body)| (*mime, *body))
}

/// Build the protocol response for a request URI.
pub fn respond(uri: &str) -> wry::http::Response<Cow<'static, [u8]>> {
    let path = request_path(uri);
    match resolve(path) {
        Some((mime, body)) => wry::http::Response::builder()
            .status(200)
            .header("Content-Type", mime)
            .body(Cow::Borrowed(body))
            .unwrap_or_else(|_| wry::http::Response::new(Cow::Borrowed(body))),
        None => {
            warn!(path = %path, "custom protocol: asset not found");
            let mut response = wry::http::Response::new(Cow::Borrowed(&b"Not Found"[..]));
            *response.status_mut() = wry::http::StatusCode::NOT_FOUND;
            response
        }
    }
}
