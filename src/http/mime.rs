//! Content-type inference from file extensions.

use std::path::Path;

use axum::http::HeaderValue;

/// Served when the extension is unmapped or detection is disabled.
pub const FALLBACK_TYPE: &str = "application/octet-stream";

/// Resolve the Content-Type for a file path.
///
/// Extension matching is case-insensitive. With detection disabled every
/// file is served as the fallback type.
pub fn content_type_for(path: &Path, detection: bool) -> HeaderValue {
    if !detection {
        return HeaderValue::from_static(FALLBACK_TYPE);
    }

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    HeaderValue::from_str(mime.essence_str())
        .unwrap_or_else(|_| HeaderValue::from_static(FALLBACK_TYPE))
}
