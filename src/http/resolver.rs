//! Request path normalization and filesystem resolution.
//!
//! # Responsibilities
//! - Percent-decode and normalize the URL path
//! - Guarantee the resolved path stays below the document root
//! - Substitute the index file for directory requests
//!
//! # Design Decisions
//! - `..` segments that would climb past the root are rejected outright,
//!   not clamped; an escaping path can never resolve to anything
//! - Normalization happens before any filesystem access
//! - Directory requests without an index resolve to NotFound (no listing)

use std::io;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use thiserror::Error;

/// Why a request path failed to resolve to a servable file.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The raw path was not decodable (bad percent escapes, NUL bytes).
    #[error("malformed request path")]
    BadRequest,

    /// The normalized path would escape the document root.
    #[error("path escapes the document root")]
    Traversal,

    /// No file exists at the resolved location.
    #[error("not found")]
    NotFound,

    /// The resolved file exists but is not readable.
    #[error("permission denied")]
    Forbidden,

    /// Any other filesystem error.
    #[error("filesystem error: {0}")]
    Io(io::Error),
}

/// Map a filesystem error onto the resolver taxonomy.
pub fn classify(err: io::Error) -> ResolveError {
    match err.kind() {
        io::ErrorKind::NotFound => ResolveError::NotFound,
        io::ErrorKind::PermissionDenied => ResolveError::Forbidden,
        _ => ResolveError::Io(err),
    }
}

/// Normalize a raw URL path into a relative filesystem path.
///
/// Empty and `.` segments are dropped; `..` pops the previous segment and
/// is rejected when there is nothing left to pop. The returned path is
/// therefore always relative and always below whatever it is joined to.
pub fn normalize_path(raw: &str) -> Result<PathBuf, ResolveError> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| ResolveError::BadRequest)?;

    if decoded.contains('\0') {
        return Err(ResolveError::BadRequest);
    }

    let mut normalized = PathBuf::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                if !normalized.pop() {
                    return Err(ResolveError::Traversal);
                }
            }
            _ => normalized.push(segment),
        }
    }

    Ok(normalized)
}

/// Resolve a normalized relative path against the document root.
///
/// A directory target retries once with the index file appended.
pub async fn resolve(
    root: &Path,
    relative: &Path,
    index_file: &str,
) -> Result<PathBuf, ResolveError> {
    let candidate = root.join(relative);

    let metadata = tokio::fs::metadata(&candidate).await.map_err(classify)?;
    if metadata.is_file() {
        return Ok(candidate);
    }

    if metadata.is_dir() {
        let indexed = candidate.join(index_file);
        let metadata = tokio::fs::metadata(&indexed).await.map_err(classify)?;
        if metadata.is_file() {
            return Ok(indexed);
        }
    }

    // Directories without an index, sockets, fifos.
    Err(ResolveError::NotFound)
}
