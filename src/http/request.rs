//! Request-line resolution
//!
//! Turns `GET /path HTTP/1.0` into a path beneath the document root.

use std::path::{Path, PathBuf};

use crate::error::HttpError;
use crate::storage::{file_exists, is_contained};

/// Files tried, in order, when the root path `/` is requested.
pub const INDEX_CANDIDATES: [&str; 3] = ["/index.html", "/index.htm", "/default.html"];

/// A parsed request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// First token; read but never distinguished
    pub method: String,
    /// Second token, exactly as received
    pub target: String,
    /// Document root joined with the (index-substituted) target
    pub resolved_path: PathBuf,
}

impl Request {
    /// Parses a request line and resolves its target under `document_root`.
    ///
    /// Fails only when the line has fewer than two whitespace-separated
    /// tokens. Does not check that the resolved file exists.
    pub async fn resolve(request_line: &str, document_root: &Path) -> Result<Self, HttpError> {
        let mut tokens = request_line.split_whitespace();
        let (Some(method), Some(target)) = (tokens.next(), tokens.next()) else {
            return Err(HttpError::MalformedRequestLine(request_line.to_string()));
        };

        let path = if target == "/" {
            index_file(document_root).await
        } else {
            target
        };

        Ok(Self {
            method: method.to_string(),
            target: target.to_string(),
            resolved_path: document_root.join(path.trim_start_matches('/')),
        })
    }

    /// Whether the target stays inside the document root.
    pub fn is_contained(&self) -> bool {
        is_contained(&self.target)
    }
}

/// First index candidate present under `document_root`, else `/index.html`.
async fn index_file(document_root: &Path) -> &'static str {
    for candidate in INDEX_CANDIDATES {
        if file_exists(&document_root.join(&candidate[1..])).await {
            return candidate;
        }
    }
    INDEX_CANDIDATES[0]
}
