//! Request dispatch
//!
//! Decides how a resolved request is answered: from the document root,
//! with a terminal 404, or through the FTP fallback.

pub mod fallback;

use log::{info, warn};
use std::sync::Arc;
use tokio::fs::File;

use crate::config::ServerConfig;
use crate::http::{PLAIN_TEXT, Request, ResponseOutcome, content_type_for};
use crate::storage::open_regular_file;

/// How a request will be answered before any FTP traffic happens.
#[derive(Debug)]
pub enum Resolution {
    /// The file exists under the document root
    Local(File),
    /// Missing and not eligible for fallback
    NotFound,
    /// Missing plain-text file; try the FTP store
    FallbackRequired,
}

/// Classifies a request against the local document root.
pub async fn classify(request: &Request) -> Resolution {
    if !request.is_contained() {
        warn!("Rejected target outside document root: {}", request.target);
        return Resolution::NotFound;
    }

    if let Some(file) = open_regular_file(&request.resolved_path).await {
        return Resolution::Local(file);
    }

    if content_type_for(&request.resolved_path).eq_ignore_ascii_case(PLAIN_TEXT) {
        Resolution::FallbackRequired
    } else {
        Resolution::NotFound
    }
}

/// Produces exactly one response for the request.
pub async fn respond(request: &Request, config: &Arc<ServerConfig>) -> ResponseOutcome {
    match classify(request).await {
        Resolution::Local(file) => {
            ResponseOutcome::file(file, content_type_for(&request.resolved_path))
        }
        Resolution::NotFound => ResponseOutcome::not_found(),
        Resolution::FallbackRequired => {
            info!(
                "{} not found locally, attempting FTP download",
                request.resolved_path.display()
            );
            fallback::fetch_remote(request.resolved_path.clone(), Arc::clone(config)).await
        }
    }
}
