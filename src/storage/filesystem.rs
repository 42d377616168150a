//! File system operations
//!
//! Lookups used to decide whether a request can be served locally.

use log::debug;
use std::path::Path;
use tokio::fs::{self, File};

/// Check if a regular file exists at `path`
pub async fn file_exists(path: &Path) -> bool {
    match fs::metadata(path).await {
        Ok(meta) => meta.is_file(),
        Err(_) => false,
    }
}

/// Opens `path` for reading if it is a regular file.
///
/// Directories, missing paths and unreadable files all count as absent.
pub async fn open_regular_file(path: &Path) -> Option<File> {
    let file = match File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            debug!("Cannot open {}: {}", path.display(), e);
            return None;
        }
    };

    match file.metadata().await {
        Ok(meta) if meta.is_file() => Some(file),
        Ok(_) => {
            debug!("{} is not a regular file", path.display());
            None
        }
        Err(e) => {
            debug!("Cannot stat {}: {}", path.display(), e);
            None
        }
    }
}
