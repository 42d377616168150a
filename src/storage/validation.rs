//! Path validation
//!
//! Keeps request targets inside the document root.

use std::path::{Component, Path};

/// Whether a request target stays beneath the document root.
///
/// Any `..` segment is rejected outright, wherever it appears.
pub fn is_contained(target: &str) -> bool {
    !Path::new(target)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
}
