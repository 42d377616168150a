//! Storage module
//!
//! File system lookups under the document root and path validation.

pub mod filesystem;
pub mod validation;

pub use filesystem::{file_exists, open_regular_file};
pub use validation::is_contained;
