//! Error handling
//!
//! Defines error types for the FTP client, HTTP connections and startup.

pub mod types;

pub use types::*;
