//! Server core functionality
//!
//! Listener setup, the accept loop and the per-connection request handler.

pub mod connection;
pub mod core;

pub use connection::handle_connection;
pub use self::core::Server;
