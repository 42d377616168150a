//! FTP download client
//!
//! One `FtpSession` per download attempt: connect and log in, negotiate a
//! passive data connection, retrieve one file, then tear down.

pub mod session;
pub mod state;

pub use session::FtpSession;
pub use state::SessionState;
