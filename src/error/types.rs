//! Error types
//!
//! Defines domain-specific error types for the FTP client, the HTTP
//! connection layer and server startup.

use std::fmt;
use std::io;

/// FTP session errors
///
/// Every failed step of the control/data protocol is reported as one of these
/// values; the fallback orchestrator decides which HTTP status it becomes.
#[derive(Debug)]
pub enum FtpError {
    /// Socket or file I/O failed
    Io(io::Error),
    /// The server answered a command with a code other than the expected one.
    /// `reply` is `None` when the control connection closed instead.
    UnexpectedReply {
        command: &'static str,
        expected: &'static [&'static str],
        reply: Option<String>,
    },
    /// The 227 reply did not carry a usable `(h1,h2,h3,h4,p1,p2)` tuple
    MalformedPassiveReply(String),
    /// A transfer was requested before USER/PASS succeeded
    NotAuthenticated,
    /// The operation is not valid in the current session state
    InvalidState(String),
}

impl fmt::Display for FtpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FtpError::Io(e) => write!(f, "I/O error: {}", e),
            FtpError::UnexpectedReply {
                command,
                expected,
                reply: Some(reply),
            } => write!(
                f,
                "Unexpected reply to {}: expected {}, got \"{}\"",
                command,
                expected.join(" or "),
                reply
            ),
            FtpError::UnexpectedReply {
                command,
                expected,
                reply: None,
            } => write!(
                f,
                "Connection closed waiting for reply to {} (expected {})",
                command,
                expected.join(" or ")
            ),
            FtpError::MalformedPassiveReply(r) => write!(f, "Malformed PASV reply: {}", r),
            FtpError::NotAuthenticated => write!(f, "Not logged in"),
            FtpError::InvalidState(s) => write!(f, "Invalid session state: {}", s),
        }
    }
}

impl std::error::Error for FtpError {}

impl From<io::Error> for FtpError {
    fn from(error: io::Error) -> Self {
        FtpError::Io(error)
    }
}

/// HTTP connection errors, fatal to the affected connection only
#[derive(Debug)]
pub enum HttpError {
    /// The request line has fewer than two whitespace-separated tokens
    MalformedRequestLine(String),
    /// The client closed the connection before sending a request line
    ConnectionClosed,
    Io(io::Error),
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::MalformedRequestLine(l) => write!(f, "Malformed request line: {:?}", l),
            HttpError::ConnectionClosed => write!(f, "Connection closed before request line"),
            HttpError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for HttpError {}

impl From<io::Error> for HttpError {
    fn from(error: io::Error) -> Self {
        HttpError::Io(error)
    }
}

/// Server startup errors
#[derive(Debug)]
pub enum ServerError {
    Config(config::ConfigError),
    Bind(String, io::Error),
    Io(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Config(e) => write!(f, "Configuration error: {}", e),
            ServerError::Bind(addr, e) => write!(f, "Failed to bind to {}: {}", addr, e),
            ServerError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<config::ConfigError> for ServerError {
    fn from(error: config::ConfigError) -> Self {
        ServerError::Config(error)
    }
}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::Io(error)
    }
}
