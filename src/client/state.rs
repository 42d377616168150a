//! Module `state`
//!
//! Lifecycle states of an FTP control connection.

use std::fmt;

/// Where an `FtpSession` is in its lifecycle.
///
/// `Disconnected -> Connected -> Authenticated -> Closed`. A session whose
/// login failed stays `Connected` and is only good for `disconnect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No control connection yet
    Disconnected,
    /// Control socket open
    Connected,
    /// USER/PASS accepted
    Authenticated,
    /// QUIT sent and socket closed
    Closed,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Disconnected => "disconnected",
            SessionState::Connected => "connected",
            SessionState::Authenticated => "authenticated",
            SessionState::Closed => "closed",
        };
        f.write_str(name)
    }
}
