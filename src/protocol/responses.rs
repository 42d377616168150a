//! FTP reply codes
//!
//! The reply codes the client waits for while driving a download.

/// Service ready for new user (greeting)
pub const SERVICE_READY: &str = "220";
/// User logged in, proceed
pub const LOGIN_SUCCESS: &str = "230";
/// Command okay (TYPE)
pub const COMMAND_OK: &str = "200";
/// Entering passive mode (h1,h2,h3,h4,p1,p2)
pub const ENTERING_PASSIVE_MODE: &str = "227";
/// File status okay; about to open data connection
pub const FILE_STATUS_OK: &str = "150";
/// Data connection already open; transfer starting
pub const DATA_CONNECTION_OPEN: &str = "125";
/// Closing data connection; requested file action successful
pub const TRANSFER_COMPLETE: &str = "226";
