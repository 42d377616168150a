//! Line protocol plumbing
//!
//! Line reading shared by the HTTP front end and the FTP control channel,
//! plus FTP command formatting, reply framing and PASV parsing.

pub mod commands;
pub mod passive;
pub mod reader;
pub mod reply;
pub mod responses;

pub use commands::Command;
pub use passive::PassiveEndpoint;
pub use reader::LineReader;
pub use reply::FtpReply;
