//! Transfer module
//!
//! Opens FTP data connections and streams bytes between sockets and files.

pub mod data_channel;
pub mod file_ops;

pub use data_channel::open_data_stream;
pub use file_ops::{receive_to_file, send_file};
