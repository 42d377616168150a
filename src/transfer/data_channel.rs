//! Module `data_channel`
//!
//! Opens the client side of a passive-mode FTP data connection.

use log::{error, info};
use std::io;
use tokio::net::TcpStream;

use crate::protocol::PassiveEndpoint;

/// Connects to the host and port advertised in the 227 reply.
///
/// Exactly one data connection is opened per download attempt; the caller
/// owns the returned stream and closes it by dropping it.
pub async fn open_data_stream(endpoint: &PassiveEndpoint) -> io::Result<TcpStream> {
    match TcpStream::connect(endpoint.socket_addr()).await {
        Ok(stream) => {
            info!("Data connection established to {}", endpoint);
            Ok(stream)
        }
        Err(e) => {
            error!("Failed to open data connection to {}: {}", endpoint, e);
            Err(e)
        }
    }
}
