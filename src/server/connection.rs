//! Per-connection request handling
//!
//! Reads one request head, answers it, closes the connection.

use log::{debug, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::config::ServerConfig;
use crate::error::HttpError;
use crate::gateway::respond;
use crate::http::Request;
use crate::protocol::LineReader;

/// Serves a single request on `stream`.
///
/// A missing or malformed request line ends the connection without a
/// response. Every other path writes exactly one response.
pub async fn handle_connection(
    stream: TcpStream,
    client_addr: SocketAddr,
    config: Arc<ServerConfig>,
) -> Result<(), HttpError> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = LineReader::new(BufReader::new(read_half));

    let request_line = reader
        .read_line()
        .await?
        .ok_or(HttpError::ConnectionClosed)?;
    info!("Request from {}: {}", client_addr, request_line);

    // Headers are read and dropped
    while let Some(header) = reader.read_line().await? {
        if header.is_empty() {
            break;
        }
        debug!("{}", header);
    }

    let request = Request::resolve(&request_line, &config.document_root_path()).await?;
    info!("Requested file path: {}", request.resolved_path.display());

    let outcome = respond(&request, &config).await;
    info!(
        "Response to {}: {} ({})",
        client_addr, outcome.status, outcome.content_type
    );

    outcome.write_to(&mut write_half, config.buffer_size).await?;
    write_half.shutdown().await?;
    Ok(())
}
