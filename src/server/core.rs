use log::{error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::server::handle_connection;

pub struct Server {
    listener: TcpListener,
    config: Arc<ServerConfig>,
}

impl Server {
    /// Binds the HTTP listener and makes sure the document root exists.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let socket = config.listen_socket();
        let listener = TcpListener::bind(&socket)
            .await
            .map_err(|e| ServerError::Bind(socket.clone(), e))?;
        info!("Server bound to {}", listener.local_addr()?);

        if let Err(e) = tokio::fs::create_dir_all(&config.document_root).await {
            warn!("Failed to create document root directory: {}", e);
        } else {
            info!("Document root: {}", config.document_root);
        }

        Ok(Self {
            listener,
            config: Arc::new(config),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections forever, one task per connection.
    pub async fn start(&self) {
        info!(
            "Starting RAX web server on {} (FTP fallback {}:{})",
            self.config.listen_socket(),
            self.config.ftp.host,
            self.config.ftp.port
        );

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let config = Arc::clone(&self.config);

                    // Spawn a task for each client so accept loop doesn't block
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, addr, config).await {
                            warn!("Failed to handle client {}: {}", addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}
