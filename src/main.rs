//! RAX web server - Entry Point
//!
//! Serves files from a document root over HTTP/1.0 and fetches missing
//! plain-text files from an FTP server.

use env_logger::{Builder, Env};
use log::{error, info};

use rax_web_server::error::ServerError;
use rax_web_server::{Server, ServerConfig};

#[tokio::main]
async fn main() {
    // RUST_LOG overrides the default level
    Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Launching web server...");

    if let Err(e) = run().await {
        error!("Server startup failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::load()?;
    let server = Server::bind(config).await?;
    server.start().await;
    Ok(())
}
