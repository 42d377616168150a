//! FTP fallback
//!
//! Downloads a missing plain-text file from the FTP store into the document
//! root and serves it. Status mapping:
//!
//! * connect or login failed: 503
//! * retrieval failed, including a transfer the server never confirmed: 404
//! * retrieval succeeded: 200 with the downloaded file
//! * anything else (the downloaded file cannot be reopened, the task panics): 500
//!
//! The FTP session is disconnected before the status is decided.

use log::{error, info, warn};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs::File;

use crate::client::FtpSession;
use crate::config::ServerConfig;
use crate::http::{ResponseOutcome, content_type_for};

/// Runs one fallback attempt and maps its result to a response.
///
/// The attempt runs in its own task so that even a panic inside the FTP
/// exchange ends as a 500 instead of a dropped connection. The session is
/// owned by that task and its sockets close when it unwinds.
pub async fn fetch_remote(local_path: PathBuf, config: Arc<ServerConfig>) -> ResponseOutcome {
    match tokio::spawn(attempt(local_path, config)).await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(e)) => {
            error!("FTP fallback error: {}", e);
            ResponseOutcome::internal_error()
        }
        Err(e) => {
            error!("FTP fallback task failed: {}", e);
            ResponseOutcome::internal_error()
        }
    }
}

/// `Err` here means an unexpected fault; every protocol failure is already
/// mapped to a response.
async fn attempt(local_path: PathBuf, config: Arc<ServerConfig>) -> io::Result<ResponseOutcome> {
    let remote_name = local_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("no file name in {}", local_path.display()),
            )
        })?;

    let ftp = &config.ftp;
    let mut session = FtpSession::new(config.buffer_size);

    if let Err(e) = session
        .connect(&ftp.host, ftp.port, &ftp.username, &ftp.password)
        .await
    {
        warn!("Failed to connect to FTP server {}:{}: {}", ftp.host, ftp.port, e);
        session.disconnect().await;
        return Ok(ResponseOutcome::service_unavailable());
    }

    let downloaded = session.retrieve(&remote_name, &local_path).await;
    session.disconnect().await;

    match downloaded {
        Ok(bytes) => {
            info!("Downloaded {} from FTP server ({} bytes)", remote_name, bytes);
            let file = File::open(&local_path).await?;
            Ok(ResponseOutcome::file(file, content_type_for(&local_path)))
        }
        Err(e) => {
            warn!("Failed to download {} from FTP server: {}", remote_name, e);
            Ok(ResponseOutcome::not_found_remote())
        }
    }
}
