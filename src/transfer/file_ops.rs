//! Module `file_ops`
//!
//! Chunked copies between files and sockets: storing an FTP download on
//! disk and streaming a local file into an HTTP response.

use log::{debug, error, info};
use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Copies everything from `data_stream` into a new file at `path`.
///
/// Existing content is overwritten. Returns the number of bytes written.
/// Both the stream and the file are closed before this returns, on success
/// and on error.
pub async fn receive_to_file<R>(mut data_stream: R, path: &Path, buffer_size: usize) -> io::Result<u64>
where
    R: AsyncRead + Unpin,
{
    let mut file = match File::create(path).await {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to create {}: {}", path.display(), e);
            return Err(e);
        }
    };

    let mut buffer = vec![0u8; buffer_size];
    let mut total_bytes = 0u64;

    loop {
        let n = data_stream.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        file.write_all(&buffer[..n]).await?;
        total_bytes += n as u64;
    }

    file.flush().await?;
    drop(file);
    drop(data_stream);

    info!("Stored {} ({} bytes)", path.display(), total_bytes);
    Ok(total_bytes)
}

/// Streams `file` into `writer` in chunks of `buffer_size`.
pub async fn send_file<W>(file: &mut File, writer: &mut W, buffer_size: usize) -> io::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let mut buffer = vec![0u8; buffer_size];
    let mut total_bytes_sent = 0u64;

    loop {
        let n = file.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        writer.write_all(&buffer[..n]).await?;
        total_bytes_sent += n as u64;
    }

    writer.flush().await?;
    debug!("Sent {} bytes", total_bytes_sent);
    Ok(total_bytes_sent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rax-web-file-ops-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_receive_overwrites_existing_file() {
        let path = scratch_file("overwrite.txt");
        std::fs::write(&path, b"old content that is longer").unwrap();

        let payload: &[u8] = b"new";
        let n = receive_to_file(payload, &path, 2).await.unwrap();

        assert_eq!(n, 3);
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_receive_into_missing_directory_fails() {
        let path = scratch_file("no-such-dir").join("file.txt");
        let payload: &[u8] = b"data";
        assert!(receive_to_file(payload, &path, 16).await.is_err());
    }

    #[tokio::test]
    async fn test_send_file_copies_all_bytes() {
        let path = scratch_file("send.bin");
        let content: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
        std::fs::write(&path, &content).unwrap();

        let mut file = File::open(&path).await.unwrap();
        let mut out = Vec::new();
        let n = send_file(&mut file, &mut out, 1024).await.unwrap();

        assert_eq!(n, 10_000);
        assert_eq!(out, content);
        std::fs::remove_file(&path).unwrap();
    }
}
