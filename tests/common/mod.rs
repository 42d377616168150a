//! Shared test helpers: a scripted FTP server and temporary document roots.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::{TcpListener, TcpStream};

/// Replies the mock server gives. Reply strings are sent as-is followed by CRLF,
/// so a value may hold several lines of a multi-line reply.
#[derive(Clone)]
pub struct MockFtpScript {
    pub greeting: String,
    pub pass_reply: String,
    pub type_reply: String,
    /// `None` advertises the real data listener
    pub pasv_reply: Option<String>,
    pub retr_reply: String,
    pub payload: Vec<u8>,
    pub complete_reply: String,
}

impl Default for MockFtpScript {
    fn default() -> Self {
        Self {
            greeting: "220 Mock FTP ready".to_string(),
            pass_reply: "230 Login successful".to_string(),
            type_reply: "200 Switching to Binary mode".to_string(),
            pasv_reply: None,
            retr_reply: "150 Opening BINARY mode data connection".to_string(),
            payload: b"hello from the ftp store\n".to_vec(),
            complete_reply: "226 Transfer complete".to_string(),
        }
    }
}

pub struct MockFtpServer {
    pub addr: SocketAddr,
    commands: Arc<Mutex<Vec<String>>>,
    sessions: Arc<AtomicUsize>,
}

impl MockFtpServer {
    pub async fn start(script: MockFtpScript) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let commands = Arc::new(Mutex::new(Vec::new()));
        let sessions = Arc::new(AtomicUsize::new(0));
        let script = Arc::new(script);

        let log = Arc::clone(&commands);
        let count = Arc::clone(&sessions);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                count.fetch_add(1, Ordering::SeqCst);
                let script = Arc::clone(&script);
                let log = Arc::clone(&log);
                tokio::spawn(async move {
                    let _ = serve_control(stream, script, log).await;
                });
            }
        });

        Self {
            addr,
            commands,
            sessions,
        }
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Every command line received so far, across all sessions.
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    /// Number of control connections accepted.
    pub fn sessions(&self) -> usize {
        self.sessions.load(Ordering::SeqCst)
    }
}

async fn reply(writer: &mut OwnedWriteHalf, text: &str) -> std::io::Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\r\n").await?;
    writer.flush().await
}

async fn serve_control(
    stream: TcpStream,
    script: Arc<MockFtpScript>,
    log: Arc<Mutex<Vec<String>>>,
) -> std::io::Result<()> {
    let (read_half, mut writer) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();
    let mut data_listener: Option<TcpListener> = None;

    reply(&mut writer, &script.greeting).await?;

    while let Some(line) = lines.next_line().await? {
        log.lock().unwrap().push(line.clone());
        let verb = line
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_ascii_uppercase();

        match verb.as_str() {
            "USER" => reply(&mut writer, "331 Password required").await?,
            "PASS" => reply(&mut writer, &script.pass_reply).await?,
            "TYPE" => reply(&mut writer, &script.type_reply).await?,
            "PASV" => {
                let listener = TcpListener::bind("127.0.0.1:0").await?;
                let port = listener.local_addr()?.port();
                let text = script
                    .pasv_reply
                    .clone()
                    .unwrap_or_else(|| pasv_reply_for(port));
                data_listener = Some(listener);
                reply(&mut writer, &text).await?;
            }
            "RETR" => {
                reply(&mut writer, &script.retr_reply).await?;
                let accepted =
                    script.retr_reply.starts_with("150") || script.retr_reply.starts_with("125");
                if accepted {
                    if let Some(listener) = data_listener.take() {
                        let (mut data, _) = listener.accept().await?;
                        data.write_all(&script.payload).await?;
                        data.shutdown().await?;
                    }
                    reply(&mut writer, &script.complete_reply).await?;
                }
            }
            "QUIT" => {
                reply(&mut writer, "221 Goodbye").await?;
                break;
            }
            _ => reply(&mut writer, "502 Command not implemented").await?,
        }
    }

    Ok(())
}

/// A port nothing listens on.
pub async fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

/// A fresh, empty directory under the system temp dir.
pub fn temp_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("rax-web-it-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(&root).unwrap();
    root
}

/// A 227 reply advertising `127.0.0.1:port` as the data endpoint.
pub fn pasv_reply_for(port: u16) -> String {
    format!(
        "227 Entering Passive Mode (127,0,0,1,{},{})",
        port / 256,
        port % 256
    )
}
