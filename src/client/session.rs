//! Module `session`
//!
//! Drives one FTP control connection through
//! greeting -> USER/PASS -> TYPE I -> PASV -> RETR -> 226 -> QUIT.
//!
//! Reads on the control and data connections have no timeout: a stalled
//! server stalls only the request that is waiting on it.

use log::{debug, info, warn};
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

use crate::client::SessionState;
use crate::error::FtpError;
use crate::protocol::responses::{
    COMMAND_OK, DATA_CONNECTION_OPEN, ENTERING_PASSIVE_MODE, FILE_STATUS_OK, LOGIN_SUCCESS,
    SERVICE_READY, TRANSFER_COMPLETE,
};
use crate::protocol::{Command, FtpReply, LineReader, PassiveEndpoint};
use crate::transfer::{open_data_stream, receive_to_file};

/// Both halves of the control socket. Dropping it closes the connection.
struct ControlChannel {
    reader: LineReader<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl ControlChannel {
    async fn send(&mut self, command: Command) -> std::io::Result<()> {
        debug!(">>> {}", command.log_line());
        self.writer.write_all(command.to_line().as_bytes()).await?;
        self.writer.flush().await
    }

    async fn read_reply(&mut self) -> std::io::Result<Option<FtpReply>> {
        let reply = self.reader.read_reply().await?;
        match &reply {
            Some(r) => debug!("<<< {}", r),
            None => debug!("<<< (connection closed)"),
        }
        Ok(reply)
    }
}

/// A single-use FTP client session.
pub struct FtpSession {
    control: Option<ControlChannel>,
    state: SessionState,
    buffer_size: usize,
}

impl FtpSession {
    /// Creates a disconnected session; `buffer_size` is the chunk size used
    /// when copying the data connection to disk.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            control: None,
            state: SessionState::Disconnected,
            buffer_size,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Opens the control connection and logs in.
    ///
    /// The greeting must be 220 and the PASS reply must be 230. The USER
    /// reply is read but not checked. On failure the session keeps its
    /// control connection (if any) so that `disconnect` can still send QUIT.
    pub async fn connect(
        &mut self,
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<(), FtpError> {
        if self.state != SessionState::Disconnected {
            return Err(FtpError::InvalidState(format!(
                "connect called on a {} session",
                self.state
            )));
        }

        info!("Connecting to FTP server {}:{}", host, port);
        let stream = TcpStream::connect((host, port)).await?;
        let (read_half, write_half) = stream.into_split();
        self.control = Some(ControlChannel {
            reader: LineReader::new(BufReader::new(read_half)),
            writer: write_half,
        });
        self.state = SessionState::Connected;

        let channel = self.channel()?;

        let greeting = channel.read_reply().await?;
        require(greeting, "greeting", &[SERVICE_READY])?;

        channel.send(Command::User(username.to_string())).await?;
        channel.read_reply().await?;

        channel.send(Command::Pass(password.to_string())).await?;
        let reply = channel.read_reply().await?;
        if let Err(e) = require(reply, "PASS", &[LOGIN_SUCCESS]) {
            warn!("FTP login failed for user {}: {}", username, e);
            return Err(e);
        }

        self.state = SessionState::Authenticated;
        info!("FTP login successful for user {}", username);
        Ok(())
    }

    /// Downloads `remote_name` into `local_path` over a passive data connection.
    ///
    /// Returns the number of bytes written. The local file is created (or
    /// truncated) only after RETR is accepted. The call fails unless the
    /// server confirms the transfer with 226, even when every byte has already
    /// been written to `local_path`.
    pub async fn retrieve(&mut self, remote_name: &str, local_path: &Path) -> Result<u64, FtpError> {
        if !self.state.is_authenticated() {
            return Err(FtpError::NotAuthenticated);
        }

        let buffer_size = self.buffer_size;
        let channel = self.channel()?;
        info!("Downloading {} to {}", remote_name, local_path.display());

        channel.send(Command::TypeImage).await?;
        match channel.read_reply().await? {
            Some(reply) if reply.has_code(COMMAND_OK) => {}
            other => warn!("TYPE I not accepted ({:?}), continuing", other),
        }

        channel.send(Command::Pasv).await?;
        let reply = require(channel.read_reply().await?, "PASV", &[ENTERING_PASSIVE_MODE])?;
        let endpoint = PassiveEndpoint::parse(&reply.text).inspect_err(|e| warn!("{}", e))?;
        info!("Data connection: {}", endpoint);

        // The data stream is closed on every early return below.
        let data_stream = open_data_stream(&endpoint).await?;

        channel.send(Command::Retr(remote_name.to_string())).await?;
        let reply = channel.read_reply().await?;
        require(reply, "RETR", &[FILE_STATUS_OK, DATA_CONNECTION_OPEN])
            .inspect_err(|e| warn!("File transfer failed to start: {}", e))?;

        let total = receive_to_file(data_stream, local_path, buffer_size).await?;
        info!("Downloaded {} bytes of {}", total, remote_name);

        let reply = channel.read_reply().await?;
        require(reply, "RETR", &[TRANSFER_COMPLETE])
            .inspect_err(|e| warn!("Transfer of {} not confirmed: {}", remote_name, e))?;

        Ok(total)
    }

    /// Sends QUIT and closes the control connection.
    ///
    /// Does nothing when there is no open control connection. Errors are
    /// logged and swallowed; the socket is closed whatever the server says.
    pub async fn disconnect(&mut self) {
        let Some(mut channel) = self.control.take() else {
            return;
        };

        let quit = match channel.send(Command::Quit).await {
            Ok(()) => channel.read_reply().await.map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(e) = quit {
            warn!("FTP disconnect error: {}", e);
        }

        if let Err(e) = channel.writer.shutdown().await {
            debug!("FTP control shutdown: {}", e);
        }
        drop(channel);

        self.state = SessionState::Closed;
        info!("FTP session closed");
    }

    fn channel(&mut self) -> Result<&mut ControlChannel, FtpError> {
        self.control
            .as_mut()
            .ok_or_else(|| FtpError::InvalidState("no control connection".into()))
    }
}

/// Accepts the reply when its code is one of `codes`.
fn require(
    reply: Option<FtpReply>,
    command: &'static str,
    codes: &'static [&'static str],
) -> Result<FtpReply, FtpError> {
    match reply {
        Some(reply) if codes.iter().any(|code| reply.has_code(code)) => Ok(reply),
        other => Err(FtpError::UnexpectedReply {
            command,
            expected: codes,
            reply: other.map(|r| r.to_string()),
        }),
    }
}
