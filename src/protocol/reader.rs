//! Line-oriented protocol reader
//!
//! Reads LF or CRLF terminated lines from a buffered byte stream. Used for
//! the HTTP request head and for FTP control replies. There is no limit on
//! line length and no read timeout.

use log::debug;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::protocol::reply::{FtpReply, opens_multiline};

pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }

    /// Reads one line without its terminator.
    ///
    /// Returns `Ok(None)` at end of stream. A final line without terminator is
    /// still returned. Invalid UTF-8 is replaced, not rejected.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        let n = self.inner.read_until(b'\n', &mut self.buf).await?;
        if n == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    /// Reads one FTP reply.
    ///
    /// A line like `150-...` opens a multi-line reply: following lines are
    /// discarded until one starts with `"150 "`, which becomes the reply. If the
    /// stream ends first, the opening line is returned with `is_final == false`.
    pub async fn read_reply(&mut self) -> io::Result<Option<FtpReply>> {
        let first = match self.read_line().await? {
            Some(line) => line,
            None => return Ok(None),
        };

        let mut reply = FtpReply::parse(&first);
        if opens_multiline(&first) {
            let terminator = format!("{} ", reply.code);
            while let Some(line) = self.read_line().await? {
                debug!("<<< {}", line);
                if line.starts_with(&terminator) {
                    reply = FtpReply::parse(&line);
                    break;
                }
            }
        }

        Ok(Some(reply))
    }
}
