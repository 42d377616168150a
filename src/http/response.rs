//! HTTP/1.0 responses
//!
//! A response is a status line, one `Content-type` header, a blank line and
//! the body. No other headers are sent; the connection is closed afterwards.

use std::fmt;
use std::io;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::content_type::HTML;
use crate::transfer::send_file;

const NOT_FOUND_BODY: &str = "<HTML><HEAD><TITLE>Not Found</TITLE></HEAD>\
<BODY><H1>404 Not Found</H1><P>The requested was not found.</P></BODY></HTML>";

const NOT_FOUND_REMOTE_BODY: &str = "<HTML><HEAD><TITLE>Not Found</TITLE></HEAD>\
<BODY><H1>404 Not Found</H1>\
<P>The requested file not found on this server or FTP server.</P></BODY></HTML>";

const SERVICE_UNAVAILABLE_BODY: &str = "<HTML><HEAD><TITLE>Service Unavailable</TITLE></HEAD>\
<BODY><H1>503 Service Unavailable</H1><P>Could not connect to FTP server.</P></BODY></HTML>";

const INTERNAL_ERROR_BODY: &str = "<HTML><HEAD><TITLE>Internal Server Error</TITLE></HEAD>\
<BODY><H1>500 Internal Server Error</H1><P>Internal error occured.</P></BODY></HTML>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    NotFound,
    InternalServerError,
    ServiceUnavailable,
}

impl StatusCode {
    pub fn code(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::ServiceUnavailable => 503,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::ServiceUnavailable => "Service Unavailable",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// Where the response body comes from.
#[derive(Debug)]
pub enum Body {
    File(File),
    Literal(&'static str),
}

/// The single response produced for a request.
#[derive(Debug)]
pub struct ResponseOutcome {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Body,
}

impl ResponseOutcome {
    /// 200 with the file's contents.
    pub fn file(file: File, content_type: &'static str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type,
            body: Body::File(file),
        }
    }

    /// 404 for a missing file that is not eligible for FTP fallback.
    pub fn not_found() -> Self {
        Self::html(StatusCode::NotFound, NOT_FOUND_BODY)
    }

    /// 404 after the FTP fallback could not deliver the file.
    pub fn not_found_remote() -> Self {
        Self::html(StatusCode::NotFound, NOT_FOUND_REMOTE_BODY)
    }

    /// 503 when the FTP server could not be reached or refused the login.
    pub fn service_unavailable() -> Self {
        Self::html(StatusCode::ServiceUnavailable, SERVICE_UNAVAILABLE_BODY)
    }

    pub fn internal_error() -> Self {
        Self::html(StatusCode::InternalServerError, INTERNAL_ERROR_BODY)
    }

    fn html(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            content_type: HTML,
            body: Body::Literal(body),
        }
    }

    /// Writes the status line, content type, blank line and body.
    ///
    /// Consumes the outcome; a file body is closed once it has been sent.
    pub async fn write_to<W>(self, writer: &mut W, buffer_size: usize) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let head = format!(
            "HTTP/1.0 {}\r\nContent-type: {}\r\n\r\n",
            self.status, self.content_type
        );
        writer.write_all(head.as_bytes()).await?;

        match self.body {
            Body::File(mut file) => {
                send_file(&mut file, writer, buffer_size).await?;
            }
            Body::Literal(body) => {
                writer.write_all(body.as_bytes()).await?;
                writer.flush().await?;
            }
        }
        Ok(())
    }
}
