//! FTP replies
//!
//! A reply is a 3-digit code followed by text. Multi-line replies are
//! collapsed into their terminating line by `LineReader::read_reply`.

use std::fmt;

/// A reply read from the control connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FtpReply {
    /// The first three characters of the line
    pub code: String,
    /// Everything after the code and its separator
    pub text: String,
    /// `false` when the line opened a multi-line reply that was never terminated
    pub is_final: bool,
}

impl FtpReply {
    /// Splits a raw control line into code and text.
    pub fn parse(line: &str) -> Self {
        let code = line.get(..3).unwrap_or(line).to_string();
        let text = line.get(4..).unwrap_or("").to_string();
        Self {
            code,
            text,
            is_final: !opens_multiline(line),
        }
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.code == code
    }
}

impl fmt::Display for FtpReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_final { ' ' } else { '-' };
        write!(f, "{}{}{}", self.code, sep, self.text)
    }
}

/// Whether the line's 4th character is `-`.
pub fn opens_multiline(line: &str) -> bool {
    line.as_bytes().get(3) == Some(&b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_line() {
        let reply = FtpReply::parse("230 Login successful.");
        assert_eq!(reply.code, "230");
        assert_eq!(reply.text, "Login successful.");
        assert!(reply.is_final);
        assert!(reply.has_code("230"));
        assert_eq!(reply.to_string(), "230 Login successful.");
    }

    #[test]
    fn test_parse_multiline_opener() {
        let reply = FtpReply::parse("220-Welcome");
        assert_eq!(reply.code, "220");
        assert!(!reply.is_final);
    }

    #[test]
    fn test_parse_short_lines() {
        let reply = FtpReply::parse("22");
        assert_eq!(reply.code, "22");
        assert!(!reply.has_code("220"));

        let reply = FtpReply::parse("226");
        assert!(reply.has_code("226"));
        assert_eq!(reply.text, "");
    }
}
