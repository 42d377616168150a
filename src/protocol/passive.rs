//! Passive mode endpoint parsing
//!
//! Extracts the data connection address from a 227 reply such as
//! `227 Entering Passive Mode (127,0,0,1,200,50)`.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddrV4};

use crate::error::FtpError;

/// Host and port advertised by the server for the data connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassiveEndpoint {
    pub host: Ipv4Addr,
    pub port: u16,
}

impl PassiveEndpoint {
    /// Parses the parenthesized `h1,h2,h3,h4,p1,p2` tuple out of reply text.
    ///
    /// Fails when either parenthesis is missing (or they are reversed), when
    /// the tuple does not have exactly six fields, or when a field is not a
    /// number in `0..=255`.
    pub fn parse(reply_text: &str) -> Result<Self, FtpError> {
        let malformed = || FtpError::MalformedPassiveReply(reply_text.to_string());

        let start = reply_text.find('(').ok_or_else(malformed)?;
        let end = reply_text.find(')').ok_or_else(malformed)?;
        if end < start {
            return Err(malformed());
        }

        let fields: Vec<&str> = reply_text[start + 1..end].split(',').collect();
        if fields.len() != 6 {
            return Err(malformed());
        }

        let mut octets = [0u8; 6];
        for (slot, field) in octets.iter_mut().zip(&fields) {
            *slot = field.trim().parse().map_err(|_| malformed())?;
        }

        Ok(Self {
            host: Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]),
            port: u16::from(octets[4]) * 256 + u16::from(octets[5]),
        })
    }

    pub fn socket_addr(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.host, self.port)
    }
}

impl fmt::Display for PassiveEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_reply() {
        let ep = PassiveEndpoint::parse("Entering Passive Mode (127,0,0,1,200,50)").unwrap();
        assert_eq!(ep.host.to_string(), "127.0.0.1");
        assert_eq!(ep.port, 51250);
        assert_eq!(ep.to_string(), "127.0.0.1:51250");
    }

    #[test]
    fn test_parse_with_spaces_and_trailing_dot() {
        let ep = PassiveEndpoint::parse("Entering Passive Mode (10, 0, 0, 5, 4, 1).").unwrap();
        assert_eq!(ep.socket_addr(), SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 5), 1025));
    }

    #[test]
    fn test_port_bounds() {
        let ep = PassiveEndpoint::parse("(0,0,0,0,0,0)").unwrap();
        assert_eq!(ep.port, 0);
        let ep = PassiveEndpoint::parse("(1,2,3,4,255,255)").unwrap();
        assert_eq!(ep.port, 65535);
    }

    #[test]
    fn test_missing_parenthesis() {
        assert!(matches!(
            PassiveEndpoint::parse("Entering Passive Mode 127,0,0,1,200,50)"),
            Err(FtpError::MalformedPassiveReply(_))
        ));
        assert!(PassiveEndpoint::parse("Entering Passive Mode (127,0,0,1,200,50").is_err());
        assert!(PassiveEndpoint::parse(")127,0,0,1,200,50(").is_err());
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(PassiveEndpoint::parse("(127,0,0,1,200)").is_err());
        assert!(PassiveEndpoint::parse("(127,0,0,1,200,50,7)").is_err());
        assert!(PassiveEndpoint::parse("()").is_err());
    }

    #[test]
    fn test_non_numeric_fields() {
        assert!(PassiveEndpoint::parse("(127,0,0,x,200,50)").is_err());
        assert!(PassiveEndpoint::parse("(127,0,0,1,256,50)").is_err());
        assert!(PassiveEndpoint::parse("(127,0,0,1,-1,50)").is_err());
    }
}
