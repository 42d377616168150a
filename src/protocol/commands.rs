//! Module `commands`
//!
//! The FTP commands issued by the download client and their wire format.

/// An FTP command sent on the control connection.
#[derive(Debug, PartialEq)]
pub enum Command {
    User(String), // Username for login
    Pass(String), // Password for login
    TypeImage,    // TYPE I, binary transfers
    Pasv,         // Enter passive mode
    Retr(String), // Retrieve/download file
    Quit,
}

impl Command {
    /// The command verb, used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::User(_) => "USER",
            Command::Pass(_) => "PASS",
            Command::TypeImage => "TYPE",
            Command::Pasv => "PASV",
            Command::Retr(_) => "RETR",
            Command::Quit => "QUIT",
        }
    }

    /// Formats the command as a CRLF-terminated line.
    pub fn to_line(&self) -> String {
        match self {
            Command::User(user) => format!("USER {}\r\n", user),
            Command::Pass(pass) => format!("PASS {}\r\n", pass),
            Command::TypeImage => "TYPE I\r\n".to_string(),
            Command::Pasv => "PASV\r\n".to_string(),
            Command::Retr(name) => format!("RETR {}\r\n", name),
            Command::Quit => "QUIT\r\n".to_string(),
        }
    }

    /// Same as `to_line` without the terminator and with the password masked.
    pub fn log_line(&self) -> String {
        match self {
            Command::Pass(_) => "PASS ****".to_string(),
            other => other.to_line().trim_end().to_string(),
        }
    }
}
