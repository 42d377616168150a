//! HTTP/1.0 front end
//!
//! Request-line resolution, content types and response writing. Only the
//! request line matters; headers are read and discarded, and every
//! connection carries exactly one response.

pub mod content_type;
pub mod request;
pub mod response;

pub use content_type::{PLAIN_TEXT, content_type_for};
pub use request::Request;
pub use response::{Body, ResponseOutcome, StatusCode};
