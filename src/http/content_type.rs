//! Content types by file extension

use std::path::Path;

pub const PLAIN_TEXT: &str = "text/plain";
pub const HTML: &str = "text/html";

const CONTENT_TYPES: &[(&str, &str)] = &[
    (".htm", HTML),
    (".html", HTML),
    (".gif", "image/gif"),
    (".jpeg", "image/jpeg"),
    (".jpg", "image/jpeg"),
    (".png", "image/png"),
    (".txt", PLAIN_TEXT),
    (".css", "text/css"),
    (".js", "application/javascript"),
];

/// Maps a path to its MIME type by (case-sensitive) suffix.
pub fn content_type_for(path: &Path) -> &'static str {
    let name = path.to_string_lossy();
    CONTENT_TYPES
        .iter()
        .find(|(suffix, _)| name.ends_with(suffix))
        .map(|(_, mime)| *mime)
        .unwrap_or("application/octet-stream")
}
