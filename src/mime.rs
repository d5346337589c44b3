//! Content-type resolution for proxied image bytes.

/// Maps a file name to the content-type its bytes are served with.
///
/// Only the last dot-separated segment is considered, case-insensitively.
/// Anything outside the known image set is served as a generic byte stream.
pub fn content_type_for(filename: &str) -> &'static str {
    let extension = filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
