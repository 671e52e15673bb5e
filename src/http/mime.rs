//! MIME type detection based on file extensions.

/// Content type applied when no table entry matches the file's extension.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Content type of the fallback 404 asset (a JPEG image).
pub const FALLBACK_ASSET_TYPE: &str = "image/jpeg";

/// Resolves a filename to a MIME string by matching its full extension
/// against the fixed table. Matching compares the whole extension, so
/// two- and four-character extensions (`js`, `html`) resolve correctly.
///
/// # Example
///
/// ```
/// # use beacon::http::mime::content_type;
/// assert_eq!(content_type("index.html"), "text/html;charset=utf-8");
/// assert_eq!(content_type("app.js"), "text/javascript; charset=UTF-8");
/// ```
pub fn content_type(filename: &str) -> &'static str {
    let extension = filename.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");

    match extension {
        "html" => "text/html;charset=utf-8",
        "css" => "text/css",
        "js" => "text/javascript; charset=UTF-8",
        "txt" => "text/plain",
        "ico" => "image/x-icon",
        "gif" => "image/jpeg",
        "jpg" => "image/jpeg",
        "png" => "image/jpeg",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
