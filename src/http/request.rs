/// Represents a validated GET request from a client.
///
/// Only the request line is interpreted; any header lines that follow it in
/// the raw bytes are kept in `raw` but otherwise ignored.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method. Always `"GET"` for a request that passed validation.
    pub method: String,
    /// The request target with its leading `/` stripped (e.g., "index.html")
    pub target: String,
    /// HTTP version (always "HTTP/1.1" after validation)
    pub version: String,
    /// The raw bytes the request was parsed from
    pub raw: Vec<u8>,
}

impl Request {
    pub fn new(method: &str, raw_target: &str, version: &str, raw: Vec<u8>) -> Self {
        Self {
            method: method.to_string(),
            target: normalize_target(raw_target),
            version: version.to_string(),
            raw,
        }
    }
}

/// Strips the conventional leading `/` from a request target and substitutes
/// the site's index page when nothing remains.
///
/// # Example
///
/// ```
/// # use beacon::http::request::normalize_target;
/// assert_eq!(normalize_target("/style.css"), "style.css");
/// assert_eq!(normalize_target("/"), "index.html");
/// ```
pub fn normalize_target(raw_target: &str) -> String {
    let stripped = raw_target.strip_prefix('/').unwrap_or(raw_target);
    if stripped.is_empty() {
        "index.html".to_string()
    } else {
        stripped.to_string()
    }
}
