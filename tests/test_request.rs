use beacon::http::request::{Request, normalize_target};

#[test]
fn test_normalize_strips_leading_slash() {
    assert_eq!(normalize_target("/style.css"), "style.css");
    assert_eq!(normalize_target("/imgs/logo.png"), "imgs/logo.png");
}

#[test]
fn test_normalize_empty_target_defaults_to_index() {
    assert_eq!(normalize_target("/"), "index.html");
    assert_eq!(normalize_target(""), "index.html");
}

#[test]
fn test_normalize_without_leading_slash() {
    assert_eq!(normalize_target("style.css"), "style.css");
}

#[test]
fn test_normalize_strips_only_one_slash() {
    // Only the conventional leading slash goes; the rest of the target is
    // preserved verbatim for the traversal check downstream.
    assert_eq!(normalize_target("/../../etc/passwd"), "../../etc/passwd");
    assert_eq!(normalize_target("//double"), "/double");
}

#[test]
fn test_request_new_normalizes_target() {
    let raw = b"GET / HTTP/1.1\r\n\r\n".to_vec();
    let req = Request::new("GET", "/", "HTTP/1.1", raw.clone());

    assert_eq!(req.method, "GET");
    assert_eq!(req.target, "index.html");
    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.raw, raw);
}
