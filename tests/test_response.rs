use beacon::http::response::{Response, ResponseBuilder, StatusCode};
use beacon::http::writer::serialize_response;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::MovedTemporarily.as_u16(), 302);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::MovedTemporarily.reason_phrase(), "Moved Temporarily");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_builder_preserves_header_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("Content-Length", "4")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.headers[0].0, "Content-Type");
    assert_eq!(response.headers[1].0, "Content-Length");
}

#[test]
fn test_with_content_sets_type_then_length() {
    let response = Response::with_content(StatusCode::Ok, "text/css", b"body {}".to_vec());

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.headers[0], ("Content-Type".to_string(), "text/css".to_string()));
    assert_eq!(response.headers[1], ("Content-Length".to_string(), "7".to_string()));
    assert_eq!(response.body, b"body {}".to_vec());
}

#[test]
fn test_bad_request_helper() {
    let response = Response::bad_request();

    assert_eq!(response.status, StatusCode::BadRequest);
    assert_eq!(response.body, b"<h1>400 Bad Request</h1>".to_vec());
    assert!(response.headers.is_empty());
}

#[test]
fn test_internal_error_helper() {
    let response = Response::internal_error();

    assert_eq!(response.status, StatusCode::InternalServerError);
    assert_eq!(response.body, b"<h1>500 Internal Server Error</h1>".to_vec());
}

#[test]
fn test_header_lookup() {
    let response = ResponseBuilder::new(StatusCode::MovedTemporarily)
        .header("Location", "/index.html")
        .build();

    assert_eq!(response.header("Location"), Some("/index.html"));
    assert_eq!(response.header("Content-Type"), None);
}

#[test]
fn test_serialize_status_line_only() {
    let response = ResponseBuilder::new(StatusCode::Forbidden)
        .body(b"<h1>403 Forbidden</h1>".to_vec())
        .build();

    let wire = serialize_response(&response);

    assert_eq!(&wire[..], b"HTTP/1.1 403 Forbidden\r\n\r\n<h1>403 Forbidden</h1>");
}

#[test]
fn test_serialize_headers_in_insertion_order() {
    let response = Response::with_content(StatusCode::Ok, "text/plain", b"hello".to_vec());

    let wire = serialize_response(&response);

    assert_eq!(
        &wire[..],
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello"
    );
}

#[test]
fn test_serialize_empty_body_ends_with_separator() {
    let response = ResponseBuilder::new(StatusCode::MovedTemporarily)
        .header("Location", "/index.html")
        .build();

    let wire = serialize_response(&response);

    assert_eq!(
        &wire[..],
        b"HTTP/1.1 302 Moved Temporarily\r\nLocation: /index.html\r\n\r\n"
    );
}

#[test]
fn test_serialize_is_deterministic() {
    let response = Response::with_content(StatusCode::Ok, "text/html;charset=utf-8", b"<p>x</p>".to_vec());

    assert_eq!(serialize_response(&response), serialize_response(&response));
}
