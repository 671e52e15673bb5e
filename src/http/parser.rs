use crate::http::request::Request;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    InvalidMethod,
    MissingTarget,
    InvalidVersion,
}

/// Splits a raw request into whitespace tokens and validates the request
/// line: the method must be `GET` and the third token `HTTP/1.1`. Header
/// lines after the request line fall into the token stream but are ignored.
///
/// Validation never touches the filesystem; any failure maps to a canonical
/// 400 at the call site.
pub fn parse_request(raw: &[u8]) -> Result<Request, ParseError> {
    let text = String::from_utf8_lossy(raw);
    let mut tokens = text.split_whitespace();

    let method = tokens.next().ok_or(ParseError::Empty)?;
    if method != "GET" {
        return Err(ParseError::InvalidMethod);
    }

    let target = tokens.next().ok_or(ParseError::MissingTarget)?;

    let version = tokens.next().ok_or(ParseError::InvalidVersion)?;
    if version != "HTTP/1.1" {
        return Err(ParseError::InvalidVersion);
    }

    Ok(Request::new(method, target, version, raw.to_vec()))
}
