//! Canned routes served independently of the filesystem.

use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// One canned route: a target name bound to a fixed response.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: &'static str,
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// The fixed set of canned routes. Built once at startup and never mutated.
///
/// Lookup is an exact match on the full stripped target: `forbidden`
/// matches, `forbidden/x` does not.
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(moved_to: &str) -> Self {
        let routes = vec![
            Route {
                name: "forbidden",
                status: StatusCode::Forbidden,
                headers: Vec::new(),
                body: b"<h1>403 Forbidden</h1>".to_vec(),
            },
            Route {
                name: "error",
                status: StatusCode::InternalServerError,
                headers: Vec::new(),
                body: b"<h1>500 Internal Server Error</h1>".to_vec(),
            },
            Route {
                name: "moved",
                status: StatusCode::MovedTemporarily,
                headers: vec![("Location".to_string(), moved_to.to_string())],
                body: Vec::new(),
            },
        ];

        Self { routes }
    }

    /// Returns the canned response for `target`, or `None` when the target
    /// should fall through to file serving.
    pub fn lookup(&self, target: &str) -> Option<Response> {
        self.routes.iter().find(|r| r.name == target).map(|route| {
            let mut builder = ResponseBuilder::new(route.status);
            for (key, value) in &route.headers {
                builder = builder.header(key.as_str(), value.as_str());
            }
            builder.body(route.body.clone()).build()
        })
    }
}
