//! Target resolution: canned routes and sandboxed file serving.

pub mod files;
pub mod routes;

use crate::config::Config;
use crate::http::request::Request;
use crate::http::response::Response;
use files::FileServer;
use routes::RouteTable;

/// Read-only site state shared by every connection: the canned route table
/// and the sandboxed file server. Built once at startup.
pub struct Site {
    routes: RouteTable,
    files: FileServer,
}

impl Site {
    pub fn new(cfg: &Config) -> Self {
        Self {
            routes: RouteTable::new(&cfg.site.moved_to),
            files: FileServer::new(&cfg.site.root, &cfg.site.fallback_asset),
        }
    }

    /// Resolves a validated request to a response: canned routes win on an
    /// exact target match, everything else goes to the file server.
    pub async fn respond(&self, req: &Request) -> Response {
        if let Some(response) = self.routes.lookup(&req.target) {
            return response;
        }

        self.files.serve(&req.target).await
    }
}
