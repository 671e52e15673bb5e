//! Sandboxed file serving.
//!
//! Every file target resolves beneath one root directory. Targets carrying
//! a `../` segment are refused outright before any path is built; no
//! canonicalization or symlink resolution is attempted beyond that.

use std::path::{Path, PathBuf};
use tracing::{error, warn};

use crate::http::mime;
use crate::http::response::{Response, StatusCode};

/// Serves files from beneath a fixed root directory.
pub struct FileServer {
    root: PathBuf,
    fallback_asset: PathBuf,
}

impl FileServer {
    pub fn new(root: &Path, fallback_asset: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            fallback_asset: fallback_asset.to_path_buf(),
        }
    }

    /// Resolves a target beneath the site root and reads it whole.
    ///
    /// Targets containing `../` get the canonical 400 before any path is
    /// constructed. A missing file becomes a 404 carrying the fallback
    /// asset; any other read failure fails closed with a 500.
    pub async fn serve(&self, target: &str) -> Response {
        if target.contains("../") {
            warn!(requested = %target, "Refusing traversal attempt");
            return Response::bad_request();
        }

        let path = self.root.join(target);

        match tokio::fs::read(&path).await {
            Ok(content) => {
                Response::with_content(StatusCode::Ok, mime::content_type(target), content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => self.not_found().await,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "File read failed");
                Response::internal_error()
            }
        }
    }

    /// Builds the 404 response around the fallback asset. The asset is a
    /// fixed image, so the Content-Type is forced to its type rather than
    /// the requested file's.
    async fn not_found(&self) -> Response {
        match tokio::fs::read(&self.fallback_asset).await {
            Ok(content) => {
                Response::with_content(StatusCode::NotFound, mime::FALLBACK_ASSET_TYPE, content)
            }
            Err(e) => {
                error!(
                    path = %self.fallback_asset.display(),
                    error = %e,
                    "Fallback asset unreadable"
                );
                Response::internal_error()
            }
        }
    }
}
