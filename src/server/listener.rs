use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::site::Site;

/// The bound accept loop. Binding is the only operation whose failure is
/// fatal to the process; everything after it is per-connection.
pub struct Listener {
    listener: TcpListener,
    local_addr: SocketAddr,
    site: Arc<Site>,
    read_timeout: std::time::Duration,
}

impl Listener {
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let addr = cfg.listen_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", addr, e))?;
        let local_addr = listener.local_addr()?;

        Ok(Self {
            listener,
            local_addr,
            site: Arc::new(Site::new(cfg)),
            read_timeout: cfg.read_timeout(),
        })
    }

    /// The address actually bound, useful when the configured port is 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accepts connections forever, handling each in its own task. Accept
    /// and connection errors are logged and never stop the loop.
    pub async fn run(self) -> anyhow::Result<()> {
        info!("Listening on {}", self.local_addr);

        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(pair) => pair,
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let site = self.site.clone();
            let read_timeout = self.read_timeout;
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, site, read_timeout);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    Listener::bind(cfg).await?.run().await
}
