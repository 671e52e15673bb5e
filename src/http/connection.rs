use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

use crate::http::parser::parse_request;
use crate::http::reader;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::site::Site;

pub struct Connection {
    stream: TcpStream,
    site: Arc<Site>,
    read_timeout: Duration,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Routing(Request),
    Rejected(Response),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, site: Arc<Site>, read_timeout: Duration) -> Self {
        Self {
            stream,
            site,
            read_timeout,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through one request/response cycle.
    ///
    /// A read timeout or socket error abandons the connection without a
    /// response. The socket itself is released when `self` drops, so closure
    /// does not depend on which path exited.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let raw = reader::receive_request(&mut self.stream, self.read_timeout)
                        .await
                        .map_err(|e| anyhow::anyhow!("request read failed: {:?}", e))?;

                    match parse_request(&raw) {
                        Ok(req) => {
                            self.state = ConnectionState::Routing(req);
                        }
                        Err(e) => {
                            debug!(error = ?e, "Rejecting malformed request");
                            self.state = ConnectionState::Rejected(Response::bad_request());
                        }
                    }
                }

                ConnectionState::Routing(req) => {
                    let response = self.site.respond(req).await;
                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Rejected(resp) => {
                    let writer = ResponseWriter::new(resp);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    // Single-shot protocol: one response, then close.
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }
}
