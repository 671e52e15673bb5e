//! Drains one raw request from a connected socket.

use bytes::BytesMut;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::time::timeout;

/// Fixed receive chunk size.
const CHUNK_SIZE: usize = 1024;

#[derive(Debug)]
pub enum ReadError {
    /// No data arrived on the socket before the configured deadline.
    Timeout,
    /// The socket errored mid-read.
    ConnectionReset(std::io::Error),
}

/// Reads the raw bytes of one request in fixed-size chunks, stopping when a
/// chunk comes back short or the peer closes the connection.
///
/// No HTTP framing is interpreted here; a request is whatever arrives in one
/// burst. The timeout is armed per read, so a peer that connects and stays
/// silent is dropped after one timeout interval.
pub async fn receive_request<R>(
    stream: &mut R,
    read_timeout: Duration,
) -> Result<BytesMut, ReadError>
where
    R: AsyncRead + Unpin,
{
    let mut data = BytesMut::with_capacity(CHUNK_SIZE);
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let n = timeout(read_timeout, stream.read(&mut chunk))
            .await
            .map_err(|_| ReadError::Timeout)?
            .map_err(ReadError::ConnectionReset)?;

        if n == 0 {
            // Peer closed
            break;
        }

        data.extend_from_slice(&chunk[..n]);

        if n < CHUNK_SIZE {
            break;
        }
    }

    Ok(data)
}
