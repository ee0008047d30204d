use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::{handle, Response};
use crate::error::Result;

const MAX_HEAD_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub read_timeout: Duration,
}

/// Binds `config.bind` and serves until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "listening");

    tokio::select! {
        result = run(listener, config.read_timeout) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down");
            Ok(())
        }
    }
}

/// Accept loop over an already bound listener. One task per connection.
pub async fn run(listener: TcpListener, read_timeout: Duration) -> Result<()> {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!(error = %e, "accept failed");
                continue;
            }
        };

        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, read_timeout).await {
                debug!(%peer, error = %e, "connection closed with error");
            }
        });
    }
}

async fn handle_connection(mut stream: TcpStream, read_timeout: Duration) -> Result<()> {
    let head = match timeout(read_timeout, read_head(&mut stream)).await {
        Ok(head) => head?,
        Err(_) => {
            debug!("timed out waiting for request head");
            return Ok(());
        }
    };

    let (response, include_body) = match parse_request_line(&head) {
        Some((method, target)) => {
            let response = handle(method, target);
            info!(method, target, status = response.status, "request");
            (response, method != "HEAD")
        }
        None => (Response::text(400, "malformed request"), true),
    };

    stream.write_all(&response.to_bytes(include_body)).await?;
    stream.shutdown().await?;
    Ok(())
}

/// Reads until the blank line that ends the request head, EOF, or the size cap.
async fn read_head(stream: &mut TcpStream) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") || buf.len() >= MAX_HEAD_BYTES {
            break;
        }
    }
    Ok(buf)
}

/// Extracts method and request target from `METHOD TARGET HTTP/x.y`.
fn parse_request_line(head: &[u8]) -> Option<(&str, &str)> {
    let line_end = head.windows(2).position(|w| w == b"\r\n")?;
    let line = std::str::from_utf8(&head[..line_end]).ok()?;

    let mut parts = line.split(' ');
    let method = parts.next()?;
    let target = parts.next()?;
    let version = parts.next()?;
    if parts.next().is_some() || !version.starts_with("HTTP/") || !target.starts_with('/') {
        return None;
    }
    Some((method, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_line() {
        let head = b"GET /?enc&Hex=A HTTP/1.1\r\nHost: x\r\n\r\n";
        assert_eq!(parse_request_line(head), Some(("GET", "/?enc&Hex=A")));
    }

    #[test]
    fn test_parse_request_line_rejects_garbage() {
        assert_eq!(parse_request_line(b"hello\r\n\r\n"), None);
        assert_eq!(parse_request_line(b"GET / HTTP/1.1"), None);
        assert_eq!(parse_request_line(b"GET http://x/ HTTP/1.1\r\n\r\n"), None);
        assert_eq!(parse_request_line(b"GET / extra HTTP/1.1\r\n\r\n"), None);
    }
}
