//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address '{0}': {1}")]
    Address(String, std::net::AddrParseError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Parse a `host:port` pair into a socket address.
pub fn listen_addr(host: &str, port: u16) -> Result<SocketAddr, ServerError> {
    let raw = format!("{}:{}", host, port);
    raw.parse().map_err(|e| ServerError::Address(raw, e))
}

/// Start a plain HTTP server on `host:port`.
///
/// Blocks until the server shuts down after SIGTERM/SIGINT.
pub async fn start_server(app: Router, host: &str, port: u16) -> Result<(), ServerError> {
    let addr = listen_addr(host, port)?;
    let handle = Handle::new();

    tracing::info!(%addr, "Starting HTTP server");

    shutdown::setup_shutdown_handler(handle.clone());

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!(%addr, "HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr() {
        let addr = listen_addr("127.0.0.1", 3007).unwrap();
        assert_eq!(addr.port(), 3007);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_listen_addr_rejects_hostname() {
        let err = listen_addr("localhost", 3007).unwrap_err();
        assert!(matches!(err, ServerError::Address(..)));
    }
}
