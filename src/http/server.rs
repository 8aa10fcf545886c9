//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {addr}: {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Resolve the configured listen address and bind it.
///
/// A bind failure is returned to the caller, there is no retry.
pub async fn bind(config: &AppConfig) -> Result<TcpListener, ServerError> {
    let raw = format!("{}:{}", config.http.host, config.http.port);
    let addr: SocketAddr = raw
        .parse()
        .map_err(|source| ServerError::Address { addr: raw, source })?;

    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "App listening on port {}", addr.port());

    axum::serve(listener, app).await?;
    Ok(())
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server stops.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_host_is_rejected() {
        let mut config = AppConfig::default();
        config.http.host = "not an address".to_string();

        let err = bind(&config).await.unwrap_err();
        assert!(matches!(err, ServerError::Address { .. }));
    }

    #[tokio::test]
    async fn test_port_in_use_is_bind_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = AppConfig::default();
        config.http.host = "127.0.0.1".to_string();
        config.http.port = taken.local_addr().unwrap().port();

        let err = bind(&config).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }));
    }
}
