//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures of the listening socket. Request-level problems never get here.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listener could not be opened.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop stopped with an error.
    #[error("HTTP server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_error_names_address() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let taken = listener.local_addr().unwrap().to_string();

        let source = tokio::net::TcpListener::bind(&taken).await.unwrap_err();
        let err = TransportError::bind(&taken, source);

        assert!(err.to_string().starts_with(&format!("Failed to bind to {taken}")));
    }
}
