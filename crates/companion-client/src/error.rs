use thiserror::Error;

/// Why a transport attempt failed. Every variant's `Display` is a
/// message suitable for showing directly in place of a reply.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("Connection failed. Check your internet connection.")]
    Connection,

    #[error("HTTP Error: {status}")]
    Http { status: u16 },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
