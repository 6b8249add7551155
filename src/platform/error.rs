//! Error types for the container platform boundary

use thiserror::Error;

/// Errors that can occur when talking to the container control plane
#[derive(Debug, Error)]
pub enum PlatformError {
    /// A control-plane call failed (network, auth, throttling, validation...)
    #[error("{operation} failed: {message}")]
    Api {
        /// API operation name, e.g. `ListServices`
        operation: &'static str,
        /// Error rendered with its full source chain
        message: String,
    },
}

impl PlatformError {
    /// Wrap an SDK error, keeping its whole source chain in the message
    pub fn api<E: std::error::Error>(operation: &'static str, error: E) -> Self {
        Self::Api {
            operation,
            message: aws_sdk_ecs::error::DisplayErrorContext(error).to_string(),
        }
    }
}

/// Result type alias for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
