//! Error types for DocSeek
//!
//! Everything that can fail while talking to the search backend or driving
//! the terminal funnels through [`DocSeekError`].

use thiserror::Error;

/// The one user-facing message shown when a search request fails.
/// Status codes and transport details are logged, never displayed.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch results. Please try again.";

/// Main error type for DocSeek operations
#[derive(Error, Debug)]
pub enum DocSeekError {
    #[error("search request rejected with HTTP status {status}")]
    RequestFailed { status: u16 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for DocSeek operations
pub type Result<T> = std::result::Result<T, DocSeekError>;

impl DocSeekError {
    /// HTTP status carried by this error, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            DocSeekError::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error came out of the search request path (as opposed to
    /// terminal IO). Request errors surface as [`SEARCH_FAILED_MESSAGE`].
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            DocSeekError::RequestFailed { .. } | DocSeekError::Network(_)
        )
    }
}
