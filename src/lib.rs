//! DocSeek - Terminal client for an NLP document search backend
//!
//! Talks to a semantic search service over a small HTTP contract
//! (`POST /search`, `GET /health`) and renders ranked document snippets
//! in the terminal.
//!
//! # Example
//!
//! ```no_run
//! use docseek::{ClientConfig, SearchClient};
//!
//! fn main() -> docseek::Result<()> {
//!     let config = ClientConfig::default();
//!     let client = SearchClient::new(&config.base_url)?;
//!
//!     let results = client.search("machine learning", config.max_results)?;
//!     for result in &results {
//!         println!("{} ({})", result.display_title(), docseek::format_percent(result.score_percent()));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod logging;
pub mod tui;

// Re-export main types
pub use api::{HealthStatus, SearchClient, SearchResult};
pub use error::{DocSeekError, Result, SEARCH_FAILED_MESSAGE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default backend base URL, matching the reference backend's local setup.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Format a relevance percentage with one decimal place
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Client configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the search backend API
    pub base_url: String,
    /// Maximum results requested per search
    pub max_results: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_results: 10,
        }
    }
}
