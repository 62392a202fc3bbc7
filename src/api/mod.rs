//! HTTP layer for the search backend
//!
//! One POST per search, one GET for the liveness probe. See the contract
//! notes on [`client::SearchClient`].

pub mod client;
pub mod types;

pub use client::SearchClient;
pub use types::{HealthStatus, SearchRequest, SearchResult};
