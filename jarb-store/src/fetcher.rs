//! Constraint retrieval abstraction.

use crate::error::StoreResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The transport-level result of fetching constraints.
///
/// `data` is the untyped response body; the store casts it into a
/// [`ConstraintMap`](jarb_types::ConstraintMap) before storing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResponse {
    /// The URL actually requested.
    pub url: String,
    pub status: u16,
    pub data: serde_json::Value,
}

/// Retrieves a constraints payload from wherever the server publishes it.
#[async_trait]
pub trait ConstraintsFetcher: Send + Sync {
    /// Fetches the payload at `url`. Failures are reported, never retried.
    async fn fetch(&self, url: &str) -> StoreResult<FetchResponse>;
}
