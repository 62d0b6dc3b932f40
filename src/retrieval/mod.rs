//! The retrieval boundary: an opaque capability that fetches raw job
//! postings for one (term, location) cell, or fails.

pub mod jobspy;

pub use jobspy::JobSpyClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{RawJobRecord, RetrievalRequest};

/// Errors that can occur while fetching jobs from the retrieval service
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("retrieval request failed: {0}")]
    RequestFailed(String),

    #[error("retrieval service returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse retrieval response: {0}")]
    ParseError(String),
}

/// Fetches raw job postings for one cell of the scrape matrix.
///
/// Implementations may be slow and may fail per call; the orchestrator
/// handles retries and pacing, so implementations should not retry
/// internally.
#[async_trait]
pub trait JobRetriever: Send + Sync {
    async fn fetch_jobs(
        &self,
        request: &RetrievalRequest,
    ) -> Result<Vec<RawJobRecord>, RetrievalError>;
}
