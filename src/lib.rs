// Vetjobs - veteran-friendly job posting aggregator

pub mod catalog;
pub mod config;
pub mod models;
pub mod orchestrator;
pub mod pipeline;
pub mod retrieval;

// Re-exports for convenience
pub use catalog::ScrapeCatalog;
pub use config::Config;
pub use models::{CanonicalJobRecord, JobMetadata, RawJobRecord, RetrievalRequest};
pub use orchestrator::MatrixScraper;
pub use pipeline::JobPipeline;
pub use retrieval::{JobRetriever, JobSpyClient, RetrievalError};
