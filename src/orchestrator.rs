//! Matrix scrape orchestrator
//!
//! Walks the (search term × location) matrix one cell at a time, with a
//! fixed pause between cells and a bounded retry budget per cell. Cell
//! failures are recovered locally: a cell that exhausts its retries is
//! logged and skipped, never fatal to the run. Requests are deliberately
//! sequential; one in-flight retrieval at a time is what keeps the run
//! inside third-party rate limits.

use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::catalog::ScrapeCatalog;
use crate::config::ScrapeConfig;
use crate::models::{RawJobRecord, RetrievalRequest};
use crate::retrieval::{JobRetriever, RetrievalError};

/// Outcome of a single retrieval attempt for one cell.
enum AttemptOutcome {
    Success(Vec<RawJobRecord>),
    Empty,
    Failure(RetrievalError),
}

/// Orchestrates retrieval across the full scrape matrix.
pub struct MatrixScraper {
    config: ScrapeConfig,
    catalog: ScrapeCatalog,
    jobs_per_cell: u32,
}

impl MatrixScraper {
    pub fn new(config: ScrapeConfig, catalog: ScrapeCatalog, jobs_per_cell: u32) -> Self {
        Self {
            config,
            catalog,
            jobs_per_cell,
        }
    }

    /// Run the full matrix and return every raw record retrieved.
    ///
    /// The result may be empty if every cell failed or returned nothing;
    /// that is a valid run, not an error.
    pub async fn run(&self, retriever: &dyn JobRetriever) -> Vec<RawJobRecord> {
        let terms = truncate(&self.config.search_terms, self.config.max_search_terms);
        let locations = truncate(&self.config.locations, self.config.max_locations);
        let sites = self.catalog.sites(self.config.max_sites_per_search).to_vec();

        info!(
            search_terms = terms.len(),
            locations = locations.len(),
            sites = sites.len(),
            "Starting matrix scrape"
        );

        let mut collected = Vec::new();
        let mut first_cell = true;

        for term in terms {
            for location in locations {
                if !first_cell {
                    sleep(self.config.delay_between_requests).await;
                }
                first_cell = false;

                let request = RetrievalRequest {
                    site_names: sites.clone(),
                    search_term: term.clone(),
                    location: location.clone(),
                    results_wanted: self.jobs_per_cell,
                    hours_old: self.config.hours_old_limit,
                    country: self.catalog.country_for(location).to_string(),
                };

                collected.extend(self.scrape_cell(retriever, &request).await);
            }
        }

        info!(total = collected.len(), "Matrix scrape finished");
        collected
    }

    /// Retry loop for one cell. A successful response, empty or not, ends
    /// the loop; there is nothing to gain from retrying an empty success.
    async fn scrape_cell(
        &self,
        retriever: &dyn JobRetriever,
        request: &RetrievalRequest,
    ) -> Vec<RawJobRecord> {
        // A zero retry budget must not silently disable retrieval; every
        // cell always gets at least one attempt.
        let max_attempts = self.config.retry_attempts.max(1);

        for attempt in 1..=max_attempts {
            debug!(
                search_term = %request.search_term,
                location = %request.location,
                attempt,
                "Attempting cell retrieval"
            );

            match attempt_fetch(retriever, request).await {
                AttemptOutcome::Success(records) => {
                    info!(
                        search_term = %request.search_term,
                        location = %request.location,
                        count = records.len(),
                        "Cell retrieval succeeded"
                    );
                    return records;
                }
                AttemptOutcome::Empty => {
                    info!(
                        search_term = %request.search_term,
                        location = %request.location,
                        "Cell returned no jobs"
                    );
                    return Vec::new();
                }
                AttemptOutcome::Failure(error) => {
                    if attempt < max_attempts {
                        warn!(
                            search_term = %request.search_term,
                            location = %request.location,
                            attempt,
                            error = %error,
                            "Cell retrieval failed, backing off before retry"
                        );
                        sleep(self.config.retry_backoff).await;
                    } else {
                        warn!(
                            search_term = %request.search_term,
                            location = %request.location,
                            attempts = attempt,
                            error = %error,
                            "Cell retrieval exhausted retries, skipping cell"
                        );
                    }
                }
            }
        }

        Vec::new()
    }
}

async fn attempt_fetch(
    retriever: &dyn JobRetriever,
    request: &RetrievalRequest,
) -> AttemptOutcome {
    match retriever.fetch_jobs(request).await {
        Ok(records) if records.is_empty() => AttemptOutcome::Empty,
        Ok(records) => AttemptOutcome::Success(records),
        Err(error) => AttemptOutcome::Failure(error),
    }
}

fn truncate(list: &[String], max: usize) -> &[String] {
    &list[..list.len().min(max)]
}
