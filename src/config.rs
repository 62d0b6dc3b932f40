use anyhow::Result;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub scrape: ScrapeConfig,
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub search_terms: Vec<String>,
    pub locations: Vec<String>,
    pub max_sites_per_search: usize,
    pub max_search_terms: usize,
    pub max_locations: usize,
    /// Explicit per-cell request size. When unset, the advisory --max-jobs
    /// total is spread across the configured search terms instead.
    pub jobs_per_combination: Option<u32>,
    pub hours_old_limit: u32,
    pub retry_attempts: u32,
    pub delay_between_requests: Duration,
    pub retry_backoff: Duration,
}

#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            scrape: ScrapeConfig {
                search_terms: env::var("VETJOBS_SEARCH_TERMS")
                    .unwrap_or_else(|_| {
                        "veteran preferred,military experience,security clearance,veteran friendly"
                            .to_string()
                    })
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                locations: env::var("VETJOBS_LOCATIONS")
                    .unwrap_or_else(|_| "United States,Remote".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                max_sites_per_search: env::var("VETJOBS_MAX_SITES_PER_SEARCH")
                    .unwrap_or_else(|_| "3".to_string())
                    .parse()?,
                max_search_terms: env::var("VETJOBS_MAX_SEARCH_TERMS")
                    .unwrap_or_else(|_| "4".to_string())
                    .parse()?,
                max_locations: env::var("VETJOBS_MAX_LOCATIONS")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()?,
                jobs_per_combination: env::var("VETJOBS_JOBS_PER_COMBINATION")
                    .ok()
                    .map(|v| v.parse())
                    .transpose()?,
                hours_old_limit: env::var("VETJOBS_HOURS_OLD_LIMIT")
                    .unwrap_or_else(|_| "24".to_string())
                    .parse()?,
                retry_attempts: env::var("VETJOBS_RETRY_ATTEMPTS")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()?,
                delay_between_requests: Duration::from_millis(
                    env::var("VETJOBS_DELAY_BETWEEN_REQUESTS_MS")
                        .unwrap_or_else(|_| "2000".to_string())
                        .parse()?,
                ),
                retry_backoff: Duration::from_millis(
                    env::var("VETJOBS_RETRY_BACKOFF_MS")
                        .unwrap_or_else(|_| "5000".to_string())
                        .parse()?,
                ),
            },
            retrieval: RetrievalConfig {
                endpoint: env::var("VETJOBS_RETRIEVAL_URL")
                    .unwrap_or_else(|_| "http://localhost:8000".to_string()),
                timeout: Duration::from_secs(
                    env::var("VETJOBS_RETRIEVAL_TIMEOUT_SECS")
                        .unwrap_or_else(|_| "60".to_string())
                        .parse()?,
                ),
            },
        })
    }
}

impl ScrapeConfig {
    /// Per-cell request size. The explicit setting wins; otherwise the
    /// advisory total is divided across the configured search terms.
    pub fn jobs_per_cell(&self, max_jobs_hint: u32) -> u32 {
        self.jobs_per_combination.unwrap_or_else(|| {
            let terms = self.search_terms.len().max(1) as u32;
            (max_jobs_hint / terms).max(1)
        })
    }
}
