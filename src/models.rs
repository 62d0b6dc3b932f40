use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request issued to the retrieval service for one (term, location) cell.
///
/// The wire field `country_indeed` follows the upstream JobSpy convention.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievalRequest {
    #[serde(rename = "site_name")]
    pub site_names: Vec<String>,
    pub search_term: String,
    pub location: String,
    pub results_wanted: u32,
    pub hours_old: u32,
    #[serde(rename = "country_indeed")]
    pub country: String,
}

// A posting exactly as the upstream boards return it. Field presence and
// types are not guaranteed: any field may be missing, explicitly null,
// non-string, or carry a "NaN" marker for numeric data. Explicit nulls
// deserialize to None, so every field is present-with-value or absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJobRecord {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub company: Option<Value>,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub job_type: Option<Value>,
    #[serde(default)]
    pub min_amount: Option<Value>,
    #[serde(default)]
    pub max_amount: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub job_url_direct: Option<Value>,
    #[serde(default)]
    pub job_url: Option<Value>,
    #[serde(default)]
    pub site: Option<Value>,
    #[serde(default)]
    pub date_posted: Option<Value>,
    #[serde(default)]
    pub compensation: Option<Value>,
    #[serde(default)]
    pub benefits: Option<Value>,
}

/// The stable output unit consumed by the downstream backend.
///
/// Every string field is guaranteed non-null, `description` is at most
/// 1000 characters, and `expires_on` is always `scraped_date` + 30 days.
#[derive(Debug, Clone, Serialize)]
pub struct CanonicalJobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub description: String,
    pub url: String,
    pub source: String,
    /// Matched keyword strings; set semantics, order not meaningful.
    pub veteran_keywords: Vec<String>,
    pub is_veteran_friendly: bool,
    pub scraped_date: DateTime<Utc>,
    pub expires_on: DateTime<Utc>,
    pub metadata: JobMetadata,
}

/// Passthrough fields kept for the consumer, coerced to string-or-null.
#[derive(Debug, Clone, Serialize)]
pub struct JobMetadata {
    pub date_posted: Option<String>,
    pub compensation: Option<String>,
    pub benefits: Option<String>,
    pub is_veteran_friendly: bool,
}
