//! Normalization & classification pipeline
//!
//! Turns raw, loosely typed postings into canonical records with
//! guaranteed field presence and types. Every record is kept: veteran
//! relevance is advisory metadata, not a selection criterion.

use chrono::{Duration, Utc};
use serde_json::Value;

use crate::catalog::ScrapeCatalog;
use crate::models::{CanonicalJobRecord, JobMetadata, RawJobRecord};

/// How long a posting stays live after scraping.
const EXPIRY_DAYS: i64 = 30;

/// Upper bound on stored description length, in characters.
const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Upstream marker for missing numeric data, compared case-insensitively.
const NAN_SENTINEL: &str = "nan";

pub struct JobPipeline<'a> {
    catalog: &'a ScrapeCatalog,
}

impl<'a> JobPipeline<'a> {
    pub fn new(catalog: &'a ScrapeCatalog) -> Self {
        Self { catalog }
    }

    /// Normalize every raw record, preserving input order one-to-one.
    pub fn process(&self, raw_jobs: Vec<RawJobRecord>) -> Vec<CanonicalJobRecord> {
        raw_jobs.into_iter().map(|raw| self.normalize(&raw)).collect()
    }

    /// Map one raw record into its canonical form.
    pub fn normalize(&self, raw: &RawJobRecord) -> CanonicalJobRecord {
        let veteran_keywords = self.classify(raw);
        let is_veteran_friendly = !veteran_keywords.is_empty();

        // Stamped per record; sub-second drift across a batch is fine.
        let scraped_date = Utc::now();
        let expires_on = scraped_date + Duration::days(EXPIRY_DAYS);

        CanonicalJobRecord {
            title: string_or(&raw.title, "Unknown"),
            company: string_or(&raw.company, "Unknown"),
            location: string_or(&raw.location, "Unknown"),
            job_type: string_or(&raw.job_type, "full-time"),
            salary_min: salary(&raw.min_amount),
            salary_max: salary(&raw.max_amount),
            description: truncate_chars(string_or(&raw.description, ""), MAX_DESCRIPTION_CHARS),
            url: opt_string(&raw.job_url_direct)
                .or_else(|| opt_string(&raw.job_url))
                .unwrap_or_default(),
            source: string_or(&raw.site, "unknown"),
            veteran_keywords,
            is_veteran_friendly,
            scraped_date,
            expires_on,
            metadata: JobMetadata {
                date_posted: opt_string(&raw.date_posted),
                compensation: opt_string(&raw.compensation),
                benefits: opt_string(&raw.benefits),
                is_veteran_friendly,
            },
        }
    }

    /// Union of keyword matches over title and description, deduplicated.
    /// Only set membership is meaningful to consumers.
    fn classify(&self, raw: &RawJobRecord) -> Vec<String> {
        let mut keywords = self.matched_keywords(&raw.title);
        for keyword in self.matched_keywords(&raw.description) {
            if !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        }
        keywords
    }

    /// Case-insensitive substring matches for one text field. Null or
    /// non-string text matches nothing.
    fn matched_keywords(&self, value: &Option<Value>) -> Vec<String> {
        let Some(text) = value.as_ref().and_then(Value::as_str) else {
            return Vec::new();
        };
        let haystack = text.to_lowercase();
        self.catalog
            .veteran_keywords()
            .iter()
            .filter(|keyword| haystack.contains(keyword.to_lowercase().as_str()))
            .cloned()
            .collect()
    }
}

/// String form of a present value; documented default when absent.
/// Non-string values render via their JSON form, without quoting strings.
fn string_or(value: &Option<Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => default.to_string(),
        Some(other) => other.to_string(),
    }
}

/// String-or-absent for metadata passthrough. Only true absence (missing
/// or null) maps to None; a present `0` becomes `"0"`, not null.
fn opt_string(value: &Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    }
}

/// Numeric-or-absent salary. The upstream "NaN" sentinel becomes absence,
/// never a passthrough string; numeric strings parse through.
fn salary(value: &Option<Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.eq_ignore_ascii_case(NAN_SENTINEL) {
                None
            } else {
                trimmed.parse().ok()
            }
        }
        _ => None,
    }
}

fn truncate_chars(text: String, max: usize) -> String {
    if text.chars().count() <= max {
        text
    } else {
        text.chars().take(max).collect()
    }
}
