use std::collections::HashMap;

/// Immutable reference data shared by the orchestrator and the pipeline.
///
/// Built once at startup and passed explicitly, so tests can substitute
/// their own keyword sets and country mappings.
#[derive(Debug, Clone)]
pub struct ScrapeCatalog {
    veteran_keywords: Vec<String>,
    country_codes: HashMap<String, String>,
    default_country: String,
    site_catalog: Vec<String>,
}

impl ScrapeCatalog {
    pub fn new(
        veteran_keywords: Vec<String>,
        country_codes: HashMap<String, String>,
        default_country: String,
        site_catalog: Vec<String>,
    ) -> Self {
        Self {
            veteran_keywords,
            country_codes,
            default_country,
            site_catalog,
        }
    }

    /// The production keyword set, country mapping, and site catalog.
    pub fn standard() -> Self {
        let veteran_keywords = [
            "veteran",
            "military",
            "clearance",
            "security clearance",
            "veteran friendly",
            "military experience",
            "veteran preferred",
            "former military",
            "ex-military",
            "military background",
            "veteran hiring",
            "military transition",
            "veteran owned",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let country_codes = [
            ("United States", "USA"),
            ("Remote", "USA"),
            ("Canada", "Canada"),
            ("United Kingdom", "UK"),
            ("Germany", "Germany"),
            ("Australia", "Australia"),
        ]
        .into_iter()
        .map(|(location, code)| (location.to_string(), code.to_string()))
        .collect();

        let site_catalog = ["indeed", "linkedin", "glassdoor", "zip_recruiter", "google"]
            .into_iter()
            .map(String::from)
            .collect();

        Self::new(veteran_keywords, country_codes, "USA".to_string(), site_catalog)
    }

    pub fn veteran_keywords(&self) -> &[String] {
        &self.veteran_keywords
    }

    /// Country code for a location. Unmapped locations silently fall back
    /// to the default; many supplied locations (e.g. "Remote") are
    /// deliberately not country names.
    pub fn country_for(&self, location: &str) -> &str {
        self.country_codes
            .get(location)
            .map(String::as_str)
            .unwrap_or(&self.default_country)
    }

    /// The first `max` site identifiers from the fixed ordered catalog.
    pub fn sites(&self, max: usize) -> &[String] {
        &self.site_catalog[..self.site_catalog.len().min(max)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_location_falls_back_to_default_country() {
        let catalog = ScrapeCatalog::standard();
        assert_eq!(catalog.country_for("United States"), "USA");
        assert_eq!(catalog.country_for("Remote"), "USA");
        assert_eq!(catalog.country_for("San Diego, CA"), "USA");
        assert_eq!(catalog.country_for("United Kingdom"), "UK");
    }

    #[test]
    fn site_list_truncates_in_catalog_order() {
        let catalog = ScrapeCatalog::standard();
        assert_eq!(catalog.sites(3), &["indeed", "linkedin", "glassdoor"]);
        assert_eq!(catalog.sites(100).len(), 5);
        assert!(catalog.sites(0).is_empty());
    }
}
