use crate::config::FilterConfig;

/// Predicate bundle applied to each resolved absolute URL
///
/// A link is kept only when all three tests pass:
/// 1. it ends with the configured extension (case-insensitive);
/// 2. it contains the configured path segment (case-insensitive);
/// 3. it contains at least one of the configured year strings as a raw
///    substring. This is deliberately an unanchored substring test, not a
///    date-field extraction: a URL containing "2024" anywhere matches.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    extension: String,
    path_segment: String,
    years: Vec<String>,
}

impl LinkFilter {
    /// Builds a filter from the filter configuration
    pub fn new(config: &FilterConfig) -> Self {
        LinkFilter {
            // The case-insensitive comparisons lowercase both sides once
            extension: config.extension.to_lowercase(),
            path_segment: config.path_segment.to_lowercase(),
            years: config.years.clone(),
        }
    }

    /// Returns true when the URL passes all three predicates
    pub fn matches(&self, url: &str) -> bool {
        let lowered = url.to_lowercase();

        lowered.ends_with(&self.extension)
            && lowered.contains(&self.path_segment)
            && self.years.iter().any(|year| url.contains(year.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> LinkFilter {
        LinkFilter::new(&FilterConfig::default())
    }

    #[test]
    fn test_valid_link_matches() {
        assert!(filter().matches(
            "https://portal.sat.gob.gt/descargas/importacion-de-vehiculos/enero-2024.zip"
        ));
    }

    #[test]
    fn test_wrong_extension_rejected() {
        assert!(!filter().matches(
            "https://portal.sat.gob.gt/descargas/importacion-de-vehiculos/enero-2024.pdf"
        ));
    }

    #[test]
    fn test_missing_year_rejected() {
        assert!(!filter().matches(
            "https://portal.sat.gob.gt/descargas/importacion-de-vehiculos/enero-2023.zip"
        ));
    }

    #[test]
    fn test_missing_path_segment_rejected() {
        assert!(!filter()
            .matches("https://portal.sat.gob.gt/descargas/exportaciones/enero-2024.zip"));
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert!(filter().matches(
            "https://portal.sat.gob.gt/descargas/importacion-de-vehiculos/enero-2025.ZIP"
        ));
    }

    #[test]
    fn test_path_segment_case_insensitive() {
        assert!(filter().matches(
            "https://portal.sat.gob.gt/descargas/IMPORTACION-DE-VEHICULOS/enero-2025.zip"
        ));
    }

    #[test]
    fn test_extension_must_be_suffix() {
        // ".zip" in the middle of the path is not enough
        assert!(!filter().matches(
            "https://portal.sat.gob.gt/descargas/importacion-de-vehiculos/2024.zip.sha256"
        ));
    }

    #[test]
    fn test_year_is_raw_substring() {
        // Spurious "2024" inside an unrelated number still matches; this
        // mirrors the observed portal-scrape behavior and is intentional
        assert!(filter().matches(
            "https://portal.sat.gob.gt/descargas/importacion-de-vehiculos/lote-120245.zip"
        ));
    }

    #[test]
    fn test_either_year_matches() {
        let f = filter();
        assert!(f.matches(
            "https://portal.sat.gob.gt/descargas/importacion-de-vehiculos/datos-2024.zip"
        ));
        assert!(f.matches(
            "https://portal.sat.gob.gt/descargas/importacion-de-vehiculos/datos-2025.zip"
        ));
    }
}
