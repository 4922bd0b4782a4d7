use serde::Deserialize;

/// Main configuration structure for Enlaces-SAT
///
/// Every field has a default carrying the SAT portal constants, so running
/// without a configuration file harvests the vehicle-import archive links for
/// 2024/2025 exactly as published on the portal.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: SourceConfig::default(),
            filter: FilterConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Source page configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL of the portal page listing the archive downloads
    #[serde(rename = "page-url")]
    pub page_url: String,

    /// Base URL for resolving relative hrefs
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            page_url:
                "https://portal.sat.gob.gt/portal/alza-e-importacion-vehiculos/#1510763502681-dff4b62b-fd76"
                    .to_string(),
            base_url: "https://portal.sat.gob.gt".to_string(),
            timeout_secs: 15,
        }
    }
}

/// Link filter configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Path segment every archive link carries (matched case-insensitively)
    #[serde(rename = "path-segment")]
    pub path_segment: String,

    /// File extension the link must end with (matched case-insensitively)
    pub extension: String,

    /// Year substrings; a link matches when it contains any of them
    pub years: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            path_segment: "/importacion-de-vehiculos/".to_string(),
            extension: ".zip".to_string(),
            years: vec!["2024".to_string(), "2025".to_string()],
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the newline-delimited link list
    #[serde(rename = "links-path")]
    pub links_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            links_path: "./datos/enlaces-importacion-2024_2025.txt".to_string(),
        }
    }
}
