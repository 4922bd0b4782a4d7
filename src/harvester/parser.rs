//! HTML parser for extracting anchor links
//!
//! Enumerates every `<a href="...">` in the page and resolves each href to an
//! absolute URL against the configured base. Filtering happens afterwards in
//! [`crate::harvester::LinkFilter`]; this module only extracts and resolves.

use scraper::{Html, Selector};
use url::Url;

/// Extracts all anchor hrefs from the HTML document, resolved to absolute URLs
///
/// Hrefs that cannot be resolved against the base URL are skipped. No
/// deduplication happens here; duplicates collapse later in the harvest set.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The base URL for resolving relative hrefs
///
/// # Returns
///
/// A vector of absolute URLs, one per resolvable anchor, in document order
pub fn extract_links(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    // The selector literal is valid, but Selector::parse still returns Result
    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

/// Resolves a link href to an absolute URL
///
/// Returns None for empty hrefs and hrefs the base URL cannot resolve.
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    base_url.join(href).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://portal.sat.gob.gt").unwrap()
    }

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<html><body><a href="https://other.gob.gt/archivo.zip">Link</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["https://other.gob.gt/archivo.zip"]);
    }

    #[test]
    fn test_extract_relative_link_resolves_against_base() {
        let html = r#"<html><body><a href="/descargas/importacion-de-vehiculos/2024.zip">Link</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(
            links,
            vec!["https://portal.sat.gob.gt/descargas/importacion-de-vehiculos/2024.zip"]
        );
    }

    #[test]
    fn test_anchor_without_href_skipped() {
        let html = r#"<html><body><a name="seccion">Sin href</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert!(links.is_empty());
    }

    #[test]
    fn test_empty_href_skipped() {
        let html = r#"<html><body><a href="">Vacío</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert!(links.is_empty());
    }

    #[test]
    fn test_document_order_preserved() {
        let html = r#"
            <html><body>
                <a href="/b.zip">B</a>
                <a href="/a.zip">A</a>
            </body></html>
        "#;
        let links = extract_links(html, &base_url());
        assert_eq!(
            links,
            vec![
                "https://portal.sat.gob.gt/b.zip",
                "https://portal.sat.gob.gt/a.zip"
            ]
        );
    }

    #[test]
    fn test_duplicates_not_collapsed_here() {
        let html = r#"
            <html><body>
                <a href="/a.zip">Uno</a>
                <a href="/a.zip">Dos</a>
            </body></html>
        "#;
        let links = extract_links(html, &base_url());
        assert_eq!(links.len(), 2);
    }
}
