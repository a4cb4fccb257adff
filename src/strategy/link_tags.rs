//! `<link rel="sitemap">` extraction from HTML pages

use scraper::{Html, Selector};

/// Collects the `href` of every `<link rel="sitemap">` element, in document order
///
/// `rel` is treated as a space-separated token list, so `rel="sitemap alternate"`
/// also matches. Hrefs are returned exactly as written (relative hrefs are not
/// resolved); elements with a missing or empty href are skipped.
///
/// # Example
///
/// ```
/// use sitemap_detector::strategy::extract_sitemap_links;
///
/// let html = r#"<html><head><link rel="sitemap" href="/map.xml"></head></html>"#;
/// assert_eq!(extract_sitemap_links(html), vec!["/map.xml"]);
/// ```
pub fn extract_sitemap_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse("link[rel]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter(|element| {
            element.value().attr("rel").is_some_and(|rel| {
                rel.split_ascii_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("sitemap"))
            })
        })
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}
