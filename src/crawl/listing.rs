//! Anchor extraction from directory-listing HTML.
//!
//! Apache auto-index pages are plain HTML tables of anchor elements; all
//! the crawler needs from a page is the raw `href` values in order.

use scraper::{Html, Selector};

/// Extracts every anchor `href` value from an HTML document.
///
/// Values are returned in document order with duplicates preserved;
/// anchors without an `href` attribute are skipped. No URL validation
/// happens here. Malformed HTML degrades to whatever anchors the parser
/// recovers, it never fails.
#[must_use]
#[allow(clippy::expect_used)]
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").expect("static selector is valid");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_hrefs_in_document_order() {
        let html = r#"<html><body>
            <a href="2020/">2020/</a>
            <a href="report.pdf">report.pdf</a>
            <a href="../">Parent Directory</a>
        </body></html>"#;
        assert_eq!(extract_hrefs(html), vec!["2020/", "report.pdf", "../"]);
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<a name="top">top</a><a href="file.pdf">f</a>"#;
        assert_eq!(extract_hrefs(html), vec!["file.pdf"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let html = r#"<a href="a.pdf">1</a><a href="a.pdf">2</a>"#;
        assert_eq!(extract_hrefs(html), vec!["a.pdf", "a.pdf"]);
    }

    #[test]
    fn test_malformed_html_does_not_panic() {
        let html = r#"<html><a href="x.pdf">unterminated <table><a href="y/""#;
        let hrefs = extract_hrefs(html);
        assert!(hrefs.contains(&"x.pdf".to_string()));
    }

    #[test]
    fn test_empty_document_yields_nothing() {
        assert!(extract_hrefs("").is_empty());
    }

    #[test]
    fn test_apache_index_page_shape() {
        // Typical mod_autoindex output: sort-query anchors plus entries.
        let html = r#"<html><head><title>Index of /images</title></head><body>
<h1>Index of /images</h1><table>
<tr><th><a href="?C=N;O=D">Name</a></th><th><a href="?C=M;O=A">Last modified</a></th></tr>
<tr><td><a href="/">Parent Directory</a></td></tr>
<tr><td><a href="2020/">2020/</a></td></tr>
<tr><td><a href="manual%20v2.pdf">manual v2.pdf</a></td></tr>
</table></body></html>"#;
        assert_eq!(
            extract_hrefs(html),
            vec!["?C=N;O=D", "?C=M;O=A", "/", "2020/", "manual%20v2.pdf"]
        );
    }
}
