//! URL resolution and crawl-scope containment.
//!
//! Every link discovered on a listing page is resolved against the page
//! URL and then checked against the traversal root: same scheme and host,
//! and a path beneath the root's path. Links that fail either check are
//! dropped before any network access.

use url::Url;

/// Resolves an href against the current page URL and strips any fragment.
///
/// Returns `None` when the href cannot be joined into a valid URL.
#[must_use]
pub fn resolve_href(page: &Url, href: &str) -> Option<Url> {
    let mut resolved = page.join(href).ok()?;
    resolved.set_fragment(None);
    Some(resolved)
}

/// Normalizes a directory URL: fragment removed, path ending in `/`.
///
/// Visited-set membership and enqueued URLs always use this form, so a
/// listing reachable both with and without the trailing slash is fetched
/// once.
#[must_use]
pub fn normalize_directory_url(url: &Url) -> Url {
    let mut normalized = url.clone();
    normalized.set_fragment(None);
    if !normalized.path().ends_with('/') {
        let path = format!("{}/", normalized.path());
        normalized.set_path(&path);
    }
    normalized
}

/// Returns true when `url` stays on the root's origin and beneath its path.
///
/// Scheme, host, and port must all match, and the URL path must start with
/// the root path (normalized to a trailing `/`).
#[must_use]
pub fn is_in_scope(url: &Url, root: &Url) -> bool {
    if url.scheme() != root.scheme()
        || url.host_str() != root.host_str()
        || url.port_or_known_default() != root.port_or_known_default()
    {
        return false;
    }

    let root_path = root.path();
    if root_path.ends_with('/') {
        url.path().starts_with(root_path)
    } else {
        let with_slash = format!("{root_path}/");
        url.path().starts_with(&with_slash)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_resolve_relative_href() {
        let page = url("https://host/images/2020/");
        let resolved = resolve_href(&page, "report.pdf").unwrap();
        assert_eq!(resolved.as_str(), "https://host/images/2020/report.pdf");
    }

    #[test]
    fn test_resolve_absolute_path_href() {
        let page = url("https://host/images/2020/");
        let resolved = resolve_href(&page, "/other/file.pdf").unwrap();
        assert_eq!(resolved.as_str(), "https://host/other/file.pdf");
    }

    #[test]
    fn test_resolve_strips_fragment() {
        let page = url("https://host/images/");
        let resolved = resolve_href(&page, "sub/#section").unwrap();
        assert_eq!(resolved.as_str(), "https://host/images/sub/");
        assert_eq!(resolved.fragment(), None);
    }

    #[test]
    fn test_resolve_unjoinable_href_is_none() {
        let page = url("https://host/images/");
        assert_eq!(resolve_href(&page, "https://["), None);
    }

    #[test]
    fn test_normalize_adds_trailing_slash_and_defrags() {
        let normalized = normalize_directory_url(&url("https://host/images/2020#frag"));
        assert_eq!(normalized.as_str(), "https://host/images/2020/");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_directory_url(&url("https://host/images/2020"));
        let twice = normalize_directory_url(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_in_scope_subpath() {
        let root = url("https://host/images/");
        assert!(is_in_scope(&url("https://host/images/2020/a.pdf"), &root));
        assert!(is_in_scope(&url("https://host/images/"), &root));
    }

    #[test]
    fn test_out_of_scope_other_host() {
        let root = url("https://host/images/");
        assert!(!is_in_scope(&url("https://other/images/a.pdf"), &root));
    }

    #[test]
    fn test_out_of_scope_other_scheme() {
        let root = url("https://host/images/");
        assert!(!is_in_scope(&url("http://host/images/a.pdf"), &root));
    }

    #[test]
    fn test_out_of_scope_other_port() {
        let root = url("http://host:8080/images/");
        assert!(!is_in_scope(&url("http://host:9090/images/a.pdf"), &root));
    }

    #[test]
    fn test_out_of_scope_parent_path() {
        let root = url("https://host/images/");
        assert!(!is_in_scope(&url("https://host/other/a.pdf"), &root));
        assert!(!is_in_scope(&url("https://host/"), &root));
    }

    #[test]
    fn test_sibling_path_prefix_is_out_of_scope() {
        // "/imagesextra" shares a string prefix with "/images" but is a
        // different directory.
        let root = url("https://host/images/");
        assert!(!is_in_scope(&url("https://host/imagesextra/a.pdf"), &root));
    }

    #[test]
    fn test_root_without_trailing_slash_contains_children_only() {
        let root = url("https://host/images");
        assert!(is_in_scope(&url("https://host/images/a.pdf"), &root));
        assert!(!is_in_scope(&url("https://host/images"), &root));
    }

    #[test]
    fn test_default_port_matches_explicit_port() {
        let root = url("https://host/images/");
        assert!(is_in_scope(&url("https://host:443/images/a.pdf"), &root));
    }
}
