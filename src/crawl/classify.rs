//! Syntactic classification of listing hrefs.
//!
//! Decides, without any network access, whether an href points at a
//! sub-directory, a target file, or something the crawler must not follow.
//! Skipping `..`-style values here is the link-level half of cycle
//! prevention; the visited set is the other half.

/// What a raw href value represents in a directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    /// Sort/fragment/protocol links and parent or self references.
    Skip,
    /// A sub-directory to enqueue.
    Directory,
    /// A file with the target extension.
    File,
    /// A file of some other type; ignored.
    Other,
}

/// Href prefixes that are never followed (rule 1), matched case-insensitively.
const SKIP_PREFIXES: &[&str] = &["?", "#", "javascript:", "mailto:"];

/// Classifies a raw href value against the target extension.
///
/// `target_extension` must be in the canonical form produced by
/// [`normalize_extension`] (leading dot, lowercase). Rules apply in order:
///
/// 1. Sort-query, fragment, `javascript:` and `mailto:` links → [`LinkClass::Skip`]
/// 2. Percent-decoded and trimmed value that is empty, `.`, `..`, or begins
///    with `../` → [`LinkClass::Skip`]
/// 3. Extension match (case-insensitive) → [`LinkClass::File`]
/// 4. Trailing slash → [`LinkClass::Directory`]
/// 5. Final path segment without a `.` → [`LinkClass::Directory`] (listings
///    that omit the trailing slash on sub-directories)
/// 6. Anything else → [`LinkClass::Other`]
#[must_use]
pub fn classify(href: &str, target_extension: &str) -> LinkClass {
    let href_lower = href.to_ascii_lowercase();
    if SKIP_PREFIXES
        .iter()
        .any(|prefix| href_lower.starts_with(prefix))
    {
        return LinkClass::Skip;
    }

    let decoded = percent_decode_lossy(href);
    let decoded = decoded.trim();
    if decoded.is_empty() || decoded == "." || decoded == ".." || decoded.starts_with("../") {
        return LinkClass::Skip;
    }

    if decoded.to_ascii_lowercase().ends_with(target_extension) {
        return LinkClass::File;
    }

    if decoded.ends_with('/') {
        return LinkClass::Directory;
    }

    let final_segment = decoded.rsplit('/').next().unwrap_or(decoded);
    if !final_segment.contains('.') {
        return LinkClass::Directory;
    }

    LinkClass::Other
}

/// Canonicalizes a user-supplied extension into `.ext` lowercase form.
///
/// Accepts `pdf`, `.pdf`, `PDF`, etc.
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    format!(".{}", ext.trim().trim_start_matches('.').to_ascii_lowercase())
}

/// Percent-decodes a value, replacing invalid UTF-8 sequences rather than
/// failing.
#[must_use]
pub(crate) fn percent_decode_lossy(value: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(value.as_bytes())).into_owned()
}
