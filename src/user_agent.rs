//! Fixed User-Agent string sent on every HTTP request.
//!
//! Single source for the UA format so listing fetches, size probes, and
//! file downloads all identify the same way.

/// User-Agent for all crawler traffic.
///
/// Uses the `Mozilla/5.0 (compatible; ...)` convention so Apache servers
/// with naive bot filters still serve the auto-index pages.
#[must_use]
pub(crate) fn crawler_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("Mozilla/5.0 (compatible; dirmirror/{version})")
}
