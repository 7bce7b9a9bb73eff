//! Mapping from remote file URLs to local mirror paths.

use std::path::{Path, PathBuf};

use url::Url;

use super::classify::percent_decode_lossy;

/// Derives the local path for a remote file URL.
///
/// The root's path prefix is stripped from the URL path and the remainder
/// is percent-decoded segment by segment and joined onto `dest_root`,
/// preserving the directory structure. An empty remainder falls back to
/// the URL's final path segment.
///
/// The mapping is pure and deterministic. Two remote paths whose segments
/// decode to the same value collide; the later download wins.
#[must_use]
pub fn build_local_path(file_url: &Url, root: &Url, dest_root: &Path) -> PathBuf {
    let mut root_path = root.path().to_string();
    if !root_path.ends_with('/') {
        root_path.push('/');
    }

    let url_path = file_url.path();
    let rel_path = url_path.strip_prefix(&root_path).unwrap_or(url_path);
    let rel_path = rel_path.trim_start_matches('/');

    if rel_path.is_empty() {
        if let Some(name) = url_path.rsplit('/').find(|segment| !segment.is_empty()) {
            return dest_root.join(percent_decode_lossy(name));
        }
        return dest_root.to_path_buf();
    }

    let mut local = dest_root.to_path_buf();
    for segment in rel_path.split('/').filter(|segment| !segment.is_empty()) {
        local.push(percent_decode_lossy(segment));
    }
    local
}
