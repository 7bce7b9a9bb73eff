//! Download decision logic: skip, overwrite, or fetch-and-save.
//!
//! Sits above [`HttpClient`] and decides what to do with a candidate file
//! based on the local mirror state and the probed remote size. The network
//! and filesystem work is delegated to the client.

use std::path::Path;

use tracing::info;
use url::Url;

use super::client::HttpClient;
use super::error::DownloadError;

/// Outcome of a single file dispatch.
///
/// Failures are not an outcome; they surface as `Err(DownloadError)` and
/// the caller decides whether to continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Local file already present with the expected size; nothing fetched.
    SkippedExists {
        /// Size of the existing local file.
        bytes: u64,
    },
    /// File fetched and saved; written size matches expectations.
    Downloaded {
        /// Bytes written to disk.
        bytes: u64,
    },
    /// File fetched and kept, but its size differs from the probed size.
    SizeMismatch {
        /// Size reported by the remote server.
        expected: u64,
        /// Bytes actually written.
        actual: u64,
    },
    /// Dry run: the file would have been fetched.
    DryRun {
        /// Remote size, when the probe provided one.
        expected: Option<u64>,
    },
}

/// Applies the download decision table for one candidate file.
///
/// | Local exists | size known | sizes match | action |
/// |---|---|---|---|
/// | no  | —   | —   | fetch and save |
/// | yes | no  | —   | re-fetch and overwrite |
/// | yes | yes | yes | skip |
/// | yes | yes | no  | re-fetch and overwrite |
///
/// With `dry_run` set, no fetch or write happens; the would-be action is
/// reported through the returned outcome. A size mismatch after a real
/// fetch is reported as [`DownloadOutcome::SizeMismatch`] with the file
/// kept in place.
///
/// # Errors
///
/// Returns `DownloadError` when the fetch or the filesystem write fails.
/// The partial file, if any, is left for the next run to repair.
pub async fn fetch_file(
    client: &HttpClient,
    url: &Url,
    local_path: &Path,
    expected_size: Option<u64>,
    dry_run: bool,
) -> Result<DownloadOutcome, DownloadError> {
    if let Ok(metadata) = tokio::fs::metadata(local_path).await {
        let local_size = metadata.len();
        match expected_size {
            Some(expected) if local_size == expected => {
                return Ok(DownloadOutcome::SkippedExists { bytes: local_size });
            }
            Some(expected) => {
                info!(
                    path = %local_path.display(),
                    local_size,
                    expected,
                    "existing file size differs from remote; redownloading"
                );
            }
            None => {
                info!(
                    path = %local_path.display(),
                    local_size,
                    "existing file but remote size unknown; redownloading"
                );
            }
        }
    }

    if dry_run {
        return Ok(DownloadOutcome::DryRun {
            expected: expected_size,
        });
    }

    let bytes = client.download_to_path(url, local_path).await?;

    if let Some(expected) = expected_size
        && expected != bytes
    {
        return Ok(DownloadOutcome::SizeMismatch {
            expected,
            actual: bytes,
        });
    }

    Ok(DownloadOutcome::Downloaded { bytes })
}
