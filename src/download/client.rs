//! HTTP client wrapper for listing fetches, size probes, and file downloads.
//!
//! This module provides the `HttpClient` struct which handles the three
//! network operations the crawler performs: GET a directory-listing page,
//! HEAD a candidate file for its size, and GET a file body streamed to disk.

use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use reqwest::header::CONTENT_LENGTH;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;
use url::Url;

use super::constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use super::error::DownloadError;
use crate::user_agent;

/// HTTP client for crawler traffic.
///
/// Designed to be created once and reused for the whole crawl, taking
/// advantage of connection pooling. All requests carry the fixed
/// crawler User-Agent.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a new HTTP client with default timeouts.
    ///
    /// Default configuration:
    /// - Connect timeout: 30 seconds
    /// - Read timeout: 5 minutes (for large files)
    /// - Gzip decompression: enabled
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_timeouts(CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
    }

    /// Creates a new HTTP client with explicit timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new_with_timeouts(connect_timeout_secs: u64, read_timeout_secs: u64) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(read_timeout_secs))
            .gzip(true)
            .user_agent(user_agent::crawler_user_agent())
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Fetches a directory-listing page and returns its decoded text.
    ///
    /// The body is decoded using the charset declared in the response
    /// headers, defaulting to UTF-8 with lossy replacement of invalid
    /// byte sequences.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if the request fails (network error,
    /// timeout) or the server returns an error status (4xx, 5xx).
    pub async fn fetch_listing(&self, url: &Url) -> Result<String, DownloadError> {
        let response = self.send_get(url).await?;
        response
            .text()
            .await
            .map_err(|e| DownloadError::network(url.as_str(), e))
    }

    /// Probes the remote size of a file via a HEAD request.
    ///
    /// Returns `None` when the server is unreachable, responds with an
    /// error status, or omits a parseable `Content-Length` header. Probe
    /// failures are logged and never block a download attempt.
    pub async fn probe_size(&self, url: &Url) -> Option<u64> {
        let response = match self.client.head(url.as_str()).send().await {
            Ok(response) => response,
            Err(error) => {
                debug!(url = %url, %error, "size probe failed; treating size as unknown");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(
                url = %url,
                status = response.status().as_u16(),
                "size probe returned error status; treating size as unknown"
            );
            return None;
        }

        response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
    }

    /// Downloads a file body to `path`, streaming chunks to disk.
    ///
    /// Parent directories of `path` are created as needed. The file handle
    /// is scoped to this call, so it is closed on every exit path; a
    /// partially written file from a mid-stream failure is left in place
    /// and recovered by the size-check redownload on a later run.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if the request fails, the server returns an
    /// error status, or writing to disk fails.
    pub async fn download_to_path(&self, url: &Url, path: &Path) -> Result<u64, DownloadError> {
        let response = self.send_get(url).await?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DownloadError::io(parent, e))?;
        }

        let file = File::create(path)
            .await
            .map_err(|e| DownloadError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        let mut stream = response.bytes_stream();
        let mut bytes_written: u64 = 0;

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| DownloadError::network(url.as_str(), e))?;
            writer
                .write_all(&chunk)
                .await
                .map_err(|e| DownloadError::io(path, e))?;
            bytes_written += chunk.len() as u64;
        }

        writer.flush().await.map_err(|e| DownloadError::io(path, e))?;

        Ok(bytes_written)
    }

    /// Sends a GET request and maps transport and status failures.
    async fn send_get(&self, url: &Url) -> Result<reqwest::Response, DownloadError> {
        let response = self.client.get(url.as_str()).send().await.map_err(|e| {
            if e.is_timeout() {
                DownloadError::timeout(url.as_str())
            } else {
                DownloadError::network(url.as_str(), e)
            }
        })?;

        if !response.status().is_success() {
            return Err(DownloadError::http_status(
                url.as_str(),
                response.status().as_u16(),
            ));
        }

        Ok(response)
    }
}
