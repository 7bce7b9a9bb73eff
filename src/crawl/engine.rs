//! Work-queue traversal over directory-listing pages.
//!
//! The crawler owns the work queue and the visited set. Each step dequeues
//! one directory URL, fetches and parses its listing, enqueues discovered
//! sub-directories, and dispatches matching files to the downloader. All
//! network work is sequential; one request is in flight at a time.
//!
//! # Example
//!
//! ```no_run
//! use dirmirror_core::crawl::{CrawlConfig, Crawler};
//! use std::path::PathBuf;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CrawlConfig {
//!     base_url: Url::parse("https://example.com/images/")?,
//!     dest_root: PathBuf::from("./mirror"),
//!     extension: "pdf".to_string(),
//!     dry_run: false,
//! };
//! let stats = Crawler::new(config).run().await;
//! println!("downloaded {} files", stats.downloaded);
//! # Ok(())
//! # }
//! ```

use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

use tracing::{debug, info, warn};
use url::Url;

use super::classify::{self, LinkClass};
use super::{listing, local_path, scope};
use crate::download::{DownloadOutcome, HttpClient, fetch_file};

/// Configuration for one crawl run.
///
/// All values are explicit so several crawls could run independently in
/// the same process; nothing here is process-global.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Root of the crawl. Normalized to a trailing slash at run start.
    pub base_url: Url,
    /// Local directory the remote tree is mirrored into.
    pub dest_root: PathBuf,
    /// Target file extension, in any form accepted by
    /// [`classify::normalize_extension`] (e.g. `pdf` or `.PDF`).
    pub extension: String,
    /// When set, report decisions without downloading or writing files.
    pub dry_run: bool,
}

/// Counters reported at the end of a crawl run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlStats {
    /// Directory listings fetched (or attempted).
    pub directories_visited: usize,
    /// Directory listings that failed to fetch and were abandoned.
    pub listing_failures: usize,
    /// Links classified as target files, in or out of date.
    pub files_found: usize,
    /// Files fetched and saved with a clean size check.
    pub downloaded: usize,
    /// Files already present with the expected size.
    pub skipped_existing: usize,
    /// Files kept despite a size mismatch after download.
    pub size_mismatches: usize,
    /// Files whose fetch or write failed.
    pub download_failures: usize,
    /// Files that would have been fetched (dry run only).
    pub planned: usize,
}

/// Sequential directory-listing crawler.
#[derive(Debug)]
pub struct Crawler {
    client: HttpClient,
    config: CrawlConfig,
}

impl Crawler {
    /// Creates a crawler with a default [`HttpClient`].
    #[must_use]
    pub fn new(config: CrawlConfig) -> Self {
        Self::with_client(HttpClient::new(), config)
    }

    /// Creates a crawler with an explicit client (custom timeouts).
    #[must_use]
    pub fn with_client(client: HttpClient, config: CrawlConfig) -> Self {
        Self { client, config }
    }

    /// Runs the crawl to completion and returns the counters.
    ///
    /// Per-directory and per-file failures are logged and counted, never
    /// fatal; the queue drains regardless.
    pub async fn run(&self) -> CrawlStats {
        let root = scope::normalize_directory_url(&self.config.base_url);
        let extension = classify::normalize_extension(&self.config.extension);

        let mut queue: VecDeque<Url> = VecDeque::from([root.clone()]);
        let mut visited: HashSet<String> = HashSet::new();
        let mut stats = CrawlStats::default();

        while let Some(current) = queue.pop_front() {
            let current = scope::normalize_directory_url(&current);
            // A directory can be discovered through several parents; the
            // visited set keeps it to one fetch.
            if !visited.insert(current.to_string()) {
                continue;
            }

            info!(url = %current, "visiting directory");
            stats.directories_visited += 1;

            let html = match self.client.fetch_listing(&current).await {
                Ok(html) => html,
                Err(error) => {
                    warn!(url = %current, %error, "failed to fetch directory listing");
                    stats.listing_failures += 1;
                    continue;
                }
            };

            for href in listing::extract_hrefs(&html) {
                let class = classify::classify(&href, &extension);
                if matches!(class, LinkClass::Skip | LinkClass::Other) {
                    continue;
                }

                let Some(resolved) = scope::resolve_href(&current, &href) else {
                    debug!(href = %href, "href did not resolve to a URL");
                    continue;
                };
                if !scope::is_in_scope(&resolved, &root) {
                    debug!(url = %resolved, "dropping out-of-scope link");
                    continue;
                }

                match class {
                    LinkClass::Directory => {
                        info!(url = %resolved, "queueing directory");
                        queue.push_back(resolved);
                    }
                    LinkClass::File => {
                        self.handle_file(&resolved, &root, &mut stats).await;
                    }
                    LinkClass::Skip | LinkClass::Other => {}
                }
            }
        }

        stats
    }

    /// Probes, decides, and downloads one file link, recording the outcome.
    async fn handle_file(&self, url: &Url, root: &Url, stats: &mut CrawlStats) {
        stats.files_found += 1;

        let local = local_path::build_local_path(url, root, &self.config.dest_root);
        let expected_size = self.client.probe_size(url).await;
        match expected_size {
            Some(bytes) => info!(url = %url, bytes, "file found"),
            None => info!(url = %url, "file found (size unknown)"),
        }

        match fetch_file(&self.client, url, &local, expected_size, self.config.dry_run).await {
            Ok(DownloadOutcome::SkippedExists { bytes }) => {
                info!(path = %local.display(), bytes, "skipping existing file");
                stats.skipped_existing += 1;
            }
            Ok(DownloadOutcome::Downloaded { bytes }) => {
                info!(url = %url, path = %local.display(), bytes, "downloaded");
                stats.downloaded += 1;
            }
            Ok(DownloadOutcome::SizeMismatch { expected, actual }) => {
                warn!(
                    path = %local.display(),
                    expected,
                    actual,
                    "size mismatch after download; keeping file"
                );
                stats.size_mismatches += 1;
            }
            Ok(DownloadOutcome::DryRun { expected }) => {
                match expected {
                    Some(bytes) => {
                        info!(url = %url, path = %local.display(), bytes, "dry run: would download");
                    }
                    None => info!(url = %url, path = %local.display(), "dry run: would download"),
                }
                stats.planned += 1;
            }
            Err(error) => {
                warn!(url = %url, %error, "failed to download file");
                stats.download_failures += 1;
            }
        }
    }
}
