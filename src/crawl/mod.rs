//! Traversal core: link extraction, classification, scoping, and the
//! work-queue crawler.
//!
//! Data flows one way: the crawler feeds listing HTML to the extractor,
//! classifies and resolves each href, and either enqueues a directory or
//! hands a file to the download module. Nothing here depends back on the
//! crawler.

mod classify;
mod engine;
mod listing;
mod local_path;
mod scope;

pub use classify::{LinkClass, classify, normalize_extension};
pub use engine::{CrawlConfig, CrawlStats, Crawler};
pub use listing::extract_hrefs;
pub use local_path::build_local_path;
pub use scope::{is_in_scope, normalize_directory_url, resolve_href};
