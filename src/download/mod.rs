//! HTTP fetching and file persistence for the crawler.
//!
//! This module covers everything that touches the network or the local
//! filesystem: fetching directory-listing pages, probing remote file
//! sizes, and streaming file bodies to disk with skip/overwrite decisions.
//!
//! # Example
//!
//! ```no_run
//! use dirmirror_core::download::{HttpClient, fetch_file};
//! use std::path::Path;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new();
//! let url = Url::parse("https://example.com/pub/report.pdf")?;
//! let outcome = fetch_file(&client, &url, Path::new("./out/report.pdf"), Some(1024), false).await?;
//! println!("outcome: {outcome:?}");
//! # Ok(())
//! # }
//! ```

mod client;
mod constants;
mod error;
mod fetch;

pub use client::HttpClient;
pub use constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
pub use error::DownloadError;
pub use fetch::{DownloadOutcome, fetch_file};
