//! Configuration structures and defaults for the trailer fetcher.
//!
//! This module provides the configuration consumed by the
//! [`TrailerFetcher`](crate::fetcher::TrailerFetcher) and populated through
//! the [`FetcherBuilder`](crate::fetcher::FetcherBuilder). Nothing here is
//! validated beyond a floor of 1 on parallelism, applied where the runner is
//! constructed.
//!
//! # Examples
//!
//! ## Using Callbacks
//!
//! ```rust
//! use reelscout::fetcher::SummaryCallback;
//! use reelscout::summary::{Status, Summary};
//!
//! let callback: SummaryCallback = Box::new(|summary: &Summary| {
//!     match summary.status() {
//!         Status::Success => println!("✓ {}", summary.item().name),
//!         Status::Fail(msg) => println!("✗ {} - {}", summary.item().name, msg),
//!         Status::Skipped(reason) => println!("- {} - {}", summary.item().name, reason),
//!         _ => {}
//!     }
//! });
//! ```

use crate::progress::{ProgressBarOpts, ProgressCallback};
use crate::summary::Summary;

use std::env::current_dir;
use std::path::PathBuf;
use std::sync::Arc;

/// Callback type for item completion events.
pub type SummaryCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Default output naming pattern; the extension is appended by yt-dlp.
pub const DEFAULT_FILE_PATTERN: &str = "{title}-trailer-{lang}-{height}p";

/// Configuration structure for the trailer fetcher.
#[derive(Clone)]
pub struct FetcherConfig {
    /// Directory where to store the downloaded trailers.
    pub directory: PathBuf,
    /// Preferred metadata and trailer language.
    pub language: String,
    /// Release region passed to the metadata search.
    pub region: String,
    /// Number of maximum concurrent downloads.
    pub max_concurrent_downloads: usize,
    /// Maximum vertical resolution to download.
    pub max_height: u32,
    /// Prefer the AVC/H.264 codec family for wide player compatibility.
    pub prefer_avc: bool,
    /// TMDb API key; absence disables metadata lookup entirely.
    pub tmdb_api_key: Option<String>,
    /// Alternative TMDb API base URL, e.g. a caching proxy.
    pub tmdb_base_url: Option<String>,
    /// Explicit yt-dlp executable path; `None` searches for it.
    pub ytdlp_path: Option<PathBuf>,
    /// Output naming pattern with `{title}`, `{lang}`, `{height}` tokens.
    pub file_pattern: String,
    /// Batch progress bar style.
    pub style: ProgressBarOpts,
    /// Callback for when each item completes.
    pub on_complete: Option<Arc<SummaryCallback>>,
    /// Callback reporting batch progress as a percentage.
    pub on_progress: Option<Arc<ProgressCallback>>,
}

impl std::fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("directory", &self.directory)
            .field("language", &self.language)
            .field("region", &self.region)
            .field("max_concurrent_downloads", &self.max_concurrent_downloads)
            .field("max_height", &self.max_height)
            .field("prefer_avc", &self.prefer_avc)
            .field("tmdb_api_key", &self.tmdb_api_key.is_some())
            .field("tmdb_base_url", &self.tmdb_base_url)
            .field("ytdlp_path", &self.ytdlp_path)
            .field("file_pattern", &self.file_pattern)
            .field("style", &self.style)
            .field("on_complete", &self.on_complete.is_some())
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            language: "en".to_string(),
            region: "US".to_string(),
            max_concurrent_downloads: 2,
            max_height: 1080,
            prefer_avc: true,
            tmdb_api_key: None,
            tmdb_base_url: None,
            ytdlp_path: None,
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            style: ProgressBarOpts::default(),
            on_complete: None,
            on_progress: None,
        }
    }
}
