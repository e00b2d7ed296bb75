//! Builder pattern implementation for creating [`TrailerFetcher`] instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use reelscout::fetcher::FetcherBuilder;
//! use std::path::PathBuf;
//!
//! let fetcher = FetcherBuilder::new()
//!     .directory(PathBuf::from("./trailers"))
//!     .tmdb_api_key("api-key")
//!     .max_concurrent_downloads(4)
//!     .build();
//! ```
//!
//! ## Configuration with Callbacks
//!
//! ```rust
//! use reelscout::fetcher::FetcherBuilder;
//! use reelscout::summary::Status;
//!
//! let fetcher = FetcherBuilder::new()
//!     .on_complete(|summary| {
//!         if let Status::Fail(msg) = summary.status() {
//!             eprintln!("{}: {}", summary.item().name, msg);
//!         }
//!     })
//!     .on_progress(|percent| println!("{:.0}%", percent))
//!     .build();
//! ```
//!
//! ## Hidden Progress Bar
//!
//! ```rust
//! use reelscout::fetcher::FetcherBuilder;
//!
//! // Create a fetcher with no visible progress bar.
//! let fetcher = FetcherBuilder::hidden().build();
//! ```

use super::{config::FetcherConfig, fetcher::TrailerFetcher};
use crate::progress::ProgressBarOpts;
use crate::summary::Summary;

use std::{path::PathBuf, sync::Arc};

/// A builder used to create a [`TrailerFetcher`].
///
/// ```rust
/// # fn main() {
/// use reelscout::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().max_height(720).directory("trailers".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct FetcherBuilder {
    config: FetcherConfig,
}

impl FetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FetcherBuilder::default()
    }

    /// Convenience function to hide the progress bar.
    pub fn hidden() -> Self {
        let mut builder = FetcherBuilder::default();
        builder.config.style = ProgressBarOpts::hidden();
        builder
    }

    /// Sets the directory where to store the trailers.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the preferred metadata and trailer language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Set the release region passed to the metadata search.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.region = region.into();
        self
    }

    /// Set the number of concurrent downloads.
    pub fn max_concurrent_downloads(mut self, max_concurrent_downloads: usize) -> Self {
        self.config.max_concurrent_downloads = max_concurrent_downloads;
        self
    }

    /// Set the maximum vertical resolution to download.
    pub fn max_height(mut self, max_height: u32) -> Self {
        self.config.max_height = max_height;
        self
    }

    /// Set whether to prefer the AVC/H.264 codec family.
    pub fn prefer_avc(mut self, prefer_avc: bool) -> Self {
        self.config.prefer_avc = prefer_avc;
        self
    }

    /// Set the TMDb API key. Without one, metadata lookup is disabled and
    /// every item resolves to "no trailer".
    pub fn tmdb_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.tmdb_api_key = Some(api_key.into());
        self
    }

    /// Point metadata lookups at an alternative TMDb API base URL, e.g. a
    /// caching proxy.
    pub fn tmdb_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.tmdb_base_url = Some(base_url.into());
        self
    }

    /// Set an explicit yt-dlp executable path, overriding the search.
    pub fn ytdlp_path(mut self, path: PathBuf) -> Self {
        self.config.ytdlp_path = Some(path);
        self
    }

    /// Set the output naming pattern.
    ///
    /// Supported tokens: `{title}`, `{lang}`, `{height}`. The pattern must
    /// not carry an extension; yt-dlp appends the container's native one.
    pub fn file_pattern(mut self, file_pattern: impl Into<String>) -> Self {
        self.config.file_pattern = file_pattern.into();
        self
    }

    /// Set the batch progress bar style.
    pub fn style(mut self, style: ProgressBarOpts) -> Self {
        self.config.style = style;
        self
    }

    /// Set callback for when each item completes.
    ///
    /// The callback is called immediately when each item finishes,
    /// regardless of whether other items are still in progress.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Set callback reporting batch progress as a percentage in `[0, 100]`.
    ///
    /// Invoked at least once per item completion and once more at batch end;
    /// reported values are monotonically non-decreasing.
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.config.on_progress = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Create the [`TrailerFetcher`] with the specified options.
    pub fn build(self) -> TrailerFetcher {
        TrailerFetcher::new(self.config)
    }
}
