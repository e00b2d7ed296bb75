//! Core fetcher implementation with the batch and per-item pipelines.
//!
//! This module contains the [`TrailerFetcher`] struct that drives a batch:
//! it reads the item list from the library source, fans the items out over a
//! throttled runner, and runs the per-item pipeline (resolve → download →
//! account) with per-item fault isolation.
//!
//! # Examples
//!
//! ```rust,no_run
//! use reelscout::fetcher::FetcherBuilder;
//! use reelscout::library::{MediaItem, MediaKind};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() {
//! let fetcher = FetcherBuilder::new().tmdb_api_key("api-key").build();
//! let library = vec![
//!     MediaItem::new("1", "Alien", MediaKind::Movie).with_year(1979),
//!     MediaItem::new("2", "The Wire", MediaKind::Series),
//! ];
//!
//! let summaries = fetcher.fetch(&library, &CancellationToken::new()).await;
//! for summary in summaries {
//!     println!("{}: {:?}", summary.item().name, summary.status());
//! }
//! # }
//! ```

use super::config::FetcherConfig;
use crate::error::{Error, Result};
use crate::library::{LibrarySource, MediaItem};
use crate::naming;
use crate::progress::BatchProgress;
use crate::summary::Summary;
use crate::throttle::ThrottledRunner;
use crate::tmdb::TmdbClient;
use crate::ytdlp::{DownloadSpec, YtDlp};

use std::fmt;
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Represents the batch trailer fetcher.
///
/// A fetcher can be created via its builder:
///
/// ```rust
/// # fn main() {
/// use reelscout::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct TrailerFetcher {
    config: FetcherConfig,
}

impl Debug for TrailerFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrailerFetcher")
            .field("config", &self.config)
            .finish()
    }
}

impl TrailerFetcher {
    /// Creates a new TrailerFetcher with the given configuration.
    pub(crate) fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Gets the directory where trailers will be stored.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the preferred language.
    pub fn language(&self) -> &str {
        &self.config.language
    }

    /// Gets the release region.
    pub fn region(&self) -> &str {
        &self.config.region
    }

    /// Gets the number of concurrent downloads.
    pub fn max_concurrent_downloads(&self) -> usize {
        self.config.max_concurrent_downloads
    }

    /// Gets the maximum vertical resolution.
    pub fn max_height(&self) -> u32 {
        self.config.max_height
    }

    /// Gets whether the AVC/H.264 codec family is preferred.
    pub fn prefer_avc(&self) -> bool {
        self.config.prefer_avc
    }

    /// Gets the output naming pattern.
    pub fn file_pattern(&self) -> &str {
        &self.config.file_pattern
    }

    /// Run one batch over every item of the library source.
    ///
    /// Submits one pipeline invocation per item through a runner bounded by
    /// the configured parallelism, waits for all of them, and returns the
    /// per-item summaries. A single item's fault never aborts its siblings;
    /// cancelling the token stops admission promptly and abandons items that
    /// have not started.
    ///
    /// Progress is reported through the configured bar and callback: once
    /// per completed item and once more, at 100%, when the batch ends. A
    /// cancelled batch stops reporting where it is and never reaches 100.
    pub async fn fetch(&self, library: &dyn LibrarySource, token: &CancellationToken) -> Vec<Summary> {
        let items = library.media_items();
        let progress = Arc::new(BatchProgress::new(
            self.config.style.clone(),
            items.len(),
            self.config.on_progress.clone(),
        ));

        if items.is_empty() {
            info!("no library items to process");
            progress.finish();
            return Vec::new();
        }

        info!(items = items.len(), "starting trailer batch");
        let mut tmdb = TmdbClient::new(self.config.tmdb_api_key.clone());
        if let Some(ref base_url) = self.config.tmdb_base_url {
            tmdb = tmdb.with_base_url(base_url.clone());
        }
        let tmdb = Arc::new(tmdb);
        let ytdlp = Arc::new(YtDlp::new(self.config.ytdlp_path.as_deref()));

        let mut runner = ThrottledRunner::new(self.config.max_concurrent_downloads, token.clone());
        for item in items {
            if token.is_cancelled() {
                warn!("cancellation requested, submitting no further items");
                break;
            }
            let fetcher = self.clone();
            let tmdb = Arc::clone(&tmdb);
            let ytdlp = Arc::clone(&ytdlp);
            let progress = Arc::clone(&progress);
            let token = token.clone();
            runner.submit(async move {
                fetcher
                    .fetch_item(&tmdb, &ytdlp, item, &progress, &token)
                    .await
            });
        }

        let summaries = runner.join_all().await;
        if token.is_cancelled() {
            // A cancelled run stops where it is; it never reports 100%.
            progress.abandon();
            warn!(processed = summaries.len(), "trailer batch cancelled");
        } else {
            progress.finish();
            info!(processed = summaries.len(), "trailer batch finished");
        }
        summaries
    }

    /// The per-item pipeline. Always completes with a [`Summary`]; every
    /// fault except cancellation is contained here.
    async fn fetch_item(
        &self,
        tmdb: &TmdbClient,
        ytdlp: &YtDlp,
        item: MediaItem,
        progress: &BatchProgress,
        token: &CancellationToken,
    ) -> Summary {
        let summary = if !item.kind.is_supported() {
            debug!(item = %item.name, kind = ?item.kind, "skipping unsupported media kind");
            Summary::new(item).skip("unsupported media kind")
        } else {
            match self.fetch_trailer(tmdb, ytdlp, &item, token).await {
                Ok(Some(destination)) => Summary::new(item).success(destination),
                Ok(None) => Summary::new(item).skip("no official trailer found"),
                Err(Error::Canceled) => Summary::new(item).cancel(),
                Err(e) => {
                    warn!(item = %item.name, error = %e, "trailer fetch failed");
                    Summary::new(item).fail(e)
                }
            }
        };

        let percent = progress.mark_one();
        debug!(item = %summary.item().name, percent, "item finished");
        if let Some(ref callback) = self.config.on_complete {
            callback(&summary);
        }
        summary
    }

    /// Resolve a trailer reference and materialize it on disk.
    ///
    /// Returns the destination path (without extension) on success, `None`
    /// when no official trailer exists for the item.
    async fn fetch_trailer(
        &self,
        tmdb: &TmdbClient,
        ytdlp: &YtDlp,
        item: &MediaItem,
        token: &CancellationToken,
    ) -> Result<Option<PathBuf>> {
        let cfg = &self.config;
        let Some(trailer) = tmdb
            .find_trailer(&item.name, item.year, &cfg.language, &cfg.region, token)
            .await?
        else {
            return Ok(None);
        };
        debug!(item = %item.name, key = %trailer.key, "resolved official trailer");

        let filename =
            naming::render_pattern(&cfg.file_pattern, &item.name, &cfg.language, cfg.max_height);
        let destination = cfg.directory.join(filename);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).await?;
        }

        let spec = DownloadSpec::new(
            trailer.watch_url(),
            destination.clone(),
            cfg.max_height,
            cfg.prefer_avc,
        );
        ytdlp.download(&spec, token).await?;

        Ok(Some(destination))
    }
}
