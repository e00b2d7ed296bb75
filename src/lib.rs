//! Reelscout is a crate aiming at providing a simple way to batch-download
//! official trailers for a media library, resolving each title through TMDb
//! and materializing the trailer locally with yt-dlp.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use reelscout::fetcher::FetcherBuilder;
//! use reelscout::library::{MediaItem, MediaKind};
//! use std::path::PathBuf;
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let library = vec![
//!     MediaItem::new("1", "Alien", MediaKind::Movie).with_year(1979),
//!     MediaItem::new("2", "The Wire", MediaKind::Series),
//! ];
//! let fetcher = FetcherBuilder::new()
//!     .tmdb_api_key("api-key")
//!     .directory(PathBuf::from("trailers"))
//!     .build();
//! fetcher.fetch(&library, &CancellationToken::new()).await;
//! # }
//! ```
//!
//! # Module Organization
//!
//! The reelscout crate is organized into several modules:
//!
//! - [`fetcher`] - The main `TrailerFetcher` and `FetcherBuilder` orchestrating batches
//! - [`library`] - Work items and the library source boundary
//! - [`tmdb`] - Trailer resolution against The Movie Database
//! - [`ytdlp`] - External downloader invocation
//! - [`throttle`] - Bounded-concurrency task execution
//! - [`progress`] - Batch progress accounting and bar styling
//! - [`summary`] - Per-item result tracking
//! - [`naming`] - Output file naming
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod error;
pub mod fetcher;
pub mod library;
pub mod naming;
pub mod progress;
pub mod summary;
pub mod throttle;
pub mod tmdb;
pub mod ytdlp;

pub use error::{Error, Result};
pub use fetcher::{FetcherBuilder, TrailerFetcher};
pub use library::{LibrarySource, MediaItem, MediaKind};
pub use progress::{BatchProgress, ProgressBarOpts};
pub use summary::{Status, Summary};
pub use throttle::ThrottledRunner;
pub use tmdb::{TmdbClient, TrailerRef};
pub use ytdlp::{DownloadSpec, YtDlp};
