//! Fetcher module containing the batch driver, builder pattern, and
//! configuration.
//!
//! This module provides the main [`TrailerFetcher`] struct and its associated
//! builder for configuring and executing trailer batches. It handles
//! concurrent downloads, per-item fault isolation, progress reporting, and
//! callback management.
//!
//! # Overview
//!
//! The fetcher module is organized into three main components:
//!
//! - `fetcher` - Core TrailerFetcher struct with the batch and item pipelines
//! - `builder` - FetcherBuilder for flexible configuration
//! - `config` - Configuration structure and callback types
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use reelscout::fetcher::FetcherBuilder;
//! use reelscout::library::{MediaItem, MediaKind};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() {
//! let fetcher = FetcherBuilder::new()
//!     .tmdb_api_key("api-key")
//!     .max_concurrent_downloads(2)
//!     .build();
//!
//! let library = vec![MediaItem::new("1", "Alien", MediaKind::Movie).with_year(1979)];
//! let summaries = fetcher.fetch(&library, &CancellationToken::new()).await;
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod fetcher;

pub use builder::FetcherBuilder;
pub use config::{FetcherConfig, SummaryCallback, DEFAULT_FILE_PATTERN};
pub use fetcher::TrailerFetcher;
