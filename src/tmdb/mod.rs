//! TMDb metadata lookup.
//!
//! This module resolves an online trailer reference for a title through a
//! search → detail → filter chain against The Movie Database: search titles,
//! take the first hit, list its videos, and select the first official YouTube
//! trailer.
//!
//! Lookup failure is always soft. Transport errors, malformed responses, and
//! a missing API key all resolve to "no trailer" with a warning log; only
//! cancellation surfaces as an error, so a flaky metadata provider can never
//! abort a batch.
//!
//! # Overview
//!
//! - [`client`] - The HTTP client and the two-call resolution pipeline
//! - [`models`] - Typed records for the provider's loosely structured JSON
//!
//! # Examples
//!
//! ```rust,no_run
//! use reelscout::tmdb::TmdbClient;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), reelscout::Error> {
//! let client = TmdbClient::new(Some("api-key".to_string()));
//! let token = CancellationToken::new();
//!
//! if let Some(trailer) = client.find_trailer("Alien", Some(1979), "en", "US", &token).await? {
//!     println!("found trailer: https://www.youtube.com/watch?v={}", trailer.key);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod models;

pub use client::TmdbClient;
pub use models::TrailerRef;
