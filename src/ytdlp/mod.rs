//! yt-dlp process invocation.
//!
//! This module wraps the external yt-dlp executable: locating the binary,
//! building its argument list declaratively from a [`DownloadSpec`], running
//! the process with both output streams captured, and classifying the
//! outcome into typed errors.
//!
//! Downloading writes a file to disk, so this module never retries on its
//! own; retry policy, if any, belongs to the caller.
//!
//! # Overview
//!
//! - [`locate`] - Executable resolution (configured path → `PATH` → common
//!   install location → bare command name)
//! - [`invoker`] - The [`YtDlp`] invoker and the [`DownloadSpec`] value object
//!
//! # Examples
//!
//! ```rust,no_run
//! use reelscout::ytdlp::{DownloadSpec, YtDlp};
//! use std::path::PathBuf;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), reelscout::Error> {
//! let ytdlp = YtDlp::new(None);
//! let spec = DownloadSpec::new(
//!     "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
//!     PathBuf::from("trailers/alien-trailer-en-1080p"),
//!     1080,
//!     true,
//! );
//! ytdlp.download(&spec, &CancellationToken::new()).await?;
//! # Ok(())
//! # }
//! ```

pub mod invoker;
pub mod locate;

pub use invoker::{DownloadSpec, YtDlp};
