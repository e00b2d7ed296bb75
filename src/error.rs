//! Error handling for the reelscout library.
//!
//! This module provides centralized error handling with the error types that
//! can occur while resolving and downloading trailers. All errors implement
//! the standard Error trait and provide detailed context about failures.

use std::io;
use thiserror::Error;

/// Errors that can happen when using reelscout.
///
/// Failures are contained at the item boundary by the fetcher: only
/// [`Error::Canceled`] is allowed to stop the batch early, everything else is
/// folded into the per-item [`Status`](crate::summary::Status).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O Error.
    ///
    /// This variant wraps standard I/O errors that can occur while preparing
    /// the destination directory or talking to the downloader process.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// This variant wraps HTTP client errors from the reqwest library,
    /// including network failures, HTTP status errors, and request/response
    /// processing errors raised during metadata lookups.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// The downloader process ran but exited with a non-zero code.
    ///
    /// Carries the captured standard output and standard error of the child
    /// process for diagnostics.
    #[error("yt-dlp exited with code {code:?}\nstdout:\n{stdout}\nstderr:\n{stderr}")]
    DownloadFailed {
        /// Exit code of the process, if one was reported.
        code: Option<i32>,
        /// Captured standard output.
        stdout: String,
        /// Captured standard error.
        stderr: String,
    },

    /// The downloader executable could not be launched.
    ///
    /// Every item needing a download will fail identically until the
    /// executable is installed or its path is configured.
    #[error(
        "yt-dlp not found at `{0}`. Install yt-dlp or set its path on the fetcher configuration."
    )]
    ExecutableNotFound(String),

    /// The batch was cancelled.
    ///
    /// This is the only error allowed to unwind an item pipeline; it is never
    /// swallowed where it is explicitly checked for.
    #[error("the operation was cancelled")]
    Canceled,
}

/// Result type alias for operations that can fail with a reelscout error.
pub type Result<T> = std::result::Result<T, Error>;
