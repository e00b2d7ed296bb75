//! Per-item result tracking.
//!
//! This module contains the [`Summary`] struct and [`Status`] enum for
//! tracking the outcome of each item in a batch. A failed item never aborts
//! its siblings, so the summaries are the only place where per-item faults
//! become visible to the caller.
//!
//! # Examples
//!
//! ```rust
//! use reelscout::library::{MediaItem, MediaKind};
//! use reelscout::summary::{Status, Summary};
//!
//! let item = MediaItem::new("42", "Alien", MediaKind::Movie);
//! let summary = Summary::new(item).skip("no official trailer found");
//!
//! match summary.status() {
//!     Status::Success => println!("trailer downloaded"),
//!     Status::Skipped(reason) => println!("skipped: {}", reason),
//!     Status::Fail(msg) => println!("failed: {}", msg),
//!     _ => {}
//! }
//! ```

use crate::library::MediaItem;
use std::path::PathBuf;

/// Item status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Processing failed with error message.
    Fail(String),
    /// Processing not yet started.
    NotStarted,
    /// Item was skipped with reason (unsupported kind, no trailer found, ...).
    Skipped(String),
    /// Trailer downloaded successfully.
    Success,
    /// The batch was cancelled before this item finished.
    Canceled,
}

/// Represents the outcome of one [`MediaItem`] in a batch.
#[derive(Debug, Clone)]
pub struct Summary {
    /// The item that was processed.
    item: MediaItem,
    /// Status.
    status: Status,
    /// Destination path of the downloaded trailer, without extension.
    output: Option<PathBuf>,
}

impl Summary {
    /// Create a new [`Summary`] for an item.
    pub fn new(item: MediaItem) -> Self {
        Self {
            item,
            status: Status::NotStarted,
            output: None,
        }
    }

    /// Attach a status to a [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Get a reference to the summary's item.
    pub fn item(&self) -> &MediaItem {
        &self.item
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Destination path (without extension) when the download succeeded.
    pub fn output(&self) -> Option<&PathBuf> {
        self.output.as_ref()
    }

    /// Mark the summary as successful with the destination path.
    pub fn success(self, output: PathBuf) -> Self {
        Self {
            status: Status::Success,
            output: Some(output),
            ..self
        }
    }

    /// Mark the summary as failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Fail(format!("{}", msg)),
            ..self
        }
    }

    /// Mark the summary as skipped with a message.
    pub fn skip(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Skipped(format!("{}", msg)),
            ..self
        }
    }

    /// Mark the summary as cancelled.
    pub fn cancel(self) -> Self {
        Self {
            status: Status::Canceled,
            ..self
        }
    }
}
