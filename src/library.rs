//! Library items and the source boundary.
//!
//! This module defines the immutable work items a batch operates on, the
//! media kind discriminant used to decide whether an item is eligible for a
//! trailer, and the [`LibrarySource`] trait through which a host application
//! hands its catalog to the fetcher. The fetcher only ever reads items; it
//! never mutates or persists them.
//!
//! # Examples
//!
//! ```rust
//! use reelscout::library::{LibrarySource, MediaItem, MediaKind};
//!
//! struct InMemoryLibrary(Vec<MediaItem>);
//!
//! impl LibrarySource for InMemoryLibrary {
//!     fn media_items(&self) -> Vec<MediaItem> {
//!         self.0.clone()
//!     }
//! }
//!
//! let library = InMemoryLibrary(vec![
//!     MediaItem::new("42", "Alien", MediaKind::Movie).with_year(1979),
//! ]);
//! assert_eq!(library.media_items().len(), 1);
//! ```

/// Kind of a library item.
///
/// Only movies and series are eligible for trailer fetching; everything else
/// is skipped by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A feature film.
    Movie,
    /// A television series.
    Series,
    /// Anything else the library may contain (episodes, music, photos, ...).
    Other,
}

impl MediaKind {
    /// Whether items of this kind get a trailer.
    pub fn is_supported(&self) -> bool {
        matches!(self, MediaKind::Movie | MediaKind::Series)
    }
}

/// A single item of work, as read from the library source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Opaque library identifier, stable for the duration of a run.
    pub id: String,
    /// Display name, also used as the search title.
    pub name: String,
    /// Kind discriminant.
    pub kind: MediaKind,
    /// Release year, when the library knows it.
    pub year: Option<i32>,
}

impl MediaItem {
    /// Create a new [`MediaItem`] without a release year.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            year: None,
        }
    }

    /// Attach a release year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// The library boundary.
///
/// Implemented by the host application; the fetcher consumes it and expects
/// all movie and series items of the library, recursively, with stable
/// identifiers. Pagination, if any, is the implementer's concern.
pub trait LibrarySource: Send + Sync {
    /// Return every item the batch should consider.
    fn media_items(&self) -> Vec<MediaItem>;
}

impl LibrarySource for Vec<MediaItem> {
    fn media_items(&self) -> Vec<MediaItem> {
        self.clone()
    }
}
