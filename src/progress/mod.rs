//! Progress reporting for batch runs.
//!
//! This module provides progress bar styling and the shared batch progress
//! tracker. Progress is reported two ways: an indicatif bar drawn over the
//! item count, and an optional percentage callback invoked once per completed
//! item plus once more at batch end.
//!
//! # Overview
//!
//! The progress module is organized into two components:
//!
//! - [`style`] - Progress bar styling options
//! - [`batch`] - The shared completed-item counter and percentage reporting
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use reelscout::progress::ProgressBarOpts;
//!
//! let opts = ProgressBarOpts::default();
//! ```
//!
//! ## Hidden Progress Bar
//!
//! ```rust
//! use reelscout::progress::ProgressBarOpts;
//!
//! let opts = ProgressBarOpts::hidden();
//! ```

pub mod batch;
pub mod style;

pub use batch::{BatchProgress, ProgressCallback};
pub use style::ProgressBarOpts;
