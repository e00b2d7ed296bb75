//! Progress bar styling and configuration options.
//!
//! This module provides styling options for the batch progress bar drawn
//! while trailers are fetched. The bar counts items, not bytes: yt-dlp owns
//! the byte-level transfer and its output is captured rather than displayed.
//!
//! # Examples
//!
//! ## Custom Styling
//!
//! ```rust
//! use reelscout::progress::ProgressBarOpts;
//!
//! let style = ProgressBarOpts::new(
//!     Some("[{bar:40.cyan/blue}] {pos}/{len} {msg}".to_string()),
//!     Some("█▉▊▋▌▍▎▏  ".to_string()),
//!     true,
//!     false,
//! );
//! ```
//!
//! ## Hidden Progress Bar
//!
//! ```rust
//! use reelscout::progress::ProgressBarOpts;
//!
//! let style = ProgressBarOpts::hidden();
//! ```

use indicatif::{ProgressBar, ProgressStyle};

/// Define the options for the batch progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_BAR_WITH_POSITION.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
            enabled: true,
            clear: false,
        }
    }
}

impl ProgressBarOpts {
    /// Template representing the bar and its position.
    ///
    ///`███████████████████████████████████████ 11/12 (99%) eta 00:00:02`
    pub const TEMPLATE_BAR_WITH_POSITION: &'static str =
        "{bar:40.blue} {pos:>}/{len} ({percent}%) eta {eta_precise:.blue}";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    pub fn to_progress_style(self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = self.template {
            style = style.template(&template).unwrap();
        }
        if let Some(progress_chars) = self.progress_chars {
            style = style.progress_chars(&progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] based on the provided options.
    pub fn to_progress_bar(self, len: u64) -> ProgressBar {
        // Return a hidden progress bar if we disabled it.
        if !self.enabled {
            return ProgressBar::hidden();
        }

        // Otherwise returns a ProgressBar with the style.
        let style = self.to_progress_style();
        ProgressBar::new(len).with_style(style)
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bar.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Return `true` if the progress bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_opts() {
        let opts = ProgressBarOpts::default();
        assert!(opts.is_enabled());
        assert!(!opts.clear);
    }

    #[test]
    fn test_hidden_opts() {
        let opts = ProgressBarOpts::hidden();
        assert!(!opts.is_enabled());
    }

    #[test]
    fn test_hidden_progress_bar_is_hidden() {
        let bar = ProgressBarOpts::hidden().to_progress_bar(10);
        assert!(bar.is_hidden());
    }

    #[test]
    fn test_to_progress_bar_length() {
        let bar = ProgressBarOpts::default().to_progress_bar(12);
        assert_eq!(bar.length(), Some(12));
    }
}
