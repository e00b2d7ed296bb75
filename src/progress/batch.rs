//! Shared batch progress accounting.
//!
//! One [`BatchProgress`] is shared by every worker of a run. It owns the only
//! mutable state the workers touch concurrently: a completed-item counter
//! updated with atomic increments. The derived percentage is monotonically
//! non-decreasing and reaches 100 exactly when the run finishes.

use crate::progress::ProgressBarOpts;
use indicatif::ProgressBar;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Callback type for batch progress events, invoked with a percentage in
/// `[0, 100]`.
pub type ProgressCallback = Box<dyn Fn(f64) + Send + Sync>;

/// Tracks completion of a batch and reports it as a percentage.
pub struct BatchProgress {
    /// The batch progress bar, one tick per item.
    bar: ProgressBar,
    /// Clear the bar on completion instead of leaving it on screen.
    clear: bool,
    /// Total number of items in the batch.
    total: usize,
    /// Completed items; the only cross-worker mutable state.
    done: AtomicUsize,
    /// Serializes reporting so the sink observes non-decreasing values.
    report_guard: Mutex<()>,
    /// Optional percentage sink.
    on_progress: Option<Arc<ProgressCallback>>,
}

impl BatchProgress {
    /// Create a tracker for `total` items.
    pub fn new(style: ProgressBarOpts, total: usize, on_progress: Option<Arc<ProgressCallback>>) -> Self {
        let clear = style.clear;
        let bar = style.to_progress_bar(total as u64);
        bar.tick();
        Self {
            bar,
            clear,
            total,
            done: AtomicUsize::new(0),
            report_guard: Mutex::new(()),
            on_progress,
        }
    }

    /// Record one completed item and report the new percentage.
    ///
    /// No ordering is guaranteed on which item increments first, only that
    /// the final count equals the total when the batch was not cancelled.
    pub fn mark_one(&self) -> f64 {
        let _guard = self
            .report_guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let current = self.done.fetch_add(1, Ordering::SeqCst) + 1;
        self.bar.inc(1);
        let percent = current as f64 / self.total.max(1) as f64 * 100.0;
        if let Some(ref callback) = self.on_progress {
            callback(percent);
        }
        percent
    }

    /// Number of completed items so far.
    pub fn completed(&self) -> usize {
        self.done.load(Ordering::SeqCst)
    }

    /// Total number of items in the batch.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Finish the batch, completing the bar and reporting 100%.
    pub fn finish(&self) {
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
        if let Some(ref callback) = self.on_progress {
            callback(100.0);
        }
    }

    /// Stop the bar where it is without reporting completion.
    ///
    /// Used when the batch is cancelled: a cancelled run never reaches 100%.
    pub fn abandon(&self) {
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.abandon();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_callback() -> (Arc<ProgressCallback>, Arc<Mutex<Vec<f64>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback: Arc<ProgressCallback> = Arc::new(Box::new(move |pct| {
            sink.lock().unwrap().push(pct);
        }));
        (callback, seen)
    }

    #[test]
    fn test_mark_one_percentages() {
        let progress = BatchProgress::new(ProgressBarOpts::hidden(), 4, None);

        assert_eq!(progress.mark_one(), 25.0);
        assert_eq!(progress.mark_one(), 50.0);
        assert_eq!(progress.mark_one(), 75.0);
        assert_eq!(progress.mark_one(), 100.0);
        assert_eq!(progress.completed(), 4);
    }

    #[test]
    fn test_zero_total_does_not_divide_by_zero() {
        let progress = BatchProgress::new(ProgressBarOpts::hidden(), 0, None);
        assert_eq!(progress.mark_one(), 100.0);
    }

    #[test]
    fn test_callback_sees_monotonic_percentages() {
        let (callback, seen) = recording_callback();
        let progress = BatchProgress::new(ProgressBarOpts::hidden(), 2, Some(callback));

        progress.mark_one();
        progress.mark_one();
        progress.finish();

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![50.0, 100.0, 100.0]);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_finish_reports_hundred() {
        let (callback, seen) = recording_callback();
        let progress = BatchProgress::new(ProgressBarOpts::hidden(), 3, Some(callback));

        progress.finish();
        assert_eq!(*seen.lock().unwrap(), vec![100.0]);
    }

    #[test]
    fn test_abandon_reports_nothing() {
        let (callback, seen) = recording_callback();
        let progress = BatchProgress::new(ProgressBarOpts::hidden(), 3, Some(callback));

        let partial = progress.mark_one();
        progress.abandon();

        // The partial percentage stands; abandonment adds no final report.
        assert_eq!(*seen.lock().unwrap(), vec![partial]);
        assert!(partial < 100.0);
    }
}
