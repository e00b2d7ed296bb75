//! Bounded-concurrency task execution.
//!
//! This module provides the [`ThrottledRunner`], the admission-control
//! primitive behind a batch run. Work is spawned onto the tokio runtime
//! immediately, but each body must acquire one of a fixed number of permits
//! before it starts executing, so at most `max_parallel` bodies run at any
//! instant regardless of how many were submitted.
//!
//! Permits are owned semaphore permits held for the lifetime of the body and
//! released on drop, which covers every exit path: normal completion, error,
//! panic, and cancellation.
//!
//! # Examples
//!
//! ```rust
//! use reelscout::throttle::ThrottledRunner;
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut runner = ThrottledRunner::new(2, CancellationToken::new());
//! for i in 0..8u32 {
//!     runner.submit(async move { i * 2 });
//! }
//! let results = runner.join_all().await;
//! assert_eq!(results.len(), 8);
//! # }
//! ```

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// A bounded-concurrency executor for independent units of work.
///
/// Submission never blocks the caller; the returned futures queue on the
/// internal semaphore instead. [`join_all`](ThrottledRunner::join_all) is the
/// barrier observing every submitted unit.
pub struct ThrottledRunner<T> {
    /// Admission permits; at most this many bodies execute concurrently.
    permits: Arc<Semaphore>,
    /// Handles for every submitted unit of work.
    tasks: Vec<JoinHandle<Option<T>>>,
    /// Cooperative cancellation signal spanning the whole batch.
    token: CancellationToken,
    max_parallel: usize,
}

impl<T: Send + 'static> ThrottledRunner<T> {
    /// Create a runner admitting at most `max_parallel` concurrent bodies.
    ///
    /// The parallelism is floored at 1 so a zero-configured batch still makes
    /// progress.
    pub fn new(max_parallel: usize, token: CancellationToken) -> Self {
        let max_parallel = max_parallel.max(1);
        Self {
            permits: Arc::new(Semaphore::new(max_parallel)),
            tasks: Vec::new(),
            token,
            max_parallel,
        }
    }

    /// Schedule a unit of work.
    ///
    /// The work body only starts once a permit is available. If the batch is
    /// cancelled before admission, the body is abandoned without running and
    /// yields no result.
    pub fn submit<F>(&mut self, work: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        let permits = Arc::clone(&self.permits);
        let token = self.token.clone();
        self.tasks.push(tokio::spawn(async move {
            // Biased so cancellation wins a tie with an available permit.
            let _permit = tokio::select! {
                biased;
                _ = token.cancelled() => return None,
                permit = permits.acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => return None,
                },
            };
            Some(work.await)
        }));
    }

    /// Wait for every submitted unit of work to finish.
    ///
    /// Individual errors are not suppressed here: bodies are expected to have
    /// handled their own faults, since one item must not abort its siblings.
    /// A panicked body is logged and skipped. Returns the outputs of the
    /// bodies that actually ran.
    pub async fn join_all(&mut self) -> Vec<T> {
        let tasks = std::mem::take(&mut self.tasks);
        futures::future::join_all(tasks)
            .await
            .into_iter()
            .filter_map(|joined| match joined {
                Ok(output) => output,
                Err(e) => {
                    warn!("a submitted task panicked: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Number of permits currently available.
    ///
    /// After [`join_all`](ThrottledRunner::join_all) this equals the
    /// configured maximum; anything less would be a leaked permit.
    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }

    /// The configured maximum parallelism (after the floor of 1).
    pub fn max_parallel(&self) -> usize {
        self.max_parallel
    }

    /// Number of units submitted and not yet joined.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }
}
