//! Tests for the throttled runner.
//!
//! These exercise the admission-control properties: the concurrency bound,
//! permit accounting across every exit path, and cancellation behavior.

use reelscout::throttle::ThrottledRunner;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_never_exceeds_max_parallel() {
    const MAX_PARALLEL: usize = 3;
    const SUBMITTED: usize = 20;

    let active = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let mut runner = ThrottledRunner::new(MAX_PARALLEL, CancellationToken::new());

    for _ in 0..SUBMITTED {
        let active = Arc::clone(&active);
        let peak = Arc::clone(&peak);
        runner.submit(async move {
            let now = active.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            active.fetch_sub(1, Ordering::SeqCst);
        });
    }

    let results = runner.join_all().await;
    assert_eq!(results.len(), SUBMITTED);
    assert!(
        peak.load(Ordering::SeqCst) <= MAX_PARALLEL,
        "peak concurrency {} exceeded the maximum {}",
        peak.load(Ordering::SeqCst),
        MAX_PARALLEL
    );
}

#[tokio::test]
async fn test_no_leaked_permits_when_bodies_panic() {
    const MAX_PARALLEL: usize = 4;

    let mut runner = ThrottledRunner::new(MAX_PARALLEL, CancellationToken::new());
    for i in 0..8u32 {
        runner.submit(async move {
            if i % 2 == 0 {
                panic!("synthetic fault");
            }
            i
        });
    }

    let results = runner.join_all().await;
    // Panicked bodies yield nothing, but never leak their permit.
    assert_eq!(results.len(), 4);
    assert_eq!(runner.available_permits(), MAX_PARALLEL);
}

#[tokio::test]
async fn test_results_preserve_submission_order() {
    let mut runner = ThrottledRunner::new(2, CancellationToken::new());
    for i in 0..10u32 {
        runner.submit(async move { i });
    }

    let results = runner.join_all().await;
    assert_eq!(results, (0..10).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_cancellation_abandons_unadmitted_work() {
    let token = CancellationToken::new();
    let gate = Arc::new(Notify::new());
    let mut runner = ThrottledRunner::new(1, token.clone());

    // One body takes the only permit and blocks on the gate.
    let blocker_gate = Arc::clone(&gate);
    runner.submit(async move {
        blocker_gate.notified().await;
        1u32
    });
    // Wait until it is admitted.
    while runner.available_permits() > 0 {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    for _ in 0..5 {
        runner.submit(async { 1u32 });
    }

    // Cancel, then let the admitted body finish.
    token.cancel();
    gate.notify_one();

    let results = runner.join_all().await;
    // Only the already-admitted body ran; nothing was leaked.
    assert_eq!(results, vec![1]);
    assert_eq!(runner.available_permits(), 1);
}

#[tokio::test]
async fn test_errors_are_collected_not_propagated() {
    let mut runner = ThrottledRunner::new(2, CancellationToken::new());
    for i in 0..4u32 {
        runner.submit(async move {
            if i == 2 {
                Err(format!("item {} failed", i))
            } else {
                Ok(i)
            }
        });
    }

    let results = runner.join_all().await;
    assert_eq!(results.len(), 4);
    assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
}
