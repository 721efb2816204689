use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::consts::{CAPTURE_THRESHOLD, MIN_ANALYSIS_INTERVAL_MS};
use crate::frame::Frame;
use crate::quality::gate::is_capture_enabled;
use crate::quality::variance::clarity_score;
use crate::task::TaskRunner;

/// Throttle and dedup layer between the camera stream and the clarity scorer.
///
/// At most one scoring computation is in flight at any time, and no more
/// than one starts per `min_interval`. Excess frames are dropped, not
/// queued: freshness of the score matters, completeness of analysis does
/// not. All timers and flags are instance fields, so concurrent capture
/// sessions never interfere.
pub struct FrameSampler {
    min_interval: Duration,
    threshold: f64,
    last_started: Mutex<Option<Instant>>,
    in_flight: Arc<AtomicBool>,
    score: Arc<Mutex<f64>>,
    alive: Arc<AtomicBool>,
    // Bumped by reset(); results dispatched under an older epoch are stale.
    epoch: Arc<AtomicU64>,
    runner: Arc<dyn TaskRunner>,
}

impl FrameSampler {
    pub fn new(runner: Arc<dyn TaskRunner>) -> Self {
        Self::with_tuning(
            runner,
            Duration::from_millis(MIN_ANALYSIS_INTERVAL_MS),
            CAPTURE_THRESHOLD,
        )
    }

    pub fn with_tuning(runner: Arc<dyn TaskRunner>, min_interval: Duration, threshold: f64) -> Self {
        Self {
            min_interval,
            threshold,
            last_started: Mutex::new(None),
            in_flight: Arc::new(AtomicBool::new(false)),
            score: Arc::new(Mutex::new(0.0)),
            alive: Arc::new(AtomicBool::new(true)),
            epoch: Arc::new(AtomicU64::new(0)),
            runner,
        }
    }

    /// Feed one camera frame. Returns whether an analysis was started.
    ///
    /// The frame is dropped when the minimum interval since the last started
    /// analysis has not elapsed, or when a previous analysis is still in
    /// flight. The dispatched computation never blocks the caller.
    pub fn on_frame(&self, frame: Frame) -> bool {
        {
            let mut last = self.last_started.lock().unwrap();
            if let Some(started) = *last {
                if started.elapsed() < self.min_interval {
                    return false;
                }
            }
            if self
                .in_flight
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                return false;
            }
            *last = Some(Instant::now());
        }

        let in_flight = Arc::clone(&self.in_flight);
        let score = Arc::clone(&self.score);
        let alive = Arc::clone(&self.alive);
        let epoch = Arc::clone(&self.epoch);
        let dispatched = epoch.load(Ordering::Acquire);
        self.runner.run(Box::new(move || {
            let s = clarity_score(&frame);
            // A result landing after shutdown or reset is discarded, never
            // applied to the fresh session.
            if alive.load(Ordering::Acquire) && epoch.load(Ordering::Acquire) == dispatched {
                *score.lock().unwrap() = s;
                debug!(score = s, "clarity score updated");
            }
            in_flight.store(false, Ordering::Release);
        }));
        true
    }

    /// Most recently completed clarity score. Updates apply in completion
    /// order (last writer wins); the score is a resampled signal, not a log.
    pub fn current_score(&self) -> f64 {
        *self.score.lock().unwrap()
    }

    /// Gate decision against the configured threshold.
    pub fn capture_enabled(&self) -> bool {
        is_capture_enabled(self.current_score(), self.threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Stop applying results. Any in-flight analysis completes silently.
    pub fn shutdown(&self) {
        self.alive.store(false, Ordering::Release);
    }

    /// Start a fresh session: zero score, accept analyses again. Any
    /// analysis still in flight belongs to the previous epoch and its
    /// result is discarded on completion.
    pub fn reset(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
        *self.last_started.lock().unwrap() = None;
        *self.score.lock().unwrap() = 0.0;
        self.alive.store(true, Ordering::Release);
    }
}
