mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{checkerboard_frame, flat_frame, ManualRunner};
use fingercap_core::quality::sampler::FrameSampler;

fn sampler_with(runner: &Arc<ManualRunner>, interval: Duration) -> FrameSampler {
    FrameSampler::with_tuning(
        Arc::clone(runner) as Arc<dyn fingercap_core::task::TaskRunner>,
        interval,
        600.0,
    )
}

#[test]
fn test_single_flight_drops_frames_while_analysis_pending() {
    let runner = Arc::new(ManualRunner::new());
    let sampler = sampler_with(&runner, Duration::ZERO);

    assert!(sampler.on_frame(checkerboard_frame(32, 32)));
    // The first analysis has not completed; later frames are dropped, not queued.
    assert!(!sampler.on_frame(checkerboard_frame(32, 32)));
    assert!(!sampler.on_frame(checkerboard_frame(32, 32)));
    assert_eq!(runner.pending(), 1);

    runner.run_all();
    assert!(sampler.current_score() > 600.0);

    // Completion releases the slot.
    assert!(sampler.on_frame(checkerboard_frame(32, 32)));
}

#[test]
fn test_throttle_drops_frames_within_interval() {
    let runner = Arc::new(ManualRunner::new());
    let sampler = sampler_with(&runner, Duration::from_secs(3600));

    assert!(sampler.on_frame(flat_frame(32, 32, 7)));
    runner.run_all();

    // Analysis slot is free again, but the interval has not elapsed.
    assert!(!sampler.on_frame(flat_frame(32, 32, 7)));
    assert_eq!(runner.pending(), 0);
}

#[test]
fn test_shutdown_discards_late_results() {
    let runner = Arc::new(ManualRunner::new());
    let sampler = sampler_with(&runner, Duration::ZERO);

    assert!(sampler.on_frame(checkerboard_frame(32, 32)));
    sampler.shutdown();
    runner.run_all();

    // The analysis completed after teardown; its result must not apply.
    assert_eq!(sampler.current_score(), 0.0);
    assert!(!sampler.capture_enabled());
}

#[test]
fn test_reset_starts_a_fresh_session() {
    let runner = Arc::new(ManualRunner::new());
    let sampler = sampler_with(&runner, Duration::from_secs(3600));

    assert!(sampler.on_frame(checkerboard_frame(32, 32)));
    runner.run_all();
    assert!(sampler.capture_enabled());

    sampler.reset();
    assert_eq!(sampler.current_score(), 0.0);
    assert!(!sampler.capture_enabled());
    // The throttle window restarts too.
    assert!(sampler.on_frame(checkerboard_frame(32, 32)));
}

#[test]
fn test_reset_discards_in_flight_result() {
    let runner = Arc::new(ManualRunner::new());
    let sampler = sampler_with(&runner, Duration::ZERO);

    // Analysis dispatched before the reset completes after it; its result
    // belongs to the old session and must not re-open the gate.
    assert!(sampler.on_frame(checkerboard_frame(32, 32)));
    sampler.reset();
    runner.run_all();
    assert_eq!(sampler.current_score(), 0.0);
    assert!(!sampler.capture_enabled());

    // The fresh session still scores normally.
    assert!(sampler.on_frame(checkerboard_frame(32, 32)));
    runner.run_all();
    assert!(sampler.capture_enabled());
}

#[test]
fn test_capture_enabled_tracks_threshold() {
    let runner = Arc::new(ManualRunner::new());
    let sampler = sampler_with(&runner, Duration::ZERO);

    assert!(!sampler.capture_enabled());
    assert!(sampler.on_frame(checkerboard_frame(64, 64)));
    runner.run_all();
    assert!(sampler.capture_enabled());
    assert_eq!(sampler.threshold(), 600.0);
}
