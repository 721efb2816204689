mod common;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use common::{checkerboard_frame, write_gray_png};
use fingercap_core::capture::{
    CaptureConfig, CaptureOrchestrator, FlashMode, FocusMode, FrameSource, StreamHandle,
};
use fingercap_core::consts::ENHANCED_FILENAME;
use fingercap_core::error::{FingercapError, Result};
use fingercap_core::frame::Stage;
use fingercap_core::task::InlineRunner;

#[derive(Default)]
struct Counters {
    started: u32,
    stopped: u32,
    photos: u32,
}

struct FakeCamera {
    counters: Arc<Mutex<Counters>>,
    photo_path: PathBuf,
    fail_photo: bool,
    fail_stop: bool,
}

impl FrameSource for FakeCamera {
    fn start_stream(&mut self, _flash: FlashMode, _focus: FocusMode) -> Result<StreamHandle> {
        let mut c = self.counters.lock().unwrap();
        c.started += 1;
        Ok(StreamHandle(c.started as u64))
    }

    fn stop_stream(&mut self, _handle: StreamHandle) -> Result<()> {
        if self.fail_stop {
            return Err(FingercapError::CaptureDevice("stream wedged".into()));
        }
        self.counters.lock().unwrap().stopped += 1;
        Ok(())
    }

    fn take_photo(&mut self) -> Result<PathBuf> {
        if self.fail_photo {
            return Err(FingercapError::CaptureDevice("shutter jammed".into()));
        }
        self.counters.lock().unwrap().photos += 1;
        Ok(self.photo_path.clone())
    }
}

fn orchestrator(
    work_dir: PathBuf,
    photo_path: PathBuf,
    fail_photo: bool,
) -> (CaptureOrchestrator<FakeCamera>, Arc<Mutex<Counters>>) {
    let counters = Arc::new(Mutex::new(Counters::default()));
    let camera = FakeCamera {
        counters: Arc::clone(&counters),
        photo_path,
        fail_photo,
        fail_stop: false,
    };
    let config = CaptureConfig {
        work_dir,
        ..CaptureConfig::default()
    };
    let orch = CaptureOrchestrator::new(camera, Arc::new(InlineRunner), config);
    (orch, counters)
}

#[test]
fn test_capture_blocked_until_gate_opens() {
    let dir = tempfile::tempdir().unwrap();
    let (mut orch, counters) =
        orchestrator(dir.path().to_path_buf(), dir.path().join("still.png"), false);

    orch.start().unwrap();
    let err = orch.capture().unwrap_err();
    assert!(matches!(err, FingercapError::GateClosed { .. }));

    // The gate refusing must not tear the stream down.
    assert!(orch.is_streaming());
    assert_eq!(counters.lock().unwrap().stopped, 0);
}

#[test]
fn test_capture_stops_stream_before_still() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("still.png");
    let (mut orch, counters) = orchestrator(dir.path().to_path_buf(), photo.clone(), false);

    orch.start().unwrap();
    assert!(orch.on_frame(checkerboard_frame(64, 64)));

    let path = orch.capture().unwrap();
    assert_eq!(path, photo);
    assert!(!orch.is_streaming());

    let c = counters.lock().unwrap();
    assert_eq!(c.started, 1);
    assert_eq!(c.stopped, 1);
    assert_eq!(c.photos, 1);
}

#[test]
fn test_failed_still_resumes_preview() {
    let dir = tempfile::tempdir().unwrap();
    let (mut orch, counters) =
        orchestrator(dir.path().to_path_buf(), dir.path().join("still.png"), true);

    orch.start().unwrap();
    assert!(orch.on_frame(checkerboard_frame(64, 64)));

    let err = orch.capture().unwrap_err();
    assert!(matches!(err, FingercapError::CaptureDevice(_)));

    // The session survives: preview is running again for another attempt.
    assert!(orch.is_streaming());
    assert_eq!(counters.lock().unwrap().started, 2);
}

#[test]
fn test_failed_stream_stop_restarts_preview() {
    let dir = tempfile::tempdir().unwrap();
    let counters = Arc::new(Mutex::new(Counters::default()));
    let camera = FakeCamera {
        counters: Arc::clone(&counters),
        photo_path: dir.path().join("still.png"),
        fail_photo: false,
        fail_stop: true,
    };
    let config = CaptureConfig {
        work_dir: dir.path().to_path_buf(),
        ..CaptureConfig::default()
    };
    let mut orch = CaptureOrchestrator::new(camera, Arc::new(InlineRunner), config);

    orch.start().unwrap();
    assert!(orch.on_frame(checkerboard_frame(64, 64)));

    let err = orch.capture().unwrap_err();
    assert!(matches!(err, FingercapError::CaptureDevice(_)));

    // The session is never left without a preview: a fresh stream replaces
    // the one that refused to stop.
    assert!(orch.is_streaming());
    let c = counters.lock().unwrap();
    assert_eq!(c.started, 2);
    assert_eq!(c.photos, 0);
}

#[test]
fn test_enhance_requires_a_capture() {
    let dir = tempfile::tempdir().unwrap();
    let (mut orch, _) =
        orchestrator(dir.path().to_path_buf(), dir.path().join("still.png"), false);

    let err = orch.enhance_captured().unwrap_err();
    assert!(matches!(err, FingercapError::CaptureDevice(_)));
}

#[test]
fn test_full_session_produces_ordered_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("still.png");
    write_gray_png(&photo, 64, 64, |col, row| ((col * row) % 256) as u8);

    let (mut orch, _) = orchestrator(dir.path().to_path_buf(), photo.clone(), false);
    orch.start().unwrap();
    assert!(orch.on_frame(checkerboard_frame(64, 64)));

    let captured = orch.capture().unwrap();
    let enhanced = orch.enhance_captured().unwrap();
    assert_eq!(enhanced.file_name().unwrap(), ENHANCED_FILENAME);

    orch.accept_crop(dir.path().join("cropped_123.jpg"));

    let artifacts = orch.finish().unwrap();
    assert_eq!(artifacts.len(), 3);
    assert_eq!(artifacts[0].stage, Stage::Captured);
    assert_eq!(artifacts[0].path, captured);
    assert_eq!(artifacts[1].stage, Stage::Enhanced);
    assert_eq!(artifacts[2].stage, Stage::Cropped);

    // A second finish has nothing left to hand out.
    assert!(orch.finish().unwrap().is_empty());
}

#[test]
fn test_retry_discards_capture_and_resumes() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("still.png");
    let (mut orch, _) = orchestrator(dir.path().to_path_buf(), photo, false);

    orch.start().unwrap();
    assert!(orch.on_frame(checkerboard_frame(64, 64)));
    orch.capture().unwrap();

    orch.retry().unwrap();
    assert!(orch.is_streaming());
    // The stale score must not re-open the gate for the next attempt.
    assert_eq!(orch.sampler().current_score(), 0.0);
    assert!(orch.finish().unwrap().is_empty());
}

#[test]
fn test_discard_abandons_everything() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("still.png");
    let (mut orch, counters) = orchestrator(dir.path().to_path_buf(), photo, false);

    orch.start().unwrap();
    assert!(orch.on_frame(checkerboard_frame(64, 64)));
    orch.capture().unwrap();
    orch.start().unwrap();

    orch.discard().unwrap();
    assert!(!orch.is_streaming());
    assert!(orch.finish().unwrap().is_empty());
    let c = counters.lock().unwrap();
    assert_eq!(c.started, c.stopped);
}

#[test]
fn test_config_defaults_fill_missing_fields() {
    let config: CaptureConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.capture_threshold, 600.0);
    assert_eq!(config.min_analysis_interval_ms, 150);
    assert_eq!(config.contrast, 1.2);

    let config: CaptureConfig = serde_json::from_str(r#"{"capture_threshold": 800.0}"#).unwrap();
    assert_eq!(config.capture_threshold, 800.0);
    assert_eq!(config.min_analysis_interval_ms, 150);
}
