//! Capture session orchestration: preview stream, clarity gating, the
//! still capture itself, and the handoff into enhancement and cropping.

pub mod config;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::enhance::enhance_file_with;
use crate::error::{FingercapError, Result};
use crate::frame::{CapturedArtifact, Frame, Stage};
use crate::quality::sampler::FrameSampler;
use crate::task::TaskRunner;

pub use config::CaptureConfig;

/// Opaque identifier for an active preview stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamHandle(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashMode {
    Off,
    #[default]
    Torch,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusMode {
    #[default]
    ContinuousAuto,
    Locked,
}

/// Abstraction over the camera device. Implementations deliver preview
/// frames to the orchestrator via [`CaptureOrchestrator::on_frame`] while a
/// stream is running.
pub trait FrameSource {
    fn start_stream(&mut self, flash: FlashMode, focus: FocusMode) -> Result<StreamHandle>;
    fn stop_stream(&mut self, handle: StreamHandle) -> Result<()>;
    /// Capture a full-resolution still and return the file it was written
    /// to. Only valid while no preview stream is active.
    fn take_photo(&mut self) -> Result<PathBuf>;
}

/// Confirmation feedback at the moment of capture.
pub trait HapticSink {
    fn pulse(&self);
}

/// Haptics for contexts without a vibration device.
pub struct NoHaptics;

impl HapticSink for NoHaptics {
    fn pulse(&self) {}
}

/// Drives one fingerprint acquisition session end to end.
///
/// The preview stream feeds the clarity sampler; once the live score
/// exceeds the threshold the caller may capture, which stops the stream
/// before taking the still so the two never contend for the device. A
/// failed still capture resumes the preview so the user can try again
/// rather than losing the session.
pub struct CaptureOrchestrator<S: FrameSource> {
    source: S,
    haptics: Box<dyn HapticSink>,
    sampler: FrameSampler,
    config: CaptureConfig,
    flash: FlashMode,
    focus: FocusMode,
    stream: Option<StreamHandle>,
    captured: Option<PathBuf>,
    enhanced: Option<PathBuf>,
    cropped: Option<PathBuf>,
}

impl<S: FrameSource> CaptureOrchestrator<S> {
    pub fn new(source: S, runner: Arc<dyn TaskRunner>, config: CaptureConfig) -> Self {
        let sampler = FrameSampler::with_tuning(
            runner,
            std::time::Duration::from_millis(config.min_analysis_interval_ms),
            config.capture_threshold,
        );
        Self {
            source,
            haptics: Box::new(NoHaptics),
            sampler,
            config,
            flash: FlashMode::default(),
            focus: FocusMode::default(),
            stream: None,
            captured: None,
            enhanced: None,
            cropped: None,
        }
    }

    pub fn with_haptics(mut self, haptics: Box<dyn HapticSink>) -> Self {
        self.haptics = haptics;
        self
    }

    pub fn sampler(&self) -> &FrameSampler {
        &self.sampler
    }

    pub fn is_streaming(&self) -> bool {
        self.stream.is_some()
    }

    /// Begin the preview stream. Idempotent while a stream is active.
    pub fn start(&mut self) -> Result<()> {
        if self.stream.is_none() {
            self.stream = Some(self.source.start_stream(self.flash, self.focus)?);
            info!("preview stream started");
        }
        Ok(())
    }

    /// Feed one preview frame into clarity analysis. Returns whether the
    /// frame was accepted for scoring (throttling and single-flight may
    /// drop it).
    pub fn on_frame(&self, frame: Frame) -> bool {
        self.sampler.on_frame(frame)
    }

    /// Take the still photo. The gate is re-checked here because the live
    /// score may have dropped since the UI last enabled the button.
    pub fn capture(&mut self) -> Result<PathBuf> {
        let score = self.sampler.current_score();
        if !self.sampler.capture_enabled() {
            return Err(FingercapError::GateClosed {
                score,
                threshold: self.sampler.threshold(),
            });
        }
        if let Some(handle) = self.stream.take() {
            if let Err(e) = self.source.stop_stream(handle) {
                warn!(error = %e, "failed to stop preview stream, restarting");
                self.stream = Some(self.source.start_stream(self.flash, self.focus)?);
                return Err(e);
            }
        }
        self.haptics.pulse();
        match self.source.take_photo() {
            Ok(path) => {
                info!(score, path = %path.display(), "still captured");
                self.captured = Some(path.clone());
                Ok(path)
            }
            Err(e) => {
                warn!(error = %e, "still capture failed, resuming preview");
                self.stream = Some(self.source.start_stream(self.flash, self.focus)?);
                Err(e)
            }
        }
    }

    /// Run the enhancement stage on the captured still, writing the fixed
    /// enhanced filename into the configured work directory.
    pub fn enhance_captured(&mut self) -> Result<PathBuf> {
        let captured = self.captured.clone().ok_or_else(|| {
            FingercapError::CaptureDevice("no still has been captured".into())
        })?;
        let path = enhance_file_with(&captured, &self.config.work_dir, self.config.contrast)?;
        self.enhanced = Some(path.clone());
        Ok(path)
    }

    /// Discard the current capture and return to live preview. The clarity
    /// state resets so a stale score cannot re-enable capture immediately.
    pub fn retry(&mut self) -> Result<()> {
        self.captured = None;
        self.enhanced = None;
        self.cropped = None;
        self.sampler.reset();
        self.start()
    }

    /// Record the crop the user accepted.
    pub fn accept_crop(&mut self, path: PathBuf) {
        self.cropped = Some(path);
    }

    /// End the session, returning every artifact it produced in pipeline
    /// order.
    pub fn finish(&mut self) -> Result<Vec<CapturedArtifact>> {
        if let Some(handle) = self.stream.take() {
            self.source.stop_stream(handle)?;
        }
        self.sampler.shutdown();

        let mut artifacts = Vec::new();
        if let Some(path) = self.captured.take() {
            artifacts.push(CapturedArtifact {
                path,
                stage: Stage::Captured,
            });
        }
        if let Some(path) = self.enhanced.take() {
            artifacts.push(CapturedArtifact {
                path,
                stage: Stage::Enhanced,
            });
        }
        if let Some(path) = self.cropped.take() {
            artifacts.push(CapturedArtifact {
                path,
                stage: Stage::Cropped,
            });
        }
        Ok(artifacts)
    }

    /// Abandon the session and everything it produced.
    pub fn discard(&mut self) -> Result<()> {
        self.captured = None;
        self.enhanced = None;
        self.cropped = None;
        if let Some(handle) = self.stream.take() {
            self.source.stop_stream(handle)?;
        }
        self.sampler.shutdown();
        Ok(())
    }
}
