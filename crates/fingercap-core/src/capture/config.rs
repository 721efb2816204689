use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{CAPTURE_THRESHOLD, CONTRAST_FACTOR, MIN_ANALYSIS_INTERVAL_MS};

/// Tunable parameters for a capture session. Every field has a default, so
/// a config file only needs to name what it overrides.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Clarity score a frame must exceed before capture unlocks.
    pub capture_threshold: f64,
    /// Minimum spacing between clarity analyses, in milliseconds.
    pub min_analysis_interval_ms: u64,
    /// Contrast factor applied after sharpening.
    pub contrast: f32,
    /// Directory that receives enhanced and cropped output files.
    pub work_dir: PathBuf,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            capture_threshold: CAPTURE_THRESHOLD,
            min_analysis_interval_ms: MIN_ANALYSIS_INTERVAL_MS,
            contrast: CONTRAST_FACTOR,
            work_dir: env::temp_dir(),
        }
    }
}
