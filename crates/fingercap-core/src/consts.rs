/// Clarity score (luma variance over the ROI) above which capture is permitted.
pub const CAPTURE_THRESHOLD: f64 = 600.0;

/// Minimum interval between two started clarity analyses, in milliseconds.
/// Bounds analysis frequency independent of the camera frame rate.
pub const MIN_ANALYSIS_INTERVAL_MS: u64 = 150;

/// Horizontal margin of the clarity ROI, as a fraction of frame width
/// (15% trimmed off each side).
pub const ROI_MARGIN_X: f64 = 0.15;

/// Vertical margin of the clarity ROI, as a fraction of frame height
/// (10% trimmed off each side).
pub const ROI_MARGIN_Y: f64 = 0.10;

/// Fixed 3x3 sharpening kernel (edge/ridge emphasis), row-major. Sums to 1,
/// so flat regions pass through unchanged.
pub const SHARPEN_KERNEL: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, 9.0, -1.0, -1.0, -1.0, -1.0];

/// Contrast multiplier applied after sharpening, around the 0.5 midpoint.
pub const CONTRAST_FACTOR: f32 = 1.2;

/// Minimum usable crop rectangle side, in display units.
pub const MIN_CROP_SIZE: f32 = 20.0;

/// Pointer distance to a rect corner that still counts as grabbing it.
pub const CORNER_HIT_RADIUS: f32 = 20.0;

/// Fraction of the shorter fitted dimension used for the initial crop square.
pub const INITIAL_CROP_FRACTION: f32 = 0.8;

/// Minimum interval between two applied crop-rect render updates,
/// in milliseconds (roughly one display refresh).
pub const RECT_COALESCE_MS: u64 = 16;

/// Duration of the cosmetic crop-rect interpolation, in milliseconds.
pub const RECT_ANIMATION_MS: u64 = 80;

/// Filename of the enhanced artifact within a session work directory.
/// A single reusable name: each enhancement overwrites the previous one.
pub const ENHANCED_FILENAME: &str = "enhanced_fingerprint.jpg";

/// Number of attempts before a verification transport failure is surfaced.
pub const VERIFY_MAX_ATTEMPTS: u32 = 3;

/// Fixed backoff between verification attempts, in milliseconds.
pub const VERIFY_BACKOFF_MS: u64 = 2_000;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;
