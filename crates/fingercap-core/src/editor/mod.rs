//! Interactive crop editor: display-space rect manipulation over a source
//! grayscale plane, with rotation and final pixel-exact extraction.

pub mod animate;
pub mod drag;
pub mod rect;

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use ndarray::Array2;
use tracing::info;

use crate::error::Result;
use crate::io::image_io::{load_luma, save_jpeg};

use animate::RectAnimator;
use drag::{apply_drag, classify, DragMode};
use rect::{fitted_size, to_source_rect, CropRect, ScaleFactors, SourceRect};

/// Accumulated quarter-turn rotation, always reduced modulo four.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationState(u8);

impl RotationState {
    pub fn quarter_turns(&self) -> u8 {
        self.0
    }

    pub fn degrees(&self) -> u16 {
        self.0 as u16 * 90
    }

    pub fn advance(&mut self) {
        self.0 = (self.0 + 1) % 4;
    }

    /// Odd turn counts exchange width and height.
    pub fn swaps_axes(&self) -> bool {
        self.0 % 2 == 1
    }
}

struct DragState {
    mode: DragMode,
    origin: (f32, f32),
    start_rect: CropRect,
}

/// Stateful editing session over one image.
///
/// The source plane is rotated eagerly on each quarter-turn, so the crop
/// rect always lives in the coordinate space of the image being displayed.
/// The authoritative rect is updated synchronously on every pointer event;
/// the [`RectAnimator`] only smooths what a caller chooses to draw.
pub struct CropEditor {
    source: Array2<f32>,
    view_w: f32,
    view_h: f32,
    rotation: RotationState,
    fitted: (f32, f32),
    scale: ScaleFactors,
    rect: CropRect,
    animator: RectAnimator,
    drag: Option<DragState>,
}

impl CropEditor {
    pub fn new(source: Array2<f32>, view_w: f32, view_h: f32) -> Self {
        let (h, w) = source.dim();
        let fitted = fitted_size(w as u32, h as u32, view_w, view_h);
        let scale = ScaleFactors::new(w as u32, h as u32, fitted.0, fitted.1);
        let rect = CropRect::initial(fitted.0, fitted.1);
        Self {
            source,
            view_w,
            view_h,
            rotation: RotationState::default(),
            fitted,
            scale,
            rect,
            animator: RectAnimator::new(rect),
            drag: None,
        }
    }

    pub fn load(path: &Path, view_w: f32, view_h: f32) -> Result<Self> {
        Ok(Self::new(load_luma(path)?, view_w, view_h))
    }

    pub fn rect(&self) -> CropRect {
        self.rect
    }

    pub fn fitted(&self) -> (f32, f32) {
        self.fitted
    }

    pub fn scale(&self) -> ScaleFactors {
        self.scale
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Current source dimensions as (width, height), after any rotation.
    pub fn source_dims(&self) -> (u32, u32) {
        let (h, w) = self.source.dim();
        (w as u32, h as u32)
    }

    pub fn animator_mut(&mut self) -> &mut RectAnimator {
        &mut self.animator
    }

    /// Rotate the image a quarter turn clockwise. Any in-progress drag is
    /// abandoned, the fit and scale factors are recomputed for the swapped
    /// dimensions, and the rect resets to the initial placement.
    pub fn rotate(&mut self) {
        self.rotation.advance();
        self.source = rotate_cw(&self.source);
        self.drag = None;

        let (h, w) = self.source.dim();
        self.fitted = fitted_size(w as u32, h as u32, self.view_w, self.view_h);
        self.scale = ScaleFactors::new(w as u32, h as u32, self.fitted.0, self.fitted.1);
        self.rect = CropRect::initial(self.fitted.0, self.fitted.1);
        self.animator.snap_to(self.rect);
    }

    /// Start a gesture at a display-space point. Returns the classified
    /// mode, or `None` when the point hits neither a corner handle nor the
    /// rect interior.
    pub fn begin_drag(&mut self, x: f32, y: f32) -> Option<DragMode> {
        let mode = classify(x, y, &self.rect)?;
        self.drag = Some(DragState {
            mode,
            origin: (x, y),
            start_rect: self.rect,
        });
        Some(mode)
    }

    /// Move the active gesture to a new pointer position. Deltas are always
    /// measured from the gesture origin against the rect captured at
    /// gesture start, so intermediate updates never compound. A call with
    /// no active gesture is ignored.
    pub fn drag_to(&mut self, x: f32, y: f32) {
        let Some(drag) = &self.drag else {
            return;
        };
        let dx = x - drag.origin.0;
        let dy = y - drag.origin.1;
        let candidate = apply_drag(drag.mode, &drag.start_rect, dx, dy);
        self.rect = candidate.clamped(self.fitted.0, self.fitted.1);
        self.animator.set_target(self.rect);
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Replace the rect directly (non-interactive callers). The rect is
    /// clamped to the fitted bounds like any drag result.
    pub fn set_rect(&mut self, rect: CropRect) {
        self.rect = rect.clamped(self.fitted.0, self.fitted.1);
        self.animator.snap_to(self.rect);
    }

    /// Resolve the current rect to exact source pixels.
    pub fn finalize(&self) -> SourceRect {
        let (w, h) = self.source_dims();
        to_source_rect(&self.rect, self.scale, w, h)
    }

    /// Extract the cropped region from the source plane.
    pub fn cropped_plane(&self) -> Array2<f32> {
        let region = self.finalize();
        let mut out = Array2::<f32>::zeros((region.height as usize, region.width as usize));
        for row in 0..region.height as usize {
            for col in 0..region.width as usize {
                out[[row, col]] =
                    self.source[[region.y as usize + row, region.x as usize + col]];
            }
        }
        out
    }

    /// Crop and write `cropped_<unix_millis>.jpg` into `out_dir`. The
    /// timestamped name keeps successive crops from clobbering each other.
    pub fn finalize_to_file(&self, out_dir: &Path) -> Result<PathBuf> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let output = out_dir.join(format!("cropped_{millis}.jpg"));
        save_jpeg(&self.cropped_plane(), &output)?;
        let region = self.finalize();
        info!(
            x = region.x,
            y = region.y,
            width = region.width,
            height = region.height,
            output = %output.display(),
            "crop written"
        );
        Ok(output)
    }
}

/// Quarter-turn clockwise rotation of a grayscale plane.
fn rotate_cw(data: &Array2<f32>) -> Array2<f32> {
    let (h, w) = data.dim();
    let mut out = Array2::<f32>::zeros((w, h));
    for row in 0..h {
        for col in 0..w {
            out[[col, h - 1 - row]] = data[[row, col]];
        }
    }
    out
}
