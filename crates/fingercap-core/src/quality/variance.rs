use tracing::debug;

use crate::consts::{ROI_MARGIN_X, ROI_MARGIN_Y};
use crate::frame::Frame;

/// Region of a frame actually analyzed for clarity: the horizontal band
/// [0.15w, 0.85w] by the vertical band [0.10h, 0.90h], truncated to integers.
///
/// Returns (x, y, width, height).
pub fn roi_bounds(width: u32, height: u32) -> (u32, u32, u32, u32) {
    let x = (width as f64 * ROI_MARGIN_X) as u32;
    let y = (height as f64 * ROI_MARGIN_Y) as u32;
    let w = (width as f64 * (1.0 - 2.0 * ROI_MARGIN_X)) as u32;
    let h = (height as f64 * (1.0 - 2.0 * ROI_MARGIN_Y)) as u32;
    (x, y, w, h)
}

/// Clarity score of a frame: population variance of the 8-bit luma over the
/// ROI. Higher means sharper / more ridge texture.
///
/// A malformed frame scores 0.0 instead of erroring; a transient bad frame
/// must degrade the gate to "not ready", never interrupt the capture loop.
pub fn clarity_score(frame: &Frame) -> f64 {
    if !frame.is_well_formed() {
        debug!(
            width = frame.width,
            height = frame.height,
            bytes = frame.luma.len(),
            "dropping malformed frame"
        );
        return 0.0;
    }

    let (x, y, w, h) = roi_bounds(frame.width, frame.height);
    if w == 0 || h == 0 {
        return 0.0;
    }

    let stride = frame.width as usize;
    let count = w as u64 * h as u64;
    let mut sum = 0u64;
    let mut sum_sq = 0u64;

    for row in y..y + h {
        let base = row as usize * stride;
        for col in x..x + w {
            let v = frame.luma[base + col as usize] as u64;
            sum += v;
            sum_sq += v * v;
        }
    }

    let mean = sum as f64 / count as f64;
    (sum_sq as f64 / count as f64 - mean * mean).max(0.0)
}
