use crate::consts::{INITIAL_CROP_FRACTION, MIN_CROP_SIZE};

/// Crop rectangle in display coordinates (the rendered preview space, not
/// the source image).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRect {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// Initial rect for a fitted display area: a centered square sized to
    /// 80% of the shorter fitted dimension.
    pub fn initial(fitted_w: f32, fitted_h: f32) -> Self {
        let side = fitted_w.min(fitted_h) * INITIAL_CROP_FRACTION;
        Self {
            left: (fitted_w - side) / 2.0,
            top: (fitted_h - side) / 2.0,
            width: side,
            height: side,
        }
    }

    /// Clamp so the rect keeps the minimum usable size and stays fully
    /// inside the display bounds. A display smaller than the minimum crop
    /// size is treated as exactly that size, keeping left/top non-negative.
    pub fn clamped(&self, disp_w: f32, disp_h: f32) -> Self {
        let disp_w = disp_w.max(MIN_CROP_SIZE);
        let disp_h = disp_h.max(MIN_CROP_SIZE);
        let left = self.left.max(0.0).min(disp_w - MIN_CROP_SIZE);
        let top = self.top.max(0.0).min(disp_h - MIN_CROP_SIZE);
        let width = self.width.max(MIN_CROP_SIZE).min(disp_w - left);
        let height = self.height.max(MIN_CROP_SIZE).min(disp_h - top);
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Source-image dimension divided by fitted display dimension, per axis.
/// Recomputed whenever the fitted size changes (e.g. after rotation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactors {
    pub x: f32,
    pub y: f32,
}

impl ScaleFactors {
    pub fn new(src_w: u32, src_h: u32, fitted_w: f32, fitted_h: f32) -> Self {
        Self {
            x: src_w as f32 / fitted_w,
            y: src_h as f32 / fitted_h,
        }
    }
}

/// Aspect-preserving fit of a source image into a view. The limiting axis
/// determines both displayed dimensions.
pub fn fitted_size(src_w: u32, src_h: u32, view_w: f32, view_h: f32) -> (f32, f32) {
    let sw = src_w as f32;
    let sh = src_h as f32;
    let scale = (view_w / sw).min(view_h / sh);
    (sw * scale, sh * scale)
}

/// Finalized crop region in source-image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Convert a display-space rect into exact source pixels: scale, round to
/// nearest, then clamp so the region never extends past the source bounds.
pub fn to_source_rect(rect: &CropRect, scale: ScaleFactors, src_w: u32, src_h: u32) -> SourceRect {
    let x = (rect.left * scale.x).round().clamp(0.0, (src_w - 1) as f32) as u32;
    let y = (rect.top * scale.y).round().clamp(0.0, (src_h - 1) as f32) as u32;
    let width = (rect.width * scale.x)
        .round()
        .clamp(1.0, (src_w - x) as f32) as u32;
    let height = (rect.height * scale.y)
        .round()
        .clamp(1.0, (src_h - y) as f32) as u32;
    SourceRect {
        x,
        y,
        width,
        height,
    }
}
