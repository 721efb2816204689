use crate::consts::CORNER_HIT_RADIUS;

use super::rect::CropRect;

/// Semantic meaning of a pointer gesture, classified once at gesture start
/// and held fixed until the gesture ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Move,
    ResizeTopLeft,
    ResizeTopRight,
    ResizeBottomLeft,
    ResizeBottomRight,
}

fn near(px: f32, py: f32, cx: f32, cy: f32) -> bool {
    let dx = px - cx;
    let dy = py - cy;
    (dx * dx + dy * dy).sqrt() <= CORNER_HIT_RADIUS
}

/// Classify a gesture from where the pointer started.
///
/// Corners are tested first (top-left, top-right, bottom-left,
/// bottom-right; first match wins), then the interior means a move.
/// Anywhere else starts no drag.
pub fn classify(x: f32, y: f32, rect: &CropRect) -> Option<DragMode> {
    if near(x, y, rect.left, rect.top) {
        Some(DragMode::ResizeTopLeft)
    } else if near(x, y, rect.right(), rect.top) {
        Some(DragMode::ResizeTopRight)
    } else if near(x, y, rect.left, rect.bottom()) {
        Some(DragMode::ResizeBottomLeft)
    } else if near(x, y, rect.right(), rect.bottom()) {
        Some(DragMode::ResizeBottomRight)
    } else if rect.contains(x, y) {
        Some(DragMode::Move)
    } else {
        None
    }
}

/// Apply a pointer delta to the rect according to the active mode, returning
/// the unclamped candidate.
///
/// A move translates all four edges; each resize moves exactly the two edges
/// adjacent to its corner, leaving the opposite corner fixed.
pub fn apply_drag(mode: DragMode, rect: &CropRect, dx: f32, dy: f32) -> CropRect {
    match mode {
        DragMode::Move => CropRect {
            left: rect.left + dx,
            top: rect.top + dy,
            ..*rect
        },
        DragMode::ResizeTopLeft => CropRect {
            left: rect.left + dx,
            top: rect.top + dy,
            width: rect.width - dx,
            height: rect.height - dy,
        },
        DragMode::ResizeTopRight => CropRect {
            left: rect.left,
            top: rect.top + dy,
            width: rect.width + dx,
            height: rect.height - dy,
        },
        DragMode::ResizeBottomLeft => CropRect {
            left: rect.left + dx,
            top: rect.top,
            width: rect.width - dx,
            height: rect.height + dy,
        },
        DragMode::ResizeBottomRight => CropRect {
            left: rect.left,
            top: rect.top,
            width: rect.width + dx,
            height: rect.height + dy,
        },
    }
}
