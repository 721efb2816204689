use std::time::{Duration, Instant};

use crate::consts::{RECT_ANIMATION_MS, RECT_COALESCE_MS};

use super::rect::CropRect;

/// Cosmetic rendering layer for the crop rect.
///
/// Pointer updates overwrite a single pending target; `tick` applies the
/// latest pending target at most once per coalesce interval and starts a
/// short eased interpolation toward it. The authoritative geometry lives in
/// the editor and never waits on this layer — only what gets drawn does.
///
/// All methods take explicit instants, so nothing here depends on a real
/// clock.
pub struct RectAnimator {
    coalesce: Duration,
    duration: Duration,
    pending: Option<CropRect>,
    last_applied: Option<Instant>,
    from: CropRect,
    to: CropRect,
    started: Option<Instant>,
}

impl RectAnimator {
    pub fn new(initial: CropRect) -> Self {
        Self {
            coalesce: Duration::from_millis(RECT_COALESCE_MS),
            duration: Duration::from_millis(RECT_ANIMATION_MS),
            pending: None,
            last_applied: None,
            from: initial,
            to: initial,
            started: None,
        }
    }

    /// Overwrite the pending target with the newest rect.
    pub fn set_target(&mut self, rect: CropRect) {
        self.pending = Some(rect);
    }

    /// Apply the latest pending target if the coalesce interval has elapsed
    /// since the previous application. Returns whether a new interpolation
    /// was started.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = match self.last_applied {
            Some(applied) => now.duration_since(applied) >= self.coalesce,
            None => true,
        };
        if !due {
            return false;
        }
        let Some(target) = self.pending.take() else {
            return false;
        };
        self.from = self.rendered(now);
        self.to = target;
        self.started = Some(now);
        self.last_applied = Some(now);
        true
    }

    /// Rect to draw at `now`, eased between the previous and current
    /// targets.
    pub fn rendered(&self, now: Instant) -> CropRect {
        let Some(started) = self.started else {
            return self.to;
        };
        let t = now.duration_since(started).as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            return self.to;
        }
        lerp_rect(&self.from, &self.to, ease_out_cubic(t.max(0.0)))
    }

    /// Drop pending work; called when the editor goes away. The timer is
    /// not restarted afterwards.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.started = None;
        self.from = self.to;
    }

    /// Jump straight to a rect with no interpolation (rotation, re-crop).
    pub fn snap_to(&mut self, rect: CropRect) {
        self.pending = None;
        self.started = None;
        self.from = rect;
        self.to = rect;
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

fn lerp_rect(a: &CropRect, b: &CropRect, t: f32) -> CropRect {
    CropRect {
        left: a.left + (b.left - a.left) * t,
        top: a.top + (b.top - a.top) * t,
        width: a.width + (b.width - a.width) * t,
        height: a.height + (b.height - a.height) * t,
    }
}
