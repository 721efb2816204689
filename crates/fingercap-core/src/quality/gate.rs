/// Whether capture is permitted at the given clarity score.
///
/// Pure decision, reevaluated on every score update. Callers must re-check
/// it authoritatively before accepting a manual capture request; a request
/// arriving with a stale or low score is rejected, not merely discouraged.
pub fn is_capture_enabled(score: f64, threshold: f64) -> bool {
    score > threshold
}
