// Scroll position to normalized progress. Kept free of web APIs so host-side
// tests can include it directly.

/// Fraction of the scrollable distance covered, in `[0, 1]`.
///
/// Returns 0 when the page is not taller than the viewport or any input is
/// not finite.
#[inline]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    if !(scroll_y.is_finite() && scroll_height.is_finite() && viewport_height.is_finite()) {
        return 0.0;
    }
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0) as f32
}

/// Two-digit scene label, e.g. `"02 / 05"`.
#[inline]
pub fn scene_label(scene: usize, scene_count: usize) -> String {
    format!("{:02} / {:02}", scene, scene_count)
}
