// Host-side tests for scroll progress math.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod progress {
    include!("../src/progress.rs");
}

use progress::*;

#[test]
fn scroll_progress_maps_scrollable_distance() {
    // 3000px page, 1000px viewport => 2000px scrollable
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert!((scroll_progress(500.0, 3000.0, 1000.0) - 0.25).abs() < 1e-6);
    assert!((scroll_progress(1000.0, 3000.0, 1000.0) - 0.5).abs() < 1e-6);
    assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_clamps_overscroll() {
    // rubber-band scrolling reports values outside the range
    assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_handles_unscrollable_pages() {
    assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn scroll_progress_rejects_non_finite_input() {
    assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(10.0, f64::INFINITY, 1000.0), 0.0);
}

#[test]
fn scene_label_is_zero_padded() {
    assert_eq!(scene_label(2, 5), "02 / 05");
    assert_eq!(scene_label(12, 12), "12 / 12");
}
