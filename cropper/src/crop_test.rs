#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- clamp_zoom ---

#[test]
fn clamp_zoom_passes_through_in_range() {
    assert_eq!(clamp_zoom(1.0), 1.0);
    assert_eq!(clamp_zoom(2.5), 2.5);
    assert_eq!(clamp_zoom(3.0), 3.0);
}

#[test]
fn clamp_zoom_limits_out_of_range() {
    assert_eq!(clamp_zoom(0.2), 1.0);
    assert_eq!(clamp_zoom(10.0), 3.0);
}

#[test]
fn clamp_zoom_handles_non_finite() {
    assert_eq!(clamp_zoom(f64::NAN), 1.0);
    assert_eq!(clamp_zoom(f64::INFINITY), 1.0);
}

// --- display_scale ---

#[test]
fn display_scale_fits_short_side_at_zoom_one() {
    let view = CropView::new(256.0);
    // Landscape 800x400: the short side (400) fills the 256px viewport.
    assert!(approx_eq(view.display_scale(800.0, 400.0), 256.0 / 400.0));
}

#[test]
fn display_scale_multiplies_by_zoom() {
    let view = CropView { zoom: 2.0, ..CropView::new(256.0) };
    assert!(approx_eq(view.display_scale(400.0, 400.0), (256.0 / 400.0) * 2.0));
}

#[test]
fn display_scale_zero_for_degenerate_image() {
    let view = CropView::new(256.0);
    assert_eq!(view.display_scale(0.0, 400.0), 0.0);
    assert_eq!(view.display_scale(-10.0, 400.0), 0.0);
}

// --- max_offsets ---

#[test]
fn square_image_at_zoom_one_cannot_pan() {
    let view = CropView::new(256.0);
    let (max_x, max_y) = view.max_offsets(512.0, 512.0);
    assert_eq!(max_x, 0.0);
    assert_eq!(max_y, 0.0);
}

#[test]
fn landscape_image_pans_horizontally_only() {
    let view = CropView::new(256.0);
    let (max_x, max_y) = view.max_offsets(800.0, 400.0);
    // Displayed width = 800 * 0.64 = 512, viewport 256 -> slack 128 each side.
    assert!(approx_eq(max_x, 128.0));
    assert_eq!(max_y, 0.0);
}

#[test]
fn zooming_in_grows_pan_range() {
    let base = CropView::new(256.0);
    let zoomed = CropView { zoom: 2.0, ..base };
    let (x1, _) = base.max_offsets(800.0, 400.0);
    let (x2, y2) = zoomed.max_offsets(800.0, 400.0);
    assert!(x2 > x1);
    assert!(y2 > 0.0);
}

// --- clamped ---

#[test]
fn clamped_limits_offsets_to_pan_range() {
    let view = CropView { offset_x: 1000.0, offset_y: -1000.0, ..CropView::new(256.0) };
    let clamped = view.clamped(800.0, 400.0);
    assert!(approx_eq(clamped.offset_x, 128.0));
    assert_eq!(clamped.offset_y, 0.0);
}

#[test]
fn clamped_reclamps_offsets_after_zoom_out() {
    // Pan far out while zoomed, then zoom back to 1.0: the old offset
    // must shrink with the reduced pan range.
    let panned = CropView { zoom: 3.0, offset_x: 300.0, ..CropView::new(256.0) };
    let zoomed_out = CropView { zoom: 1.0, ..panned }.clamped(800.0, 400.0);
    assert!(zoomed_out.offset_x <= 128.0 + EPSILON);
}

#[test]
fn clamped_normalizes_zoom() {
    let view = CropView { zoom: 99.0, ..CropView::new(256.0) };
    assert_eq!(view.clamped(400.0, 400.0).zoom, 3.0);
}

// --- source_rect ---

#[test]
fn centered_square_image_crops_whole_image() {
    let view = CropView::new(256.0);
    let rect = view.source_rect(512.0, 512.0).unwrap();
    assert!(approx_eq(rect.x, 0.0));
    assert!(approx_eq(rect.y, 0.0));
    assert!(approx_eq(rect.side, 512.0));
}

#[test]
fn centered_landscape_crops_middle_square() {
    let view = CropView::new(256.0);
    let rect = view.source_rect(800.0, 400.0).unwrap();
    assert!(approx_eq(rect.side, 400.0));
    assert!(approx_eq(rect.x, 200.0));
    assert!(approx_eq(rect.y, 0.0));
}

#[test]
fn zoom_halves_the_source_side() {
    let view = CropView { zoom: 2.0, ..CropView::new(256.0) };
    let rect = view.source_rect(800.0, 400.0).unwrap();
    assert!(approx_eq(rect.side, 200.0));
}

#[test]
fn panning_right_moves_source_left() {
    let scale = 256.0 / 400.0;
    let view = CropView { offset_x: 64.0, ..CropView::new(256.0) };
    let centered = CropView::new(256.0).source_rect(800.0, 400.0).unwrap();
    let panned = view.source_rect(800.0, 400.0).unwrap();
    assert!(approx_eq(centered.x - panned.x, 64.0 / scale));
}

#[test]
fn source_rect_never_leaves_image() {
    let view = CropView {
        zoom: 2.7,
        offset_x: 5000.0,
        offset_y: -5000.0,
        ..CropView::new(256.0)
    };
    let rect = view.source_rect(640.0, 480.0).unwrap();
    assert!(rect.x >= 0.0);
    assert!(rect.y >= 0.0);
    assert!(rect.x + rect.side <= 640.0 + EPSILON);
    assert!(rect.y + rect.side <= 480.0 + EPSILON);
}

#[test]
fn source_side_never_exceeds_short_side() {
    for zoom in [1.0, 1.3, 2.0, 3.0] {
        let view = CropView { zoom, ..CropView::new(256.0) };
        let rect = view.source_rect(1000.0, 300.0).unwrap();
        assert!(rect.side <= 300.0 + EPSILON);
    }
}

#[test]
fn source_rect_none_for_degenerate_inputs() {
    assert!(CropView::new(256.0).source_rect(0.0, 100.0).is_none());
    assert!(CropView::new(0.0).source_rect(100.0, 100.0).is_none());
}
