use super::*;

fn view_at(zoom: f64, offset_x: f64, offset_y: f64) -> CropView {
    CropView { viewport: STAGE_SIZE, zoom, offset_x, offset_y }
}

#[test]
fn style_is_empty_before_image_loads() {
    assert_eq!(stage_image_style(&view_at(1.0, 0.0, 0.0), None), String::new());
}

#[test]
fn style_is_empty_for_degenerate_image() {
    assert_eq!(stage_image_style(&view_at(1.0, 0.0, 0.0), Some((0.0, 100.0))), String::new());
}

#[test]
fn centered_square_image_fills_the_stage() {
    let style = stage_image_style(&view_at(1.0, 0.0, 0.0), Some((512.0, 512.0)));
    assert_eq!(style, "width:256.00px;height:256.00px;left:0.00px;top:0.00px;");
}

#[test]
fn landscape_image_centers_horizontally() {
    // 800x400 at zoom 1: displayed 512x256, so left = -128.
    let style = stage_image_style(&view_at(1.0, 0.0, 0.0), Some((800.0, 400.0)));
    assert_eq!(style, "width:512.00px;height:256.00px;left:-128.00px;top:0.00px;");
}

#[test]
fn offsets_shift_the_image() {
    let style = stage_image_style(&view_at(1.0, 50.0, 0.0), Some((800.0, 400.0)));
    assert!(style.contains("left:-78.00px;"));
}

#[test]
fn out_of_range_offsets_are_clamped_into_the_stage() {
    // Max pan for 800x400 at zoom 1 is 128px; 999 clamps down to that.
    let style = stage_image_style(&view_at(1.0, 999.0, 0.0), Some((800.0, 400.0)));
    assert!(style.contains("left:0.00px;"));
}

#[test]
fn zoom_scales_the_displayed_image() {
    let style = stage_image_style(&view_at(2.0, 0.0, 0.0), Some((512.0, 512.0)));
    assert!(style.starts_with("width:512.00px;height:512.00px;"));
}
