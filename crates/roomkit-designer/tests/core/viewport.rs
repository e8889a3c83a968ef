use roomkit_designer::geometry::Point;
use roomkit_designer::viewport::{Viewport, INITIAL_SCALE, MAX_SCALE, MIN_SCALE};

fn assert_close(a: Point, b: Point) {
    assert!((a.x - b.x).abs() < 1e-6, "{:?} != {:?}", a, b);
    assert!((a.y - b.y).abs() < 1e-6, "{:?} != {:?}", a, b);
}

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(1200.0, 800.0);
    assert_eq!(vp.scale(), INITIAL_SCALE);
    assert_eq!(vp.position(), Point::ORIGIN);
    assert_eq!(vp.canvas_width(), 1200.0);
    assert_eq!(vp.canvas_height(), 800.0);
}

#[test]
fn test_screen_content_round_trip() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_scale(1.5);
    vp.pan_to(Point::new(40.0, -25.0));
    let screen = Point::new(310.0, 220.0);
    assert_close(vp.content_to_screen(vp.screen_to_content(screen)), screen);
}

#[test]
fn test_scale_is_clamped() {
    let mut vp = Viewport::default();
    vp.set_scale(10.0);
    assert_eq!(vp.scale(), MAX_SCALE);
    vp.set_scale(0.0);
    assert_eq!(vp.scale(), MIN_SCALE);
}

#[test]
fn test_zoom_at_keeps_cursor_anchor() {
    let mut vp = Viewport::default();
    vp.pan_to(Point::new(100.0, 50.0));
    let pointer = Point::new(600.0, 400.0);
    let before = vp.screen_to_content(pointer);
    let applied = vp.zoom_at(pointer, 1.2);
    assert_eq!(applied, 1.2);
    assert_close(vp.screen_to_content(pointer), before);
}

#[test]
fn test_zoom_at_clamps_and_still_anchors() {
    let mut vp = Viewport::default();
    let pointer = Point::new(200.0, 300.0);
    let before = vp.screen_to_content(pointer);
    assert_eq!(vp.zoom_at(pointer, 50.0), MAX_SCALE);
    assert_close(vp.screen_to_content(pointer), before);
}

#[test]
fn test_wheel_direction() {
    let mut vp = Viewport::default();
    let pointer = Point::new(10.0, 10.0);
    let zoomed_out = vp.zoom_wheel(pointer, 120.0, 1.05);
    assert!((zoomed_out - INITIAL_SCALE / 1.05).abs() < 1e-12);
    let zoomed_in = vp.zoom_wheel(pointer, -120.0, 1.05);
    assert!((zoomed_in - INITIAL_SCALE).abs() < 1e-12);
}

#[test]
fn test_pan_by_accumulates() {
    let mut vp = Viewport::default();
    vp.pan_by(10.0, 5.0);
    vp.pan_by(-4.0, 1.0);
    assert_eq!(vp.position(), Point::new(6.0, 6.0));
}

#[test]
fn test_visible_grid_lines_start_on_cell_boundary() {
    let mut vp = Viewport::new(400.0, 200.0);
    vp.set_scale(1.0);
    vp.pan_to(Point::new(-150.0, -30.0));
    let lines = vp.visible_grid_lines(100.0);
    assert!(!lines.is_empty());
    let first = lines[0];
    assert_eq!(first.start.x, 100.0);
    assert_eq!(first.start.y, 0.0);
    assert!(lines.iter().all(|l| l.start.x % 100.0 == 0.0 || l.start.y % 100.0 == 0.0));
}

#[test]
fn test_visible_grid_lines_rejects_bad_cell() {
    let vp = Viewport::default();
    assert!(vp.visible_grid_lines(0.0).is_empty());
    assert!(vp.visible_grid_lines(f64::NAN).is_empty());
}

#[test]
fn test_canvas_resize_changes_grid_coverage() {
    let mut vp = Viewport::new(400.0, 200.0);
    vp.set_scale(1.0);
    let narrow = vp.visible_grid_lines(100.0).len();
    vp.set_canvas_size(800.0, 200.0);
    assert_eq!(vp.canvas_width(), 800.0);
    assert!(vp.visible_grid_lines(100.0).len() > narrow);
}

#[test]
fn test_viewport_display() {
    let vp = Viewport::default();
    assert_eq!(vp.to_string(), "Zoom: 0.30x | Pan: (0.0, 0.0)");
}
