use super::*;
use crate::render::recording::RecordingSurface;

#[test]
fn tint_replaces_rgb_and_multiplies_alpha() {
    let f = ColorFilter::Tint(Rgba8::new(0, 0, 255, 128));
    assert_eq!(f.apply(Rgba8::RED), Rgba8::new(0, 0, 255, 128));
    assert_eq!(f.apply(Rgba8::TRANSPARENT).a, 0);
}

#[test]
fn paint_state_applies_filter_then_alpha() {
    let paint = PaintState {
        alpha: 128,
        color_filter: Some(ColorFilter::Tint(Rgba8::WHITE)),
    };
    assert_eq!(paint.resolve(Rgba8::RED), Rgba8::new(255, 255, 255, 128));
    assert_eq!(PaintState::default().resolve(Rgba8::RED), Rgba8::RED);
}

#[test]
fn scale_about_keeps_center_fixed() {
    let mut s = RecordingSurface::new();
    let c = Point::new(10.0, 20.0);
    s.scale_about(3.0, c);
    assert_eq!(s.current_transform() * c, c);
    assert_eq!(
        s.current_transform() * Point::new(11.0, 20.0),
        Point::new(13.0, 20.0)
    );
}

#[test]
fn rotate_about_is_clockwise_in_screen_space() {
    let mut s = RecordingSurface::new();
    s.rotate_about(90.0, Point::ZERO);
    let p = s.current_transform() * Point::new(1.0, 0.0);
    assert!(p.x.abs() < 1e-9);
    assert!((p.y - 1.0).abs() < 1e-9);
}

#[test]
fn default_stroke_is_butt_miter() {
    let s = StrokeStyle::new(2.0);
    assert_eq!(s.cap, LineCap::Butt);
    assert_eq!(s.join, LineJoin::Miter);
}
