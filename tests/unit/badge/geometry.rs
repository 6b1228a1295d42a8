use super::*;

const METRICS: BarMetrics = BarMetrics {
    bar_length: 36.0,
    bar_thickness: 4.0,
    gap_size: 6.0,
};

#[test]
fn standard_diameter_spans_bar_stack() {
    assert_eq!(BadgeSize::Standard.diameter(METRICS, 16.0), 24.0);
}

#[test]
fn dot_uses_fixed_diameter() {
    assert_eq!(BadgeSize::Dot.diameter(METRICS, 16.0), 16.0);
}

#[test]
fn custom_diameter_passes_through() {
    for d in [0.5, 7.0, 123.25] {
        assert_eq!(BadgeSize::Custom(d).diameter(METRICS, 16.0), d);
    }
    assert_eq!(BadgeSize::Custom(-3.0).diameter(METRICS, 16.0), -3.0);
}

#[test]
fn corner_signs_table() {
    assert_eq!(Corner::TopLeft.signs(), (-1.0, -1.0));
    assert_eq!(Corner::TopRight.signs(), (1.0, -1.0));
    assert_eq!(Corner::BottomRight.signs(), (1.0, 1.0));
    assert_eq!(Corner::BottomLeft.signs(), (-1.0, 1.0));
}

#[test]
fn center_is_offset_toward_corner() {
    let bounds = Rect::new(0.0, 0.0, 100.0, 80.0);
    let c = badge_center(bounds, Corner::TopRight, METRICS, Vec2::ZERO);
    assert_eq!(c, Point::new(50.0 + 18.0, 40.0 - 12.0));

    let c = badge_center(bounds, Corner::BottomLeft, METRICS, Vec2::new(2.0, -3.0));
    assert_eq!(c, Point::new(50.0 - 18.0 + 2.0, 40.0 + 12.0 - 3.0));
}

#[test]
fn center_follows_bounds_origin() {
    let bounds = Rect::new(10.0, 20.0, 110.0, 100.0);
    let c = badge_center(bounds, Corner::TopLeft, METRICS, Vec2::ZERO);
    assert_eq!(c, Point::new(60.0 - 18.0, 60.0 - 12.0));
}

#[test]
fn sizes_and_corners_deserialize_from_json() {
    let s: BadgeSize = serde_json::from_str("\"Dot\"").unwrap();
    assert_eq!(s, BadgeSize::Dot);
    let s: BadgeSize = serde_json::from_str("{\"Custom\": 12.5}").unwrap();
    assert_eq!(s, BadgeSize::Custom(12.5));
    let c: Corner = serde_json::from_str("\"BottomLeft\"").unwrap();
    assert_eq!(c, Corner::BottomLeft);
}
