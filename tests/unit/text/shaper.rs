use super::*;

#[test]
fn no_font_shaper_always_fails() {
    let err = NoFontShaper.shape("3", 12.0).unwrap_err();
    assert!(err.to_string().contains("text error:"));
    assert!(err.to_string().contains("'3'"));
}

#[test]
fn garbage_font_bytes_are_rejected() {
    assert!(ParleyShaper::from_font_bytes(vec![0u8; 64]).is_err());
}

#[test]
fn missing_font_file_is_reported_with_path() {
    let err = ParleyShaper::from_path("does/not/exist.ttf").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.ttf"));
}

const FONT: &str = "tests/data/fonts/DejaVuSans-Bold.ttf";

#[test]
fn digit_is_shaped_on_the_baseline_with_tight_ink_bounds() {
    let mut shaper = ParleyShaper::from_path(FONT).unwrap();
    assert!(!shaper.family_name().trim().is_empty());

    let label = shaper.shape("3", 24.0).unwrap();
    assert_eq!(label.text, "3");
    assert_eq!(label.font_size, 24.0);
    assert!(label.font.is_some());
    assert_eq!(label.glyphs.len(), 1);
    let g = label.glyphs[0];
    assert_ne!(g.id, 0);
    assert!(g.y.abs() < 1e-3, "glyph y {}", g.y);

    // Digit ink: about 0.73em above the baseline, with a small overshoot below it.
    let b = label.bounds;
    assert!(b.y0 > -20.0 && b.y0 < -15.0, "{b:?}");
    assert!(b.y1 > -0.5 && b.y1 < 1.5, "{b:?}");
    assert!(b.x0 > f64::from(g.x) && b.x1 < f64::from(g.x) + 24.0, "{b:?}");
    assert!(b.width() > 5.0);
}

#[test]
fn wider_labels_grow_the_ink_box() {
    let mut shaper = ParleyShaper::from_path(FONT).unwrap();
    let one = shaper.shape("8", 20.0).unwrap();
    let three = shaper.shape("888", 20.0).unwrap();
    assert_eq!(three.glyphs.len(), 3);
    assert!(three.glyphs.windows(2).all(|w| w[1].x > w[0].x));
    assert!(three.bounds.width() > 2.5 * one.bounds.width());
    assert!((three.bounds.y0 - one.bounds.y0).abs() < 1e-6);
}

#[test]
fn inkless_label_keeps_the_line_box() {
    let mut shaper = ParleyShaper::from_path(FONT).unwrap();
    let label = shaper.shape(" ", 24.0).unwrap();
    assert!(label.bounds.y0 < -20.0, "{:?}", label.bounds);
    assert!(label.bounds.y1 > 0.0);
}

#[test]
fn non_positive_font_size_is_rejected() {
    let mut shaper = ParleyShaper::from_path(FONT).unwrap();
    assert!(shaper.shape("3", 0.0).is_err());
    assert!(shaper.shape("3", f32::NAN).is_err());
}
