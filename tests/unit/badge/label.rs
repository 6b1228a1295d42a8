use super::*;
use crate::foundation::error::BadgeResult;
use crate::text::shaper::{LabelGlyph, NoFontShaper};
use smallvec::smallvec;

/// Shaper with a fixed advance of 0.6em per char, ascent 0.7em and descent 0.2em.
#[derive(Default)]
struct GridShaper {
    calls: Vec<(String, f32)>,
}

impl LabelShaper for GridShaper {
    fn shape(&mut self, text: &str, font_size: f32) -> BadgeResult<ShapedLabel> {
        self.calls.push((text.to_owned(), font_size));
        let size = f64::from(font_size);
        let n = text.chars().count() as f64;
        Ok(ShapedLabel {
            text: text.to_owned(),
            font_size,
            bounds: Rect::new(0.0, -0.7 * size, 0.6 * size * n, 0.2 * size),
            glyphs: smallvec![LabelGlyph { id: 1, x: 0.0, y: 0.0 }],
            font: None,
        })
    }
}

#[test]
fn size_factor_by_length() {
    assert_eq!(text_size_factor(1), 0.75);
    assert_eq!(text_size_factor(2), 0.6);
    assert_eq!(text_size_factor(3), 0.5);
    assert_eq!(text_size_factor(12), 0.5);
}

#[test]
fn default_size_scales_with_diameter_and_length() {
    let mut shaper = GridShaper::default();
    let mut cache = LabelCache::new();
    let id = TextSizeFn::identity();

    cache.resolve(Some("7"), 20.0, &id, &mut shaper);
    cache.invalidate();
    cache.resolve(Some("42"), 20.0, &id, &mut shaper);
    cache.invalidate();
    cache.resolve(Some("99+"), 20.0, &id, &mut shaper);

    let sizes: Vec<f32> = shaper.calls.iter().map(|(_, s)| *s).collect();
    assert_eq!(sizes, vec![15.0, 12.0, 10.0]);
}

#[test]
fn size_hook_overrides_default() {
    let mut shaper = GridShaper::default();
    let mut cache = LabelCache::new();
    let hook = TextSizeFn::new(|d| d * 2.0);
    let label = cache.resolve(Some("5"), 16.0, &hook, &mut shaper).unwrap();
    assert_eq!(label.font_size, 24.0);
}

#[test]
fn clean_cache_does_not_reshape() {
    let mut shaper = GridShaper::default();
    let mut cache = LabelCache::new();
    let id = TextSizeFn::identity();
    for _ in 0..5 {
        cache.resolve(Some("3"), 20.0, &id, &mut shaper);
    }
    assert_eq!(shaper.calls.len(), 1);
    assert_eq!(cache.reshape_count(), 1);
}

#[test]
fn diameter_change_reshapes() {
    let mut shaper = GridShaper::default();
    let mut cache = LabelCache::new();
    let id = TextSizeFn::identity();
    cache.resolve(Some("3"), 20.0, &id, &mut shaper);
    cache.resolve(Some("3"), 40.0, &id, &mut shaper);
    assert_eq!(shaper.calls.len(), 2);
    assert_eq!(shaper.calls[1].1, 30.0);
}

#[test]
fn blank_text_has_empty_bounds_and_no_shaping() {
    let mut shaper = GridShaper::default();
    let mut cache = LabelCache::new();
    let id = TextSizeFn::identity();
    for text in [None, Some(""), Some("  ")] {
        cache.invalidate();
        assert!(cache.resolve(text, 20.0, &id, &mut shaper).is_none());
        assert_eq!(cache.bounds(), Rect::ZERO);
    }
    assert!(shaper.calls.is_empty());
}

#[test]
fn shaping_failure_degrades_to_no_label() {
    let mut cache = LabelCache::new();
    let id = TextSizeFn::identity();
    assert!(
        cache
            .resolve(Some("1"), 20.0, &id, &mut NoFontShaper)
            .is_none()
    );
    assert_eq!(cache.bounds(), Rect::ZERO);
}

#[test]
fn non_finite_diameter_is_not_shaped() {
    let mut shaper = GridShaper::default();
    let mut cache = LabelCache::new();
    let id = TextSizeFn::identity();
    for _ in 0..3 {
        assert!(cache.resolve(Some("7"), f64::NAN, &id, &mut shaper).is_none());
    }
    assert!(cache.resolve(Some("7"), f64::INFINITY, &id, &mut shaper).is_none());
    assert!(shaper.calls.is_empty());
    assert_eq!(cache.reshape_count(), 0);

    assert!(cache.resolve(Some("7"), 20.0, &id, &mut shaper).is_some());
    assert_eq!(shaper.calls, vec![("7".to_owned(), 15.0)]);
}

#[test]
fn size_fn_equality_is_identity() {
    let a = TextSizeFn::new(|d| d);
    let b = TextSizeFn::new(|d| d);
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert_eq!(TextSizeFn::identity(), TextSizeFn::default());
    assert_ne!(TextSizeFn::identity(), a);
}
