use super::*;
use kurbo::Shape;

fn params() -> ClipParams {
    ClipParams {
        enabled: true,
        margin: 2.0,
        center: Point::new(40.0, 30.0),
        radius: 8.0,
        scale: 1.0,
        frame_top: 0.0,
    }
}

fn radius_of(path: &BezPath) -> f64 {
    path.bounding_box().width() / 2.0
}

#[test]
fn builds_circle_of_scaled_radius() {
    let mut cache = ClipCache::new();
    let p = ClipParams {
        scale: 1.5,
        ..params()
    };
    let path = cache.compute(&p).expect("clip");
    assert!((radius_of(path) - 15.0).abs() < 1e-6);
    let c = path.bounding_box().center();
    assert!((c.x - 40.0).abs() < 1e-6 && (c.y - 30.0).abs() < 1e-6);
}

#[test]
fn clean_compute_returns_same_region() {
    let mut cache = ClipCache::new();
    let a = cache.compute(&params()).map(|p| p as *const BezPath);
    let b = cache.compute(&params()).map(|p| p as *const BezPath);
    assert!(a.is_some());
    assert_eq!(a, b);
    assert_eq!(cache.rebuild_count(), 1);
}

#[test]
fn clean_cache_ignores_param_changes_until_invalidated() {
    let mut cache = ClipCache::new();
    cache.compute(&params());
    let bigger = ClipParams {
        scale: 2.0,
        ..params()
    };
    let r = radius_of(cache.compute(&bigger).unwrap());
    assert!((r - 10.0).abs() < 1e-6);

    cache.invalidate();
    assert!(cache.is_dirty());
    let r = radius_of(cache.compute(&bigger).unwrap());
    assert!((r - 20.0).abs() < 1e-6);
    assert_eq!(cache.rebuild_count(), 2);
    assert!(!cache.is_dirty());
}

#[test]
fn rebuild_reuses_allocation() {
    let mut cache = ClipCache::new();
    let a = cache.compute(&params()).map(|p| p as *const BezPath);
    cache.invalidate();
    let b = cache.compute(&params()).map(|p| p as *const BezPath);
    assert_eq!(a, b);
}

#[test]
fn zero_margin_never_clips() {
    let mut cache = ClipCache::new();
    for (enabled, scale, top) in [(true, 1.0, 0.0), (false, 2.0, 5.0), (true, 0.0, 12.0)] {
        let p = ClipParams {
            enabled,
            margin: 0.0,
            scale,
            frame_top: top,
            ..params()
        };
        cache.invalidate();
        assert!(cache.compute(&p).is_none());
    }
}

#[test]
fn disabling_drops_cached_region() {
    let mut cache = ClipCache::new();
    cache.compute(&params());
    let off = ClipParams {
        enabled: false,
        ..params()
    };
    assert!(cache.compute(&off).is_none());
    assert_eq!(cache.rebuild_count(), 1);
    assert!(cache.compute(&params()).is_some());
    assert_eq!(cache.rebuild_count(), 2);
}

#[test]
fn region_is_rebased_to_frame_top() {
    let mut cache = ClipCache::new();
    let p = ClipParams {
        frame_top: 10.0,
        ..params()
    };
    let c = cache.compute(&p).unwrap().bounding_box().center();
    assert!((c.y - 20.0).abs() < 1e-6);
}
