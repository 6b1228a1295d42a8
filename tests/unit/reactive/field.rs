use super::*;

#[test]
fn set_reports_change_only_on_difference() {
    let mut f = Field::new(1.0_f64);
    assert!(!f.set(1.0));
    assert!(f.set(2.0));
    assert_eq!(f.value(), 2.0);
    assert!(!f.set(2.0));
}

#[test]
fn set_with_runs_callback_once_per_change() {
    let mut f = Field::new(Some(String::from("1")));
    let mut seen = Vec::new();
    f.set_with(Some("1".into()), |v| seen.push(v.clone()));
    f.set_with(Some("2".into()), |v| seen.push(v.clone()));
    f.set_with(Some("2".into()), |v| seen.push(v.clone()));
    f.set_with(None, |v| seen.push(v.clone()));
    assert_eq!(seen, vec![Some("2".to_string()), None]);
}

#[test]
fn equality_is_structural() {
    let mut f = Field::new(kurbo::Vec2::new(1.0, 2.0));
    assert!(!f.set(kurbo::Vec2::new(1.0, 2.0)));
}

#[test]
fn invalidation_flags() {
    assert!(Invalidation::invalidating(true).dirties_clip());
    assert!(!Invalidation::invalidating(false).dirties_clip());
    assert!(Invalidation::Relabel.dirties_label());
    assert!(!Invalidation::Redraw.dirties_label());
}
