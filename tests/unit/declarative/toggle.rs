use super::*;

#[test]
fn progress_runs_from_closed_to_open() {
    assert_eq!(drawer_progress(-300.0, 300.0), 0.0);
    assert_eq!(drawer_progress(-150.0, 300.0), 0.5);
    assert_eq!(drawer_progress(0.0, 300.0), 1.0);
}

#[test]
fn progress_is_clamped_and_guarded() {
    assert_eq!(drawer_progress(-400.0, 300.0), 0.0);
    assert_eq!(drawer_progress(50.0, 300.0), 1.0);
    assert_eq!(drawer_progress(-10.0, 0.0), 0.0);
    assert_eq!(drawer_progress(-10.0, -5.0), 0.0);
    assert_eq!(drawer_progress(f64::NAN, 300.0), 0.0);
    assert_eq!(drawer_progress(f64::NEG_INFINITY, 300.0), 0.0);
    assert_eq!(drawer_progress(f64::INFINITY, 300.0), 1.0);
}

#[test]
fn toggle_flips_and_settles() {
    let mut t = DrawerToggle::new(100.0, DrawerValue::Closed, Density(2.0));
    assert_eq!(t.width_px(), 200.0);
    assert_eq!(t.state().offset, -200.0);
    assert_eq!(t.progress(), 0.0);

    assert_eq!(t.toggle(), DrawerValue::Open);
    assert!(t.state().is_open());
    assert_eq!(t.progress(), 1.0);

    assert_eq!(t.toggle(), DrawerValue::Closed);
    assert_eq!(t.progress(), 0.0);
}

#[test]
fn dragging_moves_progress_without_settling() {
    let mut t = DrawerToggle::new(100.0, DrawerValue::Closed, Density(1.0));
    t.drag_to(-25.0);
    assert_eq!(t.progress(), 0.75);
    assert_eq!(t.state().value, DrawerValue::Closed);

    t.drag_to(-1000.0);
    assert_eq!(t.state().offset, -100.0);
    t.drag_to(30.0);
    assert_eq!(t.state().offset, 0.0);
}

#[test]
fn settle_snaps_to_nearest_end() {
    let mut t = DrawerToggle::new(100.0, DrawerValue::Closed, Density(1.0));
    t.drag_to(-40.0);
    assert_eq!(t.settle(), DrawerValue::Open);
    assert_eq!(t.state().offset, 0.0);

    t.drag_to(-70.0);
    assert_eq!(t.settle(), DrawerValue::Closed);
    assert_eq!(t.state().offset, -100.0);
}
