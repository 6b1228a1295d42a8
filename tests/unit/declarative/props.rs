use super::*;
use crate::morph::MorphRenderer;
use crate::text::shaper::NoFontShaper;

#[test]
fn empty_json_is_all_defaults() {
    let props = BadgedArrowProps::from_json_str("{}").unwrap();
    assert_eq!(props, BadgedArrowProps::default());
    assert!(!props.badge_enabled);
    assert!(props.spin_enabled);
    assert_eq!(props.badge_color, Rgba8::RED);
}

#[test]
fn parses_strings_for_colors_and_motion() {
    let props = BadgedArrowProps::from_json_str(
        r##"{
            "badge_enabled": true,
            "badge_color": "#00ff0080",
            "badge_size": { "Custom": 10.0 },
            "badge_corner": "BottomLeft",
            "badge_offset": { "x": 1.0, "y": -2.0 },
            "badge_text": "7",
            "badge_motion": "Grow+HalfSpinCCW",
            "auto_mirror_on_reverse": true
        }"##,
    )
    .unwrap();
    assert_eq!(props.badge_color, Rgba8::new(0, 255, 0, 128));
    assert_eq!(props.badge_size, BadgeSize::Custom(10.0));
    assert_eq!(props.badge_corner, Corner::BottomLeft);
    assert_eq!(props.badge_offset, Vec2::new(1.0, -2.0));
    assert_eq!(props.badge_motion, Motion::GROW + Motion::HALF_SPIN_CCW);
    assert!(props.auto_mirror_on_reverse);
}

#[test]
fn rejects_unknown_fields_and_bad_values() {
    assert!(matches!(
        BadgedArrowProps::from_json_str(r##"{ "badge_colour": "#ff0000" }"##),
        Err(BadgeError::Serde(_))
    ));
    assert!(matches!(
        BadgedArrowProps::from_json_str(r#"{ "badge_motion": "Wobble" }"#),
        Err(BadgeError::Serde(_))
    ));
    assert!(matches!(
        BadgedArrowProps::from_json_str(r#"{ "bar_length": -1.0 }"#),
        Err(BadgeError::Validation(_))
    ));
}

#[test]
fn json_round_trips() {
    let props = BadgedArrowProps {
        badge_enabled: true,
        badge_text: Some("99+".into()),
        badge_motion: Motion::SHRINK + Motion::FULL_SPIN_CW,
        ..BadgedArrowProps::default()
    };
    let json = serde_json::to_string(&props).unwrap();
    assert_eq!(BadgedArrowProps::from_json_str(&json).unwrap(), props);
}

#[test]
fn apply_scales_lengths_by_density() {
    let density = Density(2.0);
    let props = BadgedArrowProps {
        badge_enabled: true,
        badge_size: BadgeSize::Custom(10.0),
        badge_offset: Vec2::new(1.0, 2.0),
        badge_clip_margin: 1.5,
        bar_length: 20.0,
        ..BadgedArrowProps::default()
    };
    let d = props.build(density, Box::new(NoFontShaper));

    assert!(d.is_badge_enabled());
    assert_eq!(d.badge_size(), BadgeSize::Custom(20.0));
    assert_eq!(d.badge_diameter(), 20.0);
    assert_eq!(d.badge_offset(), Vec2::new(2.0, 4.0));
    assert_eq!(d.badge_clip_margin(), 3.0);
    assert_eq!(d.morph().metrics().bar_length, 40.0);
    assert_eq!(d.morph().metrics().bar_thickness, 4.0);
}

#[test]
fn reapplying_the_same_props_is_silent() {
    let density = Density(1.5);
    let props = BadgedArrowProps {
        badge_enabled: true,
        badge_text: Some("3".into()),
        badge_motion: Motion::GROW,
        bar_color: Rgba8::WHITE,
        ..BadgedArrowProps::default()
    };
    let mut d = props.build(density, Box::new(NoFontShaper));
    let before = d.invalidation_count();

    props.apply_to(&mut d, density);
    assert_eq!(d.invalidation_count(), before);

    let changed = BadgedArrowProps {
        bar_color: Rgba8::BLACK,
        ..props.clone()
    };
    changed.apply_to(&mut d, density);
    assert_eq!(d.invalidation_count(), before + 1);
    assert_eq!(d.morph().color(), Rgba8::BLACK);
}
