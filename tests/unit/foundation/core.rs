use super::*;

#[test]
fn hex_colors_parse_and_format() {
    let c: Rgba8 = "#ff8000".parse().unwrap();
    assert_eq!(c, Rgba8::rgb(255, 128, 0));
    assert_eq!(c.to_string(), "#ff8000");

    let c: Rgba8 = "#00000080".parse().unwrap();
    assert_eq!(c, Rgba8::new(0, 0, 0, 128));
    assert_eq!(c.to_string(), "#00000080");
}

#[test]
fn malformed_hex_colors_are_rejected() {
    assert!("ff0000".parse::<Rgba8>().is_err());
    assert!("#ff00".parse::<Rgba8>().is_err());
    assert!("#gg0000".parse::<Rgba8>().is_err());
}

#[test]
fn colors_roundtrip_through_json_strings() {
    let json = serde_json::to_string(&Rgba8::RED).unwrap();
    assert_eq!(json, "\"#ff0000\"");
    let back: Rgba8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Rgba8::RED);
}

#[test]
fn alpha_mul_and_premultiply() {
    let c = Rgba8::rgb(200, 100, 50).with_alpha_mul(128);
    assert_eq!(c.a, 128);
    assert_eq!(c.premultiplied(), [100, 50, 25, 128]);
}

#[test]
fn density_scales_dp() {
    assert_eq!(Density(2.5).px(8.0), 20.0);
    assert_eq!(Density::default().px(DOT_DIAMETER_DP), 8.0);
}
