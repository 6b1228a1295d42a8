use super::*;

#[test]
fn lerp_hits_endpoints_exactly() {
    assert_eq!(lerp(1.0, 1.5, 0.0), 1.0);
    assert_eq!(lerp(1.0, 1.5, 1.0), 1.5);
    assert_eq!(lerp(0.0, 360.0, 0.5), 180.0);
}

#[test]
fn lerp_extrapolates_outside_unit_range() {
    assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
    assert_eq!(lerp(0.0, 10.0, -1.0), -10.0);
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(255, 0), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 128), 128);
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut px = [64u8, 32, 0, 128, 10, 20, 30, 0, 1, 2, 3, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 0]);
    assert_eq!(&px[8..], &[1, 2, 3, 255]);
}
