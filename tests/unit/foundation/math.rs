use super::*;

#[test]
fn fnv_matches_reference_and_is_chunking_independent() {
    assert_eq!(Fnv1a64::new_default().finish(), 0xcbf2_9ce4_8422_2325);
    let mut one = Fnv1a64::new_default();
    one.write_u8(b'a');
    assert_eq!(one.finish(), 0xaf63_dc4c_8601_ec8c);

    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"reeltime");
    let mut b = Fnv1a64::new_default();
    b.write_u8(b'r');
    b.write_bytes(b"eeltime");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn interpolate_clamps_both_sides() {
    assert_eq!(interpolate_clamped(-1.0, (0.0, 4.0), (1.0, 0.2)), 1.0);
    assert_eq!(interpolate_clamped(9.0, (0.0, 4.0), (1.0, 0.2)), 0.2);
    assert!((interpolate_clamped(2.0, (0.0, 4.0), (1.0, 0.2)) - 0.6).abs() < 1e-12);
}

#[test]
fn degenerate_range_is_a_step() {
    assert_eq!(interpolate_clamped(0.9, (1.0, 1.0), (0.0, 1.0)), 0.0);
    assert_eq!(interpolate_clamped(1.0, (1.0, 1.0), (0.0, 1.0)), 1.0);
}

#[test]
fn ramp_end_is_exact() {
    assert_eq!(interpolate_clamped(4.0, (0.0, 4.0), (1.0, 0.2)), 0.2);
    assert_eq!(interpolate_clamped(0.0, (0.0, 4.0), (1.0, 0.2)), 1.0);
    assert_eq!(interpolate_clamped(24.0, (20.0, 24.0), (0.3, 1.0)), 1.0);
}
