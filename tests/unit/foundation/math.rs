use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(255, 0), 0);
}

#[test]
fn buffer_len_detects_overflow() {
    assert_eq!(buffer_len(4, 3, 4).unwrap(), 48);
    assert!(buffer_len(u32::MAX, u32::MAX, usize::MAX).is_err());
}

#[test]
fn float_conversions_clamp() {
    assert_eq!(trunc_u8(254.99), 254);
    assert_eq!(trunc_u8(-3.0), 0);
    assert_eq!(trunc_u8(300.0), 255);
    assert_eq!(round_u8(254.5), 255);
    assert_eq!(round_u8(0.49), 0);
}
