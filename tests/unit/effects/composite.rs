use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_half_alpha_on_opaque_mixes_evenly() {
    let dst = [0, 0, 0, 255];
    let src = [200, 100, 50, 128];
    let out = over(dst, src);
    assert_eq!(out[3], 255);
    assert!((i32::from(out[0]) - 100).abs() <= 1);
    assert!((i32::from(out[1]) - 50).abs() <= 1);
    assert!((i32::from(out[2]) - 25).abs() <= 1);
}

#[test]
fn over_never_reduces_alpha() {
    for da in [0u8, 1, 90, 200, 255] {
        for sa in [0u8, 1, 36, 128, 254, 255] {
            let out = over([5, 6, 7, da], [250, 251, 252, sa]);
            assert!(out[3] >= da.max(sa));
        }
    }
}

#[test]
fn over_in_place_rejects_mismatched_lengths() {
    let mut dst = vec![0u8; 8];
    let src = vec![0u8; 4];
    assert!(over_in_place(&mut dst, &src).is_err());
}

#[test]
fn layer_stack_composites_in_push_order() {
    let red = Canvas::filled(2, 2, Rgba8::new(255, 0, 0, 255));
    let blue = Canvas::filled(2, 2, Rgba8::new(0, 0, 255, 255));

    let stack = LayerStack::new(2, 2)
        .with("red", red.clone())
        .unwrap()
        .with("blue", blue.clone())
        .unwrap();
    assert_eq!(stack.names(), vec!["red", "blue"]);
    assert_eq!(stack.flatten().unwrap(), blue);

    let stack = LayerStack::new(2, 2)
        .with("blue", blue)
        .unwrap()
        .with("red", red.clone())
        .unwrap();
    assert_eq!(stack.flatten().unwrap(), red);
}

#[test]
fn layer_stack_rejects_wrong_size() {
    let mut stack = LayerStack::new(4, 4);
    let err = stack.push("small", Canvas::new(2, 2)).unwrap_err();
    assert!(err.to_string().contains("small"));
    assert!(stack.is_empty());
}

#[test]
fn empty_stack_flattens_to_transparent() {
    let out = LayerStack::new(3, 3).flatten().unwrap();
    assert!(out.data().iter().all(|&v| v == 0));
}

#[test]
fn alpha_composite_matches_over_per_pixel() {
    let dst = Canvas::filled(2, 1, Rgba8::new(10, 20, 30, 255));
    let src = Canvas::filled(2, 1, Rgba8::new(200, 200, 200, 64));
    let out = alpha_composite(&dst, &src).unwrap();
    let expected = over([10, 20, 30, 255], [200, 200, 200, 64]);
    assert_eq!(out.pixel(1, 0).to_array(), expected);
}
