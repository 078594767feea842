use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn cubic_weights_partition_unity() {
    for t in [0.0, 0.1, 0.25, 0.5, 0.9] {
        let sum: f64 = (0..4).map(|i| cubic_weight(t - (i as f64 - 1.0))).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }
    assert_eq!(cubic_weight(0.0), 1.0);
    assert_eq!(cubic_weight(1.0), 0.0);
    assert_eq!(cubic_weight(2.5), 0.0);
}

#[test]
fn zero_and_full_turn_are_identity() {
    let mut m = Mask::new(7, 5);
    m.set(1, 3, 200);
    assert_eq!(rotate_mask(&m, 0.0), m);
    assert_eq!(rotate_mask(&m, 360.0), m);
    assert_eq!(rotate_mask(&m, -720.0), m);
}

#[test]
fn quarter_turn_moves_right_of_center_to_above() {
    let mut m = Mask::new(9, 9);
    m.set(6, 4, 255);
    let out = rotate_mask(&m, 90.0);
    assert!(out.get(4, 2) >= 250, "got {}", out.get(4, 2));
    assert!(out.get(6, 4) <= 5);
}

#[test]
fn half_turn_mirrors_through_center() {
    let mut c = Canvas::new(9, 9);
    c.put_pixel(1, 2, Rgba8::new(200, 100, 50, 255));
    let out = rotate_canvas(&c, 180.0);
    let px = out.pixel(7, 6);
    assert!(px.a >= 250);
    assert!((i32::from(px.r) - 200).abs() <= 2);
}

#[test]
fn rotation_uncovers_transparent_corners() {
    let c = Canvas::filled(32, 32, Rgba8::new(255, 255, 255, 255));
    let out = rotate_canvas(&c, 45.0);
    assert_eq!(out.pixel(0, 0).a, 0);
    assert_eq!(out.pixel(16, 16).a, 255);
}

#[test]
fn transparent_neighbours_do_not_darken_colour() {
    let mut c = Canvas::new(16, 16);
    for y in 4..12 {
        for x in 4..12 {
            c.put_pixel(x, y, Rgba8::new(210, 220, 230, 90));
        }
    }
    let out = rotate_canvas(&c, 20.0);
    for y in 0..16 {
        for x in 0..16 {
            let px = out.pixel(x, y);
            if px.a >= 8 {
                assert!(px.r >= 200, "({x},{y}) {px:?}");
            }
        }
    }
}
