use super::*;

#[test]
fn new_canvas_is_transparent() {
    let c = Canvas::new(3, 2);
    assert_eq!(c.data().len(), 3 * 2 * 4);
    assert!(c.data().iter().all(|&v| v == 0));
}

#[test]
fn from_raw_checks_length() {
    assert!(Canvas::from_raw(2, 2, vec![0; 15]).is_err());
    assert!(Canvas::from_raw(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn alpha_split_and_replace() {
    let mut c = Canvas::filled(2, 1, Rgba8::new(1, 2, 3, 4));
    c.put_pixel(1, 0, Rgba8::new(5, 6, 7, 8));
    assert_eq!(c.alpha().data(), &[4, 8]);

    let m = Mask::from_raw(2, 1, vec![255, 0]).unwrap();
    let out = c.with_alpha(&m).unwrap();
    assert_eq!(out.pixel(0, 0), Rgba8::new(1, 2, 3, 255));
    assert_eq!(out.pixel(1, 0), Rgba8::new(5, 6, 7, 0));
}

#[test]
fn with_alpha_rejects_mismatch() {
    let c = Canvas::new(2, 2);
    assert!(c.with_alpha(&Mask::new(3, 2)).is_err());
}

#[test]
fn gray_alpha_builds_rgba() {
    let g = Mask::from_raw(2, 1, vec![10, 200]).unwrap();
    let a = Mask::from_raw(2, 1, vec![7, 140]).unwrap();
    let c = Canvas::from_gray_alpha(&g, &a).unwrap();
    assert_eq!(c.data(), &[10, 10, 10, 7, 200, 200, 200, 140]);
}

#[test]
fn color_alpha_builds_overlay() {
    let a = Mask::from_raw(2, 1, vec![0, 153]).unwrap();
    let c = Canvas::from_color_alpha(Rgb8::new(0, 0, 0), &a).unwrap();
    assert_eq!(c.data(), &[0, 0, 0, 0, 0, 0, 0, 153]);
}

#[test]
fn fill_ellipse_overwrites_without_blending() {
    let mut c = Canvas::filled(16, 16, Rgba8::new(255, 255, 255, 255));
    c.fill_ellipse(Rect::new(4.0, 4.0, 12.0, 12.0), Rgba8::new(10, 20, 30, 40));
    assert_eq!(c.pixel(8, 8), Rgba8::new(10, 20, 30, 40));
    assert_eq!(c.pixel(0, 0), Rgba8::new(255, 255, 255, 255));
}

#[test]
fn blur_keeps_colour_of_isolated_shape() {
    let mut c = Canvas::new(32, 32);
    c.fill_ellipse(Rect::new(8.0, 8.0, 24.0, 24.0), Rgba8::new(120, 150, 180, 80));
    let out = c.blur(3.0).unwrap();

    let edge = out.pixel(8, 16);
    assert!(edge.a > 0);
    assert!((i32::from(edge.r) - 120).abs() <= 6, "{edge:?}");
    assert!((i32::from(edge.b) - 180).abs() <= 6, "{edge:?}");
}

#[test]
fn premultiply_roundtrip_is_stable_for_opaque() {
    let src = vec![10, 20, 30, 255, 0, 0, 0, 0];
    assert_eq!(unpremultiply(&premultiply(&src)), src);
}

#[test]
fn raw_buffer_roundtrip_preserves_pixels() {
    let mut c = Canvas::new(3, 3);
    c.put_pixel(1, 2, Rgba8::new(9, 8, 7, 6));
    let raw = c.clone().into_raw();
    assert_eq!(&raw[(2 * 3 + 1) * 4..][..4], &[9, 8, 7, 6]);
    assert_eq!(Canvas::from_raw(3, 3, raw).unwrap(), c);
    assert!(Canvas::from_raw(3, 3, vec![0; 35]).is_err());
}
