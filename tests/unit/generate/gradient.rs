use super::*;

const INNER: Rgb8 = Rgb8::new(180, 210, 255);
const OUTER: Rgb8 = Rgb8::new(235, 245, 255);

fn within(a: u8, b: u8, tol: i32) -> bool {
    (i32::from(a) - i32::from(b)).abs() <= tol
}

#[test]
fn center_is_inner_and_corner_is_outer() {
    let g = radial_gradient(64, INNER, OUTER).unwrap();
    assert_eq!(g.pixel(32, 32).rgb(), INNER);

    let corner = g.pixel(0, 0);
    assert!(within(corner.r, OUTER.r, 1));
    assert!(within(corner.g, OUTER.g, 1));
    assert!(within(corner.b, OUTER.b, 1));
}

#[test]
fn every_channel_lies_between_endpoints() {
    let inner = Rgb8::new(250, 10, 128);
    let outer = Rgb8::new(5, 240, 128);
    let g = radial_gradient(33, inner, outer).unwrap();
    for px in g.data().chunks_exact(4) {
        assert!(px[0] + 1 >= outer.r && px[0] <= inner.r);
        assert!(px[1] + 1 >= inner.g && px[1] <= outer.g);
        assert!(within(px[2], 128, 1));
        assert_eq!(px[3], 255);
    }
}

#[test]
fn gradient_is_radially_monotone() {
    let g = radial_gradient(64, Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255)).unwrap();
    let mut prev = 0u8;
    for x in 32..64 {
        let v = g.pixel(x, 32).r;
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn single_pixel_canvas_is_inner() {
    let g = radial_gradient(1, INNER, OUTER).unwrap();
    assert_eq!(g.pixel(0, 0), INNER.with_alpha(255));
}

#[test]
fn zero_size_is_rejected() {
    assert!(matches!(
        radial_gradient(0, INNER, OUTER),
        Err(OrreryError::Validation(_))
    ));
}
