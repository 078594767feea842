use super::*;
use crate::foundation::core::Rgba8;
use crate::planet::shading::disc_mask;

fn ring_band(size: u32, alpha: u8) -> Canvas {
    let mut ring = Canvas::new(size, size);
    for y in size / 2 - 4..size / 2 + 4 {
        for x in 0..size {
            ring.put_pixel(x, y, Rgba8::new(200, 210, 220, alpha));
        }
    }
    ring
}

#[test]
fn back_and_front_never_exceed_ring() {
    let size = 64;
    let ring = ring_band(size, 180);
    let disc = disc_mask(size, size, 32);
    let split = split_rings(&ring, &disc, 4.0).unwrap();
    for y in 0..size {
        for x in 0..size {
            let total =
                u16::from(split.back.pixel(x, y).a) + u16::from(split.front.pixel(x, y).a);
            assert!(total <= u16::from(ring.pixel(x, y).a), "({x},{y})");
        }
    }
}

#[test]
fn back_is_hidden_inside_disc_and_intact_outside() {
    let size = 64;
    let ring = ring_band(size, 180);
    let disc = disc_mask(size, size, 32);
    let split = split_rings(&ring, &disc, 4.0).unwrap();
    let y = size / 2;
    for x in 17..48 {
        assert_eq!(split.back.pixel(x, y).a, 0, "x={x}");
    }
    assert_eq!(split.back.pixel(2, y).a, 180);
    assert_eq!(split.front.pixel(2, y).a, 0);
}

#[test]
fn front_is_strong_at_centre_and_soft_at_rim() {
    let size = 64;
    let ring = ring_band(size, 200);
    let disc = disc_mask(size, size, 32);
    let split = split_rings(&ring, &disc, 4.0).unwrap();
    let y = size / 2;
    let centre = split.front.pixel(32, y).a;
    let rim = split.front.pixel(17, y).a;
    assert!(centre > 190, "centre {centre}");
    assert!(rim > 0 && rim < centre, "rim {rim}");
    assert_eq!(split.front.pixel(32, y).rgb(), ring.pixel(32, y).rgb());
}

#[test]
fn front_fringe_outside_disc_is_dropped() {
    let size = 64;
    let ring = ring_band(size, 200);
    let disc = disc_mask(size, size, 32);
    let split = split_rings(&ring, &disc, 4.0).unwrap();
    let plain = ring.alpha().multiply(&disc.blur(4.0).unwrap()).unwrap();
    let y = size / 2;
    // Two pixels left of the disc edge the softened gate still bleeds.
    assert!(plain.get(14, y) > 0);
    for x in 0..size {
        if disc.get(x, y) == 0 {
            assert_eq!(split.front.pixel(x, y).a, 0, "x={x}");
        }
    }
}

#[test]
fn stack_order_is_back_planet_front() {
    let size = 16;
    let split = RingSplit {
        back: Canvas::filled(size, size, Rgba8::new(255, 0, 0, 255)),
        front: Canvas::new(size, size),
    };
    let planet = Canvas::filled(size, size, Rgba8::new(0, 0, 255, 255));
    let stack = occlusion_stack(split.clone(), planet.clone()).unwrap();
    assert_eq!(stack.names(), OCCLUSION_LAYERS.to_vec());

    // An opaque planet hides the back ring entirely.
    let out = compose_occluded(split, planet).unwrap();
    assert_eq!(out.pixel(3, 3), Rgba8::new(0, 0, 255, 255));

    let split = RingSplit {
        back: Canvas::new(size, size),
        front: Canvas::filled(size, size, Rgba8::new(255, 0, 0, 255)),
    };
    let out = compose_occluded(split, Canvas::filled(size, size, Rgba8::new(0, 0, 255, 255)))
        .unwrap();
    assert_eq!(out.pixel(3, 3), Rgba8::new(255, 0, 0, 255));
}

#[test]
fn mismatched_sizes_are_errors() {
    let ring = ring_band(32, 100);
    assert!(split_rings(&ring, &Mask::new(16, 16), 4.0).is_err());
    let split = split_rings(&ring, &disc_mask(32, 32, 10), 1.0).unwrap();
    assert!(compose_occluded(split, Canvas::new(16, 16)).is_err());
}
