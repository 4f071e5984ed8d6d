// Host-side tests for golden-angle petal placement.

use rose_core::{compute_petal_layout, CANOPY_SCALE_FACTOR, GOLDEN_ANGLE, ROSE_COUNT};

#[test]
fn layout_is_reproducible_bit_for_bit() {
    for i in 0..500 {
        let a = compute_petal_layout(i, CANOPY_SCALE_FACTOR);
        let b = compute_petal_layout(i, CANOPY_SCALE_FACTOR);
        assert_eq!(a, b, "layout for petal {i} changed between calls");
        assert_eq!(a.base_position.to_array().map(f32::to_bits), b.base_position.to_array().map(f32::to_bits));
    }
}

#[test]
fn radius_never_shrinks_along_the_spiral() {
    let mut prev = compute_petal_layout(0, CANOPY_SCALE_FACTOR).radius;
    for i in 1..1000 {
        let r = compute_petal_layout(i, CANOPY_SCALE_FACTOR).radius;
        assert!(r >= prev, "radius shrank at petal {i}: {prev} -> {r}");
        prev = r;
    }
    assert!(
        compute_petal_layout(100, CANOPY_SCALE_FACTOR).radius
            > compute_petal_layout(1, CANOPY_SCALE_FACTOR).radius
    );
}

#[test]
fn height_strictly_increases() {
    let h0 = compute_petal_layout(0, CANOPY_SCALE_FACTOR).height;
    let h1 = compute_petal_layout(1, CANOPY_SCALE_FACTOR).height;
    let h59 = compute_petal_layout(ROSE_COUNT - 1, CANOPY_SCALE_FACTOR).height;
    assert_eq!(h0, 0.0);
    assert!(h0 < h1 && h1 < h59);

    let mut prev = h0;
    for i in 1..300 {
        let h = compute_petal_layout(i, CANOPY_SCALE_FACTOR).height;
        assert!(h > prev, "height not increasing at petal {i}");
        prev = h;
    }
}

#[test]
fn first_petal_sits_at_the_canopy_center() {
    let l = compute_petal_layout(0, CANOPY_SCALE_FACTOR);
    assert_eq!(l.theta, 0.0);
    assert_eq!(l.radius, 0.0);
    assert!(l.base_position.length() < 1e-6);
}

#[test]
fn base_position_matches_polar_coordinates() {
    for i in [1usize, 7, 30, 59] {
        let l = compute_petal_layout(i, 1.0);
        assert!((l.theta - i as f32 * GOLDEN_ANGLE).abs() < 1e-4);
        let expected_r = 0.08 * (i as f32).sqrt();
        let expected_h = ((i + 1) as f32).ln() * 0.1;
        assert!((l.radius - expected_r).abs() < 1e-6);
        assert!((l.height - expected_h).abs() < 1e-6);
        let xz = glam::Vec2::new(l.base_position.x, l.base_position.z).length();
        assert!((xz - l.radius).abs() < 1e-5, "petal {i}: |xz|={xz} radius={}", l.radius);
        assert_eq!(l.base_position.y, l.height);
        assert_eq!(l.yaw(), -l.theta);
    }
}

#[test]
fn scale_factor_scales_radius_and_height_linearly() {
    let a = compute_petal_layout(25, 1.0);
    let b = compute_petal_layout(25, 2.0);
    assert!((b.radius - 2.0 * a.radius).abs() < 1e-5);
    assert!((b.height - 2.0 * a.height).abs() < 1e-5);
    assert_eq!(a.theta, b.theta);
}
