mod common;

use common::core::easing::*;

#[test]
fn clamp01_stays_in_unit_range() {
    for x in [-1e9, -1.0, -0.0, 0.0, 0.3, 1.0, 1.0001, 42.0, f64::INFINITY, f64::NEG_INFINITY] {
        let y = clamp01(x);
        assert!((0.0..=1.0).contains(&y), "clamp01({x}) = {y}");
    }
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
}

#[test]
fn smoothstep_is_monotonic_between_edges_and_flat_outside() {
    let (a, b) = (0.2, 0.9);
    let mut prev = smoothstep(a, b, a);
    for i in 1..=1000 {
        let x = a + (b - a) * i as f64 / 1000.0;
        let y = smoothstep(a, b, x);
        assert!(y >= prev, "not monotonic at x={x}");
        prev = y;
    }
    assert_eq!(smoothstep(a, b, -5.0), 0.0);
    assert_eq!(smoothstep(a, b, a), 0.0);
    assert_eq!(smoothstep(a, b, b), 1.0);
    assert_eq!(smoothstep(a, b, 7.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn smoothstep_with_collapsed_edges_is_a_hard_step() {
    assert_eq!(smoothstep(0.5, 0.5, 0.49), 0.0);
    assert_eq!(smoothstep(0.5, 0.5, 0.5), 1.0);
    assert_eq!(smoothstep(0.5, 0.2, 0.9), 1.0);
}

#[test]
fn lerp_and_ease_hit_endpoints() {
    assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
    assert_eq!(lerp(2.0, 10.0, 0.25), 4.0);
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    // Front-loaded: more than half done at the midpoint
    assert!(ease_out_cubic(0.5) > 0.5);
}

#[test]
fn unit_to_byte_rounds_and_saturates() {
    assert_eq!(unit_to_byte(0.0), 0);
    assert_eq!(unit_to_byte(1.0), 255);
    assert_eq!(unit_to_byte(0.5), 128);
    assert_eq!(unit_to_byte(2.0), 255);
    assert_eq!(unit_to_byte(-1.0), 0);
}
