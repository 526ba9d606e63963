mod common;

use common::core::config::ProgressTuning;
use common::core::progress::*;

const VH: f64 = 800.0;

fn driver() -> ProgressDriver {
    ProgressDriver::new(ProgressTuning::default(), 0.0)
}

#[test]
fn starts_at_rest() {
    let d = driver();
    let p = d.progress();
    assert_eq!(p.appearance, 0.0);
    assert_eq!(p.door_open, 0.0);
    assert_eq!(p.blackout, 0.0);
    assert_eq!(p.wave_visible, 0.0);
    assert_eq!(p.momentum, 0.0);
    assert_eq!(p.direction, ScrollDirection::Down);
    assert_eq!(d.presentation(), PresentationStates::default());
}

#[test]
fn appearance_follows_scroll_without_smoothing() {
    let mut d = driver();
    assert_eq!(d.update(0.125 * VH, VH).appearance, 0.5);
    assert_eq!(d.update(0.25 * VH, VH).appearance, 1.0);
    assert_eq!(d.update(5.0 * VH, VH).appearance, 1.0);
    assert_eq!(d.update(0.0, VH).appearance, 0.0);
}

#[test]
fn phases_take_one_smoothing_step_per_update() {
    let mut d = driver();
    let p = *d.update(3.0 * VH, VH);
    assert!((p.door_open - 0.085).abs() < 1e-12);
    assert!((p.blackout - 0.165).abs() < 1e-12);
    assert!((p.wave_visible - 0.095).abs() < 1e-12);
}

#[test]
fn targets_map_scroll_spans() {
    let t = ProgressTuning::default();
    let at_door = PhaseTargets::at(0.95 * VH, VH, &t);
    assert!((at_door.door - 1.0).abs() < 1e-12);
    assert_eq!(at_door.black, 0.0);
    assert_eq!(at_door.wave, 0.0);

    let half_black = PhaseTargets::at(0.95 * VH + 0.375 * VH, VH, &t);
    assert!((half_black.black - 0.5).abs() < 1e-12);
    // smoothstep(0.2, 0.9, 0.5)
    let k = 0.3_f64 / 0.7;
    assert!((half_black.wave - k * k * (3.0 - 2.0 * k)).abs() < 1e-12);

    let deep = PhaseTargets::at(10.0 * VH, VH, &t);
    assert_eq!((deep.door, deep.black, deep.wave), (1.0, 1.0, 1.0));
}

#[test]
fn zero_viewport_height_does_not_produce_nan() {
    let mut d = driver();
    let p = *d.update(100.0, 0.0);
    for v in [p.appearance, p.door_open, p.blackout, p.wave_visible] {
        assert!(v.is_finite());
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn momentum_accumulates_and_tracks_direction() {
    let mut d = driver();
    let p = *d.update(80.0, VH);
    assert_eq!(p.direction, ScrollDirection::Down);
    assert!((p.momentum - 0.35 * (1.0 - 0.035)).abs() < 1e-12);

    let before = p.momentum;
    let p = *d.update(40.0, VH);
    assert_eq!(p.direction, ScrollDirection::Up);
    let expected = (before + 0.5 * 0.35) * (1.0 - 0.035);
    assert!((p.momentum - expected).abs() < 1e-12);
    assert_eq!(p.direction.sign(), -1.0);
}

#[test]
fn tiny_scroll_jitter_only_decays_momentum() {
    let mut d = driver();
    d.update(80.0, VH);
    let before = *d.progress();
    let p = *d.update(80.1, VH);
    assert_eq!(p.direction, before.direction);
    assert!((p.momentum - before.momentum * (1.0 - 0.035)).abs() < 1e-12);
}

#[test]
fn momentum_saturates_at_one() {
    let mut d = driver();
    let mut y = 0.0;
    for _ in 0..50 {
        y += 500.0;
        let p = d.update(y, VH);
        assert!(p.momentum <= 1.0);
    }
    assert!(d.progress().momentum > 0.9);
}

#[test]
fn gates_use_strict_thresholds() {
    let t = ProgressTuning::default();
    let at = |blackout: f64, wave_visible: f64| {
        let p = ScrollProgress {
            blackout,
            wave_visible,
            ..Default::default()
        };
        PresentationStates::from_progress(&p, &t)
    };
    assert!(!at(0.06, 0.0).fx_start);
    assert!(at(0.0600001, 0.0).fx_start);
    assert!(!at(0.985, 0.9).tail_ready);
    assert!(!at(0.99, 0.75).tail_ready);
    assert!(at(0.986, 0.76).tail_ready);
}

#[test]
fn fx_start_flips_exactly_at_threshold_both_ways() {
    let mut d = driver();
    let mut prev_black = 0.0;
    let mut flipped_on = false;
    for _ in 0..200 {
        let p = *d.update(3.0 * VH, VH);
        let on = d.presentation().fx_start;
        assert_eq!(on, p.blackout > 0.06);
        if on && !flipped_on {
            assert!(prev_black <= 0.06 && p.blackout > 0.06);
            flipped_on = true;
        }
        prev_black = p.blackout;
    }
    assert!(flipped_on);

    let mut flipped_off = false;
    for _ in 0..400 {
        let p = *d.update(0.0, VH);
        let on = d.presentation().fx_start;
        assert_eq!(on, p.blackout > 0.06);
        if !on && !flipped_off {
            assert!(prev_black > 0.06 && p.blackout <= 0.06);
            flipped_off = true;
        }
        prev_black = p.blackout;
    }
    assert!(flipped_off);
}

#[test]
fn deep_scroll_converges_and_raises_tail_ready() {
    let mut d = driver();
    for _ in 0..600 {
        d.update(3.0 * VH, VH);
    }
    let p = d.progress();
    assert!(p.door_open > 0.999);
    assert!(p.blackout > 0.999);
    assert!(p.wave_visible > 0.999);
    let s = d.presentation();
    assert!(s.fx_start && s.tail_ready);
}
