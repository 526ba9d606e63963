// Host-side tests for pure input helpers and the page contract.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use input::*;

#[test]
fn input_state_starts_centered_without_hover() {
    let s = InputState::new(1280.0, 800.0, 42.0);
    assert_eq!(s.pointer_x, 640.0);
    assert_eq!(s.scroll_y, 42.0);
    assert_eq!(s.hover_x, None);
}

#[test]
fn dpr_is_clamped_to_supported_range() {
    assert_eq!(clamp_dpr(3.0, DPR_MIN, DPR_MAX), 2.0);
    assert_eq!(clamp_dpr(1.5, DPR_MIN, DPR_MAX), 1.5);
    assert_eq!(clamp_dpr(0.5, DPR_MIN, DPR_MAX), 1.0);
    assert_eq!(clamp_dpr(f64::NAN, DPR_MIN, DPR_MAX), 1.0);
    assert_eq!(clamp_dpr(0.0, DPR_MIN, DPR_MAX), 1.0);
}

#[test]
fn backing_store_is_at_least_one_pixel() {
    assert_eq!(backing_px(1280.0, 2.0), 2560);
    assert_eq!(backing_px(333.3, 1.5), 499);
    assert_eq!(backing_px(0.0, 2.0), 1);
}

#[test]
fn element_center_is_normalized_and_clamped() {
    assert_eq!(element_center_x01(600.0, 80.0, 1280.0), 0.5);
    assert_eq!(element_center_x01(-500.0, 10.0, 1280.0), 0.0);
    assert_eq!(element_center_x01(2000.0, 10.0, 1280.0), 1.0);
    assert_eq!(element_center_x01(10.0, 10.0, 0.0), 0.5);
}

#[test]
fn page_contract_names() {
    assert_eq!(FX_START_CLASS, "fx-start");
    assert_eq!(TAIL_READY_CLASS, "tail-ready");
    assert_eq!(CANVAS_ID, "fx");
    assert_eq!(ANCHOR_ID, "doorAnchor");
    assert_eq!(TAIL_ITEM_SELECTOR, ".tailItem");
    assert!(DPR_MAX > DPR_MIN);
}
