// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_within_reasonable_bounds() {
    assert!(CAMERA_FOVY_DEGREES > 0.0 && CAMERA_FOVY_DEGREES < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    // the starting eye must sit inside the clip range
    let [x, y, z] = CAMERA_START;
    let d = (x * x + y * y + z * z).sqrt();
    assert!(d > CAMERA_NEAR && d < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn control_tuning_is_sane() {
    assert!(ROTATE_SPEED > 0.0);
    assert!(ZOOM_SPEED > 0.0);
    assert!(PAN_SPEED > 0.0);
    // damping factor is a fraction of the pending motion
    assert!(DYNAMIC_DAMPING_FACTOR > 0.0 && DYNAMIC_DAMPING_FACTOR < 1.0);
    assert!(MAX_DISTANCE > MIN_DISTANCE);
    assert!(WHEEL_ZOOM_SCALE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn dial_divisors_are_consistent() {
    assert_eq!(TICK_COUNT, MINUTES_PER_TURN);
    assert_eq!(TICK_COUNT % BIG_TICK_EVERY, 0);
    assert_eq!(TICK_COUNT / BIG_TICK_EVERY, HOURS_PER_TURN);
    assert_eq!(SECONDS_PER_TURN, MINUTES_PER_TURN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_constants_are_set() {
    assert!(!CANVAS_ID.is_empty());
    assert_ne!(QUERY_TZ1, QUERY_TZ2);
    assert!(INITIAL_INSTANCE_CAPACITY >= 132);
    assert!(FPS_LOG_INTERVAL_SEC > 0.0);
    assert_eq!(DEPTH_FORMAT, wgpu::TextureFormat::Depth32Float);
}
