// Host-side tests for the keyboard reset path.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}
mod constants {
    include!("../src/core/constants.rs");
}
mod controls {
    include!("../src/core/controls.rs");
}

use camera::PerspectiveCamera;
use controls::{ControlState, ScreenRect, TrackballControls, WheelMode};
use input::is_reset_key;

#[test]
fn only_key_r_resets() {
    assert!(is_reset_key("KeyR"));
    // `code` is layout independent and case sensitive
    assert!(!is_reset_key("r"));
    assert!(!is_reset_key("R"));
    assert!(!is_reset_key("keyr"));
    assert!(!is_reset_key("KeyT"));
    assert!(!is_reset_key("Space"));
    assert!(!is_reset_key(""));
}

#[test]
fn reset_key_returns_camera_after_interaction() {
    let camera = PerspectiveCamera::new(1.0);
    let mut controls = TrackballControls::new(&camera, ScreenRect::new(0.0, 0.0, 500.0, 500.0));
    controls.pointer_down(ControlState::Rotate, 250.0, 250.0);
    controls.pointer_move(100.0, 400.0);
    controls.update();
    controls.pointer_up();
    controls.wheel(120.0, WheelMode::Pixel);
    controls.update();
    assert_ne!(controls.position(), camera.position);

    for code in ["KeyA", "KeyR"] {
        if is_reset_key(code) {
            controls.reset();
        }
    }
    assert_eq!(controls.position(), camera.position);
    assert_eq!(controls.up(), camera.up);
}
