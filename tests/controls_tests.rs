// Host-side tests for the perspective camera and trackball controls.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
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
use controls::*;
use glam::{Vec2, Vec3};

fn rel_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-4 * b.abs().max(1.0)
}

fn screen() -> ScreenRect {
    ScreenRect::new(0.0, 0.0, 800.0, 600.0)
}

fn make() -> (PerspectiveCamera, TrackballControls) {
    let camera = PerspectiveCamera::new(800.0 / 600.0);
    let controls = TrackballControls::new(&camera, screen());
    (camera, controls)
}

#[test]
fn camera_starts_above_the_clocks() {
    let (camera, controls) = make();
    assert_eq!(camera.position, Vec3::new(0.0, 50.0, 10.0));
    assert_eq!(camera.target, Vec3::ZERO);
    assert_eq!(camera.fovy_degrees, 75.0);
    assert_eq!(camera.near, 1.0);
    assert_eq!(camera.far, 1000.0);
    assert!(rel_eq(controls.distance(), 2600f32.sqrt()));
}

#[test]
fn resize_sets_aspect_exactly() {
    let (mut camera, _) = make();
    camera.set_aspect(1920, 1080);
    assert_eq!(camera.aspect, 1920.0 / 1080.0);
    camera.set_aspect(333, 777);
    assert_eq!(camera.aspect, 333.0 / 777.0);
}

#[test]
fn zero_height_keeps_previous_aspect() {
    let (mut camera, _) = make();
    camera.set_aspect(640, 480);
    camera.set_aspect(640, 0);
    assert_eq!(camera.aspect, 640.0 / 480.0);
}

#[test]
fn view_projection_maps_target_into_clip_volume() {
    let (camera, _) = make();
    let clip = camera.view_projection() * camera.target.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn idle_update_does_not_move_the_camera() {
    let (_, mut controls) = make();
    let before = controls.position();
    assert!(!controls.update());
    assert_eq!(controls.position(), before);
}

#[test]
fn pointer_coordinates_are_normalized() {
    let (_, controls) = make();
    assert_eq!(controls.mouse_on_screen(400.0, 300.0), Vec2::new(0.5, 0.5));
    assert_eq!(controls.mouse_on_circle(400.0, 300.0), Vec2::new(0.0, 0.0));
    assert_eq!(controls.mouse_on_circle(800.0, 0.0), Vec2::new(1.0, 0.75));
}

#[test]
fn wheel_zoom_scales_distance_then_eases() {
    let (_, mut controls) = make();
    let d0 = controls.distance();
    controls.wheel(400.0, WheelMode::Pixel);
    assert!(controls.update());
    let d1 = controls.distance();
    assert!(rel_eq(d1, d0 * 1.12), "d1={d1}");

    // damped: keeps drifting out by a shrinking amount
    assert!(controls.update());
    let d2 = controls.distance();
    assert!(d2 > d1);
    assert!(d2 / d1 < d1 / d0);
}

#[test]
fn rotate_drag_orbits_at_constant_distance() {
    let (_, mut controls) = make();
    let d0 = controls.distance();
    let p0 = controls.position();

    controls.pointer_down(ControlState::Rotate, 400.0, 300.0);
    assert_eq!(controls.state(), ControlState::Rotate);
    controls.pointer_move(500.0, 300.0);
    assert!(controls.update());
    let p1 = controls.position();
    assert!(p1.x.abs() > 1.0, "{p1:?}");
    assert!(rel_eq(controls.distance(), d0));

    controls.pointer_up();
    assert_eq!(controls.state(), ControlState::None);
    // released motion keeps spinning for a while
    assert!(controls.update());
    assert!(rel_eq(controls.distance(), d0));
    assert_ne!(controls.position(), p0);
}

#[test]
fn pan_moves_target_and_camera_together() {
    let (_, mut controls) = make();
    let d0 = controls.distance();
    controls.pointer_down(ControlState::Pan, 400.0, 300.0);
    controls.pointer_move(480.0, 300.0);
    assert!(controls.update());
    assert!(controls.target.length() > 0.0);
    assert!(rel_eq(controls.distance(), d0));
}

#[test]
fn reset_restores_the_initial_pose() {
    let (camera, mut controls) = make();
    controls.pointer_down(ControlState::Rotate, 400.0, 300.0);
    controls.pointer_move(600.0, 200.0);
    controls.update();
    controls.wheel(-300.0, WheelMode::Pixel);
    controls.update();

    controls.reset();
    assert_eq!(controls.state(), ControlState::None);
    assert_eq!(controls.position(), camera.position);
    assert_eq!(controls.target, camera.target);
    assert_eq!(controls.up(), camera.up);
    // nothing left to ease out
    assert!(!controls.update());
    assert_eq!(controls.position(), camera.position);
}

#[test]
fn apply_to_copies_the_pose() {
    let (mut camera, mut controls) = make();
    controls.wheel(200.0, WheelMode::Pixel);
    controls.update();
    controls.apply_to(&mut camera);
    assert_eq!(camera.position, controls.position());
    assert_eq!(camera.target, controls.target);
}

#[test]
fn max_distance_is_enforced() {
    let (_, mut controls) = make();
    controls.max_distance = 20.0;
    controls.update();
    assert!(rel_eq(controls.distance(), 20.0));
}

#[test]
fn disabled_controls_ignore_input() {
    let (_, mut controls) = make();
    controls.enabled = false;
    controls.pointer_down(ControlState::Rotate, 10.0, 10.0);
    controls.wheel(500.0, WheelMode::Pixel);
    assert_eq!(controls.state(), ControlState::None);
    assert!(!controls.update());
}

#[test]
fn resize_refreshes_screen_rect() {
    let (_, mut controls) = make();
    let rect = ScreenRect::new(10.0, 20.0, 1024.0, 768.0);
    controls.handle_resize(rect);
    assert_eq!(controls.screen(), rect);
    assert_eq!(controls.mouse_on_screen(522.0, 404.0), Vec2::new(0.5, 0.5));
}

#[test]
fn buttons_and_wheel_modes_map_to_gestures() {
    assert_eq!(ControlState::for_button(0), Some(ControlState::Rotate));
    assert_eq!(ControlState::for_button(1), Some(ControlState::Zoom));
    assert_eq!(ControlState::for_button(2), Some(ControlState::Pan));
    assert_eq!(ControlState::for_button(3), None);
    assert_eq!(WheelMode::from_dom(0), WheelMode::Pixel);
    assert_eq!(WheelMode::from_dom(1), WheelMode::Line);
    assert_eq!(WheelMode::from_dom(2), WheelMode::Page);
}
