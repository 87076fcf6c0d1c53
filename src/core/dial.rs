// Angle helpers shared by the tick layout and the hands.
//
// Dial angles are clockwise from 12 o'clock. Unit-circle angles are
// counter-clockwise from 3 o'clock. 12 o'clock on the face is -Z.

use std::f32::consts::{FRAC_PI_2, TAU};

/// Clockwise angle from 12 o'clock for `value` out of `modulus` steps.
#[inline]
pub fn dial_angle(value: u32, modulus: u32) -> f32 {
    TAU / modulus.max(1) as f32 * (value % modulus.max(1)) as f32
}

/// Convert a dial angle to a standard unit-circle angle.
#[inline]
pub fn unit_circle_angle(dial: f32) -> f32 {
    -dial + FRAC_PI_2
}

/// `(x, z)` on the clock face at `distance` from the center.
#[inline]
pub fn face_point(dial: f32, distance: f32) -> (f32, f32) {
    let a = unit_circle_angle(dial);
    (distance * a.cos(), -distance * a.sin())
}
