// Hand positioning from wall-clock time.

use super::clock::{ClockHandles, ClockInstance};
use super::config::ClockConfig;
use super::dial::{dial_angle, face_point, unit_circle_angle};
use super::scene::Scene;
use super::time::WallTime;
use chrono::{DateTime, Utc};
use glam::Quat;

/// Placement of one hand on the face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandPose {
    /// Clockwise angle from 12 o'clock.
    pub dial_angle: f32,
    pub x: f32,
    pub z: f32,
    /// Rotation about the vertical axis.
    pub rotation_y: f32,
}

impl HandPose {
    /// Pose for `value` out of `modulus` on a hand of the given length. The
    /// hand's center sits half its length out from the clock center.
    pub fn new(value: u32, modulus: u32, length: f32) -> Self {
        let angle = dial_angle(value, modulus);
        let (x, z) = face_point(angle, length / 2.0);
        Self {
            dial_angle: angle,
            x,
            z,
            rotation_y: -angle,
        }
    }

    #[inline]
    pub fn unit_circle_angle(&self) -> f32 {
        unit_circle_angle(self.dial_angle)
    }
}

/// Poses of the hour, minute and second hands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandPoses {
    pub hour: HandPose,
    pub minute: HandPose,
    pub second: HandPose,
}

impl HandPoses {
    pub fn for_time(cfg: &ClockConfig, t: WallTime) -> Self {
        Self {
            hour: HandPose::new(t.hour % cfg.max_hours, cfg.max_hours, cfg.hour_hand.dims.height),
            minute: HandPose::new(t.minute, cfg.max_minutes, cfg.minute_hand.dims.height),
            second: HandPose::new(t.second, cfg.max_seconds, cfg.second_hand.dims.height),
        }
    }
}

/// Write poses into the hand nodes. Height and scale are left untouched.
pub fn apply_poses(scene: &mut Scene, clock: &ClockHandles, poses: &HandPoses) {
    let hands = clock.hands;
    for (id, pose) in [
        (hands.hour, poses.hour),
        (hands.minute, poses.minute),
        (hands.second, poses.second),
    ] {
        let t = scene.transform_mut(id);
        t.translation.x = pose.x;
        t.translation.z = pose.z;
        t.rotation = Quat::from_rotation_y(pose.rotation_y);
    }
}

/// Point the clock's hands at the instant as seen in its own zone.
pub fn position_hands(
    scene: &mut Scene,
    cfg: &ClockConfig,
    clock: &ClockInstance,
    instant: DateTime<Utc>,
) -> WallTime {
    let wall = WallTime::in_zone(clock.time_zone, instant);
    let poses = HandPoses::for_time(cfg, wall);
    apply_poses(scene, &clock.handles, &poses);
    wall
}
