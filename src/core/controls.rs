// Trackball camera controls.
//
// Pointer motion is recorded by the event handlers and consumed once per
// frame by `update`, which moves the camera around `target`. With damping
// enabled, released motion decays over the following frames.

use super::camera::PerspectiveCamera;
use super::constants::{
    DYNAMIC_DAMPING_FACTOR, EPS, MAX_DISTANCE, MIN_DISTANCE, PAN_SPEED, ROTATE_SPEED,
    WHEEL_ZOOM_SCALE, ZOOM_SPEED,
};
use glam::{Quat, Vec2, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlState {
    #[default]
    None,
    Rotate,
    Zoom,
    Pan,
}

impl ControlState {
    /// Map a DOM `PointerEvent.button` to the gesture it starts.
    pub fn for_button(button: i16) -> Option<Self> {
        match button {
            0 => Some(Self::Rotate),
            1 => Some(Self::Zoom),
            2 => Some(Self::Pan),
            _ => None,
        }
    }
}

/// Units of a wheel delta (`WheelEvent.deltaMode`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelMode {
    Pixel,
    Line,
    Page,
}

impl WheelMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }

    fn scale(self) -> f32 {
        match self {
            Self::Pixel => WHEEL_ZOOM_SCALE,
            Self::Line => 0.01,
            Self::Page => 0.025,
        }
    }
}

/// Screen rectangle the controls map pointer coordinates against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TrackballControls {
    pub enabled: bool,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub static_moving: bool,
    pub dynamic_damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,

    pub target: Vec3,
    position: Vec3,
    up: Vec3,

    screen: ScreenRect,
    state: ControlState,
    eye: Vec3,
    last_position: Vec3,

    move_prev: Vec2,
    move_curr: Vec2,
    last_axis: Vec3,
    last_angle: f32,
    zoom_start: Vec2,
    zoom_end: Vec2,
    pan_start: Vec2,
    pan_end: Vec2,

    // saved for reset
    target0: Vec3,
    position0: Vec3,
    up0: Vec3,
}

impl TrackballControls {
    pub fn new(camera: &PerspectiveCamera, screen: ScreenRect) -> Self {
        Self {
            enabled: true,
            rotate_speed: ROTATE_SPEED,
            zoom_speed: ZOOM_SPEED,
            pan_speed: PAN_SPEED,
            static_moving: false,
            dynamic_damping_factor: DYNAMIC_DAMPING_FACTOR,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            target: camera.target,
            position: camera.position,
            up: camera.up,
            screen,
            state: ControlState::None,
            eye: camera.position - camera.target,
            last_position: camera.position,
            move_prev: Vec2::ZERO,
            move_curr: Vec2::ZERO,
            last_axis: Vec3::ZERO,
            last_angle: 0.0,
            zoom_start: Vec2::ZERO,
            zoom_end: Vec2::ZERO,
            pan_start: Vec2::ZERO,
            pan_end: Vec2::ZERO,
            target0: camera.target,
            position0: camera.position,
            up0: camera.up,
        }
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    pub fn distance(&self) -> f32 {
        (self.position - self.target).length()
    }

    /// Refresh the screen rectangle after a layout change.
    pub fn handle_resize(&mut self, screen: ScreenRect) {
        self.screen = screen;
    }

    /// Pointer position normalized to `[0, 1]` over the screen rectangle.
    pub fn mouse_on_screen(&self, page_x: f32, page_y: f32) -> Vec2 {
        let s = self.screen;
        Vec2::new(
            (page_x - s.left) / s.width.max(EPS),
            (page_y - s.top) / s.height.max(EPS),
        )
    }

    /// Pointer position relative to the screen center, scaled by half the
    /// width on both axes and with y pointing up.
    pub fn mouse_on_circle(&self, page_x: f32, page_y: f32) -> Vec2 {
        let s = self.screen;
        let w = s.width.max(EPS);
        Vec2::new(
            (page_x - s.width * 0.5 - s.left) / (w * 0.5),
            (s.height + 2.0 * (s.top - page_y)) / w,
        )
    }

    pub fn pointer_down(&mut self, gesture: ControlState, page_x: f32, page_y: f32) {
        if !self.enabled || self.state != ControlState::None {
            return;
        }
        self.state = gesture;
        match gesture {
            ControlState::Rotate => {
                self.move_curr = self.mouse_on_circle(page_x, page_y);
                self.move_prev = self.move_curr;
            }
            ControlState::Zoom => {
                self.zoom_start = self.mouse_on_screen(page_x, page_y);
                self.zoom_end = self.zoom_start;
            }
            ControlState::Pan => {
                self.pan_start = self.mouse_on_screen(page_x, page_y);
                self.pan_end = self.pan_start;
            }
            ControlState::None => {}
        }
    }

    pub fn pointer_move(&mut self, page_x: f32, page_y: f32) {
        if !self.enabled {
            return;
        }
        match self.state {
            ControlState::Rotate => {
                self.move_prev = self.move_curr;
                self.move_curr = self.mouse_on_circle(page_x, page_y);
            }
            ControlState::Zoom => self.zoom_end = self.mouse_on_screen(page_x, page_y),
            ControlState::Pan => self.pan_end = self.mouse_on_screen(page_x, page_y),
            ControlState::None => {}
        }
    }

    pub fn pointer_up(&mut self) {
        self.state = ControlState::None;
    }

    /// Queue a zoom step; positive deltas move away from the target.
    pub fn wheel(&mut self, delta_y: f32, mode: WheelMode) {
        if !self.enabled {
            return;
        }
        self.zoom_start.y -= delta_y * mode.scale();
    }

    /// Apply pending rotate/zoom/pan. Returns true if the camera moved.
    pub fn update(&mut self) -> bool {
        self.eye = self.position - self.target;
        self.rotate_camera();
        self.zoom_camera();
        self.pan_camera();
        self.position = self.target + self.eye;
        self.check_distances();

        if self.last_position.distance_squared(self.position) > EPS {
            self.last_position = self.position;
            true
        } else {
            false
        }
    }

    /// Copy the controlled pose into `camera`.
    pub fn apply_to(&self, camera: &mut PerspectiveCamera) {
        camera.position = self.position;
        camera.target = self.target;
        camera.up = self.up;
    }

    /// Return to the initial pose and drop any pending or damped motion.
    pub fn reset(&mut self) {
        self.state = ControlState::None;
        self.target = self.target0;
        self.position = self.position0;
        self.up = self.up0;
        self.eye = self.position - self.target;
        self.last_position = self.position;
        self.move_prev = self.move_curr;
        self.last_angle = 0.0;
        self.zoom_start = self.zoom_end;
        self.pan_start = self.pan_end;
    }

    fn rotate_camera(&mut self) {
        let delta = self.move_curr - self.move_prev;
        let mut angle = delta.length();
        if angle > 0.0 {
            let eye_dir = self.eye.normalize_or_zero();
            let up_dir = self.up.normalize_or_zero();
            let sideways = up_dir.cross(eye_dir).normalize_or_zero();
            let move_dir = up_dir * delta.y + sideways * delta.x;
            let axis = move_dir.cross(self.eye).normalize_or_zero();
            angle *= self.rotate_speed;
            if axis != Vec3::ZERO {
                let q = Quat::from_axis_angle(axis, angle);
                self.eye = q * self.eye;
                self.up = q * self.up;
                self.last_axis = axis;
                self.last_angle = angle;
            }
        } else if !self.static_moving && self.last_angle != 0.0 {
            self.last_angle *= (1.0 - self.dynamic_damping_factor).sqrt();
            let q = Quat::from_axis_angle(self.last_axis, self.last_angle);
            self.eye = q * self.eye;
            self.up = q * self.up;
        }
        self.move_prev = self.move_curr;
    }

    fn zoom_camera(&mut self) {
        let factor = 1.0 + (self.zoom_end.y - self.zoom_start.y) * self.zoom_speed;
        if factor != 1.0 && factor > 0.0 {
            self.eye *= factor;
        }
        if self.static_moving {
            self.zoom_start = self.zoom_end;
        } else {
            self.zoom_start.y += (self.zoom_end.y - self.zoom_start.y) * self.dynamic_damping_factor;
        }
    }

    fn pan_camera(&mut self) {
        let change = self.pan_end - self.pan_start;
        if change.length_squared() == 0.0 {
            return;
        }
        let change = change * self.eye.length() * self.pan_speed;
        let pan = self.eye.cross(self.up).normalize_or_zero() * change.x
            + self.up.normalize_or_zero() * change.y;
        self.position += pan;
        self.target += pan;
        if self.static_moving {
            self.pan_start = self.pan_end;
        } else {
            self.pan_start += (self.pan_end - self.pan_start) * self.dynamic_damping_factor;
        }
    }

    fn check_distances(&mut self) {
        let d2 = self.eye.length_squared();
        if d2 > self.max_distance * self.max_distance {
            self.position = self.target + self.eye.normalize_or_zero() * self.max_distance;
            self.zoom_start = self.zoom_end;
        }
        if d2 < self.min_distance * self.min_distance {
            self.position = self.target + self.eye.normalize_or_zero() * self.min_distance;
            self.zoom_start = self.zoom_end;
        }
    }
}
