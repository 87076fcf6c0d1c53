// Shared scene, camera and control tuning constants.

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START: [f32; 3] = [0.0, 50.0, 10.0];

// Trackball controls
pub const ROTATE_SPEED: f32 = 1.0;
pub const ZOOM_SPEED: f32 = 1.2;
pub const PAN_SPEED: f32 = 0.3;
pub const DYNAMIC_DAMPING_FACTOR: f32 = 0.2; // fraction of pending motion applied per frame
pub const MIN_DISTANCE: f32 = 0.0;
pub const MAX_DISTANCE: f32 = f32::INFINITY;
pub const WHEEL_ZOOM_SCALE: f32 = 0.000_25; // per pixel of wheel delta
pub const EPS: f32 = 1e-6;

// Angular divisors
pub const HOURS_PER_TURN: u32 = 12;
pub const MINUTES_PER_TURN: u32 = 60;
pub const SECONDS_PER_TURN: u32 = 60;
pub const TICK_COUNT: u32 = 60;
pub const BIG_TICK_EVERY: u32 = 5;
