pub mod camera;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod dial;
pub mod error;
pub mod hands;
pub mod mesh;
pub mod scene;
pub mod time;

pub use camera::PerspectiveCamera;
pub use clock::{build_clock_pair, ClockInstance};
pub use config::AppConfig;
pub use controls::{ControlState, ScreenRect, TrackballControls, WheelMode};
pub use hands::position_hands;
pub use scene::Scene;
pub use time::{parse_time_zone, SystemTime, TimeSource};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
