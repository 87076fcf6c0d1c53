use super::color::Color;
use super::constants::{HOURS_PER_TURN, MINUTES_PER_TURN, SECONDS_PER_TURN};
use super::error::ClockError;

pub const DEFAULT_TIME_ZONE_1: &str = "Europe/Berlin";
pub const DEFAULT_TIME_ZONE_2: &str = "Europe/Chisinau";

/// Extents of a box-shaped element.
///
/// `height` is the in-plane length along the dial radius, `depth` the
/// thickness along the clock's vertical axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dims {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Dims {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// A colored element of the clock (hands, blob).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    pub color: Color,
    pub dims: Dims,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingConfig {
    pub color: Color,
    pub thickness: f32,
    pub protrusion: f32,
}

/// Immutable description of one clock. Passed by reference to the scene
/// builder and the hand positioner.
#[derive(Clone, Debug, PartialEq)]
pub struct ClockConfig {
    pub radius: f32,
    pub depth: f32,
    pub body_color: Color,
    pub simple_tick_color: Color,
    pub special_tick_color: Color,
    pub small_tick: Dims,
    pub big_tick: Dims,
    pub hour_hand: Part,
    pub minute_hand: Part,
    pub second_hand: Part,
    pub blob: Part,
    pub outer_ring: RingConfig,
    pub max_hours: u32,
    pub max_minutes: u32,
    pub max_seconds: u32,
    /// Clearance between the body and the outer ring.
    pub delta: f32,
    /// Radial tessellation for round geometry.
    pub segments: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            radius: 30.0,
            depth: 2.0,
            body_color: Color::from_hex(0xf9f9f9),
            simple_tick_color: Color::BLACK,
            special_tick_color: Color::LIGHT_BLUE,
            small_tick: Dims::new(0.5, 3.0, 0.1),
            big_tick: Dims::new(0.75, 5.0, 0.1),
            hour_hand: Part {
                color: Color::DARK_BLUE,
                dims: Dims::new(1.0, 15.0, 0.75),
            },
            minute_hand: Part {
                color: Color::DARK_BLUE,
                dims: Dims::new(1.0, 20.0, 0.5),
            },
            second_hand: Part {
                color: Color::BLACK,
                dims: Dims::new(0.5, 22.0, 0.25),
            },
            blob: Part {
                color: Color::DARK_RED,
                dims: Dims::new(3.0, 3.0, 3.5),
            },
            outer_ring: RingConfig {
                color: Color::LIGHT_BLUE,
                thickness: 2.0,
                protrusion: 1.0,
            },
            max_hours: HOURS_PER_TURN,
            max_minutes: MINUTES_PER_TURN,
            max_seconds: SECONDS_PER_TURN,
            delta: 0.05,
            segments: 128,
        }
    }
}

impl ClockConfig {
    /// Reject non-finite or non-positive sizes before any geometry is built.
    pub fn validate(&self) -> Result<(), ClockError> {
        let dims = [
            ("radius", self.radius),
            ("depth", self.depth),
            ("delta", self.delta),
            ("outer ring thickness", self.outer_ring.thickness),
            ("outer ring protrusion", self.outer_ring.protrusion),
        ];
        for (what, value) in dims {
            check_positive(what, value)?;
        }
        let boxes = [
            ("small tick", self.small_tick),
            ("big tick", self.big_tick),
            ("hour hand", self.hour_hand.dims),
            ("minute hand", self.minute_hand.dims),
            ("second hand", self.second_hand.dims),
            ("blob", self.blob.dims),
        ];
        for (what, d) in boxes {
            check_positive(what, d.width)?;
            check_positive(what, d.height)?;
            check_positive(what, d.depth)?;
        }
        let counts = [
            ("segments", self.segments),
            ("max hours", self.max_hours),
            ("max minutes", self.max_minutes),
            ("max seconds", self.max_seconds),
        ];
        for (what, n) in counts {
            if n == 0 {
                return Err(ClockError::InvalidDimension {
                    what,
                    value: n as f32,
                });
            }
        }
        Ok(())
    }
}

fn check_positive(what: &'static str, value: f32) -> Result<(), ClockError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ClockError::InvalidDimension { what, value })
    }
}

/// Whole-application settings: background, the two zones and the clock.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub clear_color: Color,
    pub time_zones: [String; 2],
    pub clock: ClockConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::from_hex(0x6e6e6e),
            time_zones: [
                DEFAULT_TIME_ZONE_1.to_string(),
                DEFAULT_TIME_ZONE_2.to_string(),
            ],
            clock: ClockConfig::default(),
        }
    }
}

impl AppConfig {
    /// Replace the configured zones with any non-empty overrides.
    pub fn with_time_zones(mut self, tz1: Option<&str>, tz2: Option<&str>) -> Self {
        for (slot, value) in self.time_zones.iter_mut().zip([tz1, tz2]) {
            if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
                *slot = v.to_string();
            }
        }
        self
    }
}
