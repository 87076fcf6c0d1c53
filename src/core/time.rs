// Wall-clock time in a named zone.

use super::error::ClockError;
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

/// Hour/minute/second as shown on a wall clock in some zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallTime {
    /// 0..24
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl WallTime {
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Decompose `instant` using the zone's UTC offset at that instant.
    pub fn in_zone(tz: Tz, instant: DateTime<Utc>) -> Self {
        let local = instant.with_timezone(&tz);
        Self::new(local.hour(), local.minute(), local.second())
    }
}

/// Parse an IANA zone name such as `Europe/Berlin`.
pub fn parse_time_zone(name: &str) -> Result<Tz, ClockError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ClockError::UnknownTimeZone(name.to_string()))
}

/// Source of the current instant.
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host clock (`Date.now()` in the browser).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedTime(pub DateTime<Utc>);

impl TimeSource for FixedTime {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
