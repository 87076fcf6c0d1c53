use thiserror::Error;

/// Errors raised by clock configuration and time-zone handling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClockError {
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
    #[error("invalid {what}: {value} (must be finite and > 0)")]
    InvalidDimension { what: &'static str, value: f32 },
}
