/// Hand-angle and placement-angle math.
///
/// Placement angles are degrees clockwise from the top of the dial; one
/// minute spans 6 degrees, five minutes span one hour position.
use std::f64::consts::PI;

use crate::error::{ConfigError, Result};

/// Degrees in a full revolution of the dial.
pub const FULL_CIRCLE: f64 = 360.0;

/// Angular span of a quarter minute, in radians.
pub const QUARTER_MINUTE: f64 = PI / 120.0;

/// Angular span of a third of a minute, in radians.
pub const THIRD_MINUTE: f64 = PI / 90.0;

/// Angular span of half a minute, in radians.
pub const HALF_MINUTE: f64 = PI / 60.0;

/// Angular span of one minute, in radians.
pub const ONE_MINUTE: f64 = PI / 30.0;

/// Angular span of one hour, in radians.
pub const ONE_HOUR: f64 = PI / 6.0;

/// A wall-clock time of day on a 12-hour dial.
///
/// The hour is stored reduced modulo 12, so 24-hour input wraps naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
    microsecond: u32,
}

impl TimeOfDay {
    /// Creates a new time of day.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TimeComponentOutOfRange`] if `minute` or
    /// `second` exceeds 59, or `microsecond` exceeds 999 999.
    pub fn new(hour: u32, minute: u32, second: u32, microsecond: u32) -> Result<Self> {
        if minute > 59 {
            return Err(ConfigError::TimeComponentOutOfRange {
                component: "minute",
                value: minute,
                max: 59,
            }
            .into());
        }
        if second > 59 {
            return Err(ConfigError::TimeComponentOutOfRange {
                component: "second",
                value: second,
                max: 59,
            }
            .into());
        }
        if microsecond > 999_999 {
            return Err(ConfigError::TimeComponentOutOfRange {
                component: "microsecond",
                value: microsecond,
                max: 999_999,
            }
            .into());
        }
        Ok(Self {
            hour: hour % 12,
            minute,
            second,
            microsecond,
        })
    }

    /// Returns the hour, already reduced modulo 12.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the minute.
    #[must_use]
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns the second.
    #[must_use]
    pub fn second(&self) -> u32 {
        self.second
    }

    /// Returns the microsecond.
    #[must_use]
    pub fn microsecond(&self) -> u32 {
        self.microsecond
    }
}

impl Default for TimeOfDay {
    /// The conventional catalogue display time, 10:09:29.200000.
    fn default() -> Self {
        Self {
            hour: 10,
            minute: 9,
            second: 29,
            microsecond: 200_000,
        }
    }
}

/// Converts a time of day into hand angles.
///
/// Returns `(hour_angle, minute_angle, second_angle)` in degrees clockwise
/// from the top of the dial, each in `[0, 360)`. Each coarser hand's angle
/// is a smooth function of every finer component, so hands sweep instead of
/// ticking: the seconds carry the microseconds, the minutes carry the
/// seconds, the hours carry the minutes.
#[must_use]
pub fn time_to_hand_angles(time: TimeOfDay) -> (f64, f64, f64) {
    let usec_angle = f64::from(time.microsecond()) / 60_000_000.0 * FULL_CIRCLE;
    let second_angle = f64::from(time.second()) / 60.0 * FULL_CIRCLE + usec_angle;
    let minute_angle = f64::from(time.minute()) / 60.0 * FULL_CIRCLE + second_angle / 60.0;
    let hour_angle = f64::from(time.hour()) / 12.0 * FULL_CIRCLE + minute_angle / 12.0;
    (hour_angle, minute_angle, second_angle)
}

/// Wraps an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(FULL_CIRCLE)
}

/// Buckets a placement angle into its `(hour, minute)` dial position.
///
/// The angle is wrapped into `[0, 360)` first, so 360 is position 0. This
/// is the coarse lookup used to classify evenly spaced index positions, not
/// the inverse of the sweeping hand formula.
#[must_use]
pub fn hour_minute_from_angle(angle: f64) -> (u32, u32) {
    let wrapped = normalize_degrees(angle);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let minute = (wrapped / 6.0).floor() as u32;
    (minute / 5, minute)
}
