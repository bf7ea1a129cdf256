use crate::math::angle::time_to_hand_angles;

use super::config::DialConfig;

/// Computes the hour, minute and second hand angles for the configured
/// display time, in degrees clockwise from the top of the dial.
#[must_use]
pub fn hand_angles(config: &DialConfig) -> (f64, f64, f64) {
    time_to_hand_angles(config.time())
}
