use std::collections::BTreeSet;

use crate::math::angle::hour_minute_from_angle;

use super::config::DialConfig;

/// Visual tier of a dial index, from most to least prominent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickClass {
    /// The single 12 o'clock marker at the 0° reference.
    Top,
    /// The 3, 6 and 9 o'clock markers.
    Major,
    /// The remaining whole-hour markers.
    Hour,
    /// Whole-minute marks not covered by an hour tier.
    Minute,
    /// Sub-minute marks between whole minutes.
    Sub,
}

/// One classified index position on the dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPlacement {
    /// The tier this position belongs to.
    pub class: TickClass,
    /// Clockwise angle from the top of the dial, in degrees.
    pub angle: f64,
}

/// Returns the placement angle in degrees of position `i` on a dial with
/// `substeps` subdivisions per minute.
#[must_use]
pub fn placement_angle(i: u32, substeps: u32) -> f64 {
    6.0 * f64::from(i) / f64::from(substeps)
}

/// Classifies position `i` of a dial with `substeps` subdivisions per
/// minute.
///
/// Conditions are tested in priority order, so a position satisfying
/// several (position 0 is also a whole minute) resolves to the most
/// prominent tier. Returns `None` for a whole-minute position whose minute
/// is suppressed.
#[must_use]
pub fn classify_position(i: u32, substeps: u32, minute_skip: &BTreeSet<u32>) -> Option<TickClass> {
    if i == 0 {
        return Some(TickClass::Top);
    }
    // 3, 6 and 9 o'clock sit every 15 minutes.
    if i % (15 * substeps) == 0 {
        return Some(TickClass::Major);
    }
    if i % (5 * substeps) == 0 {
        return Some(TickClass::Hour);
    }
    if i % substeps == 0 {
        let (_, minute) = hour_minute_from_angle(placement_angle(i, substeps));
        if minute_skip.contains(&minute) {
            return None;
        }
        return Some(TickClass::Minute);
    }
    Some(TickClass::Sub)
}

/// Enumerates every index position of one revolution in ascending angular
/// order, omitting suppressed minute positions.
#[must_use]
pub fn enumerate_ticks(config: &DialConfig) -> Vec<TickPlacement> {
    let substeps = config.substeps();
    (0..60 * substeps)
        .filter_map(|i| {
            classify_position(i, substeps, config.minute_skip()).map(|class| TickPlacement {
                class,
                angle: placement_angle(i, substeps),
            })
        })
        .collect()
}
