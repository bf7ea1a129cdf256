use std::collections::BTreeSet;

use crate::error::{ConfigError, Result};
use crate::math::angle::TimeOfDay;
use crate::math::Point2;

/// Per-render dial configuration.
///
/// Constructed once and read-only afterwards. Index placement derives from
/// `substeps` and `minute_skip`; hand angles derive from `time`.
#[derive(Debug, Clone, PartialEq)]
pub struct DialConfig {
    center: Point2,
    radius: f64,
    substeps: u32,
    minute_skip: BTreeSet<u32>,
    time: TimeOfDay,
}

impl DialConfig {
    /// Default number of angular subdivisions per minute.
    pub const DEFAULT_SUBSTEPS: u32 = 4;

    /// Creates a configuration with the default substeps, an empty skip set
    /// and the default display time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveRadius`] if `radius` is not
    /// strictly positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(radius).into());
        }
        Ok(Self {
            center,
            radius,
            substeps: Self::DEFAULT_SUBSTEPS,
            minute_skip: BTreeSet::new(),
            time: TimeOfDay::default(),
        })
    }

    /// Replaces the number of subdivisions per minute.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSubsteps`] if `substeps` is zero.
    pub fn with_substeps(mut self, substeps: u32) -> Result<Self> {
        if substeps == 0 {
            return Err(ConfigError::ZeroSubsteps.into());
        }
        self.substeps = substeps;
        Ok(self)
    }

    /// Replaces the suppressed-minute set. Values are taken modulo 60.
    #[must_use]
    pub fn with_minute_skip<I>(mut self, minutes: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        self.minute_skip = minutes.into_iter().map(|minute| minute % 60).collect();
        self
    }

    /// Replaces the displayed time.
    #[must_use]
    pub fn with_time(mut self, time: TimeOfDay) -> Self {
        self.time = time;
        self
    }

    /// Returns the dial center on the target canvas.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the dial radius in canvas units.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the number of subdivisions per minute.
    #[must_use]
    pub fn substeps(&self) -> u32 {
        self.substeps
    }

    /// Returns the minutes whose minute-tier tick is suppressed.
    #[must_use]
    pub fn minute_skip(&self) -> &BTreeSet<u32> {
        &self.minute_skip
    }

    /// Returns the displayed time.
    #[must_use]
    pub fn time(&self) -> TimeOfDay {
        self.time
    }
}
