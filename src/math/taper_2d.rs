//! Tapered-index width/inset formulas.
//!
//! Angles are half-widths in radians measured from an index's angular
//! centerline; radii, widths and insets share the dial's length unit.

/// Computes the half-width and radial inset of a chord endpoint on the dial
/// circle at `angle` from the centerline.
///
/// The endpoint sits `width` out along the tangent direction and `inset`
/// inward from the circle's topmost point, so a base edge built from it
/// stays on the dial boundary.
#[must_use]
pub fn width_and_inset(radius: f64, angle: f64) -> (f64, f64) {
    let width = radius * angle.sin();
    let inset = radius * (1.0 - angle.cos());
    (width, inset)
}

/// Computes the half-width of a straight edge at full radial distance.
///
/// The tangent form: wider and sharper than the chord of the same angle.
/// Used for the straight top edge of a tapered index.
#[must_use]
pub fn flat_width(radius: f64, angle: f64) -> f64 {
    radius * angle.tan()
}

/// Computes how far the dial circle sits inward from its topmost point at a
/// horizontal offset of `gap` from the centerline.
#[must_use]
pub fn flat_inset(radius: f64, gap: f64) -> f64 {
    radius - (radius * radius - gap * gap).sqrt()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::angle::ONE_HOUR;
    use crate::math::TOLERANCE;

    #[test]
    fn width_and_inset_closed_form() {
        let (width, inset) = width_and_inset(1000.0, ONE_HOUR);
        assert_relative_eq!(width, 500.0, epsilon = 1e-9);
        assert_relative_eq!(inset, 1000.0 * (1.0 - ONE_HOUR.cos()), epsilon = 1e-9);
    }

    #[test]
    fn flat_width_exceeds_chord_width() {
        let (chord, _) = width_and_inset(1000.0, ONE_HOUR);
        let flat = flat_width(1000.0, ONE_HOUR);
        assert!(flat > chord, "flat={flat} chord={chord}");
        assert_relative_eq!(flat, 1000.0 * ONE_HOUR.tan(), epsilon = 1e-9);
    }

    #[test]
    fn flat_inset_pythagorean_triple() {
        // 3-4-5: the circle of radius 5 sits 1 unit in at offset 3.
        assert_relative_eq!(flat_inset(5.0, 3.0), 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn flat_inset_agrees_with_angular_inset_at_chord_width() {
        // The chord endpoint's horizontal offset plugged back into the
        // offset form must land on the same circle point.
        let (width, inset) = width_and_inset(975.0, ONE_HOUR / 5.0);
        assert_relative_eq!(flat_inset(975.0, width), inset, epsilon = 1e-9);
    }

    #[test]
    fn zero_offset_touches_the_circle_top() {
        assert_eq!(flat_inset(975.0, 0.0), 0.0);
        let (width, inset) = width_and_inset(975.0, 0.0);
        assert_eq!(width, 0.0);
        assert_eq!(inset, 0.0);
    }
}
