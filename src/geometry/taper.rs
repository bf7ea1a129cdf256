use std::f64::consts::FRAC_PI_2;

use crate::error::{GeometryError, Result};
use crate::math::taper_2d::{flat_inset, flat_width, width_and_inset};
use crate::math::Point2;

use super::path::{Outline, PathCommand, SweepDirection};
use super::{REF_CENTER, REF_SIZE};

/// Whether an index's base edge follows the dial circle or a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseStyle {
    /// The base edge is an arc of the dial circle.
    Curved,
    /// The base edge is a straight chord.
    Flat,
}

/// Input parameters for a tapered index outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaperSpec {
    /// Radial distance from the dial center to the index base.
    pub outer_radius: f64,
    /// Radial extent of the index from its base toward the dial center.
    pub height: f64,
    /// Half the angular width at the base, in radians.
    pub half_angle: f64,
    /// Base edge construction.
    pub base: BaseStyle,
}

/// Rejects specs that would produce an inverted or unbounded outline.
fn validate(spec: &TaperSpec) -> Result<()> {
    if spec.outer_radius <= 0.0 {
        return Err(GeometryError::Degenerate(format!(
            "outer radius must be positive, got {}",
            spec.outer_radius
        ))
        .into());
    }
    if spec.half_angle <= 0.0 || spec.half_angle >= FRAC_PI_2 {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "half_angle",
            value: spec.half_angle,
            min: 0.0,
            max: FRAC_PI_2,
        }
        .into());
    }
    if spec.height <= 0.0 || spec.height >= spec.outer_radius {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "height",
            value: spec.height,
            min: 0.0,
            max: spec.outer_radius,
        }
        .into());
    }
    Ok(())
}

/// Computes the closed outline of a single tapered index.
///
/// The base corners lie on the dial circle at `half_angle` either side of
/// the centerline; a curved base connects them with an outward arc of the
/// dial circle, a flat base with a straight chord. The top edge is always a
/// straight chord, using the tangent half-width at
/// `outer_radius - height`. The outline is symmetric about the centerline
/// and winds positively.
///
/// # Errors
///
/// Returns [`GeometryError`] for a non-positive outer radius, a half-angle
/// outside (0, π/2), or a height outside (0, `outer_radius`).
pub fn tapered_outline(spec: &TaperSpec) -> Result<Outline> {
    validate(spec)?;

    let (base_width, base_inset) = width_and_inset(spec.outer_radius, spec.half_angle);
    let top_width = flat_width(spec.outer_radius - spec.height, spec.half_angle);
    let base_y = REF_SIZE - spec.outer_radius + base_inset;
    let top_y = REF_SIZE - spec.outer_radius + spec.height;

    let base_right = Point2::new(REF_CENTER + base_width, base_y);
    Ok(Outline {
        commands: vec![
            PathCommand::MoveTo(Point2::new(REF_CENTER - base_width, base_y)),
            base_edge(spec, base_right),
            PathCommand::LineTo(Point2::new(REF_CENTER + top_width, top_y)),
            PathCommand::LineTo(Point2::new(REF_CENTER - top_width, top_y)),
            PathCommand::Close,
        ],
    })
}

/// Computes the two outlines of a center-split tapered index.
///
/// The halves straddle a channel of half-width `gap` down the angular
/// centerline and are built independently, not by mirroring. With a flat
/// base both base corners sit at the full-width chord height; with a curved
/// base the inner corner sits at the circle's inset over `gap` and an arc
/// of the dial circle reaches the outer corner. The top half-width uses the
/// chord form, slightly narrower than the single taper's tangent top.
/// Returns `[left, right]`; both halves wind positively and both base arcs
/// sweep clockwise.
///
/// # Errors
///
/// Returns [`GeometryError`] for the same degenerate specs as
/// [`tapered_outline`], a negative `gap`, or a `gap` reaching the base or
/// top half-width (the halves would overlap or invert).
pub fn split_tapered_outline(spec: &TaperSpec, gap: f64) -> Result<[Outline; 2]> {
    validate(spec)?;

    let (base_width, base_inset) = width_and_inset(spec.outer_radius, spec.half_angle);
    let (top_width, _) = width_and_inset(spec.outer_radius - spec.height, spec.half_angle);
    if gap < 0.0 {
        return Err(
            GeometryError::Degenerate(format!("split gap must be non-negative, got {gap}")).into(),
        );
    }
    if gap >= base_width || gap >= top_width {
        return Err(GeometryError::Degenerate(format!(
            "split gap {gap} reaches a half-width (base {base_width}, top {top_width})"
        ))
        .into());
    }

    let base_y = REF_SIZE - spec.outer_radius + base_inset;
    let top_y = REF_SIZE - spec.outer_radius + spec.height;
    // The gap corner sits on the chord for a flat base and on the circle
    // itself for a curved one.
    let gap_y = match spec.base {
        BaseStyle::Flat => base_y,
        BaseStyle::Curved => REF_SIZE - spec.outer_radius + flat_inset(spec.outer_radius, gap),
    };

    let right_inner = Point2::new(REF_CENTER + gap, gap_y);
    let right_outer = Point2::new(REF_CENTER + base_width, base_y);
    let right = Outline {
        commands: vec![
            PathCommand::MoveTo(right_inner),
            base_edge(spec, right_outer),
            PathCommand::LineTo(Point2::new(REF_CENTER + top_width, top_y)),
            PathCommand::LineTo(Point2::new(REF_CENTER + gap, top_y)),
            PathCommand::Close,
        ],
    };

    // Traversed outer-first so the winding matches the right half.
    let left_outer = Point2::new(REF_CENTER - base_width, base_y);
    let left_inner = Point2::new(REF_CENTER - gap, gap_y);
    let left = Outline {
        commands: vec![
            PathCommand::MoveTo(left_outer),
            base_edge(spec, left_inner),
            PathCommand::LineTo(Point2::new(REF_CENTER - gap, top_y)),
            PathCommand::LineTo(Point2::new(REF_CENTER - top_width, top_y)),
            PathCommand::Close,
        ],
    };

    Ok([left, right])
}

fn base_edge(spec: &TaperSpec, end: Point2) -> PathCommand {
    match spec.base {
        BaseStyle::Flat => PathCommand::LineTo(end),
        BaseStyle::Curved => PathCommand::ArcTo {
            end,
            radius: spec.outer_radius,
            sweep: SweepDirection::Clockwise,
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::angle::{ONE_HOUR, ONE_MINUTE, QUARTER_MINUTE};
    use crate::math::TOLERANCE;

    fn dial_center() -> Point2 {
        Point2::new(REF_CENTER, REF_SIZE)
    }

    fn one_hour_spec(base: BaseStyle) -> TaperSpec {
        TaperSpec {
            outer_radius: 1000.0,
            height: 125.0,
            half_angle: ONE_HOUR,
            base,
        }
    }

    fn mission_spec(base: BaseStyle) -> TaperSpec {
        TaperSpec {
            outer_radius: 975.0,
            height: 375.0,
            half_angle: ONE_MINUTE,
            base,
        }
    }

    #[test]
    fn base_corners_sit_on_the_dial_circle() {
        let outline = tapered_outline(&one_hour_spec(BaseStyle::Curved)).unwrap();
        let vertices = outline.vertices();
        assert_eq!(vertices.len(), 4);
        assert!(outline.is_closed());
        for corner in &vertices[..2] {
            let distance = (*corner - dial_center()).norm();
            assert_relative_eq!(distance, 1000.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn top_edge_sits_at_inner_radius_along_the_centerline() {
        let spec = one_hour_spec(BaseStyle::Curved);
        let outline = tapered_outline(&spec).unwrap();
        let vertices = outline.vertices();
        let top_half_width = (spec.outer_radius - spec.height) * spec.half_angle.tan();
        for corner in &vertices[2..] {
            // y = 1000 - 875: radial extent 875 under the centerline.
            assert_relative_eq!(corner.y, 125.0, epsilon = 1e-9);
            assert_relative_eq!((corner.x - REF_CENTER).abs(), top_half_width, epsilon = 1e-9);
        }
    }

    #[test]
    fn flat_and_curved_bases_share_corners() {
        let flat = tapered_outline(&one_hour_spec(BaseStyle::Flat)).unwrap();
        let curved = tapered_outline(&one_hour_spec(BaseStyle::Curved)).unwrap();
        assert_eq!(flat.vertices(), curved.vertices());
        assert!(matches!(flat.commands[1], PathCommand::LineTo(_)));
        assert!(matches!(
            curved.commands[1],
            PathCommand::ArcTo {
                radius,
                sweep: SweepDirection::Clockwise,
                ..
            } if (radius - 1000.0).abs() < TOLERANCE
        ));
    }

    #[test]
    fn outline_is_symmetric_about_the_centerline() {
        let outline = tapered_outline(&TaperSpec {
            outer_radius: 975.0,
            height: 150.0,
            half_angle: QUARTER_MINUTE,
            base: BaseStyle::Curved,
        })
        .unwrap();
        let v = outline.vertices();
        assert_relative_eq!(v[0].x + v[1].x, 2.0 * REF_CENTER, epsilon = 1e-9);
        assert_relative_eq!(v[3].x + v[2].x, 2.0 * REF_CENTER, epsilon = 1e-9);
        assert_relative_eq!(v[0].y, v[1].y, epsilon = 1e-9);
        assert_relative_eq!(v[2].y, v[3].y, epsilon = 1e-9);
    }

    #[test]
    fn winding_is_positive() {
        for base in [BaseStyle::Flat, BaseStyle::Curved] {
            let outline = tapered_outline(&TaperSpec {
                outer_radius: 975.0,
                height: 150.0,
                half_angle: QUARTER_MINUTE,
                base,
            })
            .unwrap();
            assert!(outline.signed_area() > 0.0, "area={}", outline.signed_area());
        }
    }

    #[test]
    fn degenerate_height_rejected() {
        for height in [1000.0, 1200.0, 0.0, -5.0] {
            let spec = TaperSpec {
                height,
                ..one_hour_spec(BaseStyle::Flat)
            };
            assert!(tapered_outline(&spec).is_err(), "height={height}");
        }
    }

    #[test]
    fn degenerate_half_angle_rejected() {
        for half_angle in [0.0, -0.1, FRAC_PI_2, 2.0] {
            let spec = TaperSpec {
                half_angle,
                ..one_hour_spec(BaseStyle::Flat)
            };
            assert!(tapered_outline(&spec).is_err(), "half_angle={half_angle}");
        }
    }

    #[test]
    fn non_positive_radius_rejected() {
        let spec = TaperSpec {
            outer_radius: 0.0,
            ..one_hour_spec(BaseStyle::Flat)
        };
        assert!(tapered_outline(&spec).is_err());
    }

    #[test]
    fn split_flat_inner_corners_at_gap_offset() {
        let [left, right] = split_tapered_outline(&mission_spec(BaseStyle::Flat), 7.0).unwrap();
        let (_, base_inset) = width_and_inset(975.0, ONE_MINUTE);
        let base_y = REF_SIZE - 975.0 + base_inset;

        // Right half starts at its inner base corner.
        let rv = right.vertices();
        assert_relative_eq!(rv[0].x, REF_CENTER + 7.0, epsilon = TOLERANCE);
        assert_relative_eq!(rv[0].y, base_y, epsilon = TOLERANCE);
        // Left half reaches its inner base corner second.
        let lv = left.vertices();
        assert_relative_eq!(lv[1].x, REF_CENTER - 7.0, epsilon = TOLERANCE);
        assert_relative_eq!(lv[1].y, base_y, epsilon = TOLERANCE);
    }

    #[test]
    fn split_halves_occupy_disjoint_half_planes() {
        let [left, right] = split_tapered_outline(&mission_spec(BaseStyle::Flat), 7.0).unwrap();
        for v in left.vertices() {
            assert!(v.x <= REF_CENTER - 7.0 + TOLERANCE, "left x={}", v.x);
        }
        for v in right.vertices() {
            assert!(v.x >= REF_CENTER + 7.0 - TOLERANCE, "right x={}", v.x);
        }
    }

    #[test]
    fn split_curved_gap_corners_sit_on_the_dial_circle() {
        let [left, right] = split_tapered_outline(&mission_spec(BaseStyle::Curved), 7.0).unwrap();
        let gap_y = REF_SIZE - 975.0 + flat_inset(975.0, 7.0);
        let rv = right.vertices();
        let lv = left.vertices();
        assert_relative_eq!(rv[0].y, gap_y, epsilon = TOLERANCE);
        assert_relative_eq!(lv[1].y, gap_y, epsilon = TOLERANCE);
        assert_relative_eq!((rv[0] - dial_center()).norm(), 975.0, epsilon = 1e-9);
        assert_relative_eq!((lv[1] - dial_center()).norm(), 975.0, epsilon = 1e-9);
    }

    #[test]
    fn split_base_arcs_both_sweep_clockwise() {
        let [left, right] = split_tapered_outline(&mission_spec(BaseStyle::Curved), 7.0).unwrap();
        for half in [&left, &right] {
            assert!(matches!(
                half.commands[1],
                PathCommand::ArcTo {
                    sweep: SweepDirection::Clockwise,
                    ..
                }
            ));
        }
    }

    #[test]
    fn split_winding_is_positive_for_both_halves() {
        for base in [BaseStyle::Flat, BaseStyle::Curved] {
            let [left, right] = split_tapered_outline(&mission_spec(base), 7.0).unwrap();
            assert!(left.signed_area() > 0.0, "left area={}", left.signed_area());
            assert!(right.signed_area() > 0.0, "right area={}", right.signed_area());
        }
    }

    #[test]
    fn split_top_uses_the_chord_half_width() {
        let spec = mission_spec(BaseStyle::Flat);
        let [_, right] = split_tapered_outline(&spec, 7.0).unwrap();
        let chord = (spec.outer_radius - spec.height) * spec.half_angle.sin();
        let rv = right.vertices();
        assert_relative_eq!(rv[2].x, REF_CENTER + chord, epsilon = 1e-9);
    }

    #[test]
    fn split_gap_reaching_a_half_width_rejected() {
        // gap past the top half-width but inside the base half-width.
        let narrow_top = TaperSpec {
            outer_radius: 1000.0,
            height: 990.0,
            half_angle: ONE_MINUTE,
            base: BaseStyle::Flat,
        };
        assert!(split_tapered_outline(&narrow_top, 5.0).is_err());
        // gap past both half-widths.
        assert!(split_tapered_outline(&mission_spec(BaseStyle::Flat), 200.0).is_err());
        // negative gap.
        assert!(split_tapered_outline(&mission_spec(BaseStyle::Flat), -1.0).is_err());
    }

    #[test]
    fn split_zero_gap_meets_at_the_centerline() {
        let [left, right] = split_tapered_outline(&mission_spec(BaseStyle::Flat), 0.0).unwrap();
        let rv = right.vertices();
        let lv = left.vertices();
        assert_relative_eq!(rv[0].x, REF_CENTER, epsilon = TOLERANCE);
        assert_relative_eq!(lv[1].x, REF_CENTER, epsilon = TOLERANCE);
    }
}
