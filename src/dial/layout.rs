use crate::geometry::REF_SIZE;
use crate::math::{Point2, Vector2};

use super::config::DialConfig;

/// Half turn added to hand rotations; hand templates hang downward from the
/// pivot in the reference space.
const HAND_FLIP_DEG: f64 = 180.0;

/// Transform parameters for instantiating a reference-space template onto
/// the dial canvas.
///
/// The rendering surface applies them innermost-first: scale the template
/// uniformly about its origin, rotate by `rotation_deg` about `pivot` (in
/// scaled coordinates), then translate by `translate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateTransform {
    /// Canvas translation applied last.
    pub translate: Vector2,
    /// Rotation in degrees about `pivot`.
    pub rotation_deg: f64,
    /// Rotation pivot in scaled template coordinates.
    pub pivot: Point2,
    /// Uniform scale from reference units to canvas units.
    pub scale: f64,
}

/// Computes the canvas transform for an index template at `angle` degrees.
///
/// The scale maps the reference square onto the dial radius, the pivot is
/// the scaled dial center, and the translation brings the pivot onto the
/// configured center.
#[must_use]
pub fn index_transform(config: &DialConfig, angle: f64) -> TemplateTransform {
    let r = config.radius();
    let c = config.center();
    TemplateTransform {
        translate: Vector2::new(c.x - r / 2.0, c.y - r),
        rotation_deg: angle,
        pivot: Point2::new(r / 2.0, r),
        scale: r / REF_SIZE,
    }
}

/// Computes the canvas transform for a hand template at `angle` degrees.
#[must_use]
pub fn hand_transform(config: &DialConfig, angle: f64) -> TemplateTransform {
    TemplateTransform {
        rotation_deg: angle + HAND_FLIP_DEG,
        ..index_transform(config, angle)
    }
}

/// Computes the canvas transform for the dial track template, which spans
/// the full doubled reference square and is never rotated.
#[must_use]
pub fn track_transform(config: &DialConfig) -> TemplateTransform {
    let r = config.radius();
    let c = config.center();
    TemplateTransform {
        translate: Vector2::new(c.x - r, c.y - r),
        rotation_deg: 0.0,
        pivot: Point2::new(r, r),
        scale: r / REF_SIZE,
    }
}
