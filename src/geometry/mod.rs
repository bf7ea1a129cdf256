pub mod path;
pub mod taper;

pub use path::{Outline, PathCommand, SweepDirection};
pub use taper::{split_tapered_outline, tapered_outline, BaseStyle, TaperSpec};

/// Side length of the square reference space index outlines are emitted in.
///
/// The dial center sits at (`REF_CENTER`, `REF_SIZE`) and the outer edge of
/// the dial under an index's angular centerline at (`REF_CENTER`, 0); y
/// grows toward the dial center.
pub const REF_SIZE: f64 = 1000.0;

/// Horizontal coordinate of the angular centerline in the reference space.
pub const REF_CENTER: f64 = 500.0;
