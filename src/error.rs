use thiserror::Error;

/// Top-level error type for the Horolis dial engine.
#[derive(Debug, Error)]
pub enum HorolisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors for degenerate or self-intersecting index geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range ({min}, {max})")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate index geometry: {0}")]
    Degenerate(String),
}

/// Errors for malformed dial configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("dial radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("substeps must be at least 1")]
    ZeroSubsteps,

    #[error("time component {component} = {value} exceeds maximum {max}")]
    TimeComponentOutOfRange {
        component: &'static str,
        value: u32,
        max: u32,
    },
}

/// Convenience type alias for results using [`HorolisError`].
pub type Result<T> = std::result::Result<T, HorolisError>;
