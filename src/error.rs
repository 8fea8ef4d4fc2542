use thiserror::Error;

/// Error type for the geokernel primitives and algorithms.
///
/// Geometric non-results (no intersection, point not contained) are never
/// errors; they are reported as `None` or `false` by the relevant query.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid operand for {operation}: {value}")]
    InvalidOperand { operation: &'static str, value: f64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("degenerate vector: {0}")]
    DegenerateVector(&'static str),

    #[error("angle is undefined for a zero-length vector")]
    ZeroVectorOperand,

    #[error("construction failed: {0}")]
    ConstructionError(String),

    #[error("degenerate polygon: {0}")]
    DegeneratePolygon(String),

    #[error("triangulation failed: {0}")]
    Triangulation(String),
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
