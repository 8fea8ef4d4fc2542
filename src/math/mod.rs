pub mod intersect;
pub mod polygon_2d;
pub mod triangulate;

mod point;
mod tolerance;
mod vector;

pub use point::Point;
pub use tolerance::{Tolerance, ANGULAR_TOLERANCE_DEG, LINEAR_TOLERANCE, ZERO_LENGTH_TOLERANCE};
pub use vector::{Side, Vector};
