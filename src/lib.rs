pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeometryError, Result};
pub use geometry::{Anchor, Circle, LineSegment, Polygon, Ray, Rectangle, Winding};
pub use math::{Point, Side, Tolerance, Vector};
