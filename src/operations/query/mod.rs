mod bounding_circle;
mod convex_hull;
mod intersecting_area;
mod separating_axis;

pub use bounding_circle::BoundingCircle;
pub use convex_hull::ConvexHull;
pub use intersecting_area::IntersectingArea;
pub use separating_axis::SeparatingAxis;
