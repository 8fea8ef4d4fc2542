mod circle;
mod polygon;
mod ray;
mod rectangle;
mod segment;

pub use circle::Circle;
pub use polygon::{Polygon, Winding};
pub use ray::Ray;
pub use rectangle::{Anchor, Rectangle};
pub use segment::LineSegment;
