use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::math::{Point, Tolerance};

use super::{Anchor, Rectangle};

/// A circle in the XY plane, given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidOperand` if the radius is negative,
    /// NaN or infinite.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidOperand {
                operation: "circle radius",
                value: radius,
            });
        }
        Ok(Self { center, radius })
    }

    /// The circle of radius 1 around the origin.
    #[must_use]
    pub fn unit() -> Self {
        Self {
            center: Point::origin(),
            radius: 1.0,
        }
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> &Point {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the diameter, `2 * r`.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Circumference, `2 * pi * r`.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        TAU * self.radius
    }

    /// Enclosed area, `pi * r²`.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Returns whether the two disks overlap. Tangent circles do not.
    #[must_use]
    pub fn intersects_with(&self, other: &Self) -> bool {
        self.center.distance_to(&other.center) < self.radius + other.radius
    }

    /// Returns whether `point` lies strictly inside. Boundary points do not.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        self.center.distance_to(point) < self.radius
    }

    /// Returns whether `point` lies inside or on the boundary, allowing
    /// `tol.linear` of slack.
    #[must_use]
    pub fn encloses_point_within(&self, point: &Point, tol: &Tolerance) -> bool {
        self.center.distance_to(point) <= self.radius + tol.linear
    }

    /// Axis-aligned square around the circle.
    #[must_use]
    pub fn bounding_box(&self) -> Rectangle {
        let side = self.diameter();
        Rectangle::axis_aligned(side, side, self.center, Anchor::Center)
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Point::xy(x, y), r).unwrap()
    }

    #[test]
    fn metrics() {
        let c = circle(0.0, 0.0, 2.0);
        assert_relative_eq!(c.perimeter(), 4.0 * PI);
        assert_relative_eq!(c.area(), 4.0 * PI);
        assert_relative_eq!(c.diameter(), 4.0);
        assert_eq!(Circle::default(), circle(0.0, 0.0, 1.0));
    }

    #[test]
    fn invalid_radius() {
        assert!(Circle::new(Point::origin(), -1.0).is_err());
        assert!(Circle::new(Point::origin(), f64::NAN).is_err());
        assert!(Circle::new(Point::origin(), 0.0).is_ok());
    }

    #[test]
    fn intersection() {
        let unit = circle(0.0, 0.0, 1.0);
        assert!(unit.intersects_with(&circle(1.5, 0.0, 1.0)));
        let small = circle(0.0, 0.0, 0.5);
        assert!(!small.intersects_with(&circle(1.5, 0.0, 0.5)));
        let large = circle(0.0, 0.0, 5.0);
        assert!(large.intersects_with(&circle(1.0, 0.0, 0.5)));
    }

    #[test]
    fn tangent_circles_do_not_intersect() {
        let left = circle(0.0, 0.0, 1.0);
        let right = circle(2.0, 0.0, 1.0);
        assert!(!left.intersects_with(&right));
        assert!(!right.intersects_with(&left));
    }

    #[test]
    fn containment_is_strict() {
        let c = circle(1.0, 1.0, 1.0);
        assert!(c.contains_point(&Point::xy(1.5, 1.5)));
        assert!(!c.contains_point(&Point::xy(2.0, 1.0)));
        assert!(!c.contains_point(&Point::xy(3.0, 3.0)));
        let tol = Tolerance::default();
        assert!(c.encloses_point_within(&Point::xy(2.0, 1.0), &tol));
    }

    #[test]
    fn bounding_box_is_centered_square() {
        let bbox = circle(2.0, 3.0, 1.5).bounding_box();
        assert_relative_eq!(bbox.width(), 3.0);
        assert_relative_eq!(bbox.height(), 3.0);
        assert_eq!(bbox.anchor_point(Anchor::LeftBottom), Point::xy(0.5, 1.5));
        assert_eq!(bbox.anchor_point(Anchor::RightTop), Point::xy(3.5, 4.5));
    }
}
