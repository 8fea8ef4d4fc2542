use crate::error::Result;
use crate::math::intersect::{in_unit_interval, solve_parametric};
use crate::math::{Point, Tolerance, Vector};

/// A directed line segment from `point1` to `point2`.
///
/// The parametric form is `P(t) = point1 + t * (point2 - point1)` for
/// `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    point1: Point,
    point2: Point,
}

impl LineSegment {
    /// Creates a segment from `point1` to `point2`.
    #[must_use]
    pub fn new(point1: Point, point2: Point) -> Self {
        Self { point1, point2 }
    }

    /// Returns the start point.
    #[must_use]
    pub fn point1(&self) -> &Point {
        &self.point1
    }

    /// Returns the end point.
    #[must_use]
    pub fn point2(&self) -> &Point {
        &self.point2
    }

    /// Direction vector `point2 - point1` (not normalized).
    #[must_use]
    pub fn vector(&self) -> Vector {
        self.point2 - self.point1
    }

    /// Distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().length()
    }

    /// Point halfway between the endpoints.
    #[must_use]
    pub fn mid_point(&self) -> Point {
        self.point1.midpoint(&self.point2)
    }

    /// The same segment traversed from `point2` to `point1`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.point2, self.point1)
    }

    /// Returns whether the directions are parallel, within 1°.
    #[must_use]
    pub fn parallel(&self, other: &Self) -> bool {
        self.vector().parallel(&other.vector())
    }

    /// Returns whether the directions are anti-parallel, within 1°.
    #[must_use]
    pub fn anti_parallel(&self, other: &Self) -> bool {
        self.vector().anti_parallel(&other.vector())
    }

    /// Returns whether the directions are parallel or anti-parallel.
    #[must_use]
    pub fn aligned(&self, other: &Self) -> bool {
        self.vector().aligned(&other.vector())
    }

    /// Returns whether the directions are perpendicular, within 1°.
    #[must_use]
    pub fn orthogonal(&self, other: &Self) -> bool {
        self.vector().orthogonal(&other.vector())
    }

    /// Cross product of the two direction vectors.
    #[must_use]
    pub fn cross_product(&self, other: &Self) -> Vector {
        self.vector().cross(&other.vector())
    }

    /// Angle between the two direction vectors in degrees.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVectorOperand` if either segment has zero
    /// length.
    pub fn angle_between(&self, other: &Self) -> Result<f64> {
        self.vector().angle_between(&other.vector())
    }

    /// Single intersection point of the two segments, endpoints included.
    ///
    /// Aligned segments never report a point, even when they overlap.
    #[must_use]
    pub fn intersection_point(&self, other: &Self) -> Option<Point> {
        self.intersection_point_within(other, &Tolerance::DEFAULT)
    }

    /// Same as [`LineSegment::intersection_point`] under `tol`.
    #[must_use]
    pub fn intersection_point_within(&self, other: &Self, tol: &Tolerance) -> Option<Point> {
        let hit = solve_parametric(
            &self.point1,
            &self.vector(),
            &other.point1,
            &other.vector(),
            tol,
        )?;
        let slack = tol.zero_length;
        let on_both = in_unit_interval(hit.s, slack) && in_unit_interval(hit.t, slack);
        on_both.then_some(hit.point)
    }

    /// Returns whether the segments share a single point.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection_point(other).is_some()
    }

    /// Returns whether `point` lies on the segment, endpoints included.
    ///
    /// Uses the triangle inequality: the detour through `point` is as long
    /// as the segment only for points on it.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        self.contains_point_within(point, &Tolerance::DEFAULT)
    }

    /// Same as [`LineSegment::contains_point`] under `tol`.
    #[must_use]
    pub fn contains_point_within(&self, point: &Point, tol: &Tolerance) -> bool {
        let detour = self.point1.distance_to(point) + point.distance_to(&self.point2);
        tol.eq_linear(detour, self.length())
    }
}
