use crate::error::{GeometryError, Result};
use crate::math::intersect::solve_parametric;
use crate::math::{Point, Tolerance, Vector};

/// A half-line starting at `start_point` and extending along `direction`.
///
/// The parametric form is `P(t) = start_point + t * direction` for `t >= 0`.
/// The direction is always a unit vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    start_point: Point,
    direction: Vector,
}

impl Ray {
    /// Creates a new ray, normalizing the direction.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ConstructionError` if the direction is a zero
    /// vector.
    pub fn new(start_point: Point, direction: Vector) -> Result<Self> {
        let direction = direction.normalize().map_err(|_| {
            GeometryError::ConstructionError(format!(
                "ray direction {direction} cannot be normalized"
            ))
        })?;
        Ok(Self {
            start_point,
            direction,
        })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start_point(&self) -> &Point {
        &self.start_point
    }

    /// Returns the unit direction vector.
    #[must_use]
    pub fn direction(&self) -> &Vector {
        &self.direction
    }

    /// Point at distance `t` from the start along the ray.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        self.start_point.point_at_distance(t, &self.direction)
    }

    /// Returns whether the directions are parallel, within 1°.
    #[must_use]
    pub fn parallel(&self, other: &Self) -> bool {
        self.direction.parallel(&other.direction)
    }

    /// Returns whether the directions are anti-parallel, within 1°.
    #[must_use]
    pub fn anti_parallel(&self, other: &Self) -> bool {
        self.direction.anti_parallel(&other.direction)
    }

    /// Returns whether the directions are parallel or anti-parallel.
    #[must_use]
    pub fn aligned(&self, other: &Self) -> bool {
        self.direction.aligned(&other.direction)
    }

    /// Returns whether the directions are perpendicular, within 1°.
    #[must_use]
    pub fn orthogonal(&self, other: &Self) -> bool {
        self.direction.orthogonal(&other.direction)
    }

    /// Cross product of the two directions.
    #[must_use]
    pub fn cross_product(&self, other: &Self) -> Vector {
        self.direction.cross(&other.direction)
    }

    /// Angle between the two directions in degrees.
    ///
    /// # Errors
    ///
    /// Never fails for rays built through [`Ray::new`]; the signature
    /// mirrors [`Vector::angle_between`].
    pub fn angle_between(&self, other: &Self) -> Result<f64> {
        self.direction.angle_between(&other.direction)
    }

    /// Intersection point of the two rays, start points included.
    ///
    /// Aligned rays never report a point.
    #[must_use]
    pub fn intersection_point(&self, other: &Self) -> Option<Point> {
        self.intersection_point_within(other, &Tolerance::DEFAULT)
    }

    /// Same as [`Ray::intersection_point`] under `tol`.
    #[must_use]
    pub fn intersection_point_within(&self, other: &Self, tol: &Tolerance) -> Option<Point> {
        let hit = solve_parametric(
            &self.start_point,
            &self.direction,
            &other.start_point,
            &other.direction,
            tol,
        )?;
        let slack = tol.zero_length;
        let ahead_of_both = hit.s >= -slack && hit.t >= -slack;
        ahead_of_both.then_some(hit.point)
    }

    /// Returns whether the rays meet in a single point.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection_point(other).is_some()
    }

    /// Returns whether `point` lies on the ray.
    ///
    /// The start point is on the ray. Any other point must lie in the same
    /// direction as the ray (within the angular tolerance); points behind
    /// the start are rejected.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        self.contains_point_within(point, &Tolerance::DEFAULT)
    }

    /// Same as [`Ray::contains_point`] under `tol`.
    #[must_use]
    pub fn contains_point_within(&self, point: &Point, tol: &Tolerance) -> bool {
        let to_point = *point - self.start_point;
        if to_point.length() <= tol.linear {
            return true;
        }
        self.direction.parallel_within(&to_point, tol)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ray(x: f64, y: f64, dx: f64, dy: f64) -> Ray {
        Ray::new(Point::xy(x, y), Vector::xy(dx, dy)).unwrap()
    }

    #[test]
    fn direction_is_normalized() {
        let r = ray(0.0, 0.0, 3.0, 4.0);
        assert_eq!(*r.direction(), Vector::xy(0.6, 0.8));
        assert!(r.direction().is_unit_vector());
        assert_eq!(r.point_at(5.0), Point::xy(3.0, 4.0));
    }

    #[test]
    fn zero_direction_fails() {
        let r = Ray::new(Point::origin(), Vector::zero());
        assert!(matches!(r, Err(GeometryError::ConstructionError(_))));
    }

    #[test]
    fn relationships() {
        let r = ray(0.0, 0.0, 1.0, 0.0);
        assert!(r.parallel(&ray(3.0, 3.0, 2.0, 0.0)));
        assert!(r.anti_parallel(&ray(3.0, 3.0, -2.0, 0.0)));
        assert!(r.aligned(&ray(3.0, 3.0, -2.0, 0.0)));
        assert!(r.orthogonal(&ray(3.0, 3.0, 0.0, 1.0)));
        assert_eq!(r.cross_product(&ray(0.0, 0.0, 0.0, 1.0)), Vector::z_axis());
        let down = ray(0.0, 0.0, 0.0, -1.0);
        assert_relative_eq!(r.angle_between(&down).unwrap(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn crossing_rays() {
        let a = ray(0.0, 0.0, 1.0, 0.0);
        let b = ray(5.0, 5.0, 0.0, -1.0);
        assert_eq!(a.intersection_point(&b), Some(Point::xy(5.0, 0.0)));
        assert!(a.intersects(&b));
    }

    #[test]
    fn lines_cross_behind_a_start_point() {
        let a = ray(0.0, 0.0, 1.0, 0.0);
        assert!(!a.intersects(&ray(5.0, 5.0, 0.0, 1.0)));
        assert!(!a.intersects(&ray(-5.0, 5.0, 0.0, -1.0)));
    }

    #[test]
    fn start_points_count() {
        let a = ray(0.0, 0.0, 1.0, 0.0);
        let b = ray(3.0, 0.0, 0.0, 1.0);
        assert_eq!(a.intersection_point(&b), Some(Point::xy(3.0, 0.0)));
    }

    #[test]
    fn aligned_rays_do_not_intersect() {
        let a = ray(0.0, 0.0, 1.0, 0.0);
        assert!(!a.intersects(&ray(0.0, 1.0, 1.0, 0.0)));
        assert!(!a.intersects(&ray(5.0, 0.0, -1.0, 0.0)));
    }

    #[test]
    fn contains_point_excludes_points_behind() {
        let r = ray(1.0, 1.0, 1.0, 0.0);
        assert!(r.contains_point(&Point::xy(1.0, 1.0)));
        assert!(r.contains_point(&Point::xy(100.0, 1.0)));
        assert!(!r.contains_point(&Point::xy(-5.0, 1.0)));
        assert!(!r.contains_point(&Point::xy(5.0, 3.0)));
    }
}
