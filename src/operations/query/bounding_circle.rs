use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::Circle;
use crate::math::{Point, Tolerance};

/// Computes the minimal enclosing circle of a planar point set.
///
/// Incremental Welzl construction: whenever a point falls outside the
/// current circle, the circle is rebuilt with that point on its boundary,
/// first with one earlier point, then with two. The expected linear running
/// time needs a random visiting order, so points are shuffled by a hash of
/// their coordinates first; sorted or adversarial input costs no more than
/// any other, and the result stays deterministic. The circle lies in the XY
/// plane at the `z` of the first point.
pub struct BoundingCircle<'a> {
    points: &'a [Point],
    tolerance: Tolerance,
}

impl<'a> BoundingCircle<'a> {
    /// Creates a new `BoundingCircle` query with the default tolerance.
    #[must_use]
    pub fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            tolerance: Tolerance::default(),
        }
    }

    /// Sets the slack allowed when testing whether a point is enclosed.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query, returning the enclosing circle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegeneratePolygon` for an empty point set and
    /// `GeometryError::InvalidOperand` if a coordinate is not finite.
    pub fn execute(&self) -> Result<Circle> {
        let Some(first) = self.points.first() else {
            return Err(GeometryError::DegeneratePolygon(
                "bounding circle of an empty point set".into(),
            ));
        };
        let z = first.z();
        let mut planar: Vec<Point> = self
            .points
            .iter()
            .map(|p| Point::new(p.x(), p.y(), z))
            .collect();
        planar.sort_by_cached_key(scramble_key);

        let mut circle = Circle::new(planar[0], 0.0)?;
        for i in 1..planar.len() {
            if self.encloses(&circle, &planar[i]) {
                continue;
            }
            circle = Circle::new(planar[i], 0.0)?;
            for j in 0..i {
                if self.encloses(&circle, &planar[j]) {
                    continue;
                }
                circle = circle_from_two(&planar[i], &planar[j])?;
                for k in 0..j {
                    if !self.encloses(&circle, &planar[k]) {
                        circle = circle_from_three(&planar[i], &planar[j], &planar[k])?;
                    }
                }
            }
        }

        debug!(
            points = planar.len(),
            radius = circle.radius(),
            "bounding circle computed"
        );
        Ok(circle)
    }

    fn encloses(&self, circle: &Circle, point: &Point) -> bool {
        circle.encloses_point_within(point, &self.tolerance)
    }
}

/// Hash of the coordinate bits (splitmix64 finalizer), used as a shuffle key.
fn scramble_key(p: &Point) -> u64 {
    let mut h = p.x().to_bits() ^ p.y().to_bits().rotate_left(32);
    h = (h ^ (h >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    h = (h ^ (h >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    h ^ (h >> 31)
}

/// Smallest circle through both points.
fn circle_from_two(a: &Point, b: &Point) -> Result<Circle> {
    Circle::new(a.midpoint(b), a.distance_to(b) / 2.0)
}

/// Circle through all three points; for collinear points, the circle over
/// the farthest pair.
fn circle_from_three(a: &Point, b: &Point, c: &Point) -> Result<Circle> {
    let d = 2.0 * (a.x() * (b.y() - c.y()) + b.x() * (c.y() - a.y()) + c.x() * (a.y() - b.y()));
    if d.abs() < f64::EPSILON {
        let candidates = [(a, b), (b, c), (a, c)];
        let span = |&(p, q): &(&Point, &Point)| p.distance_to(q);
        let (p, q) = candidates
            .into_iter()
            .max_by(|x, y| span(x).total_cmp(&span(y)))
            .unwrap_or((a, b));
        return circle_from_two(p, q);
    }

    let a_sq = a.x() * a.x() + a.y() * a.y();
    let b_sq = b.x() * b.x() + b.y() * b.y();
    let c_sq = c.x() * c.x() + c.y() * c.y();
    let ux = (a_sq * (b.y() - c.y()) + b_sq * (c.y() - a.y()) + c_sq * (a.y() - b.y())) / d;
    let uy = (a_sq * (c.x() - b.x()) + b_sq * (a.x() - c.x()) + c_sq * (b.x() - a.x())) / d;
    let center = Point::new(ux, uy, a.z());
    Circle::new(center, center.distance_to(a))
}
