use std::cmp::Ordering;

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::cross_2d;
use crate::math::{Point, Tolerance};

/// Computes the convex hull of a planar point set.
///
/// Uses the monotone chain method: points are sorted by `x` (then `y`) and
/// the lower and upper chains are grown by popping every point that would
/// not make a left turn. The hull is returned counter-clockwise, starting at
/// the lowest-leftmost point, without duplicate or collinear vertices.
pub struct ConvexHull<'a> {
    points: &'a [Point],
    tolerance: Tolerance,
}

impl<'a> ConvexHull<'a> {
    /// Creates a new `ConvexHull` query with the default tolerance.
    #[must_use]
    pub fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            tolerance: Tolerance::default(),
        }
    }

    /// Sets the tolerance used to merge duplicates and drop collinear points.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query, returning the hull vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegeneratePolygon` if the input does not
    /// contain three non-collinear points.
    pub fn execute(&self) -> Result<Vec<Point>> {
        let tol = &self.tolerance;
        let mut sorted = self.points.to_vec();
        sorted.sort_by(compare_xy);
        sorted.dedup_by(|a, b| a.approx_eq_within(b, tol));

        let mut lower = sorted
            .iter()
            .fold(Vec::new(), |hull, p| grow_chain(hull, *p, tol));
        let mut upper = sorted
            .iter()
            .rev()
            .fold(Vec::new(), |hull, p| grow_chain(hull, *p, tol));

        // Each chain ends where the other starts.
        lower.pop();
        upper.pop();
        lower.append(&mut upper);

        let input = self.points.len();
        if lower.len() < 3 {
            debug!(input, "convex hull rejected: collinear or too few points");
            return Err(GeometryError::DegeneratePolygon(format!(
                "convex hull needs 3 non-collinear points, input has {input}"
            )));
        }
        debug!(input, hull = lower.len(), "convex hull computed");
        Ok(lower)
    }
}

fn compare_xy(a: &Point, b: &Point) -> Ordering {
    a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y()))
}

fn grow_chain(mut chain: Vec<Point>, next: Point, tol: &Tolerance) -> Vec<Point> {
    while chain.len() >= 2
        && cross_2d(&chain[chain.len() - 2], &chain[chain.len() - 1], &next) <= tol.zero_length
    {
        chain.pop();
    }
    chain.push(next);
    chain
}
