use tracing::trace;

use crate::math::polygon_2d::{intervals_overlap, left_normal, project_interval};
use crate::math::{Point, Tolerance, Vector};

/// Separating-axis overlap test for two convex point sets.
///
/// Two convex shapes are disjoint iff their projections onto some axis do
/// not overlap. By default the candidate axes are the edge normals of both
/// closed polygons; shapes with a known frame (rectangles) can supply
/// their own axes through [`SeparatingAxis::with_axes`]. Projections that
/// only touch count as separated.
pub struct SeparatingAxis<'a> {
    a: &'a [Point],
    b: &'a [Point],
    axes: Vec<Vector>,
    tolerance: Tolerance,
}

impl<'a> SeparatingAxis<'a> {
    /// Creates a new `SeparatingAxis` query using the edge normals of both
    /// polygons as candidate axes.
    #[must_use]
    pub fn new(a: &'a [Point], b: &'a [Point]) -> Self {
        let mut axes = edge_normals(a);
        axes.extend(edge_normals(b));
        Self {
            a,
            b,
            axes,
            tolerance: Tolerance::default(),
        }
    }

    /// Replaces the candidate axes.
    #[must_use]
    pub fn with_axes(mut self, axes: Vec<Vector>) -> Self {
        self.axes = axes;
        self
    }

    /// Sets the tolerance used for zero-length axes and interval overlap.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the first candidate axis along which the shapes separate.
    #[must_use]
    pub fn separating_axis(&self) -> Option<Vector> {
        self.axes.iter().copied().find(|axis| {
            if axis.is_zero_within(&self.tolerance) {
                return false;
            }
            let slack = self.tolerance.zero_length * axis.length();
            let on_a = project_interval(self.a, axis);
            let on_b = project_interval(self.b, axis);
            match (on_a, on_b) {
                (Some(ia), Some(ib)) => !intervals_overlap(ia, ib, slack),
                _ => false,
            }
        })
    }

    /// Executes the query, returning `true` when the shapes overlap.
    ///
    /// Empty point sets never overlap anything.
    #[must_use]
    pub fn execute(&self) -> bool {
        if self.a.is_empty() || self.b.is_empty() {
            return false;
        }
        match self.separating_axis() {
            Some(axis) => {
                trace!(%axis, "separating axis found");
                false
            }
            None => true,
        }
    }
}

/// Left normals of the closed polygon's edges in the XY plane.
fn edge_normals(points: &[Point]) -> Vec<Vector> {
    let n = points.len();
    (0..n)
        .map(|i| left_normal(&(points[(i + 1) % n] - points[i])))
        .filter(|normal| !normal.is_zero())
        .collect()
}
