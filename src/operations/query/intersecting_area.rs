use tracing::debug;

use crate::error::Result;
use crate::math::polygon_2d::{clip_convex, is_convex_2d, signed_area_2d};
use crate::math::triangulate::triangulate_polygon;
use crate::math::{Point, Tolerance};

/// Computes the area shared by two simple polygons in the XY plane.
///
/// A convex clipper clips the subject directly (Sutherland-Hodgman). If
/// only the subject is convex, the roles are swapped. If neither is convex,
/// the clipper is triangulated and the subject is clipped against each
/// triangle; the partial areas add up because the triangles do not overlap.
pub struct IntersectingArea<'a> {
    subject: &'a [Point],
    clip: &'a [Point],
    tolerance: Tolerance,
}

impl<'a> IntersectingArea<'a> {
    /// Creates a new `IntersectingArea` query.
    #[must_use]
    pub fn new(subject: &'a [Point], clip: &'a [Point]) -> Self {
        Self {
            subject,
            clip,
            tolerance: Tolerance::default(),
        }
    }

    /// Sets the tolerance used by the convexity tests.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query, returning the overlap area.
    ///
    /// Polygons with fewer than 3 vertices have no area and yield `0.0`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Triangulation` if both polygons are concave
    /// and the clipper cannot be triangulated (for example because its
    /// boundary crosses itself).
    pub fn execute(&self) -> Result<f64> {
        if self.subject.len() < 3 || self.clip.len() < 3 {
            return Ok(0.0);
        }
        let tol = &self.tolerance;

        if is_convex_2d(self.clip, tol) {
            return Ok(clipped_area(self.subject, self.clip));
        }
        if is_convex_2d(self.subject, tol) {
            debug!("concave clipper, clipping against the convex subject");
            return Ok(clipped_area(self.clip, self.subject));
        }

        let triangles = triangulate_polygon(self.clip)?;
        debug!(
            triangles = triangles.len(),
            "both polygons concave, clipping against triangulated clipper"
        );
        Ok(triangles
            .iter()
            .map(|triangle| clipped_area(self.subject, triangle))
            .sum())
    }
}

fn clipped_area(subject: &[Point], convex_clip: &[Point]) -> f64 {
    signed_area_2d(&clip_convex(subject, convex_clip)).abs()
}
