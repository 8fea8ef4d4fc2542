use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{is_convex_2d, point_in_polygon_2d, signed_area_2d, turning_angle_2d};
use crate::math::{Point, Tolerance, Vector};
use crate::operations::query::{BoundingCircle, ConvexHull, IntersectingArea, SeparatingAxis};

use super::{Anchor, Circle, LineSegment, Rectangle};

/// Orientation of a polygon boundary in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

/// A closed polygon given by its vertices in order.
///
/// The closing edge from the last vertex back to the first is implicit.
/// All algorithms work on the XY projection of the vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from its vertices in boundary order.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the vertices.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Iterates over the edges, including the closing edge.
    ///
    /// Yields nothing for fewer than 2 vertices.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        let n = self.points.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| {
            let next = (i + 1) % n;
            LineSegment::new(self.points[i], self.points[next])
        })
    }

    /// Total length of the edges, closing edge included.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|edge| edge.length()).sum()
    }

    /// Enclosed area; 0 for fewer than 3 vertices.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Shoelace area, positive for counter-clockwise boundaries.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Returns the boundary orientation, or `None` when the polygon encloses
    /// no area.
    #[must_use]
    pub fn winding(&self) -> Option<Winding> {
        let area = self.signed_area();
        if area.abs() <= Tolerance::DEFAULT.zero_length {
            None
        } else if area > 0.0 {
            Some(Winding::CounterClockwise)
        } else {
            Some(Winding::Clockwise)
        }
    }

    /// Arithmetic mean of the vertices.
    ///
    /// This is not the centroid of the enclosed region unless the vertices
    /// are evenly spread; see [`Polygon::area_centroid`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegeneratePolygon` if there are no vertices.
    pub fn centroid(&self) -> Result<Point> {
        if self.points.is_empty() {
            return Err(GeometryError::DegeneratePolygon(
                "centroid of a polygon without vertices".into(),
            ));
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.points.len() as f64;
        let sum = self
            .points
            .iter()
            .fold(Vector::zero(), |acc, p| acc + p.to_vector());
        Ok(Point::origin() + sum.divide(n)?)
    }

    /// Centroid of the enclosed region.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegeneratePolygon` if the polygon encloses no
    /// area.
    pub fn area_centroid(&self) -> Result<Point> {
        let area = self.signed_area();
        if area.abs() <= Tolerance::DEFAULT.zero_length {
            return Err(GeometryError::DegeneratePolygon(
                "area centroid of a polygon without area".into(),
            ));
        }
        let n = self.points.len();
        let (mut cx, mut cy) = (0.0, 0.0);
        for i in 0..n {
            let (a, b) = (&self.points[i], &self.points[(i + 1) % n]);
            let cross = a.x() * b.y() - b.x() * a.y();
            cx += (a.x() + b.x()) * cross;
            cy += (a.y() + b.y()) * cross;
        }
        let z = self.points[0].z();
        Ok(Point::new(cx / (6.0 * area), cy / (6.0 * area), z))
    }

    /// Largest distance between two vertices; 0 for fewer than 2.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        let candidates = ConvexHull::new(&self.points)
            .execute()
            .unwrap_or_else(|_| self.points.clone());
        let mut best = 0.0_f64;
        for (i, a) in candidates.iter().enumerate() {
            for b in &candidates[i + 1..] {
                best = best.max(a.distance_to(b));
            }
        }
        best
    }

    /// Same as [`Polygon::is_convex_within`] with the default tolerance.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        self.is_convex_within(&Tolerance::DEFAULT)
    }

    /// Returns whether the polygon is convex.
    ///
    /// Every turn must go the same way and the boundary must wind exactly
    /// once, so self-intersecting stars are rejected. Collinear vertices are
    /// allowed. False for fewer than 3 vertices.
    #[must_use]
    pub fn is_convex_within(&self, tol: &Tolerance) -> bool {
        is_convex_2d(&self.points, tol)
    }

    /// Signed turning angle at each vertex in degrees, positive for a left
    /// turn. The angles of a simple counter-clockwise polygon sum to 360.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegeneratePolygon` for fewer than 3 vertices
    /// or when two consecutive vertices coincide.
    pub fn corner_curvatures(&self) -> Result<Vec<f64>> {
        self.corner_curvatures_within(&Tolerance::DEFAULT)
    }

    /// Same as [`Polygon::corner_curvatures`], treating vertices closer than
    /// `tol.linear` as coincident.
    ///
    /// # Errors
    ///
    /// Same as [`Polygon::corner_curvatures`].
    pub fn corner_curvatures_within(&self, tol: &Tolerance) -> Result<Vec<f64>> {
        self.check_corners(tol)?;
        let n = self.points.len();
        Ok((0..n)
            .map(|i| {
                turning_angle_2d(
                    &self.points[(i + n - 1) % n],
                    &self.points[i],
                    &self.points[(i + 1) % n],
                )
            })
            .collect())
    }

    /// Interior angle at each vertex in degrees, whichever way the boundary
    /// runs. Reflex corners exceed 180.
    ///
    /// # Errors
    ///
    /// Same as [`Polygon::corner_curvatures`].
    pub fn corner_angles(&self) -> Result<Vec<f64>> {
        self.corner_angles_within(&Tolerance::DEFAULT)
    }

    /// Same as [`Polygon::corner_angles`] under `tol`.
    ///
    /// # Errors
    ///
    /// Same as [`Polygon::corner_curvatures_within`].
    pub fn corner_angles_within(&self, tol: &Tolerance) -> Result<Vec<f64>> {
        let sign = if self.signed_area() < 0.0 { -1.0 } else { 1.0 };
        let turns = self.corner_curvatures_within(tol)?;
        Ok(turns.into_iter().map(|turn| 180.0 - turn * sign).collect())
    }

    fn check_corners(&self, tol: &Tolerance) -> Result<()> {
        let n = self.points.len();
        if n < 3 {
            return Err(GeometryError::DegeneratePolygon(format!(
                "corner angles need 3 vertices, polygon has {n}"
            )));
        }
        let repeated = (0..n).find(|&i| {
            let next = &self.points[(i + 1) % n];
            self.points[i].approx_eq_within(next, tol)
        });
        if let Some(i) = repeated {
            return Err(GeometryError::DegeneratePolygon(format!(
                "vertices {i} and {} coincide",
                (i + 1) % n
            )));
        }
        Ok(())
    }

    /// Same as [`Polygon::is_regular_within`] with the default tolerance.
    #[must_use]
    pub fn is_regular(&self) -> bool {
        self.is_regular_within(&Tolerance::DEFAULT)
    }

    /// Returns whether all edges have equal length and all corners equal
    /// angles.
    #[must_use]
    pub fn is_regular_within(&self, tol: &Tolerance) -> bool {
        let Ok(angles) = self.corner_angles_within(tol) else {
            return false;
        };
        let lengths: Vec<f64> = self.edges().map(|edge| edge.length()).collect();
        let (first_length, first_angle) = (lengths[0], angles[0]);
        let same_angle = |a: &f64| (a - first_angle).abs() <= tol.angular_deg;
        lengths.iter().all(|&l| tol.eq_linear(l, first_length)) && angles.iter().all(same_angle)
    }

    /// Point-in-polygon test by ray casting along +X.
    ///
    /// An edge is crossed when exactly one of its endpoints lies strictly
    /// above the ray, so a vertex on the ray is counted for one edge only.
    /// Boundary points may land on either side. False for fewer than 3
    /// vertices.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point_in_polygon_2d(&self.points, point)
    }

    /// Returns whether the two polygons share interior area.
    ///
    /// # Errors
    ///
    /// Fails when both polygons are concave and one cannot be triangulated,
    /// see [`Polygon::intersecting_area`].
    pub fn intersects_with(&self, other: &Self) -> Result<bool> {
        self.intersects_with_within(other, &Tolerance::DEFAULT)
    }

    /// Tolerance-aware form of [`Polygon::intersects_with`].
    ///
    /// Two convex polygons are tested with separating axes; otherwise the
    /// shared area must exceed `tol.zero_length`. Touching boundaries do not
    /// count as overlap.
    ///
    /// # Errors
    ///
    /// See [`Polygon::intersecting_area`].
    pub fn intersects_with_within(&self, other: &Self, tol: &Tolerance) -> Result<bool> {
        if self.is_convex_within(tol) && other.is_convex_within(tol) {
            return Ok(SeparatingAxis::new(&self.points, &other.points)
                .with_tolerance(*tol)
                .execute());
        }
        let area = IntersectingArea::new(&self.points, &other.points)
            .with_tolerance(*tol)
            .execute()?;
        Ok(area > tol.zero_length)
    }

    /// Area shared with `other`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Triangulation` if both polygons are concave
    /// and `other` cannot be triangulated.
    pub fn intersecting_area(&self, other: &Self) -> Result<f64> {
        IntersectingArea::new(&self.points, &other.points).execute()
    }

    /// Convex hull of the vertices, counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegeneratePolygon` if fewer than 3
    /// non-collinear vertices exist.
    pub fn convex_hull(&self) -> Result<Self> {
        ConvexHull::new(&self.points).execute().map(Self::new)
    }

    /// Axis-aligned bounding rectangle, anchored at its left-bottom corner
    /// in the plane of the first vertex.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegeneratePolygon` if there are no vertices.
    pub fn bounding_box(&self) -> Result<Rectangle> {
        let Some(first) = self.points.first() else {
            return Err(GeometryError::DegeneratePolygon(
                "bounding box of a polygon without vertices".into(),
            ));
        };
        let (mut min_x, mut min_y) = (first.x(), first.y());
        let (mut max_x, mut max_y) = (min_x, min_y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x());
            min_y = min_y.min(p.y());
            max_x = max_x.max(p.x());
            max_y = max_y.max(p.y());
        }
        debug!(min_x, min_y, max_x, max_y, "polygon bounding box");
        Ok(Rectangle::axis_aligned(
            max_x - min_x,
            max_y - min_y,
            Point::new(min_x, min_y, first.z()),
            Anchor::LeftBottom,
        ))
    }

    /// Smallest circle enclosing every vertex.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegeneratePolygon` if there are no vertices.
    pub fn bounding_circle(&self) -> Result<Circle> {
        BoundingCircle::new(&self.points).execute()
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
