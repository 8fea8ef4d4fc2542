use spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};
use tracing::debug;

use super::polygon_2d::point_in_polygon_2d;
use super::Point;
use crate::error::{GeometryError, Result};

/// Triangulates a simple polygon in the XY plane.
///
/// Uses a constrained Delaunay triangulation of the boundary and keeps the
/// triangles whose centroid lies inside it. Works for concave polygons. Output
/// triangles carry the `z` of the first vertex.
///
/// # Errors
///
/// Returns `GeometryError::DegeneratePolygon` for fewer than 3 points and
/// `GeometryError::Triangulation` if a vertex cannot be inserted or the
/// boundary crosses itself.
pub fn triangulate_polygon(points: &[Point]) -> Result<Vec<[Point; 3]>> {
    if points.len() < 3 {
        return Err(GeometryError::DegeneratePolygon(format!(
            "triangulation needs at least 3 points, got {}",
            points.len()
        )));
    }
    let z = points[0].z();
    let boundary: Vec<_> = points
        .iter()
        .map(|p| SpadePoint2::new(p.x(), p.y()))
        .collect();

    let mut cdt = ConstrainedDelaunayTriangulation::<SpadePoint2<f64>>::new();
    insert_constraint_loop(&mut cdt, &boundary)?;

    let triangles: Vec<[Point; 3]> = cdt
        .inner_faces()
        .map(|face| face.positions())
        .filter(|&corners| is_interior_face(corners, points))
        .map(|corners| corners.map(|pos| Point::new(pos.x, pos.y, z)))
        .collect();

    debug!(
        vertices = points.len(),
        triangles = triangles.len(),
        "triangulated polygon"
    );
    Ok(triangles)
}

/// Inserts a closed polygon as constraint edges into the CDT.
fn insert_constraint_loop(
    cdt: &mut ConstrainedDelaunayTriangulation<SpadePoint2<f64>>,
    points: &[SpadePoint2<f64>],
) -> Result<()> {
    let mut handles = Vec::with_capacity(points.len());
    for &pt in points {
        let h = cdt.insert(pt).map_err(|e: InsertionError| {
            GeometryError::Triangulation(format!("CDT insert: {e}"))
        })?;
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(GeometryError::Triangulation(
                "polygon boundary intersects itself".into(),
            ));
        }
        cdt.add_constraint(from, to);
    }

    Ok(())
}

/// Returns whether a CDT face lies inside the boundary loop.
///
/// Every face sits wholly on one side of the constrained boundary, so its
/// centroid, which is strictly inside the triangle, decides for all of it.
fn is_interior_face(vertices: [SpadePoint2<f64>; 3], boundary: &[Point]) -> bool {
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
    point_in_polygon_2d(boundary, &Point::xy(sx / 3.0, sy / 3.0))
}
