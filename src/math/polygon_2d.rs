use super::{Point, Tolerance, Vector};

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x() * points[j].y() - points[j].x() * points[i].y();
    }
    sum * 0.5
}

/// Z component of `(a - o) × (b - o)`.
///
/// Positive when `o -> a -> b` turns left (counter-clockwise).
#[must_use]
pub fn cross_2d(o: &Point, a: &Point, b: &Point) -> f64 {
    (a.x() - o.x()) * (b.y() - o.y()) - (a.y() - o.y()) * (b.x() - o.x())
}

/// Returns the left-pointing normal of a direction vector in the XY plane.
#[must_use]
pub fn left_normal(dir: &Vector) -> Vector {
    Vector::xy(-dir.y(), dir.x())
}

/// Projects points onto `axis` and returns the `(min, max)` interval.
///
/// Returns `None` for an empty point set.
#[must_use]
pub fn project_interval(points: &[Point], axis: &Vector) -> Option<(f64, f64)> {
    points.iter().map(|p| p.to_vector().dot(axis)).fold(None, |acc, d| {
        Some(match acc {
            None => (d, d),
            Some((lo, hi)) => (lo.min(d), hi.max(d)),
        })
    })
}

/// Returns whether two intervals share more than `tolerance` of length.
///
/// Intervals that only touch at an end do not overlap.
#[must_use]
pub fn intervals_overlap(a: (f64, f64), b: (f64, f64), tolerance: f64) -> bool {
    a.0 < b.1 - tolerance && b.0 < a.1 - tolerance
}

/// Crossing-number test of `point` against the closed polygon in the XY plane.
///
/// Half-open in `y`, so a point on the boundary may land on either side.
#[must_use]
pub fn point_in_polygon_2d(points: &[Point], point: &Point) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let (px, py) = (point.x(), point.y());
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (&points[i], &points[j]);
        if (a.y() > py) != (b.y() > py) {
            let x_cross = (b.x() - a.x()) * (py - a.y()) / (b.y() - a.y()) + a.x();
            if px < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Signed turning angle in degrees at `cur` when walking `prev -> cur -> next`
/// in the XY plane. Positive for a left turn, negative for a right turn,
/// in `(-180, 180]`.
#[must_use]
pub fn turning_angle_2d(prev: &Point, cur: &Point, next: &Point) -> f64 {
    let (ax, ay) = (cur.x() - prev.x(), cur.y() - prev.y());
    let (bx, by) = (next.x() - cur.x(), next.y() - cur.y());
    let cross = ax * by - ay * bx;
    let dot = ax * bx + ay * by;
    cross.atan2(dot).to_degrees()
}

/// Returns whether the closed polygon is convex in the XY plane.
///
/// All non-zero corner cross products must share one sign and the corners
/// must turn once around in total, which rejects self-intersecting stars.
/// Collinear corners are ignored. A polygon with fewer than 3 vertices, or
/// with every vertex collinear, is not convex.
#[must_use]
pub fn is_convex_2d(points: &[Point], tol: &Tolerance) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut turns_left: Option<bool> = None;
    let mut total_turn = 0.0;
    for i in 0..n {
        let prev = &points[(i + n - 1) % n];
        let cur = &points[i];
        let next = &points[(i + 1) % n];
        let cross = cross_2d(prev, cur, next);
        if cross.abs() > tol.zero_length {
            let left = cross > 0.0;
            match turns_left {
                None => turns_left = Some(left),
                Some(expected) if expected != left => return false,
                Some(_) => {}
            }
        }
        total_turn += turning_angle_2d(prev, cur, next);
    }
    turns_left.is_some() && (total_turn.abs() - 360.0).abs() < tol.angular_deg
}

/// Clips `subject` against the convex polygon `clip` (Sutherland-Hodgman).
///
/// The subject may be concave; the clip polygon must be convex but may have
/// either winding. The result is the part of the subject inside the clip
/// polygon, possibly with zero-width slivers when the subject is concave.
/// Their contribution to the area is zero.
#[must_use]
pub fn clip_convex(subject: &[Point], clip: &[Point]) -> Vec<Point> {
    if subject.len() < 3 || clip.len() < 3 {
        return Vec::new();
    }
    let mut clip_ccw = clip.to_vec();
    if signed_area_2d(&clip_ccw) < 0.0 {
        clip_ccw.reverse();
    }

    let mut output = subject.to_vec();
    for i in 0..clip_ccw.len() {
        let e0 = clip_ccw[i];
        let e1 = clip_ccw[(i + 1) % clip_ccw.len()];
        let input = std::mem::take(&mut output);
        if input.is_empty() {
            break;
        }

        let mut prev = input[input.len() - 1];
        for &cur in &input {
            let d_prev = cross_2d(&e0, &e1, &prev);
            let d_cur = cross_2d(&e0, &e1, &cur);
            if d_cur >= 0.0 {
                if d_prev < 0.0 {
                    output.push(lerp(&prev, &cur, d_prev / (d_prev - d_cur)));
                }
                output.push(cur);
            } else if d_prev >= 0.0 {
                output.push(lerp(&prev, &cur, d_prev / (d_prev - d_cur)));
            }
            prev = cur;
        }
    }
    output
}

fn lerp(a: &Point, b: &Point, t: f64) -> Point {
    *a + (*b - *a) * t
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::ZERO_LENGTH_TOLERANCE as TOLERANCE;
    use approx::assert_abs_diff_eq;

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Point> {
        vec![
            Point::xy(x0, y0),
            Point::xy(x0 + size, y0),
            Point::xy(x0 + size, y0 + size),
            Point::xy(x0, y0 + size),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&square(0.0, 0.0, 1.0));
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = square(0.0, 0.0, 1.0);
        pts.reverse();
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point::xy(0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn cross_2d_turn_direction() {
        let o = Point::xy(0.0, 0.0);
        let e = Point::xy(1.0, 0.0);
        assert!(cross_2d(&o, &e, &Point::xy(1.0, 1.0)) > 0.0);
        assert!(cross_2d(&o, &e, &Point::xy(1.0, -1.0)) < 0.0);
        assert!(cross_2d(&o, &e, &Point::xy(2.0, 0.0)).abs() < TOLERANCE);
    }

    #[test]
    fn left_normal_basic() {
        let n = left_normal(&Vector::x_axis());
        assert!((n.x()).abs() < TOLERANCE);
        assert!((n.y() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn projection_interval() {
        let pts = square(1.0, 2.0, 3.0);
        assert_eq!(project_interval(&pts, &Vector::x_axis()), Some((1.0, 4.0)));
        assert_eq!(project_interval(&pts, &Vector::y_axis()), Some((2.0, 5.0)));
        assert_eq!(project_interval(&[], &Vector::x_axis()), None);
    }

    #[test]
    fn interval_overlap_excludes_touching() {
        assert!(intervals_overlap((0.0, 2.0), (1.0, 3.0), 1e-9));
        assert!(!intervals_overlap((0.0, 1.0), (1.0, 3.0), 1e-9));
        assert!(!intervals_overlap((0.0, 1.0), (2.0, 3.0), 1e-9));
        assert!(intervals_overlap((0.0, 10.0), (2.0, 3.0), 1e-9));
    }

    #[test]
    fn crossing_number_point_location() {
        let sq = square(0.0, 0.0, 2.0);
        assert!(point_in_polygon_2d(&sq, &Point::xy(1.0, 1.0)));
        assert!(!point_in_polygon_2d(&sq, &Point::xy(3.0, 1.0)));
        assert!(!point_in_polygon_2d(&sq[..2], &Point::xy(1.0, 0.0)));
    }

    #[test]
    fn turning_angles() {
        let o = Point::xy(0.0, 0.0);
        let e = Point::xy(1.0, 0.0);
        let turn_to = |x: f64, y: f64| turning_angle_2d(&o, &e, &Point::xy(x, y));
        assert_abs_diff_eq!(turn_to(1.0, 1.0), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(turn_to(1.0, -1.0), -90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(turn_to(2.0, 0.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn convexity() {
        let tol = Tolerance::default();
        assert!(is_convex_2d(&square(0.0, 0.0, 1.0), &tol));
        let mut cw = square(0.0, 0.0, 1.0);
        cw.reverse();
        assert!(is_convex_2d(&cw, &tol));
        let arrow = vec![
            Point::xy(0.0, 0.0),
            Point::xy(2.0, 1.0),
            Point::xy(0.0, 2.0),
            Point::xy(1.0, 1.0),
        ];
        assert!(!is_convex_2d(&arrow, &tol));
        let collinear = [0.0, 1.0, 2.0].map(|x| Point::xy(x, 0.0));
        assert!(!is_convex_2d(&collinear, &tol));
    }

    #[test]
    fn star_polygon_is_not_convex() {
        // Pentagram: every corner turns the same way but the boundary winds twice.
        let star: Vec<Point> = (0..5)
            .map(|i| {
                let angle = f64::from(i * 2) * std::f64::consts::TAU / 5.0;
                Point::xy(angle.cos(), angle.sin())
            })
            .collect();
        assert!(!is_convex_2d(&star, &Tolerance::default()));
    }

    #[test]
    fn clip_overlapping_squares() {
        let clipped = clip_convex(&square(0.0, 0.0, 2.0), &square(1.0, 1.0, 2.0));
        assert_abs_diff_eq!(signed_area_2d(&clipped).abs(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn clip_against_clockwise_clip_polygon() {
        let mut clip = square(1.0, 1.0, 2.0);
        clip.reverse();
        let clipped = clip_convex(&square(0.0, 0.0, 2.0), &clip);
        assert_abs_diff_eq!(signed_area_2d(&clipped).abs(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn clip_disjoint_is_empty() {
        let clipped = clip_convex(&square(0.0, 0.0, 1.0), &square(5.0, 5.0, 1.0));
        assert!(signed_area_2d(&clipped).abs() < TOLERANCE);
    }

    #[test]
    fn clip_concave_subject() {
        // L-shape of area 3 clipped by a unit square straddling its notch.
        let l_shape = vec![
            Point::xy(0.0, 0.0),
            Point::xy(2.0, 0.0),
            Point::xy(2.0, 1.0),
            Point::xy(1.0, 1.0),
            Point::xy(1.0, 2.0),
            Point::xy(0.0, 2.0),
        ];
        let clipped = clip_convex(&l_shape, &square(0.5, 0.5, 1.0));
        assert_abs_diff_eq!(signed_area_2d(&clipped).abs(), 0.75, epsilon = 1e-9);
    }
}
