use tracing::trace;

use super::{Point, Tolerance, Vector};

/// Meeting point of two parametric lines `a + t * u` and `c + s * v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametricHit {
    /// Parameter on the first line.
    pub t: f64,
    /// Parameter on the second line.
    pub s: f64,
    /// The meeting point, `a + t * u`.
    pub point: Point,
}

/// Solves `a + t * u = c + s * v` for `t` and `s`.
///
/// With `n = u × v`, the vectors `n × u` and `n × v` lie in the plane
/// of both directions, each perpendicular to one of them. Dotting the
/// equation with `n × u` eliminates `t`; dotting with `n × v` eliminates `s`.
///
/// Returns `None` when either direction is zero, when the directions are
/// aligned (parallel, anti-parallel or collinear overlap), and when the lines
/// are skew in 3D so the two parametric points do not coincide within
/// `tol.linear`. Parameters are not range-checked here.
#[must_use]
pub fn solve_parametric(
    a: &Point,
    u: &Vector,
    c: &Point,
    v: &Vector,
    tol: &Tolerance,
) -> Option<ParametricHit> {
    if u.is_zero_within(tol) || v.is_zero_within(tol) {
        trace!("parametric solve skipped: zero-length direction");
        return None;
    }
    if u.aligned_within(v, tol) {
        trace!(%u, %v, "parametric solve skipped: aligned directions");
        return None;
    }

    let n = u.cross(v);
    let orthog_u = n.cross(u);
    let orthog_v = n.cross(v);

    let s = (*a - *c).dot(&orthog_u) / v.dot(&orthog_u);
    let t = (*c - *a).dot(&orthog_v) / u.dot(&orthog_v);

    let point = *a + *u * t;
    let on_other = *c + *v * s;
    if !point.approx_eq_within(&on_other, tol) {
        trace!(%point, %on_other, "parametric solve rejected: skew lines");
        return None;
    }

    Some(ParametricHit { t, s, point })
}

/// Returns whether `value` lies in `[0, 1]`, widened by `slack` on both ends.
#[must_use]
pub fn in_unit_interval(value: f64, slack: f64) -> bool {
    value >= -slack && value <= 1.0 + slack
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn crossing_lines() {
        let hit = solve_parametric(
            &Point::xy(0.0, 0.0),
            &Vector::xy(2.0, 0.0),
            &Point::xy(1.0, -1.0),
            &Vector::xy(0.0, 2.0),
            &Tolerance::default(),
        )
        .unwrap();
        assert_abs_diff_eq!(hit.t, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.s, 0.5, epsilon = 1e-12);
        assert_eq!(hit.point, Point::xy(1.0, 0.0));
    }

    #[test]
    fn parameters_outside_unit_range_are_returned() {
        let hit = solve_parametric(
            &Point::xy(0.0, 0.0),
            &Vector::xy(1.0, 0.0),
            &Point::xy(5.0, 5.0),
            &Vector::xy(0.0, -1.0),
            &Tolerance::default(),
        )
        .unwrap();
        assert_abs_diff_eq!(hit.t, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.s, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn aligned_directions_have_no_solution() {
        let tol = Tolerance::default();
        let a = Point::xy(0.0, 0.0);
        let east = Vector::xy(1.0, 0.0);
        let above = Point::xy(0.0, 1.0);
        let ahead = Point::xy(2.0, 0.0);

        let parallel = solve_parametric(&a, &east, &above, &(east * 3.0), &tol);
        assert!(parallel.is_none());
        let opposed = solve_parametric(&a, &east, &ahead, &-east, &tol);
        assert!(opposed.is_none());
        let zero = solve_parametric(&a, &Vector::zero(), &ahead, &Vector::y_axis(), &tol);
        assert!(zero.is_none());
    }

    #[test]
    fn skew_lines_have_no_solution() {
        let hit = solve_parametric(
            &Point::new(0.0, 0.0, 0.0),
            &Vector::x_axis(),
            &Point::new(0.0, 0.0, 1.0),
            &Vector::y_axis(),
            &Tolerance::default(),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn lines_crossing_in_3d() {
        let hit = solve_parametric(
            &Point::new(0.0, 0.0, 0.0),
            &Vector::new(1.0, 1.0, 1.0),
            &Point::new(2.0, 0.0, 2.0),
            &Vector::new(-1.0, 1.0, -1.0),
            &Tolerance::default(),
        )
        .unwrap();
        assert_eq!(hit.point, Point::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn unit_interval_slack() {
        assert!(in_unit_interval(0.0, 0.0));
        assert!(in_unit_interval(1.0, 0.0));
        assert!(in_unit_interval(-1e-10, 1e-9));
        assert!(!in_unit_interval(1.1, 1e-9));
    }
}
