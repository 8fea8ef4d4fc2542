use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::AbsDiffEq;

use super::tolerance::{Tolerance, LINEAR_TOLERANCE};
use super::vector::{check_divisor, fmt_coords, Vector};
use crate::error::{GeometryError, Result};

/// A location in 3D space.
///
/// Planar code uses `z = 0` (see [`Point::xy`]). Subtracting two points
/// yields the [`Vector`] between them; adding a vector to a point moves it.
///
/// Equality is approximate, per axis, with [`LINEAR_TOLERANCE`].
#[derive(Debug, Clone, Copy)]
pub struct Point(nalgebra::Point3<f64>);

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(nalgebra::Point3::new(x, y, z))
    }

    /// Creates a planar point with `z = 0`.
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// The origin `(0, 0, 0)`.
    #[must_use]
    pub fn origin() -> Self {
        Self(nalgebra::Point3::origin())
    }

    /// Returns the X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Returns the Z coordinate.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Returns the underlying `nalgebra` point.
    #[must_use]
    pub fn as_nalgebra(&self) -> &nalgebra::Point3<f64> {
        &self.0
    }

    /// Position vector from the origin.
    #[must_use]
    pub fn to_vector(&self) -> Vector {
        self.0.coords.into()
    }

    /// Checked scalar division of the coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DivisionByZero` if `divisor` is zero and
    /// `GeometryError::InvalidOperand` if it is NaN or infinite.
    pub fn divide(&self, divisor: f64) -> Result<Self> {
        check_divisor(divisor)?;
        Ok(Self((self.0.coords / divisor).into()))
    }

    /// Checked scalar multiplication of the coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidOperand` if `factor` is NaN or infinite.
    pub fn scale(&self, factor: f64) -> Result<Self> {
        if !factor.is_finite() {
            return Err(GeometryError::InvalidOperand {
                operation: "scale",
                value: factor,
            });
        }
        Ok(*self * factor)
    }

    /// Euclidean distance between the two points.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (*other - *self).length()
    }

    /// Midpoint between the two points.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self(nalgebra::center(&self.0, &other.0))
    }

    /// Moves `distance` along `direction`: `self + direction * distance`.
    ///
    /// The direction is used as given; pass a unit vector if `distance`
    /// should be a metric length.
    #[must_use]
    pub fn point_at_distance(&self, distance: f64, direction: &Vector) -> Self {
        *self + *direction * distance
    }

    /// Signed scalar projection of `other - self` onto `direction`.
    ///
    /// The direction is not normalized: the result scales with its length,
    /// so it is a true distance only for unit directions.
    #[must_use]
    pub fn directional_distance_to(&self, other: &Self, direction: &Vector) -> f64 {
        (*other - *self).dot(direction)
    }

    /// Angle in radians of the direction from `self` to `other` in the XY
    /// plane, `atan2(dy, dx)`, in `(-pi, pi]`.
    #[must_use]
    pub fn polar_angle(&self, other: &Self) -> f64 {
        (other.y() - self.y()).atan2(other.x() - self.x())
    }

    /// Approximate equality with an explicit linear tolerance.
    #[must_use]
    pub fn approx_eq_within(&self, other: &Self, tol: &Tolerance) -> bool {
        self.abs_diff_eq(other, tol.linear)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl From<nalgebra::Point3<f64>> for Point {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Self(p)
    }
}

impl From<Point> for nalgebra::Point3<f64> {
    fn from(p: Point) -> Self {
        p.0
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::xy(x, y)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Vector {
        (self.0 - rhs.0).into()
    }
}

impl Add<Vector> for Point {
    type Output = Self;

    fn add(self, rhs: Vector) -> Self {
        Self(self.0 + *rhs.as_nalgebra())
    }
}

impl Sub<Vector> for Point {
    type Output = Self;

    fn sub(self, rhs: Vector) -> Self {
        Self(self.0 - *rhs.as_nalgebra())
    }
}

/// Coordinate-wise sum of two points.
impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self((self.0.coords + rhs.0.coords).into())
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self((self.0.coords * rhs).into())
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self((-self.0.coords).into())
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        LINEAR_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.coords.abs_diff_eq(&other.0.coords, epsilon)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_coords(f, self.x(), self.y(), self.z())
    }
}
