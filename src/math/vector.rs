use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::AbsDiffEq;

use super::tolerance::{Tolerance, LINEAR_TOLERANCE};
use crate::error::{GeometryError, Result};

/// Side of one direction relative to another, seen from a plane normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A displacement or direction in 3D space.
///
/// Planar code uses `z = 0` (see [`Vector::xy`]); the cross product of two
/// planar vectors then only carries a `z` component, which encodes their
/// orientation.
///
/// Equality is approximate: two vectors compare equal when every axis
/// differs by at most [`LINEAR_TOLERANCE`]. Use [`AbsDiffEq`] for a
/// different epsilon.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector(nalgebra::Vector3<f64>);

impl Vector {
    /// Creates a new vector.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(nalgebra::Vector3::new(x, y, z))
    }

    /// Creates a planar vector with `z = 0`.
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self(nalgebra::Vector3::zeros())
    }

    /// Unit vector along the world X axis.
    #[must_use]
    pub fn x_axis() -> Self {
        Self(nalgebra::Vector3::x())
    }

    /// Unit vector along the world Y axis.
    #[must_use]
    pub fn y_axis() -> Self {
        Self(nalgebra::Vector3::y())
    }

    /// Unit vector along the world Z axis.
    #[must_use]
    pub fn z_axis() -> Self {
        Self(nalgebra::Vector3::z())
    }

    /// Returns the X component.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Returns the Z component.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Returns the underlying `nalgebra` vector.
    #[must_use]
    pub fn as_nalgebra(&self) -> &nalgebra::Vector3<f64> {
        &self.0
    }

    /// Euclidean length, `sqrt(x² + y² + z²)`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.0.norm()
    }

    /// Squared length, cheaper than [`Vector::length`].
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.0.norm_squared()
    }

    /// Returns whether the length is within the default zero-length threshold.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(&Tolerance::DEFAULT)
    }

    /// Returns whether the length is within `tol.zero_length`.
    #[must_use]
    pub fn is_zero_within(&self, tol: &Tolerance) -> bool {
        self.length() <= tol.zero_length
    }

    /// Returns whether the length is within [`LINEAR_TOLERANCE`] of one.
    #[must_use]
    pub fn is_unit_vector(&self) -> bool {
        (self.length() - 1.0).abs() <= LINEAR_TOLERANCE
    }

    /// Returns the unit vector with the same direction.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateVector` if the length is within
    /// `1e-9` of zero.
    pub fn normalize(&self) -> Result<Self> {
        self.normalize_within(&Tolerance::DEFAULT)
    }

    /// Same as [`Vector::normalize`] with an explicit zero-length threshold.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateVector` if the length is within
    /// `tol.zero_length` of zero.
    pub fn normalize_within(&self, tol: &Tolerance) -> Result<Self> {
        let len = self.length();
        if len <= tol.zero_length {
            return Err(GeometryError::DegenerateVector(
                "cannot normalize a zero-length vector",
            ));
        }
        Ok(Self(self.0 / len))
    }

    /// Checked scalar multiplication.
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
        Ok(Self(self.0 * factor))
    }

    /// Checked scalar division.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DivisionByZero` if `divisor` is zero and
    /// `GeometryError::InvalidOperand` if it is NaN or infinite.
    pub fn divide(&self, divisor: f64) -> Result<Self> {
        check_divisor(divisor)?;
        Ok(Self(self.0 / divisor))
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Cross product `self × other`. Order matters: `u × v = -(v × u)`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self(self.0.cross(&other.0))
    }

    /// Angle between the two vectors in degrees, in `[0, 180]`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVectorOperand` if either vector has zero
    /// length.
    pub fn angle_between(&self, other: &Self) -> Result<f64> {
        self.angle_between_within(other, &Tolerance::DEFAULT)
    }

    /// Same as [`Vector::angle_between`] with an explicit zero-length
    /// threshold.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVectorOperand` if either length is within
    /// `tol.zero_length` of zero.
    pub fn angle_between_within(&self, other: &Self, tol: &Tolerance) -> Result<f64> {
        let (len_self, len_other) = (self.length(), other.length());
        if len_self <= tol.zero_length || len_other <= tol.zero_length {
            return Err(GeometryError::ZeroVectorOperand);
        }
        // Rounding can push the cosine slightly outside [-1, 1].
        let cos_theta = (self.dot(other) / (len_self * len_other)).clamp(-1.0, 1.0);
        Ok(cos_theta.acos().to_degrees())
    }

    /// Returns whether the vectors point the same way, within 1°.
    ///
    /// Always false when either vector is zero.
    #[must_use]
    pub fn parallel(&self, other: &Self) -> bool {
        self.parallel_within(other, &Tolerance::DEFAULT)
    }

    /// Returns whether the vectors point the same way, within
    /// `tol.angular_deg`.
    #[must_use]
    pub fn parallel_within(&self, other: &Self, tol: &Tolerance) -> bool {
        self.angle_between_within(other, tol)
            .is_ok_and(|angle| angle < tol.angular_deg)
    }

    /// Returns whether the vectors point opposite ways, within 1°.
    ///
    /// Always false when either vector is zero.
    #[must_use]
    pub fn anti_parallel(&self, other: &Self) -> bool {
        self.anti_parallel_within(other, &Tolerance::DEFAULT)
    }

    /// Returns whether the vectors point opposite ways, within
    /// `tol.angular_deg`.
    #[must_use]
    pub fn anti_parallel_within(&self, other: &Self, tol: &Tolerance) -> bool {
        self.angle_between_within(other, tol)
            .is_ok_and(|angle| (angle - 180.0).abs() < tol.angular_deg)
    }

    /// Parallel or anti-parallel.
    #[must_use]
    pub fn aligned(&self, other: &Self) -> bool {
        self.aligned_within(other, &Tolerance::DEFAULT)
    }

    /// Parallel or anti-parallel under `tol`.
    #[must_use]
    pub fn aligned_within(&self, other: &Self, tol: &Tolerance) -> bool {
        self.parallel_within(other, tol) || self.anti_parallel_within(other, tol)
    }

    /// Returns whether the vectors are perpendicular, within 1°.
    ///
    /// Always false when either vector is zero.
    #[must_use]
    pub fn orthogonal(&self, other: &Self) -> bool {
        self.orthogonal_within(other, &Tolerance::DEFAULT)
    }

    /// Returns whether the vectors are perpendicular, within
    /// `tol.angular_deg`.
    #[must_use]
    pub fn orthogonal_within(&self, other: &Self, tol: &Tolerance) -> bool {
        self.angle_between_within(other, tol)
            .is_ok_and(|angle| (angle - 90.0).abs() < tol.angular_deg)
    }

    /// Side of `other` relative to `self`, seen from `plane_normal`.
    ///
    /// `Right` when `self × other` is anti-parallel to the normal, `Left`
    /// otherwise (including the aligned case, where the cross product is
    /// zero).
    #[must_use]
    pub fn relative_position(&self, other: &Self, plane_normal: &Self) -> Side {
        if plane_normal.anti_parallel(&self.cross(other)) {
            Side::Right
        } else {
            Side::Left
        }
    }

    /// Area of the parallelogram spanned by the two vectors, `|self × other|`.
    #[must_use]
    pub fn parallelogram_area(&self, other: &Self) -> f64 {
        self.cross(other).length()
    }

    /// Approximate equality with an explicit linear tolerance.
    #[must_use]
    pub fn approx_eq_within(&self, other: &Self, tol: &Tolerance) -> bool {
        self.abs_diff_eq(other, tol.linear)
    }
}

/// Validates a scalar divisor.
pub(crate) fn check_divisor(divisor: f64) -> Result<()> {
    if !divisor.is_finite() {
        return Err(GeometryError::InvalidOperand {
            operation: "divide",
            value: divisor,
        });
    }
    if divisor == 0.0 {
        return Err(GeometryError::DivisionByZero);
    }
    Ok(())
}

impl From<nalgebra::Vector3<f64>> for Vector {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self(v)
    }
}

impl From<Vector> for nalgebra::Vector3<f64> {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        LINEAR_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_coords(f, self.x(), self.y(), self.z())
    }
}

/// Writes `(x, y)` for planar coordinates and `(x, y, z)` otherwise.
pub(crate) fn fmt_coords(f: &mut fmt::Formatter<'_>, x: f64, y: f64, z: f64) -> fmt::Result {
    if z == 0.0 {
        write!(f, "({x}, {y})")
    } else {
        write!(f, "({x}, {y}, {z})")
    }
}
