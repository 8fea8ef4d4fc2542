/// Default absolute tolerance for coordinate and length comparisons.
pub const LINEAR_TOLERANCE: f64 = 1e-5;

/// Default length under which a vector counts as the zero vector.
pub const ZERO_LENGTH_TOLERANCE: f64 = 1e-9;

/// Default angular window, in degrees, for parallel/orthogonal tests.
pub const ANGULAR_TOLERANCE_DEG: f64 = 1.0;

/// Thresholds controlling approximate comparisons.
///
/// Every tolerance-sensitive query uses [`Tolerance::default`] unless the
/// caller supplies one explicitly through a `*_within` method or a
/// `with_tolerance` builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Absolute tolerance for coordinates and lengths.
    pub linear: f64,
    /// Length under which a vector is treated as zero. Also used as slack
    /// on intersection parameters.
    pub zero_length: f64,
    /// Angular window in degrees.
    pub angular_deg: f64,
}

impl Tolerance {
    /// The default thresholds as a constant.
    pub const DEFAULT: Self = Self {
        linear: LINEAR_TOLERANCE,
        zero_length: ZERO_LENGTH_TOLERANCE,
        angular_deg: ANGULAR_TOLERANCE_DEG,
    };

    /// Returns a copy with a different linear tolerance.
    #[must_use]
    pub fn with_linear(mut self, linear: f64) -> Self {
        self.linear = linear;
        self
    }

    /// Returns a copy with a different zero-length threshold.
    #[must_use]
    pub fn with_zero_length(mut self, zero_length: f64) -> Self {
        self.zero_length = zero_length;
        self
    }

    /// Returns a copy with a different angular window.
    #[must_use]
    pub fn with_angular_deg(mut self, angular_deg: f64) -> Self {
        self.angular_deg = angular_deg;
        self
    }

    /// Returns whether two scalars are equal within the linear tolerance.
    #[must_use]
    pub fn eq_linear(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
