use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::clip_convex;
use crate::math::{Point, Vector};
use crate::operations::query::SeparatingAxis;

use super::Polygon;

/// Named reference points of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    LeftBottom,
    RightBottom,
    LeftTop,
    RightTop,
    Center,
    LeftCenter,
    RightCenter,
    TopCenter,
    BottomCenter,
}

impl Anchor {
    /// Every anchor, corners first.
    pub const ALL: [Self; 9] = [
        Self::LeftBottom,
        Self::RightBottom,
        Self::LeftTop,
        Self::RightTop,
        Self::Center,
        Self::LeftCenter,
        Self::RightCenter,
        Self::TopCenter,
        Self::BottomCenter,
    ];

    /// Offset from the center in half-extents along the width and height
    /// axes.
    fn offset(self) -> (f64, f64) {
        match self {
            Self::LeftBottom => (-1.0, -1.0),
            Self::RightBottom => (1.0, -1.0),
            Self::LeftTop => (-1.0, 1.0),
            Self::RightTop => (1.0, 1.0),
            Self::Center => (0.0, 0.0),
            Self::LeftCenter => (-1.0, 0.0),
            Self::RightCenter => (1.0, 0.0),
            Self::TopCenter => (0.0, 1.0),
            Self::BottomCenter => (0.0, -1.0),
        }
    }
}

/// A rectangle spanned by two unit axes, positioned by one of its anchors.
///
/// The axes default to world X and Y. They are normalized on construction
/// and assumed orthogonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
    width_axis: Vector,
    height_axis: Vector,
    origin_point: Point,
    origin_tag: Anchor,
}

impl Rectangle {
    /// Creates an axis-aligned rectangle whose left-bottom corner is at the
    /// origin.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidOperand` if either size is negative,
    /// NaN or infinite.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        check_extent("rectangle width", width)?;
        check_extent("rectangle height", height)?;
        let rect = Self::axis_aligned(width, height, Point::origin(), Anchor::LeftBottom);
        Ok(rect)
    }

    /// Unchecked axis-aligned constructor for sizes derived from valid
    /// geometry.
    pub(crate) fn axis_aligned(
        width: f64,
        height: f64,
        origin_point: Point,
        origin_tag: Anchor,
    ) -> Self {
        Self {
            width,
            height,
            width_axis: Vector::x_axis(),
            height_axis: Vector::y_axis(),
            origin_point,
            origin_tag,
        }
    }

    /// Replaces the width and height axes.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ConstructionError` if either axis has zero
    /// length.
    pub fn with_axes(mut self, width_axis: Vector, height_axis: Vector) -> Result<Self> {
        let width_axis = normalize_axis(width_axis, "width")?;
        let height_axis = normalize_axis(height_axis, "height")?;
        if !width_axis.orthogonal(&height_axis) {
            debug!(%width_axis, %height_axis, "non-orthogonal rectangle axes");
        }
        self.width_axis = width_axis;
        self.height_axis = height_axis;
        Ok(self)
    }

    /// Moves the rectangle so that the anchor `origin_tag` sits at
    /// `origin_point`.
    #[must_use]
    pub fn with_origin(mut self, origin_point: Point, origin_tag: Anchor) -> Self {
        self.origin_point = origin_point;
        self.origin_tag = origin_tag;
        self
    }

    /// Returns the extent along the width axis.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the extent along the height axis.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the unit width axis.
    #[must_use]
    pub fn width_axis(&self) -> &Vector {
        &self.width_axis
    }

    /// Returns the unit height axis.
    #[must_use]
    pub fn height_axis(&self) -> &Vector {
        &self.height_axis
    }

    /// Returns the point the origin anchor sits at.
    #[must_use]
    pub fn origin_point(&self) -> &Point {
        &self.origin_point
    }

    /// Returns the anchor placed at the origin point.
    #[must_use]
    pub fn origin_tag(&self) -> Anchor {
        self.origin_tag
    }

    /// Returns `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns `2 * (width + height)`.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point {
        self.anchor_point(Anchor::Center)
    }

    /// Returns the position of `tag`.
    ///
    /// Steps from the origin point back to the center, then out to the
    /// requested anchor, along the rectangle's own axes.
    #[must_use]
    pub fn anchor_point(&self, tag: Anchor) -> Point {
        let (ox, oy) = self.origin_tag.offset();
        let (tx, ty) = tag.offset();
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        self.origin_point
            + self.width_axis * ((tx - ox) * half_w)
            + self.height_axis * ((ty - oy) * half_h)
    }

    /// The corners in the order left-bottom, right-bottom, right-top,
    /// left-top.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            self.anchor_point(Anchor::LeftBottom),
            self.anchor_point(Anchor::RightBottom),
            self.anchor_point(Anchor::RightTop),
            self.anchor_point(Anchor::LeftTop),
        ]
    }

    /// Converts to a polygon over [`Rectangle::corners`].
    #[must_use]
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.corners().to_vec())
    }

    /// Returns whether `point` lies inside.
    ///
    /// Half-open: the left and top edges belong to the rectangle, the right
    /// and bottom edges do not.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        let left_bottom = self.anchor_point(Anchor::LeftBottom);
        let right_top = self.anchor_point(Anchor::RightTop);
        let along_width = (*point - left_bottom).dot(&self.width_axis);
        let below_top = -(*point - right_top).dot(&self.height_axis);
        (0.0..self.width).contains(&along_width) && (0.0..self.height).contains(&below_top)
    }

    /// Returns whether the two rectangles overlap. Touching edges do not.
    #[must_use]
    pub fn intersects_with(&self, other: &Self) -> bool {
        let (a, b) = (self.corners(), other.corners());
        let aligned = self.width_axis.aligned(&other.width_axis)
            && self.height_axis.aligned(&other.height_axis);
        let axes = if aligned {
            vec![self.width_axis, self.height_axis]
        } else {
            vec![
                self.width_axis,
                self.height_axis,
                other.width_axis,
                other.height_axis,
            ]
        };
        SeparatingAxis::new(&a, &b).with_axes(axes).execute()
    }

    /// Area of the region shared with `other`.
    #[must_use]
    pub fn intersecting_area(&self, other: &Self) -> f64 {
        let shared = clip_convex(&self.corners(), &other.corners());
        Polygon::new(shared).area()
    }
}

fn normalize_axis(axis: Vector, which: &str) -> Result<Vector> {
    axis.normalize().map_err(|_| {
        GeometryError::ConstructionError(format!("rectangle {which} axis has zero length"))
    })
}

fn check_extent(operation: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidOperand { operation, value })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rect(w: f64, h: f64, x: f64, y: f64) -> Rectangle {
        Rectangle::new(w, h)
            .unwrap()
            .with_origin(Point::xy(x, y), Anchor::LeftBottom)
    }

    fn diagonal(size: f64) -> Rectangle {
        Rectangle::new(size, size)
            .unwrap()
            .with_axes(Vector::xy(1.0, 1.0), Vector::xy(-1.0, 1.0))
            .unwrap()
    }

    #[test]
    fn invalid_sizes() {
        assert!(matches!(
            Rectangle::new(-1.0, 1.0),
            Err(GeometryError::InvalidOperand { .. })
        ));
        assert!(Rectangle::new(1.0, f64::INFINITY).is_err());
        assert!(Rectangle::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn zero_axis_fails() {
        let r = Rectangle::new(1.0, 1.0).unwrap();
        assert!(matches!(
            r.with_axes(Vector::zero(), Vector::y_axis()),
            Err(GeometryError::ConstructionError(_))
        ));
    }

    #[test]
    fn metrics() {
        let r = rect(4.0, 2.0, 0.0, 0.0);
        assert_abs_diff_eq!(r.area(), 8.0);
        assert_abs_diff_eq!(r.perimeter(), 12.0);
        assert_abs_diff_eq!(r.to_polygon().area(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn anchors_from_left_bottom() {
        let r = rect(4.0, 2.0, 1.0, 1.0);
        assert_eq!(r.center(), Point::xy(3.0, 2.0));
        assert_eq!(r.anchor_point(Anchor::RightTop), Point::xy(5.0, 3.0));
        assert_eq!(r.anchor_point(Anchor::TopCenter), Point::xy(3.0, 3.0));
        assert_eq!(r.anchor_point(Anchor::LeftCenter), Point::xy(1.0, 2.0));
    }

    #[test]
    fn anchors_from_center() {
        let r = Rectangle::new(2.0, 2.0)
            .unwrap()
            .with_origin(Point::origin(), Anchor::Center);
        assert_eq!(r.anchor_point(Anchor::LeftBottom), Point::xy(-1.0, -1.0));
        assert_eq!(r.anchor_point(Anchor::BottomCenter), Point::xy(0.0, -1.0));
        for tag in Anchor::ALL {
            let moved = r.with_origin(r.anchor_point(tag), tag);
            assert_eq!(moved.center(), Point::origin());
        }
    }

    #[test]
    fn rotated_corners() {
        let r = diagonal(2f64.sqrt());
        assert!(r.width_axis().is_unit_vector());
        let [lb, rb, rt, lt] = r.corners();
        assert_eq!(lb, Point::xy(0.0, 0.0));
        assert_eq!(rb, Point::xy(1.0, 1.0));
        assert_eq!(rt, Point::xy(0.0, 2.0));
        assert_eq!(lt, Point::xy(-1.0, 1.0));
    }

    #[test]
    fn containment_is_half_open() {
        let r = rect(2.0, 1.0, 0.0, 0.0);
        assert!(r.contains_point(&Point::xy(1.0, 0.5)));
        assert!(r.contains_point(&Point::xy(0.0, 0.5)));
        assert!(r.contains_point(&Point::xy(1.0, 1.0)));
        assert!(!r.contains_point(&Point::xy(2.0, 0.5)));
        assert!(!r.contains_point(&Point::xy(1.0, 0.0)));
        assert!(!r.contains_point(&Point::xy(3.0, 0.5)));
    }

    #[test]
    fn containment_in_rotated_rectangle() {
        let r = diagonal(2f64.sqrt());
        assert!(r.contains_point(&Point::xy(0.0, 1.0)));
        assert!(!r.contains_point(&Point::xy(0.9, 0.1)));
        assert!(!r.contains_point(&Point::xy(1.0, 0.0)));
    }

    #[test]
    fn aligned_intersection() {
        let a = rect(2.0, 2.0, 0.0, 0.0);
        assert!(a.intersects_with(&rect(2.0, 2.0, 1.0, 1.0)));
        assert!(!a.intersects_with(&rect(2.0, 2.0, 2.0, 0.0)));
        assert!(!a.intersects_with(&rect(1.0, 1.0, 5.0, 5.0)));
        assert!(a.intersects_with(&rect(0.5, 0.5, 0.5, 0.5)));
    }

    fn diagonal_at(x: f64, y: f64) -> Rectangle {
        diagonal(2f64.sqrt())
            .with_origin(Point::xy(x, y), Anchor::LeftBottom)
    }

    #[test]
    fn rotated_intersection() {
        let a = rect(1.0, 1.0, 0.0, 0.0);
        assert!(!a.intersects_with(&diagonal_at(1.6, 0.6)));
        assert!(a.intersects_with(&diagonal_at(1.4, 0.4)));
    }

    #[test]
    fn rotated_rectangles_sharing_axes() {
        let a = diagonal_at(0.0, 0.0);

        let touching = diagonal_at(1.0, 1.0);
        assert_eq!(touching.anchor_point(Anchor::LeftTop), Point::xy(0.0, 2.0));
        assert!(!a.intersects_with(&touching));
        assert!(!touching.intersects_with(&a));
        assert_abs_diff_eq!(a.intersecting_area(&touching), 0.0, epsilon = 1e-9);

        let overlapping = diagonal_at(0.5, 0.5);
        assert!(a.intersects_with(&overlapping));
        assert!(overlapping.intersects_with(&a));
        assert_abs_diff_eq!(a.intersecting_area(&overlapping), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn overlap_area() {
        let a = rect(2.0, 2.0, 0.0, 0.0);
        let shifted = a.intersecting_area(&rect(2.0, 2.0, 1.0, 1.0));
        assert_abs_diff_eq!(shifted, 1.0, epsilon = 1e-9);
        let apart = a.intersecting_area(&rect(1.0, 1.0, 5.0, 5.0));
        assert_abs_diff_eq!(apart, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.intersecting_area(&a), 4.0, epsilon = 1e-9);
    }
}
