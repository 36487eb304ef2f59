//! Basic geometric types shared across the drawing pipeline.
//!
//! Coordinates are `f64` model-space values (meters along the bridge axis,
//! meters of level above datum). The drawing pipeline is y-up; output
//! backends that are y-down (SVG, raster) flip during serialization.

/// A point in drawing space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(self) -> f64 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point.
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point.
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates.
///
/// An empty `Bounds` (no points included yet) reports itself via
/// [`Bounds::is_empty`]; extending an empty bounds with a point makes the
/// bounds collapse onto that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds {
    /// Creates an empty bounds that contains no points.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Creates a bounds from explicit extents.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns true if no point has been included yet.
    pub fn is_empty(self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Returns the minimum x-coordinate of the bounds.
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds.
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds.
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds.
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds (zero when empty).
    pub fn width(self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    /// Returns the height of the bounds (zero when empty).
    pub fn height(self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max_y - self.min_y
        }
    }

    /// Extends the bounds to include the given point.
    pub fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x());
        self.min_y = self.min_y.min(point.y());
        self.max_x = self.max_x.max(point.x());
        self.max_y = self.max_y.max(point.y());
    }

    /// Returns the union of this bounds with another.
    pub fn union(self, other: Bounds) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns a bounds grown by `margin` on every side.
    pub fn expand(self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 2.0);

        let sum = a.add_point(b);
        assert_approx_eq!(f64, sum.x(), 4.0);
        assert_approx_eq!(f64, sum.y(), 6.0);

        let diff = a.sub_point(b);
        assert_approx_eq!(f64, diff.x(), 2.0);
        assert_approx_eq!(f64, diff.y(), 2.0);

        let mid = a.midpoint(b);
        assert_approx_eq!(f64, mid.x(), 2.0);
        assert_approx_eq!(f64, mid.y(), 3.0);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_approx_eq!(f64, a.distance_to(b), 5.0);
    }

    #[test]
    fn test_bounds_include() {
        let mut bounds = Bounds::empty();
        assert!(bounds.is_empty());

        bounds.include(Point::new(2.0, 3.0));
        assert!(!bounds.is_empty());
        assert_approx_eq!(f64, bounds.width(), 0.0);

        bounds.include(Point::new(-1.0, 8.0));
        assert_approx_eq!(f64, bounds.min_x(), -1.0);
        assert_approx_eq!(f64, bounds.max_x(), 2.0);
        assert_approx_eq!(f64, bounds.width(), 3.0);
        assert_approx_eq!(f64, bounds.height(), 5.0);
    }

    #[test]
    fn test_bounds_union_and_expand() {
        let a = Bounds::new(0.0, 0.0, 10.0, 5.0);
        let b = Bounds::new(-2.0, 1.0, 4.0, 9.0);

        let u = a.union(b);
        assert_approx_eq!(f64, u.min_x(), -2.0);
        assert_approx_eq!(f64, u.max_x(), 10.0);
        assert_approx_eq!(f64, u.max_y(), 9.0);

        let e = a.expand(1.5);
        assert_approx_eq!(f64, e.min_x(), -1.5);
        assert_approx_eq!(f64, e.max_y(), 6.5);
    }

    #[test]
    fn test_empty_bounds_has_zero_extent() {
        let bounds = Bounds::empty();
        assert_approx_eq!(f64, bounds.width(), 0.0);
        assert_approx_eq!(f64, bounds.height(), 0.0);
    }
}
