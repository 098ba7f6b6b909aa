#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in viewport (CSS pixel) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box as reported by a bounding-rect query.
///
/// The edge fields and the extent fields are redundant; constructors keep
/// `right == left + width` and `bottom == top + height`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Build a rect from its top-left corner and extents.
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width * 0.5,
            y: self.top + self.height * 0.5,
        }
    }

    /// Scale about the center. See [`scale`].
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Rect {
        scale(*self, factor)
    }

    /// Strict interior test. See [`contains_point`].
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        contains_point(self, pt)
    }
}

/// Squared Euclidean distance. Only used for ranking, so no square root.
#[must_use]
pub fn squared_distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Return `rect` scaled by `factor` about its own center.
///
/// A factor of exactly 1 returns the input untouched.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn scale(rect: Rect, factor: f64) -> Rect {
    if factor == 1.0 {
        return rect;
    }
    let center = rect.center();
    let width = rect.width * factor;
    let height = rect.height * factor;
    let half_w = width * 0.5;
    let half_h = height * 0.5;
    Rect {
        left: center.x - half_w,
        top: center.y - half_h,
        right: center.x + half_w,
        bottom: center.y + half_h,
        width,
        height,
    }
}

/// Strict containment: points on any edge are outside.
#[must_use]
pub fn contains_point(rect: &Rect, pt: Point) -> bool {
    pt.x > rect.left && pt.x < rect.right && pt.y > rect.top && pt.y < rect.bottom
}
