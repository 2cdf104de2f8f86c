//! Rectangular hole regions.

use crate::geom::{Point, Range};
use std::fmt;

/// An inclusive rectangle of cells, used to punch or patch holes.
///
/// A region without `bottom_right` covers the single cell at `top_left`.
/// With the `serde` feature the wire shape is
/// `{"topLeft": [x, y], "bottomRight": [x, y]}`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HoleRegion {
    pub top_left: [i32; 2],
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub bottom_right: Option<[i32; 2]>,
}

impl HoleRegion {
    /// A region covering exactly one cell.
    pub const fn cell(p: Point) -> Self {
        Self {
            top_left: [p.x, p.y],
            bottom_right: None,
        }
    }

    /// A region covering every cell from `top_left` to `bottom_right`,
    /// both inclusive.
    pub const fn rect(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left: [top_left.x, top_left.y],
            bottom_right: Some([bottom_right.x, bottom_right.y]),
        }
    }

    /// Whether the bottom-right corner lies left of or above the top-left.
    pub fn is_malformed(&self) -> bool {
        match self.bottom_right {
            Some([bx, by]) => bx < self.top_left[0] || by < self.top_left[1],
            None => false,
        }
    }

    /// The covered cells as a half-open range.
    ///
    /// A malformed region yields an empty range.
    pub fn range(&self) -> Range {
        let [x0, y0] = self.top_left;
        let [x1, y1] = self.bottom_right.unwrap_or(self.top_left);
        if self.is_malformed() {
            return Range::default();
        }
        Range::new(x0, y0, x1 + 1, y1 + 1)
    }
}

impl fmt::Display for HoleRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x0, y0] = self.top_left;
        match self.bottom_right {
            Some([x1, y1]) => write!(f, "({x0}, {y0})..=({x1}, {y1})"),
            None => write!(f, "({x0}, {y0})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_region() {
        let r = HoleRegion::cell(Point::new(4, 7));
        assert_eq!(r.range(), Range::new(4, 7, 5, 8));
        assert_eq!(r.range().len(), 1);
    }

    #[test]
    fn rect_region_is_inclusive() {
        let r = HoleRegion::rect(Point::new(2, 2), Point::new(5, 4));
        let rng = r.range();
        assert_eq!(rng.len(), 4 * 3);
        assert!(rng.contains(Point::new(5, 4)));
        assert!(!rng.contains(Point::new(6, 4)));
    }

    #[test]
    fn inverted_region_is_malformed() {
        let r = HoleRegion::rect(Point::new(3, 3), Point::new(2, 5));
        assert!(r.is_malformed());
        assert!(r.range().is_empty());
        assert!(!HoleRegion::cell(Point::new(-1, -1)).is_malformed());
    }
}
