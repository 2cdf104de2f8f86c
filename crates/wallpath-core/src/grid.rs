//! Bounded rectangular grids with permanent holes and per-cell entry costs.
//!
//! [`RectGrid`] answers bounds and passability queries and enumerates the
//! four axis-aligned neighbours of a cell. [`WeightedGrid`] adds the cost of
//! entering each cell (default 1). Queries never mutate; holes and weights
//! change only through the explicit editing methods.

use std::collections::{HashMap, HashSet};

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::region::HoleRegion;

/// Cost of entering a cell that has no explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A `width`×`height` grid whose cells are passable unless listed as holes.
#[derive(Debug, Clone, PartialEq)]
pub struct RectGrid {
    width: i32,
    height: i32,
    holes: HashSet<Point>,
}

impl RectGrid {
    /// Create a grid with the given hole regions punched out.
    ///
    /// Fails on negative dimensions or a malformed region. Holes outside the
    /// grid are recorded but have no effect.
    pub fn new(width: i32, height: i32, holes: &[HoleRegion]) -> Result<Self, GridError> {
        if width < 0 || height < 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let mut grid = Self {
            width,
            height,
            holes: HashSet::new(),
        };
        grid.punch_holes(holes)?;
        Ok(grid)
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The grid extent as a half-open range anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `0 <= p.x < width` and `0 <= p.y < height`.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        0 <= p.x && p.x < self.width && 0 <= p.y && p.y < self.height
    }

    /// Whether `p` is not a hole. Bounds are not checked.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        !self.holes.contains(&p)
    }

    /// Whether `p` is a hole.
    #[inline]
    pub fn is_hole(&self, p: Point) -> bool {
        self.holes.contains(&p)
    }

    /// The current hole set.
    pub fn holes(&self) -> &HashSet<Point> {
        &self.holes
    }

    /// Append the in-bounds, passable unit-step neighbours of `p` to `buf`.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.in_bounds(n))
                .filter(|&n| self.is_passable(n)),
        );
    }

    /// Make every cell covered by `regions` impassable.
    ///
    /// All regions are validated before any cell changes.
    pub fn punch_holes(&mut self, regions: &[HoleRegion]) -> Result<(), GridError> {
        validate(regions)?;
        for region in regions {
            self.holes.extend(region.range());
        }
        Ok(())
    }

    /// Make every cell covered by `regions` passable again.
    ///
    /// All regions are validated before any cell changes.
    pub fn patch_holes(&mut self, regions: &[HoleRegion]) -> Result<(), GridError> {
        validate(regions)?;
        for region in regions {
            for p in region.range() {
                self.holes.remove(&p);
            }
        }
        Ok(())
    }
}

fn validate(regions: &[HoleRegion]) -> Result<(), GridError> {
    match regions.iter().find(|r| r.is_malformed()) {
        Some(bad) => Err(GridError::MalformedRegion(*bad)),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// WeightedGrid
// ---------------------------------------------------------------------------

/// A [`RectGrid`] with a cost for entering each cell.
///
/// Weights must be finite and positive. This is a caller contract and is not
/// checked: zero or negative weights make search results meaningless.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGrid {
    grid: RectGrid,
    weights: HashMap<Point, f64>,
}

impl WeightedGrid {
    /// Create a weighted grid where every cell costs [`DEFAULT_WEIGHT`].
    pub fn new(width: i32, height: i32, holes: &[HoleRegion]) -> Result<Self, GridError> {
        Ok(Self::from_grid(RectGrid::new(width, height, holes)?))
    }

    /// Wrap an existing grid with unit weights.
    pub fn from_grid(grid: RectGrid) -> Self {
        Self {
            grid,
            weights: HashMap::new(),
        }
    }

    /// Build a grid from its configuration.
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        let mut wg = Self::new(config.width, config.height, &config.holes)?;
        for w in &config.weights {
            wg.set_weight(Point::from(w.at), w.cost);
        }
        Ok(wg)
    }

    /// The underlying hole grid.
    pub fn grid(&self) -> &RectGrid {
        &self.grid
    }

    /// Mutable access to the underlying hole grid.
    pub fn grid_mut(&mut self) -> &mut RectGrid {
        &mut self.grid
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.grid.in_bounds(p)
    }

    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.grid.is_passable(p)
    }

    /// See [`RectGrid::neighbors`].
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.grid.neighbors(p, buf);
    }

    /// See [`RectGrid::punch_holes`].
    pub fn punch_holes(&mut self, regions: &[HoleRegion]) -> Result<(), GridError> {
        self.grid.punch_holes(regions)
    }

    /// See [`RectGrid::patch_holes`].
    pub fn patch_holes(&mut self, regions: &[HoleRegion]) -> Result<(), GridError> {
        self.grid.patch_holes(regions)
    }

    /// Cost of entering `p`.
    #[inline]
    pub fn weight(&self, p: Point) -> f64 {
        self.weights.get(&p).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// Set the cost of entering `p`.
    pub fn set_weight(&mut self, p: Point, cost: f64) {
        self.weights.insert(p, cost);
    }

    /// Reset `p` to the default cost.
    pub fn clear_weight(&mut self, p: Point) {
        self.weights.remove(&p);
    }

    /// Explicitly weighted cells.
    pub fn weights(&self) -> &HashMap<Point, f64> {
        &self.weights
    }

    /// Cost of stepping from `_from` into `to`: the weight of `to`.
    #[inline]
    pub fn cost(&self, _from: Point, to: Point) -> f64 {
        self.weight(to)
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// An explicit entry cost for one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellWeight {
    pub at: [i32; 2],
    pub cost: f64,
}

/// Declarative description of a [`WeightedGrid`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub holes: Vec<HoleRegion>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weights: Vec<CellWeight>,
}
