use wallpath_core::Point;

use crate::distance::euclidean;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append the passable, in-bounds neighbors of `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be finite and > 0.
    fn cost(&self, from: Point, to: Point) -> f64;
}

/// Full A* pather with a heuristic.
///
/// The default estimate is the Euclidean distance, which never
/// overestimates on grids whose weights are all at least 1. With weights
/// below 1 it may overestimate and the returned path is then not
/// guaranteed optimal.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}

/// Replaces the heuristic of a [`WeightedPather`] with a closure.
///
/// ```
/// use wallpath_core::{Point, WeightedGrid};
/// use wallpath_paths::{PathFinder, WithEstimate, manhattan};
///
/// let grid = WeightedGrid::new(5, 5, &[]).unwrap();
/// let pather = WithEstimate::new(&grid, |a, b| f64::from(manhattan(a, b)));
/// let res = PathFinder::new().search(&pather, Point::new(0, 0), Point::new(4, 4));
/// assert_eq!(res.cost(Point::new(4, 4)), Some(8.0));
/// ```
pub struct WithEstimate<'a, P: ?Sized, F> {
    pather: &'a P,
    estimate: F,
}

impl<'a, P: ?Sized, F> WithEstimate<'a, P, F>
where
    F: Fn(Point, Point) -> f64,
{
    pub fn new(pather: &'a P, estimate: F) -> Self {
        Self { pather, estimate }
    }
}

impl<P: Pather + ?Sized, F> Pather for WithEstimate<'_, P, F> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.pather.neighbors(p, buf);
    }
}

impl<P: WeightedPather + ?Sized, F> WeightedPather for WithEstimate<'_, P, F> {
    fn cost(&self, from: Point, to: Point) -> f64 {
        self.pather.cost(from, to)
    }
}

impl<P: WeightedPather + ?Sized, F> AstarPather for WithEstimate<'_, P, F>
where
    F: Fn(Point, Point) -> f64,
{
    fn estimate(&self, from: Point, to: Point) -> f64 {
        (self.estimate)(from, to)
    }
}
