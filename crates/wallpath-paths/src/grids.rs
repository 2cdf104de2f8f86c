//! Path-finding trait implementations for the core grids.

use wallpath_core::{Point, RectGrid, WeightedGrid};

use crate::traits::{AstarPather, Pather, WeightedPather};

impl Pather for RectGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        RectGrid::neighbors(self, p, buf);
    }
}

impl WeightedPather for RectGrid {
    fn cost(&self, _from: Point, _to: Point) -> f64 {
        1.0
    }
}

impl AstarPather for RectGrid {}

impl Pather for WeightedGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        WeightedGrid::neighbors(self, p, buf);
    }
}

impl WeightedPather for WeightedGrid {
    fn cost(&self, from: Point, to: Point) -> f64 {
        WeightedGrid::cost(self, from, to)
    }
}

impl AstarPather for WeightedGrid {}
