//! **wallpath-core**: grid model for surface path finding.
//!
//! This crate provides the foundational types used across the *wallpath*
//! crates: 2-D and 3-D integer points, half-open ranges, inclusive hole
//! regions, and the bounded [`RectGrid`] / [`WeightedGrid`] that search
//! runs over.

pub mod error;
pub mod geom;
pub mod grid;
pub mod region;

pub use error::GridError;
pub use geom::{Point, Point3, Range, RangeIter};
pub use grid::{CellWeight, DEFAULT_WEIGHT, GridConfig, RectGrid, WeightedGrid};
pub use region::HoleRegion;
