//! A* path finding for wallpath grids.
//!
//! This crate provides the search half of *wallpath*:
//!
//! - **A\*** shortest-path search ([`PathFinder::search`]) returning the
//!   full `came_from` / `cost_so_far` record ([`SearchResult`])
//! - a binary min-heap with in-place priority updates ([`PriorityQueue`])
//! - distance helpers used as heuristics ([`euclidean`], [`manhattan`])
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | entry cost |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic (Euclidean by default) |
//!
//! [`RectGrid`](wallpath_core::RectGrid) and
//! [`WeightedGrid`](wallpath_core::WeightedGrid) implement all three.

mod astar;
mod distance;
mod grids;
mod node;
mod queue;
mod traits;

pub use astar::{PathFinder, SearchResult};
pub use distance::{euclidean, manhattan};
pub use node::Node;
pub use queue::PriorityQueue;
pub use traits::{AstarPather, Pather, WeightedPather, WithEstimate};
