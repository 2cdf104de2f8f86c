use std::collections::HashMap;

use wallpath_core::Point;

use crate::node::Node;
use crate::queue::PriorityQueue;
use crate::traits::AstarPather;

/// Outcome of one A* query.
///
/// `came_from` and `cost_so_far` always hold the same keys. An unreachable
/// goal is not an error: it simply has no entry in either map.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    start: Point,
    goal: Point,
    came_from: HashMap<Point, Option<Point>>,
    cost_so_far: HashMap<Point, f64>,
    found: bool,
    expanded: usize,
}

impl SearchResult {
    /// The point the search started from.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The point the search looked for.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether the goal was reached.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Number of frontier entries expanded before the search ended.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Predecessor of every discovered point. The start maps to `None`.
    pub fn came_from(&self) -> &HashMap<Point, Option<Point>> {
        &self.came_from
    }

    /// Cheapest known cumulative cost from the start to every discovered
    /// point.
    pub fn cost_so_far(&self) -> &HashMap<Point, f64> {
        &self.cost_so_far
    }

    /// Recorded cost to reach `p`, if it was discovered.
    pub fn cost(&self, p: Point) -> Option<f64> {
        self.cost_so_far.get(&p).copied()
    }

    /// Path from the start to the goal (both included), or `None` if the
    /// goal was not reached.
    pub fn path(&self) -> Option<Vec<Point>> {
        if !self.found {
            return None;
        }
        self.path_to(self.goal)
    }

    /// Path from the start to any discovered point by walking `came_from`.
    pub fn path_to(&self, p: Point) -> Option<Vec<Point>> {
        if !self.came_from.contains_key(&p) {
            return None;
        }
        let mut path = Vec::new();
        let mut cur = Some(p);
        while let Some(c) = cur {
            path.push(c);
            cur = self.came_from.get(&c).copied().flatten();
        }
        path.reverse();
        Some(path)
    }
}

/// Reusable A* driver.
///
/// `PathFinder` keeps its frontier and neighbor buffer between queries so
/// repeated searches reuse allocations. Every query still returns its own
/// [`SearchResult`]; no search state is shared between queries.
#[derive(Debug, Default)]
pub struct PathFinder {
    frontier: PriorityQueue<Point>,
    nbuf: Vec<Point>,
}

impl PathFinder {
    pub fn new() -> Self {
        Self {
            frontier: PriorityQueue::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Run A* from `start` to `goal`.
    pub fn search<P: AstarPather + ?Sized>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> SearchResult {
        self.search_with(pather, start, goal, |_, _, _| {})
    }

    /// Run A* from `start` to `goal`, calling `observer(current, neighbor,
    /// new_cost)` every time a neighbor's recorded cost is lowered.
    ///
    /// The observer is for progress display only; it cannot influence the
    /// search.
    pub fn search_with<P, F>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
        mut observer: F,
    ) -> SearchResult
    where
        P: AstarPather + ?Sized,
        F: FnMut(Point, Point, f64),
    {
        let mut came_from = HashMap::new();
        let mut cost_so_far = HashMap::new();
        came_from.insert(start, None);
        cost_so_far.insert(start, 0.0);

        self.frontier.clear();
        self.frontier
            .insert(Node::new(start, pather.estimate(start, goal)));

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0;

        let found = loop {
            let Some(current) = self.frontier.extract_min() else {
                break false;
            };
            if current.pos == goal {
                break true;
            }
            expanded += 1;

            let current_cost = cost_so_far[&current.pos];
            nbuf.clear();
            pather.neighbors(current.pos, &mut nbuf);

            for &next in nbuf.iter() {
                let new_cost = current_cost + pather.cost(current.pos, next);
                if cost_so_far.get(&next).is_some_and(|&old| new_cost >= old) {
                    continue;
                }
                cost_so_far.insert(next, new_cost);
                came_from.insert(next, Some(current.pos));
                observer(current.pos, next, new_cost);
                self.frontier
                    .update_or_insert(next, new_cost + pather.estimate(next, goal));
            }
        };

        self.nbuf = nbuf;
        log::debug!(
            "astar {start} -> {goal}: found={found} expanded={expanded} discovered={}",
            cost_so_far.len()
        );

        SearchResult {
            start,
            goal,
            came_from,
            cost_so_far,
            found,
            expanded,
        }
    }

    /// Compute the shortest path from `start` to `goal`.
    ///
    /// Returns the full path (including both endpoints) or `None` if the goal
    /// is unreachable.
    pub fn astar_path<P: AstarPather + ?Sized>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        self.search(pather, start, goal).path()
    }
}
