//! A room's surfaces unfolded, on demand, into one flat grid.
//!
//! The search runs in *shared* coordinates: the anchor surface keeps its
//! local grid coordinates and every other surface is laid next to one that
//! is already placed, rotated so that their common edge lines up. Surfaces
//! are placed lazily, the first time neighbor enumeration steps over an
//! edge into them.

use std::cell::RefCell;
use std::collections::VecDeque;

use wallpath_core::{DEFAULT_WEIGHT, Point, Point3, Range};
use wallpath_paths::{
    AstarPather, PathFinder, Pather, SearchResult, WeightedPather, euclidean,
};

use crate::error::RoomError;
use crate::face::{Direction, Face};
use crate::frame::Placement;
use crate::room::Room;

/// A cell of one surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceCell {
    pub face: Face,
    pub local: Point,
}

/// Dense row-major table over the unfolded area.
#[derive(Debug, Default, Clone)]
struct Table {
    area: Range,
    cells: Vec<Option<SurfaceCell>>,
}

impl Table {
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.area.contains(p) {
            return None;
        }
        let q = p - self.area.min;
        Some((q.y * self.area.width() + q.x) as usize)
    }

    fn get(&self, p: Point) -> Option<SurfaceCell> {
        self.idx(p).and_then(|i| self.cells[i])
    }

    /// Extend the table to cover `area`, moving existing cells to their
    /// new indices.
    fn grow(&mut self, area: Range) {
        let new_area = self.area.union(area);
        if new_area == self.area {
            return;
        }
        if new_area.min != self.area.min && !self.area.is_empty() {
            log::trace!(
                "unfold: table low side moved {} -> {}, re-indexing {} cells",
                self.area.min,
                new_area.min,
                self.area.len()
            );
        }
        let old = std::mem::replace(
            self,
            Table {
                area: new_area,
                cells: vec![None; new_area.len()],
            },
        );
        for (p, cell) in old.area.iter().zip(old.cells) {
            if let Some(i) = self.idx(p) {
                self.cells[i] = cell;
            }
        }
    }

    fn set(&mut self, p: Point, cell: SurfaceCell) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = Some(cell);
        }
    }
}

#[derive(Debug, Default, Clone)]
struct Unfolding {
    table: Table,
    placements: [Option<Placement>; 6],
    order: Vec<Face>,
}

impl Unfolding {
    fn placement(&self, face: Face) -> Option<Placement> {
        self.placements[face.index()]
    }
}

/// One continuous 2-D grid over the surfaces of a [`Room`], anchored at a
/// start point.
///
/// `SearchSpace` implements the path-finding traits, so it can be handed
/// straight to a [`PathFinder`]. The table grows while the search runs;
/// shared coordinates of already placed cells never change, so any
/// [`SearchResult`] obtained earlier stays valid.
///
/// A surface whose hinged position would overlap cells already placed is
/// not spliced through that edge, and an edge whose two sides were placed
/// apart stays closed. [`search`](Self::search) picks how to reach the
/// goal's surface by trying every chain of faces from the anchor, so on a
/// fresh space it finds the shortest path over the room. Once surfaces are
/// placed they stay put, and later searches are shortest within that
/// unfolding.
#[derive(Debug)]
pub struct SearchSpace<'a> {
    room: &'a Room,
    anchor: Face,
    start: Point,
    unfolding: RefCell<Unfolding>,
}

impl<'a> SearchSpace<'a> {
    /// Anchor on the surface holding real point `start`.
    pub fn new(room: &'a Room, start: Point3) -> Result<Self, RoomError> {
        let surface = room
            .find_surface_from_point(start)
            .ok_or(RoomError::PointOffSurface(start))?;
        let local = surface
            .local_from_real(start)
            .ok_or(RoomError::PointOffSurface(start))?;
        Ok(Self::with_anchor(room, surface.face(), local))
    }

    /// Anchor on `face`, starting from its local cell `(0, 0)`.
    pub fn anchored(room: &'a Room, face: Face) -> Self {
        Self::with_anchor(room, face, Point::ZERO)
    }

    fn with_anchor(room: &'a Room, anchor: Face, start: Point) -> Self {
        let space = Self {
            room,
            anchor,
            start,
            unfolding: RefCell::new(Unfolding::default()),
        };
        space.splice(&mut space.unfolding.borrow_mut(), anchor, Placement::IDENTITY);
        space
    }

    pub fn room(&self) -> &'a Room {
        self.room
    }

    pub fn anchor(&self) -> Face {
        self.anchor
    }

    /// Shared coordinates of the start cell.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Area covered by the table so far.
    pub fn bounds(&self) -> Range {
        self.unfolding.borrow().table.area
    }

    /// Where `face` was placed, if it has been.
    pub fn placement(&self, face: Face) -> Option<Placement> {
        self.unfolding.borrow().placement(face)
    }

    /// Placed faces, in the order they were spliced.
    pub fn placed_faces(&self) -> Vec<Face> {
        self.unfolding.borrow().order.clone()
    }

    /// The surface cell at shared point `p`.
    pub fn cell_at(&self, p: Point) -> Option<SurfaceCell> {
        self.unfolding.borrow().table.get(p)
    }

    /// Real point of the cell at shared point `p`.
    pub fn real_point(&self, p: Point) -> Option<Point3> {
        self.cell_at(p)
            .map(|c| self.room.surface(c.face).real_from_local(c.local))
    }

    /// Shared coordinates of real point `p`, placing its surface first if
    /// needed.
    pub fn locate(&self, p: Point3) -> Option<Point> {
        let surface = self.room.find_surface_from_point(p)?;
        let local = surface.local_from_real(p)?;
        let mut u = self.unfolding.borrow_mut();
        let placement = match u.placement(surface.face()) {
            Some(pl) => pl,
            None => self.unfold_to(&mut u, surface.face())?,
        };
        Some(placement.apply(local))
    }

    /// Run A* from the start to real point `goal`. Returns `None` if `goal`
    /// cannot be placed in this unfolding.
    ///
    /// If the goal's surface is not placed yet, each simple chain of faces
    /// from the anchor to it is unfolded on a copy of the table and
    /// searched. The cheapest copy replaces the table.
    pub fn search(&self, finder: &mut PathFinder, goal: Point3) -> Option<SearchResult> {
        let surface = self.room.find_surface_from_point(goal)?;
        let local = surface.local_from_real(goal)?;
        let target = surface.face();
        if let Some(pl) = self.placement(target) {
            return Some(finder.search(self, self.start, pl.apply(local)));
        }

        let mut best: Option<(f64, Unfolding, SearchResult)> = None;
        for chain in self.chains_to(target) {
            let trial = self.fork();
            let placed = trial.follow(&mut trial.unfolding.borrow_mut(), &chain);
            let Some(pl) = placed else {
                continue;
            };
            let res = finder.search(&trial, trial.start, pl.apply(local));
            let Some(cost) = res.cost(res.goal()) else {
                continue;
            };
            if best.as_ref().is_none_or(|(c, _, _)| cost < *c) {
                best = Some((cost, trial.unfolding.into_inner(), res));
            }
        }
        match best {
            Some((cost, u, res)) => {
                log::debug!("unfold: {target} reached at cost {cost} via {:?}", u.order);
                *self.unfolding.borrow_mut() = u;
                Some(res)
            }
            None => {
                let goal = self.locate(goal)?;
                Some(finder.search(self, self.start, goal))
            }
        }
    }

    /// Shortest path from the start to `goal` as real points.
    ///
    /// Two consecutive real points may be equal where the path crosses an
    /// edge: cells on either side of an edge can share a real point.
    pub fn find_path(&self, finder: &mut PathFinder, goal: Point3) -> Option<Vec<Point3>> {
        self.search(finder, goal)?
            .path()?
            .into_iter()
            .map(|p| self.real_point(p))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Unfolding
    // -----------------------------------------------------------------------

    /// A copy of this space sharing the room and the placements made so far.
    fn fork(&self) -> Self {
        Self {
            room: self.room,
            anchor: self.anchor,
            start: self.start,
            unfolding: RefCell::new(self.unfolding.borrow().clone()),
        }
    }

    /// Every chain of distinct faces leading from the anchor to `target`,
    /// as `(face, edge)` hinges in crossing order.
    fn chains_to(&self, target: Face) -> Vec<Vec<(Face, Direction)>> {
        let mut chains = Vec::new();
        let mut visited = [false; 6];
        visited[self.anchor.index()] = true;
        self.extend_chains(self.anchor, target, &mut visited, &mut Vec::new(), &mut chains);
        chains
    }

    fn extend_chains(
        &self,
        from: Face,
        target: Face,
        visited: &mut [bool; 6],
        chain: &mut Vec<(Face, Direction)>,
        chains: &mut Vec<Vec<(Face, Direction)>>,
    ) {
        for dir in Direction::ALL {
            let Some(next) = self.room.neighbor(from, dir) else {
                continue;
            };
            if visited[next.index()] {
                continue;
            }
            chain.push((from, dir));
            if next == target {
                chains.push(chain.clone());
            } else {
                visited[next.index()] = true;
                self.extend_chains(next, target, visited, chain, chains);
                visited[next.index()] = false;
            }
            chain.pop();
        }
    }

    /// Splice each hinge of `chain` in turn. Returns the placement of the
    /// last face, or `None` if a splice is refused.
    fn follow(&self, u: &mut Unfolding, chain: &[(Face, Direction)]) -> Option<Placement> {
        let mut last = None;
        for &(f, dir) in chain {
            let surface = self.room.surface(f);
            let a = edge_cell(surface.width(), surface.height(), dir);
            let (_, _, pl) = self.place_across(u, f, a, dir)?;
            last = Some(pl);
        }
        last
    }

    /// Place `face` with `placement` and record its cells.
    fn splice(&self, u: &mut Unfolding, face: Face, placement: Placement) {
        let surface = self.room.surface(face);
        let area = footprint(surface.grid().bounds(), &placement);
        u.table.grow(area);
        for local in surface.grid().bounds() {
            u.table.set(placement.apply(local), SurfaceCell { face, local });
        }
        u.placements[face.index()] = Some(placement);
        u.order.push(face);
    }

    /// Place the face across edge `dir` of placed face `from`, hinged at
    /// boundary cell `a`. Returns the face's placement, whether new or
    /// existing, or `None` if it would overlap placed cells.
    fn place_across(
        &self,
        u: &mut Unfolding,
        from: Face,
        a: Point,
        dir: Direction,
    ) -> Option<(Face, Point, Placement)> {
        let (to, b) = self.room.across(from, a, dir)?;
        if let Some(pl) = u.placement(to) {
            return Some((to, b, pl));
        }
        let pl = self.hinge(u.placement(from)?, from, a, dir, to, b)?;
        let surface = self.room.surface(to);
        let area = footprint(surface.grid().bounds(), &pl);
        if area
            .intersect(u.table.area)
            .iter()
            .any(|p| u.table.get(p).is_some())
        {
            log::trace!("unfold: refused {to} across {dir} of {from}, overlaps {area}");
            return None;
        }
        log::debug!(
            "unfold: {to} across {dir} of {from}: ex={} ey={} offset={}",
            pl.ex,
            pl.ey,
            pl.offset
        );
        self.splice(u, to, pl);
        Some((to, b, pl))
    }

    /// Placement of `to` continuing `from` straight across their common
    /// edge, so that cell `b` of `to` sits one step past cell `a` of `from`.
    fn hinge(
        &self,
        pa: Placement,
        from: Face,
        a: Point,
        dir: Direction,
        to: Face,
        b: Point,
    ) -> Option<Placement> {
        let sa = self.room.surface(from);
        let sb = self.room.surface(to);
        let d = dir.step();
        let e = Point::new(-d.y, d.x);
        // Along the edge: same real vector on both faces.
        let e_b = sb.frame().local_step(sa.frame().axis3(e))?;
        // Toward `from` on `to`: opposite of stepping out of `from`.
        let back = sb.direction_of(from)?.step();
        let (me, md) = (pa.map_dir(e), pa.map_dir(d));
        let image = |unit: Point| me * dot(unit, e_b) - md * dot(unit, back);
        let ex = image(Point::new(1, 0));
        let ey = image(Point::new(0, 1));
        let target = pa.apply(a) + md;
        Some(Placement {
            ex,
            ey,
            offset: target - (ex * b.x + ey * b.y),
        })
    }

    /// Place `target` by chaining splices from the placed faces, breadth
    /// first over room adjacency.
    fn unfold_to(&self, u: &mut Unfolding, target: Face) -> Option<Placement> {
        let mut parent: [Option<(Face, Direction)>; 6] = [None; 6];
        let mut seen = [false; 6];
        let mut queue: VecDeque<Face> = u.order.iter().copied().collect();
        for &f in &u.order {
            seen[f.index()] = true;
        }
        while let Some(f) = queue.pop_front() {
            if f == target {
                break;
            }
            for dir in Direction::ALL {
                let Some(next) = self.room.neighbor(f, dir) else {
                    continue;
                };
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    parent[next.index()] = Some((f, dir));
                    queue.push_back(next);
                }
            }
        }

        let mut chain = Vec::new();
        let mut cur = target;
        while let Some((f, dir)) = parent[cur.index()] {
            chain.push((f, dir));
            cur = f;
        }
        chain.reverse();
        self.follow(u, &chain)?;
        u.placement(target)
    }
}

/// First cell of the edge toward `dir`.
fn edge_cell(width: i32, height: i32, dir: Direction) -> Point {
    match dir {
        Direction::Top | Direction::Left => Point::ZERO,
        Direction::Right => Point::new(width - 1, 0),
        Direction::Bottom => Point::new(0, height - 1),
    }
}

fn dot(a: Point, b: Point) -> i32 {
    a.x * b.x + a.y * b.y
}

/// Shared-space range covered by local `bounds` under `pl`.
fn footprint(bounds: Range, pl: &Placement) -> Range {
    let a = pl.apply(bounds.min);
    let b = pl.apply(bounds.max - Point::new(1, 1));
    Range::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x) + 1, a.y.max(b.y) + 1)
}

impl Pather for SearchSpace<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let mut u = self.unfolding.borrow_mut();
        let Some(SurfaceCell { face, local }) = u.table.get(p) else {
            return;
        };
        let Some(pl) = u.placement(face) else {
            return;
        };
        let surface = self.room.surface(face);
        for s in p.neighbors_4() {
            let step = pl.unmap_dir(s - p);
            let next = local + step;
            if surface.contains_local(next) {
                if surface.grid().is_passable(next) {
                    buf.push(s);
                }
                continue;
            }
            let Some(dir) = Direction::from_step(step) else {
                continue;
            };
            let Some((to, b, to_pl)) = self.place_across(&mut u, face, local, dir) else {
                continue;
            };
            if to_pl.apply(b) == s && self.room.surface(to).grid().is_passable(b) {
                buf.push(s);
            }
        }
    }
}

impl WeightedPather for SearchSpace<'_> {
    fn cost(&self, _from: Point, to: Point) -> f64 {
        self.cell_at(to).map_or(DEFAULT_WEIGHT, |c| {
            self.room.surface(c.face).grid().weight(c.local)
        })
    }
}

impl AstarPather for SearchSpace<'_> {
    /// Straight-line distance between the two cells' real centres.
    fn estimate(&self, from: Point, to: Point) -> f64 {
        let center = |p| {
            self.cell_at(p)
                .map(|c| self.room.surface(c.face).doubled_center(c.local))
        };
        match (center(from), center(to)) {
            (Some(a), Some(b)) => a.distance(b) / 2.0,
            _ => euclidean(from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::room::Dimensions;
    use wallpath_core::HoleRegion;

    fn room() -> Room {
        Room::new(Dimensions::new(4, 3, 2)).unwrap()
    }

    fn neighbors(space: &SearchSpace<'_>, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        space.neighbors(p, &mut buf);
        buf
    }

    fn resolve(r: &Room, p: Point3) -> SurfaceCell {
        let s = r.find_surface_from_point(p).unwrap();
        SurfaceCell {
            face: s.face(),
            local: s.local_from_real(p).unwrap(),
        }
    }

    /// Step counts from `from` to every cell, walking the room's cells
    /// directly and crossing edges with `Room::across`.
    fn true_distances(r: &Room, from: SurfaceCell) -> HashMap<SurfaceCell, u32> {
        let mut dist = HashMap::from([(from, 0)]);
        let mut queue = VecDeque::from([from]);
        while let Some(c) = queue.pop_front() {
            let d = dist[&c];
            let surface = r.surface(c.face);
            for dir in Direction::ALL {
                let next = c.local + dir.step();
                let cell = if surface.contains_local(next) {
                    SurfaceCell {
                        face: c.face,
                        local: next,
                    }
                } else if let Some((face, local)) = r.across(c.face, c.local, dir) {
                    SurfaceCell { face, local }
                } else {
                    continue;
                };
                if !dist.contains_key(&cell) {
                    dist.insert(cell, d + 1);
                    queue.push_back(cell);
                }
            }
        }
        dist
    }

    /// Search every floor start against every goal on `goals` with a fresh
    /// space, and compare with the step count over the room's cells.
    fn assert_shortest_from_floor(r: &Room, goals: &[Face]) {
        let mut finder = PathFinder::new();
        let floor = r.surface(Face::Floor);
        for sp in floor.grid().bounds() {
            let start = floor.real_from_local(sp);
            let dist = true_distances(r, resolve(r, start));
            for &face in goals {
                let s = r.surface(face);
                for gp in s.grid().bounds() {
                    let goal = s.real_from_local(gp);
                    let want = dist[&resolve(r, goal)];
                    let space = SearchSpace::new(r, start).unwrap();
                    let res = space.search(&mut finder, goal).unwrap();
                    assert_eq!(
                        res.cost(res.goal()),
                        Some(f64::from(want)),
                        "{start} -> {goal}"
                    );
                    assert_eq!(space.cell_at(res.goal()), Some(resolve(r, goal)));
                    assert_unit_steps(&space, &res.path().unwrap());
                }
            }
        }
    }

    fn assert_unit_steps(space: &SearchSpace<'_>, path: &[Point]) {
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {}", w[0], w[1]);
            let c2 = |p| {
                let c = space.cell_at(p).unwrap();
                space.room().surface(c.face).doubled_center(c.local)
            };
            let d = c2(w[1]) - c2(w[0]);
            assert!(matches!(d.dot(d), 2 | 4), "{} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn anchor_is_identity() {
        let r = room();
        let space = SearchSpace::new(&r, Point3::new(1, 1, 0)).unwrap();
        assert_eq!(space.anchor(), Face::Floor);
        assert_eq!(space.start(), Point::new(1, 1));
        assert_eq!(space.placement(Face::Floor), Some(Placement::IDENTITY));
        assert_eq!(space.placed_faces(), vec![Face::Floor]);
        assert_eq!(space.bounds(), Range::new(0, 0, 4, 3));
        assert_eq!(
            space.cell_at(Point::new(3, 2)),
            Some(SurfaceCell {
                face: Face::Floor,
                local: Point::new(3, 2)
            })
        );
        assert_eq!(space.real_point(Point::new(3, 2)), Some(Point3::new(3, 2, 0)));
    }

    #[test]
    fn explicit_anchor() {
        let r = room();
        let space = SearchSpace::anchored(&r, Face::East);
        assert_eq!(space.start(), Point::ZERO);
        assert_eq!(space.real_point(Point::ZERO), Some(Point3::new(4, 2, 1)));
    }

    #[test]
    fn off_surface_start_fails() {
        let r = room();
        let p = Point3::new(2, 1, 1);
        assert_eq!(
            SearchSpace::new(&r, p).unwrap_err(),
            RoomError::PointOffSurface(p)
        );
    }

    #[test]
    fn floor_only_path() {
        let r = room();
        let space = SearchSpace::new(&r, Point3::new(1, 1, 0)).unwrap();
        let res = space
            .search(&mut PathFinder::new(), Point3::new(3, 2, 0))
            .unwrap();
        assert_eq!(res.cost(Point::new(3, 2)), Some(3.0));
        let path = res.path().unwrap();
        assert_eq!(path.len(), 4);
        for p in &path {
            assert_eq!(space.cell_at(*p).map(|c| c.face), Some(Face::Floor));
        }
    }

    #[test]
    fn weighted_floor_cell_is_avoided() {
        let mut r = room();
        r.surface_mut(Face::Floor)
            .grid_mut()
            .set_weight(Point::new(2, 1), 5.0);
        let space = SearchSpace::new(&r, Point3::new(1, 1, 0)).unwrap();
        let res = space
            .search(&mut PathFinder::new(), Point3::new(3, 1, 0))
            .unwrap();
        assert_eq!(res.cost(Point::new(3, 1)), Some(4.0));
        let path = res.path().unwrap();
        assert!(!path.contains(&Point::new(2, 1)));
        assert_unit_steps(&space, &path);
    }

    #[test]
    fn weighted_floor_cell_is_paid_when_forced() {
        let mut r = room();
        let floor = r.surface_mut(Face::Floor).grid_mut();
        floor.set_weight(Point::new(2, 1), 5.0);
        floor
            .punch_holes(&[
                HoleRegion::cell(Point::new(2, 0)),
                HoleRegion::cell(Point::new(2, 2)),
            ])
            .unwrap();
        let space = SearchSpace::new(&r, Point3::new(1, 1, 0)).unwrap();
        let res = space
            .search(&mut PathFinder::new(), Point3::new(3, 1, 0))
            .unwrap();
        // Through the weighted cell, or over a wall: both cost 6.
        assert_eq!(res.cost(Point::new(3, 1)), Some(6.0));
        assert_unit_steps(&space, &res.path().unwrap());
    }

    #[test]
    fn floor_to_ceiling() {
        let r = room();
        let space = SearchSpace::new(&r, Point3::new(1, 1, 0)).unwrap();
        let mut finder = PathFinder::new();
        let res = space.search(&mut finder, Point3::new(2, 1, 2)).unwrap();
        let goal = res.goal();
        assert_eq!(space.cell_at(goal).map(|c| c.face), Some(Face::Ceiling));
        assert_eq!(res.cost(goal), Some(6.0));
        let path = res.path().unwrap();
        assert_eq!(path.len(), 7);
        assert_unit_steps(&space, &path);

        let real = space.find_path(&mut finder, Point3::new(2, 1, 2)).unwrap();
        assert_eq!(real.first(), Some(&Point3::new(1, 1, 0)));
        assert_eq!(real.last(), Some(&Point3::new(2, 1, 2)));
        assert_eq!(real.len(), 7);
    }

    #[test]
    fn overhead_goal_goes_up_the_nearest_wall() {
        let r = Room::new(Dimensions::new(3, 5, 4)).unwrap();
        let space = SearchSpace::new(&r, Point3::new(2, 2, 0)).unwrap();
        let res = space
            .search(&mut PathFinder::new(), Point3::new(2, 2, 4))
            .unwrap();
        assert_eq!(res.cost(res.goal()), Some(5.0));
        let faces: Vec<_> = res
            .path()
            .unwrap()
            .into_iter()
            .filter_map(|p| space.cell_at(p).map(|c| c.face))
            .collect();
        assert_eq!(faces.first(), Some(&Face::Floor));
        assert_eq!(faces.last(), Some(&Face::Ceiling));
        assert_eq!(faces.iter().filter(|f| **f == Face::East).count(), 4);
        assert!(space.placement(Face::East).is_some());
    }

    #[test]
    fn matches_true_distance_from_floor() {
        let r = room();
        assert_shortest_from_floor(&r, &Face::ALL);
    }

    #[test]
    fn matches_true_distance_floor_to_ceiling() {
        for dims in [Dimensions::new(3, 5, 4), Dimensions::new(6, 2, 3)] {
            let r = Room::new(dims).unwrap();
            assert_shortest_from_floor(&r, &[Face::Ceiling]);
        }
    }

    #[test]
    fn later_searches_reuse_the_chosen_unfolding() {
        let r = Room::new(Dimensions::new(3, 5, 4)).unwrap();
        let space = SearchSpace::new(&r, Point3::new(2, 2, 0)).unwrap();
        let mut finder = PathFinder::new();
        let first = space.search(&mut finder, Point3::new(2, 2, 4)).unwrap();
        let ceiling = space.placement(Face::Ceiling);
        let placed = space.placed_faces();
        let again = space.search(&mut finder, Point3::new(2, 2, 4)).unwrap();
        assert_eq!(first.cost_so_far(), again.cost_so_far());
        assert_eq!(space.placement(Face::Ceiling), ceiling);
        assert_eq!(space.placed_faces(), placed);
    }

    #[test]
    fn north_hinges_on_floor_top_edge() {
        let r = room();
        let space = SearchSpace::new(&r, Point3::new(1, 1, 0)).unwrap();
        assert_eq!(space.locate(Point3::new(1, 0, 1)), Some(Point::new(1, -2)));
        assert_eq!(
            space.placement(Face::North),
            Some(Placement {
                ex: Point::new(-1, 0),
                ey: Point::new(0, 1),
                offset: Point::new(3, -2),
            })
        );
        assert_eq!(
            neighbors(&space, Point::new(1, 0)),
            vec![
                Point::new(2, 0),
                Point::new(1, -1),
                Point::new(0, 0),
                Point::new(1, 1)
            ]
        );
    }

    #[test]
    fn crossing_into_a_hole_is_blocked() {
        let mut r = room();
        r.surface_mut(Face::North)
            .grid_mut()
            .punch_holes(&[HoleRegion::cell(Point::new(2, 1))])
            .unwrap();
        let space = SearchSpace::new(&r, Point3::new(1, 1, 0)).unwrap();
        let ns = neighbors(&space, Point::new(1, 0));
        assert!(space.placement(Face::North).is_some());
        assert!(!ns.contains(&Point::new(1, -1)));
        assert!(ns.contains(&Point::new(2, 0)));
    }

    #[test]
    fn low_side_growth_keeps_results() {
        let mut r = room();
        // Keep the first search away from the north edge.
        r.surface_mut(Face::Floor)
            .grid_mut()
            .punch_holes(&[HoleRegion::rect(Point::new(0, 0), Point::new(3, 0))])
            .unwrap();
        let space = SearchSpace::new(&r, Point3::new(1, 1, 0)).unwrap();
        let mut finder = PathFinder::new();
        let res = space.search(&mut finder, Point3::new(3, 2, 0)).unwrap();
        assert!(res.found());
        assert!(space.placement(Face::North).is_none());
        let before: Vec<_> = res
            .cost_so_far()
            .keys()
            .map(|&p| (p, space.cell_at(p)))
            .collect();
        assert_eq!(space.bounds().min.y, 0);

        let north = space.locate(Point3::new(1, 0, 1)).unwrap();
        assert_eq!(north, Point::new(1, -2));
        assert_eq!(space.bounds().min.y, -2);
        for (p, cell) in before {
            assert!(cell.is_some());
            assert_eq!(space.cell_at(p), cell, "{p} moved");
        }
        for p in res.path().unwrap() {
            assert_eq!(space.cell_at(p).map(|c| c.face), Some(Face::Floor));
        }
    }

    #[test]
    fn placement_is_idempotent() {
        let r = room();
        let space = SearchSpace::new(&r, Point3::new(1, 1, 0)).unwrap();
        let goal = Point3::new(2, 1, 2);
        let first = space.locate(goal);
        let placed = space.placed_faces();
        assert_eq!(space.locate(goal), first);
        assert_eq!(space.placed_faces(), placed);

        let mut finder = PathFinder::new();
        let a = space.search(&mut finder, goal).unwrap();
        let b = space.search(&mut finder, goal).unwrap();
        assert_eq!(a.cost_so_far(), b.cost_so_far());
        assert_eq!(a.came_from(), b.came_from());

        let faces = space.placed_faces();
        for f in &faces {
            assert_eq!(faces.iter().filter(|g| *g == f).count(), 1);
        }
    }

    #[test]
    fn misaligned_edge_stays_closed() {
        let r = room();
        let space = SearchSpace::new(&r, Point3::new(1, 1, 0)).unwrap();
        space.locate(Point3::new(2, 1, 2)).unwrap();
        let ceiling = space.placement(Face::Ceiling);
        let east = space.locate(Point3::new(4, 2, 1)).unwrap();
        assert_eq!(east, Point::new(5, 2));
        // Past east's top edge is the ceiling, but it was placed above the
        // north wall.
        let ns = neighbors(&space, east);
        assert!(!ns.contains(&Point::new(6, 2)));
        assert!(ns.contains(&Point::new(4, 2)));
        assert_eq!(space.placement(Face::Ceiling), ceiling);
    }

    #[test]
    fn estimate_never_exceeds_cost() {
        let r = room();
        let space = SearchSpace::new(&r, Point3::new(1, 1, 0)).unwrap();
        let goal = Point3::new(2, 1, 2);
        let res = space.search(&mut PathFinder::new(), goal).unwrap();
        let g = res.goal();
        let total = res.cost(g).unwrap();
        for p in res.path().unwrap() {
            let remaining = total - res.cost(p).unwrap();
            assert!(space.estimate(p, g) <= remaining + 1e-9, "{p}");
        }
    }
}
