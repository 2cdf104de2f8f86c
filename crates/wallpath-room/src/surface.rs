//! One planar face of a room with its own weighted grid.

use std::collections::HashMap;

use wallpath_core::{GridError, Point, Point3, WeightedGrid};

use crate::face::{Direction, Face, SurfaceKind};
use crate::frame::{Bounds3, Frame, Placement};

/// A bounded planar region: a local [`WeightedGrid`], the frame placing it
/// in real space, and a table of the faces bordering each of its edges.
///
/// Topology is fixed once the owning room is built; only the grid's holes
/// and weights are meant to change afterwards.
#[derive(Debug, Clone)]
pub struct Surface {
    face: Face,
    frame: Frame,
    bounds: Bounds3,
    grid: WeightedGrid,
    by_direction: HashMap<Direction, Face>,
    by_face: HashMap<Face, Direction>,
}

impl Surface {
    /// Create a surface with a `width`×`height` hole-free grid and no
    /// neighbors.
    ///
    /// The adjacency table starts empty. Fill it with
    /// [`add_neighbors`](Self::add_neighbors); [`Room::new`](crate::Room::new)
    /// does so for each of its six faces.
    pub fn new(
        face: Face,
        width: i32,
        height: i32,
        frame: Frame,
        bounds: Bounds3,
    ) -> Result<Self, GridError> {
        Ok(Self {
            face,
            frame,
            bounds,
            grid: WeightedGrid::new(width, height, &[])?,
            by_direction: HashMap::new(),
            by_face: HashMap::new(),
        })
    }

    #[inline]
    pub fn face(&self) -> Face {
        self.face
    }

    #[inline]
    pub fn kind(&self) -> SurfaceKind {
        self.face.kind()
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
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds3 {
        &self.bounds
    }

    pub fn grid(&self) -> &WeightedGrid {
        &self.grid
    }

    /// Mutable access to the grid for punching holes or setting weights.
    pub fn grid_mut(&mut self) -> &mut WeightedGrid {
        &mut self.grid
    }

    /// Whether real point `p` lies within this surface's bounding box.
    pub fn is_point_on_surface(&self, p: Point3) -> bool {
        self.bounds.contains(p)
    }

    /// Record `face` as the neighbor across edge `dir`, replacing any
    /// previous entry for either.
    pub fn add_neighbor(&mut self, dir: Direction, face: Face) {
        if let Some(old) = self.by_direction.insert(dir, face) {
            self.by_face.remove(&old);
        }
        if let Some(old) = self.by_face.insert(face, dir) {
            if old != dir {
                self.by_direction.remove(&old);
            }
        }
    }

    pub fn add_neighbors<I>(&mut self, neighbors: I)
    where
        I: IntoIterator<Item = (Direction, Face)>,
    {
        for (dir, face) in neighbors {
            self.add_neighbor(dir, face);
        }
    }

    /// Face across edge `dir`, if any.
    pub fn neighbor_to_the(&self, dir: Direction) -> Option<Face> {
        self.by_direction.get(&dir).copied()
    }

    /// Edge shared with `face`, if it is a neighbor.
    pub fn direction_of(&self, face: Face) -> Option<Direction> {
        self.by_face.get(&face).copied()
    }

    /// Whether local cell `p` is inside the grid.
    #[inline]
    pub fn contains_local(&self, p: Point) -> bool {
        self.grid.in_bounds(p)
    }

    /// Local cell whose real point is `p`, if it is on this surface's grid.
    pub fn local_from_real(&self, p: Point3) -> Option<Point> {
        self.frame
            .local_from_real(p)
            .filter(|&l| self.contains_local(l))
    }

    /// Real point of local cell `p`.
    pub fn real_from_local(&self, p: Point) -> Point3 {
        self.frame.real_point(p)
    }

    /// Twice the real centre of local cell `p`.
    pub fn doubled_center(&self, p: Point) -> Point3 {
        self.frame.doubled_center(p)
    }

    /// Local cell whose doubled centre is `c2`, if it is on this grid.
    pub fn local_from_doubled_center(&self, c2: Point3) -> Option<Point> {
        self.frame
            .local_from_doubled_center(c2)
            .filter(|&l| self.contains_local(l))
    }

    /// Real vector of a local step toward edge `dir`.
    pub fn axis3(&self, dir: Direction) -> Point3 {
        self.frame.axis3(dir.step())
    }

    /// Edge a real unit vector points toward, if it lies in this plane.
    pub fn direction_of_axis(&self, v: Point3) -> Option<Direction> {
        self.frame.local_step(v).and_then(Direction::from_step)
    }

    /// Shared coordinates of real point `p` under `placement`, if `p` is a
    /// cell of this surface.
    pub fn to_shared(&self, placement: &Placement, p: Point3) -> Option<Point> {
        self.local_from_real(p).map(|l| placement.apply(l))
    }
}
