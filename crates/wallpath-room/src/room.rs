//! Six surfaces of a box, wired edge to edge.

use std::fmt;

use wallpath_core::{Point, Point3};

use crate::error::RoomError;
use crate::face::{Direction, Face};
use crate::frame::{Bounds3, Frame};
use crate::surface::Surface;

/// Size of a room along each real axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Dimensions {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

/// A box-shaped room: four walls, a floor and a ceiling.
///
/// Real space spans `0..=x`, `0..=y`, `0..=z`. The north wall lies in the
/// plane `y = 0`, east in `x = X`, south in `y = Y`, west in `x = 0`. Every
/// wall is viewed from inside the room with local `y` growing downward, so
/// its top edge meets the ceiling and its bottom edge meets the floor. The
/// floor and ceiling are laid out with north at the top.
///
/// A real point on an edge shared by two faces is resolved to the first
/// face, in [`Face::ALL`] order, whose bounding box contains it.
#[derive(Debug, Clone)]
pub struct Room {
    dims: Dimensions,
    surfaces: Vec<Surface>,
}

impl Room {
    pub fn new(dims: Dimensions) -> Result<Self, RoomError> {
        if dims.x <= 0 || dims.y <= 0 || dims.z <= 0 {
            return Err(RoomError::InvalidDimensions(dims));
        }
        let Dimensions { x, y, z } = dims;
        let bounds = |bx, x_ext, by, y_ext, bz, z_ext| Bounds3 {
            x: bx,
            x_ext,
            y: by,
            y_ext,
            z: bz,
            z_ext,
        };

        let mut surfaces = Vec::with_capacity(Face::ALL.len());
        for face in Face::ALL {
            let (w, h, frame, b) = match face {
                Face::North => (
                    x,
                    z,
                    Frame::new(Point3::new(x, 0, z), -Point3::X, -Point3::Z),
                    bounds(0, x - 1, 0, 0, 0, z - 1),
                ),
                Face::East => (
                    y,
                    z,
                    Frame::new(Point3::new(x, y, z), -Point3::Y, -Point3::Z),
                    bounds(x, 0, 0, y - 1, 0, z - 1),
                ),
                Face::South => (
                    x,
                    z,
                    Frame::new(Point3::new(0, y, z), Point3::X, -Point3::Z),
                    bounds(0, x - 1, y, 0, 0, z - 1),
                ),
                Face::West => (
                    y,
                    z,
                    Frame::new(Point3::new(0, 0, z), Point3::Y, -Point3::Z),
                    bounds(0, 0, 0, y - 1, 0, z - 1),
                ),
                Face::Floor => (
                    x,
                    y,
                    Frame::new(Point3::ZERO, Point3::X, Point3::Y),
                    bounds(0, x - 1, 0, y - 1, 0, 0),
                ),
                Face::Ceiling => (
                    x,
                    y,
                    Frame::new(Point3::new(0, 0, z), Point3::X, Point3::Y),
                    bounds(0, x - 1, 0, y - 1, z, 0),
                ),
            };
            let mut s = Surface::new(face, w, h, frame, b)?;
            s.add_neighbors(adjacency(face));
            surfaces.push(s);
        }
        Ok(Self { dims, surfaces })
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn surface(&self, face: Face) -> &Surface {
        &self.surfaces[face.index()]
    }

    pub fn surface_mut(&mut self, face: Face) -> &mut Surface {
        &mut self.surfaces[face.index()]
    }

    /// All surfaces in [`Face::ALL`] order.
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// The surface a real point lies on, if any. Points on a shared edge go
    /// to the first matching face in [`Face::ALL`] order.
    pub fn find_surface_from_point(&self, p: Point3) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.is_point_on_surface(p))
    }

    /// Face across edge `dir` of `face`.
    pub fn neighbor(&self, face: Face, dir: Direction) -> Option<Face> {
        self.surface(face).neighbor_to_the(dir)
    }

    /// The cell on the other side of edge `dir` from boundary cell `local`
    /// of `face`.
    ///
    /// Returns `None` unless `local` is on `face` and stepping toward `dir`
    /// leaves it.
    pub fn across(&self, face: Face, local: Point, dir: Direction) -> Option<(Face, Point)> {
        let a = self.surface(face);
        if !a.contains_local(local) || a.contains_local(local + dir.step()) {
            return None;
        }
        let other = a.neighbor_to_the(dir)?;
        let b = self.surface(other);
        let back = b.direction_of(face)?;
        let c2 = a.doubled_center(local) + a.axis3(dir) - b.axis3(back);
        let cell = b.local_from_doubled_center(c2)?;
        Some((other, cell))
    }
}

fn adjacency(face: Face) -> [(Direction, Face); 4] {
    use Direction::{Bottom, Left, Right, Top};
    let (left, right) = match face {
        Face::North => (Face::East, Face::West),
        Face::East => (Face::South, Face::North),
        Face::South => (Face::West, Face::East),
        Face::West => (Face::North, Face::South),
        Face::Floor | Face::Ceiling => {
            return [
                (Top, Face::North),
                (Right, Face::East),
                (Bottom, Face::South),
                (Left, Face::West),
            ];
        }
    };
    [
        (Top, Face::Ceiling),
        (Right, right),
        (Bottom, Face::Floor),
        (Left, left),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::new(Dimensions::new(4, 3, 2)).unwrap()
    }

    #[test]
    fn surface_sizes() {
        let r = room();
        let size = |f| (r.surface(f).width(), r.surface(f).height());
        assert_eq!(size(Face::North), (4, 2));
        assert_eq!(size(Face::East), (3, 2));
        assert_eq!(size(Face::South), (4, 2));
        assert_eq!(size(Face::West), (3, 2));
        assert_eq!(size(Face::Floor), (4, 3));
        assert_eq!(size(Face::Ceiling), (4, 3));
        for (i, s) in r.surfaces().iter().enumerate() {
            assert_eq!(s.face(), Face::ALL[i]);
        }
    }

    #[test]
    fn every_cell_lies_on_its_surface() {
        let r = room();
        for s in r.surfaces() {
            for p in s.grid().bounds() {
                let real = s.real_from_local(p);
                assert!(s.is_point_on_surface(real), "{} {p} -> {real}", s.face());
                assert_eq!(s.local_from_real(real), Some(p));
            }
        }
    }

    #[test]
    fn adjacency_table() {
        let r = room();
        use Direction::*;
        assert_eq!(r.neighbor(Face::North, Left), Some(Face::East));
        assert_eq!(r.neighbor(Face::North, Right), Some(Face::West));
        assert_eq!(r.neighbor(Face::East, Left), Some(Face::South));
        assert_eq!(r.neighbor(Face::South, Right), Some(Face::East));
        assert_eq!(r.neighbor(Face::West, Left), Some(Face::North));
        assert_eq!(r.neighbor(Face::West, Top), Some(Face::Ceiling));
        assert_eq!(r.neighbor(Face::East, Bottom), Some(Face::Floor));
        assert_eq!(r.neighbor(Face::Floor, Top), Some(Face::North));
        assert_eq!(r.neighbor(Face::Ceiling, Left), Some(Face::West));
        // Every edge is seen from both sides.
        for s in r.surfaces() {
            for d in Direction::ALL {
                let other = s.neighbor_to_the(d).unwrap();
                assert!(r.surface(other).direction_of(s.face()).is_some());
            }
        }
    }

    #[test]
    fn across_is_symmetric_and_adjacent() {
        let r = room();
        let mut crossings = 0;
        for s in r.surfaces() {
            for p in s.grid().bounds() {
                for d in Direction::ALL {
                    let Some((g, b)) = r.across(s.face(), p, d) else {
                        assert!(s.contains_local(p + d.step()));
                        continue;
                    };
                    crossings += 1;
                    let back = r.surface(g).direction_of(s.face()).unwrap();
                    assert_eq!(r.across(g, b, back), Some((s.face(), p)));
                    let delta = r.surface(g).doubled_center(b) - s.doubled_center(p);
                    assert_eq!(delta.dot(delta), 2);
                }
            }
        }
        // Each face contributes one crossing per boundary cell edge.
        let perimeter: i32 = r.surfaces().iter().map(|s| 2 * (s.width() + s.height())).sum();
        assert_eq!(crossings, perimeter);
    }

    #[test]
    fn floor_to_north_crossing() {
        let r = room();
        assert_eq!(
            r.across(Face::Floor, Point::new(1, 0), Direction::Top),
            Some((Face::North, Point::new(2, 1)))
        );
        assert_eq!(r.across(Face::Floor, Point::new(1, 1), Direction::Top), None);
    }

    #[test]
    fn find_surface_order() {
        let r = room();
        let face = |p| r.find_surface_from_point(p).map(Surface::face);
        assert_eq!(face(Point3::new(0, 0, 0)), Some(Face::North));
        assert_eq!(face(Point3::new(2, 1, 0)), Some(Face::Floor));
        assert_eq!(face(Point3::new(4, 1, 1)), Some(Face::East));
        assert_eq!(face(Point3::new(2, 1, 2)), Some(Face::Ceiling));
        assert_eq!(face(Point3::new(2, 1, 1)), None);
    }

    #[test]
    fn invalid_dimensions() {
        for dims in [Dimensions::new(0, 3, 2), Dimensions::new(4, -1, 2)] {
            let err = Room::new(dims).unwrap_err();
            assert_eq!(err, RoomError::InvalidDimensions(dims));
        }
    }

    #[test]
    fn surfaces_are_editable() {
        let mut r = room();
        r.surface_mut(Face::Floor)
            .grid_mut()
            .set_weight(Point::new(2, 1), 5.0);
        assert_eq!(r.surface(Face::Floor).grid().weight(Point::new(2, 1)), 5.0);
    }
}
