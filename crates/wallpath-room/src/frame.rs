//! Coordinate conventions tying a surface's local grid to real space and to
//! the shared unfolded plane.
//!
//! A [`Frame`] fixes, per face, where local cell `(u, v)` sits in 3-D: the
//! cell occupies the unit square `origin + [u, u+1]·u_axis + [v, v+1]·v_axis`.
//! Cell centres have half-integer coordinates on the two in-plane axes, so
//! conversions work on *doubled* centres to stay in integers. The real
//! integer point of a cell is the component-wise floor of its centre.
//!
//! A [`Placement`] is where a surface lands in the shared 2-D plane: an
//! integer rotation or reflection plus a translation.

use std::fmt;

use wallpath_core::{Point, Point3};

/// Axis convention of one face.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Real corner of local cell `(0, 0)` that all cells grow away from.
    pub origin: Point3,
    /// Real unit vector for local +x.
    pub u_axis: Point3,
    /// Real unit vector for local +y.
    pub v_axis: Point3,
}

impl Frame {
    pub const fn new(origin: Point3, u_axis: Point3, v_axis: Point3) -> Self {
        Self {
            origin,
            u_axis,
            v_axis,
        }
    }

    /// Real vector for a local step.
    #[inline]
    pub fn axis3(&self, step: Point) -> Point3 {
        self.u_axis * step.x + self.v_axis * step.y
    }

    /// Local unit step whose real vector is `v`, if `v` lies along one of
    /// the frame's axes.
    pub fn local_step(&self, v: Point3) -> Option<Point> {
        if v == self.u_axis {
            Some(Point::new(1, 0))
        } else if v == -self.u_axis {
            Some(Point::new(-1, 0))
        } else if v == self.v_axis {
            Some(Point::new(0, 1))
        } else if v == -self.v_axis {
            Some(Point::new(0, -1))
        } else {
            None
        }
    }

    /// Twice the real centre of local cell `p`.
    #[inline]
    pub fn doubled_center(&self, p: Point) -> Point3 {
        self.origin * 2 + self.u_axis * (2 * p.x + 1) + self.v_axis * (2 * p.y + 1)
    }

    /// Real integer point of local cell `p`.
    #[inline]
    pub fn real_point(&self, p: Point) -> Point3 {
        self.doubled_center(p).div_floor(2)
    }

    /// Local cell whose doubled centre is `c2`, if `c2` is a cell centre on
    /// this frame's plane. Grid bounds are not checked.
    pub fn local_from_doubled_center(&self, c2: Point3) -> Option<Point> {
        let q = c2 - self.origin * 2;
        let u2 = q.dot(self.u_axis);
        let v2 = q.dot(self.v_axis);
        let off_plane = q - self.u_axis * u2 - self.v_axis * v2;
        if off_plane != Point3::ZERO || u2.rem_euclid(2) != 1 || v2.rem_euclid(2) != 1 {
            return None;
        }
        Some(Point::new((u2 - 1) / 2, (v2 - 1) / 2))
    }

    /// Local cell whose real integer point is `p`, if `p` lies on this
    /// frame's plane. Grid bounds are not checked.
    pub fn local_from_real(&self, p: Point3) -> Option<Point> {
        let in_plane = abs3(self.u_axis) + abs3(self.v_axis);
        self.local_from_doubled_center(p * 2 + in_plane)
    }
}

fn abs3(p: Point3) -> Point3 {
    Point3::new(p.x.abs(), p.y.abs(), p.z.abs())
}

/// Local-to-shared transform of a placed surface.
///
/// `shared = ex·local.x + ey·local.y + offset`, where `ex` and `ey` are
/// orthogonal unit vectors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub ex: Point,
    pub ey: Point,
    pub offset: Point,
}

impl Placement {
    /// Shared coordinates equal local coordinates.
    pub const IDENTITY: Self = Self {
        ex: Point::new(1, 0),
        ey: Point::new(0, 1),
        offset: Point::ZERO,
    };

    /// Rotate/reflect a local direction into the shared plane.
    #[inline]
    pub fn map_dir(&self, d: Point) -> Point {
        self.ex * d.x + self.ey * d.y
    }

    /// Inverse of [`map_dir`](Self::map_dir).
    #[inline]
    pub fn unmap_dir(&self, s: Point) -> Point {
        Point::new(
            s.x * self.ex.x + s.y * self.ex.y,
            s.x * self.ey.x + s.y * self.ey.y,
        )
    }

    /// Shared coordinates of local cell `p`.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        self.map_dir(p) + self.offset
    }

    /// Local cell at shared coordinates `s`.
    #[inline]
    pub fn invert(&self, s: Point) -> Point {
        self.unmap_dir(s - self.offset)
    }
}

/// Axis-aligned real-space box given by a corner and additive, inclusive
/// extents.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds3 {
    pub x: i32,
    pub x_ext: i32,
    pub y: i32,
    pub y_ext: i32,
    pub z: i32,
    pub z_ext: i32,
}

impl Bounds3 {
    /// Whether `corner <= p <= corner + extent` on every axis.
    pub fn contains(&self, p: Point3) -> bool {
        (self.x..=self.x + self.x_ext).contains(&p.x)
            && (self.y..=self.y + self.y_ext).contains(&p.y)
            && (self.z..=self.z + self.z_ext).contains(&p.z)
    }
}

impl fmt::Display for Bounds3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x {}+{}, y {}+{}, z {}+{}",
            self.x, self.x_ext, self.y, self.y_ext, self.z, self.z_ext
        )
    }
}
