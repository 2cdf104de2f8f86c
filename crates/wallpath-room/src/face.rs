//! Face identities and edge directions.

use std::fmt;

use wallpath_core::Point;

/// Identity of one of the six faces of a room.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Face {
    North,
    East,
    South,
    West,
    Floor,
    Ceiling,
}

impl Face {
    /// Every face, in the order used to resolve a point to its surface.
    pub const ALL: [Face; 6] = [
        Face::North,
        Face::East,
        Face::South,
        Face::West,
        Face::Floor,
        Face::Ceiling,
    ];

    /// Position of the face in [`Face::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// What kind of surface this face is.
    pub const fn kind(self) -> SurfaceKind {
        match self {
            Face::North | Face::East | Face::South | Face::West => SurfaceKind::Wall,
            Face::Floor => SurfaceKind::Floor,
            Face::Ceiling => SurfaceKind::Ceiling,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::North => "north",
            Face::East => "east",
            Face::South => "south",
            Face::West => "west",
            Face::Floor => "floor",
            Face::Ceiling => "ceiling",
        };
        f.write_str(name)
    }
}

/// The type of a surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceKind {
    Wall,
    Floor,
    Ceiling,
}

/// An edge of a surface's local grid. Local Y grows downward, so `Top`
/// is the row `y = 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Unit step in local grid coordinates.
    #[inline]
    pub const fn step(self) -> Point {
        match self {
            Direction::Top => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Bottom => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
        }
    }

    /// The direction of a unit step, if `step` is one.
    pub fn from_step(step: Point) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.step() == step)
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}
