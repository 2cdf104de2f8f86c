use std::fmt;

use wallpath_core::{GridError, Point3};

use crate::room::Dimensions;

/// Errors raised while building a room or anchoring a search on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// A room dimension is zero or negative.
    InvalidDimensions(Dimensions),
    /// The point lies on none of the room's surfaces.
    PointOffSurface(Point3),
    /// A surface grid could not be built.
    Grid(GridError),
}

impl fmt::Display for RoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions(dims) => write!(f, "room: invalid dimensions {dims}"),
            Self::PointOffSurface(p) => write!(f, "room: point {p} is not on any surface"),
            Self::Grid(err) => write!(f, "room: {err}"),
        }
    }
}

impl std::error::Error for RoomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for RoomError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
