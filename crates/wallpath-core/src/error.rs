use crate::region::HoleRegion;
use std::fmt;

/// Errors raised while building or editing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is negative.
    InvalidDimensions { width: i32, height: i32 },
    /// A hole region whose bottom-right corner precedes its top-left.
    MalformedRegion(HoleRegion),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid: invalid dimensions {width}x{height}")
            }
            Self::MalformedRegion(region) => write!(f, "grid: malformed hole region {region}"),
        }
    }
}

impl std::error::Error for GridError {}
