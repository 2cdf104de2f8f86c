//! Path finding across the faces of a room.
//!
//! A [`Room`] is a box of six [`Surface`]s, each with its own weighted grid
//! and a [`Frame`] tying local cells to real 3-D points. A [`SearchSpace`]
//! unfolds those surfaces into one flat grid, one face at a time, so the
//! A* search from `wallpath-paths` can walk from the floor up a wall and
//! onto the ceiling.
//!
//! ```
//! use wallpath_core::Point3;
//! use wallpath_paths::PathFinder;
//! use wallpath_room::{Dimensions, Room, SearchSpace};
//!
//! let room = Room::new(Dimensions::new(4, 3, 2)).unwrap();
//! let space = SearchSpace::new(&room, Point3::new(1, 1, 0)).unwrap();
//! let path = space
//!     .find_path(&mut PathFinder::new(), Point3::new(2, 1, 2))
//!     .unwrap();
//! assert_eq!(path.len(), 7);
//! ```

mod error;
mod face;
mod frame;
mod room;
mod space;
mod surface;

pub use error::RoomError;
pub use face::{Direction, Face, SurfaceKind};
pub use frame::{Bounds3, Frame, Placement};
pub use room::{Dimensions, Room};
pub use space::{SearchSpace, SurfaceCell};
pub use surface::Surface;
