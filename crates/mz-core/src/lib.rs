//! mz-core: 3D maze generation and floor-plan rendering
//!
//! Generates a traversable three-dimensional maze of variable-sized
//! rectangular rooms, connects them with doors into a spanning tree
//! rooted at the start room, extracts the unique start→goal path, and
//! renders the result as a character-art floor plan.
//!
//! The crate is pure: no I/O, no global state. All randomness comes
//! from a [`MazeRng`] the caller seeds and passes in, so the same seed
//! and configuration always reproduce the same maze.

pub mod config;
pub mod error;
pub mod maze;

mod rng;

pub use config::MazeConfig;
pub use error::MazeError;
pub use maze::{Axis, AxisSet, Cell, Direction, Maze, Room, RoomId};
pub use rng::MazeRng;
