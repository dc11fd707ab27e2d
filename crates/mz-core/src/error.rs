//! Errors raised during maze construction and rendering
//!
//! Construction is all-or-nothing: every variant here is terminal for
//! the `Maze::generate` call that produced it.

use thiserror::Error;

use crate::maze::{Cell, RoomId};

/// Errors from configuration validation, generation, and rendering
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze size must be positive on every axis, got {size:?}")]
    EmptyMazeSize { size: [usize; 3] },

    #[error("max_room_size must be positive on every axis, got {size:?}")]
    EmptyMaxRoomSize { size: [usize; 3] },

    #[error("{which} room has a zero-sized axis: {size:?}")]
    EmptyRoomSize { which: &'static str, size: [usize; 3] },

    #[error("{which} room extends outside the maze: loc {loc:?}, size {size:?}, maze {maze_size:?}")]
    RoomOutOfBounds {
        which: &'static str,
        loc: [usize; 3],
        size: [usize; 3],
        maze_size: [usize; 3],
    },

    #[error("start and goal rooms overlap")]
    RoomsOverlap,

    #[error("partitioning left cell {0} unassigned")]
    PartitionGap(Cell),

    #[error("goal room was never reached while growing the spanning tree")]
    GoalUnreachable,

    #[error("room {0} not found")]
    UnknownRoom(RoomId),

    #[error("rooms {0} and {1} are not neighbors")]
    NotAdjacent(RoomId, RoomId),

    #[error("no door recorded between rooms {0} and {1}")]
    MissingDoor(RoomId, RoomId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MazeError::RoomOutOfBounds {
            which: "start",
            loc: [0, 0, 0],
            size: [2, 2, 2],
            maze_size: [1, 1, 1],
        };
        assert!(err.to_string().contains("start room"));
        assert!(err.to_string().contains("outside the maze"));

        let err = MazeError::UnknownRoom(RoomId::GOAL);
        assert!(err.to_string().contains("-1"));
    }
}
