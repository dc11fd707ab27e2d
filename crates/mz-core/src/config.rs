//! Maze construction configuration
//!
//! All extents are in grid cells, ordered (height, rows, columns).

use serde::{Deserialize, Serialize};

use crate::error::MazeError;

/// Input for [`Maze::generate`](crate::Maze::generate)
///
/// The start and goal rooms are placed verbatim before any random
/// generation happens; `max_room_size` caps every randomly generated
/// room per axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Total grid size as (height, rows, columns)
    pub maze_size: [usize; 3],
    /// Minimal corner of the start room (room id 0)
    pub start_loc: [usize; 3],
    /// Extent of the start room
    pub start_room_size: [usize; 3],
    /// Minimal corner of the goal room (room id −1)
    pub goal_loc: [usize; 3],
    /// Extent of the goal room
    pub goal_room_size: [usize; 3],
    /// Per-axis cap on generated room extents
    pub max_room_size: [usize; 3],
}

impl MazeConfig {
    /// The reference configuration: two 9×9 floors, a 3×3 start room in
    /// the middle of the top floor, a unit goal room at the origin
    pub fn example() -> Self {
        Self {
            maze_size: [2, 9, 9],
            start_loc: [0, 3, 3],
            start_room_size: [1, 3, 3],
            goal_loc: [0, 0, 0],
            goal_room_size: [1, 1, 1],
            max_room_size: [2, 2, 2],
        }
    }

    /// Fail-fast validation, run before any grid mutation
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.maze_size.contains(&0) {
            return Err(MazeError::EmptyMazeSize {
                size: self.maze_size,
            });
        }
        if self.max_room_size.contains(&0) {
            return Err(MazeError::EmptyMaxRoomSize {
                size: self.max_room_size,
            });
        }
        self.check_fixed_room("start", self.start_loc, self.start_room_size)?;
        self.check_fixed_room("goal", self.goal_loc, self.goal_room_size)?;
        if self.fixed_rooms_overlap() {
            return Err(MazeError::RoomsOverlap);
        }
        Ok(())
    }

    fn check_fixed_room(
        &self,
        which: &'static str,
        loc: [usize; 3],
        size: [usize; 3],
    ) -> Result<(), MazeError> {
        if size.contains(&0) {
            return Err(MazeError::EmptyRoomSize { which, size });
        }
        for d in 0..3 {
            if loc[d] + size[d] > self.maze_size[d] {
                return Err(MazeError::RoomOutOfBounds {
                    which,
                    loc,
                    size,
                    maze_size: self.maze_size,
                });
            }
        }
        Ok(())
    }

    fn fixed_rooms_overlap(&self) -> bool {
        (0..3).all(|d| {
            self.start_loc[d] < self.goal_loc[d] + self.goal_room_size[d]
                && self.goal_loc[d] < self.start_loc[d] + self.start_room_size[d]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_is_valid() {
        assert_eq!(MazeConfig::example().validate(), Ok(()));
    }

    #[test]
    fn test_zero_axes_rejected() {
        let mut config = MazeConfig::example();
        config.maze_size = [2, 0, 9];
        assert!(matches!(
            config.validate(),
            Err(MazeError::EmptyMazeSize { .. })
        ));

        let mut config = MazeConfig::example();
        config.max_room_size = [2, 2, 0];
        assert!(matches!(
            config.validate(),
            Err(MazeError::EmptyMaxRoomSize { .. })
        ));

        let mut config = MazeConfig::example();
        config.goal_room_size = [1, 0, 1];
        assert!(matches!(
            config.validate(),
            Err(MazeError::EmptyRoomSize { which: "goal", .. })
        ));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut config = MazeConfig::example();
        config.start_loc = [0, 7, 7];
        assert!(matches!(
            config.validate(),
            Err(MazeError::RoomOutOfBounds { which: "start", .. })
        ));

        let mut config = MazeConfig::example();
        config.goal_loc = [2, 0, 0];
        assert!(matches!(
            config.validate(),
            Err(MazeError::RoomOutOfBounds { which: "goal", .. })
        ));
    }

    #[test]
    fn test_overlap_rejected() {
        let mut config = MazeConfig::example();
        config.goal_loc = [0, 4, 4];
        assert_eq!(config.validate(), Err(MazeError::RoomsOverlap));

        // Touching faces is not an overlap.
        let mut config = MazeConfig::example();
        config.goal_loc = [0, 3, 2];
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = MazeConfig::example();
        let json = serde_json::to_string(&config).unwrap();
        let restored: MazeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
