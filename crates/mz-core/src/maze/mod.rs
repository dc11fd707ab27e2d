//! Maze generation pipeline
//!
//! A maze is built in three strictly ordered stages over a shared room
//! table: partition the grid into rooms, derive the face-sharing
//! neighbor graph, then grow a spanning tree that places one door per
//! tree edge and yields the unique start→goal path. The finished
//! [`Maze`] value is immutable; rendering only reads from it.

mod floor_plan;
mod grid;
mod network;
mod partition;
mod room;
mod tree;

pub use grid::{Axis, AxisSet, Cell, Direction, Grid};
pub use room::{Room, RoomId, RoomTable};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::rng::MazeRng;

/// A fully generated 3D maze
///
/// Construction is all-or-nothing: `generate` either returns a maze
/// satisfying every structural invariant or an error, never a partial
/// result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    config: MazeConfig,
    grid: Grid,
    rooms: RoomTable,
    /// Child room id → parent room id in the spanning tree
    paths: HashMap<RoomId, RoomId>,
    /// Pierced axes per lower-side door cell
    #[serde(with = "door_pairs")]
    doors: HashMap<Cell, AxisSet>,
    /// Room ids from start (0) to goal (−1)
    solution: Vec<RoomId>,
}

impl Maze {
    /// Generate a maze from the configuration, drawing all randomness
    /// from the caller's generator
    pub fn generate(config: MazeConfig, rng: &mut MazeRng) -> Result<Self, MazeError> {
        config.validate()?;
        let (grid, mut rooms) = partition::partition(&config, rng)?;
        network::link_neighbors(&grid, &mut rooms)?;
        let tree = tree::grow_spanning_tree(&mut rooms, rng)?;
        Ok(Self {
            config,
            grid,
            rooms,
            paths: tree.paths,
            doors: tree.doors,
            solution: tree.solution,
        })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grid size as (height, rows, columns)
    pub fn size(&self) -> [usize; 3] {
        self.grid.size()
    }

    pub fn room(&self, id: RoomId) -> Result<&Room, MazeError> {
        self.rooms.get(id)
    }

    /// Rooms in creation order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Parent of a room in the spanning tree; the start room has none
    pub fn parent(&self, id: RoomId) -> Option<RoomId> {
        self.paths.get(&id).copied()
    }

    pub fn tree_edges(&self) -> &HashMap<RoomId, RoomId> {
        &self.paths
    }

    pub fn doors(&self) -> &HashMap<Cell, AxisSet> {
        &self.doors
    }

    /// Room ids along the unique start→goal path
    pub fn solution_path(&self) -> &[RoomId] {
        &self.solution
    }

    /// Multi-floor character-art floor plan, floors separated by a
    /// blank line
    pub fn floor_plan(&self, with_solution: bool) -> Result<String, MazeError> {
        floor_plan::render_floor_plan(
            &self.grid,
            &self.doors,
            &self.rooms,
            &self.solution,
            with_solution,
        )
    }

    /// Step count plus the room-id chain of the solution path
    pub fn solution_summary(&self) -> String {
        floor_plan::solution_summary(&self.solution)
    }

    /// Raw room-id grid, layer by layer
    pub fn grid_dump(&self) -> String {
        floor_plan::render_grid(&self.grid)
    }
}

/// (De)serialize the door registry as ordered (cell, axes) pairs;
/// struct map keys are not representable in formats like JSON
mod door_pairs {
    use std::collections::HashMap;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::{AxisSet, Cell};

    pub fn serialize<S>(doors: &HashMap<Cell, AxisSet>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut pairs: Vec<(Cell, AxisSet)> =
            doors.iter().map(|(&cell, &axes)| (cell, axes)).collect();
        pairs.sort_unstable_by_key(|&(cell, _)| cell);
        serializer.collect_seq(pairs)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<Cell, AxisSet>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(Cell, AxisSet)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_example() {
        let mut rng = MazeRng::new(1);
        let maze = Maze::generate(MazeConfig::example(), &mut rng).unwrap();

        assert_eq!(maze.size(), [2, 9, 9]);
        assert_eq!(maze.tree_edges().len(), maze.room_count() - 1);
        assert_eq!(maze.solution_path().first(), Some(&RoomId::START));
        assert_eq!(maze.solution_path().last(), Some(&RoomId::GOAL));
        assert_eq!(maze.parent(RoomId::START), None);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let mut config = MazeConfig::example();
        config.goal_loc = [0, 3, 3];
        let mut rng = MazeRng::new(1);
        assert_eq!(
            Maze::generate(config, &mut rng).err(),
            Some(MazeError::RoomsOverlap)
        );
    }

    #[test]
    fn test_two_by_two_scenario() {
        // maze_size (1,2,2) with unit rooms: four rooms, and the only
        // two routes to the diagonal goal both take two hops.
        let config = MazeConfig {
            maze_size: [1, 2, 2],
            start_loc: [0, 0, 0],
            start_room_size: [1, 1, 1],
            goal_loc: [0, 1, 1],
            goal_room_size: [1, 1, 1],
            max_room_size: [1, 1, 1],
        };
        for seed in 0..16 {
            let mut rng = MazeRng::new(seed);
            let maze = Maze::generate(config.clone(), &mut rng).unwrap();
            assert_eq!(maze.room_count(), 4);
            let path = maze.solution_path();
            assert_eq!(path.len(), 3, "seed {seed}: {path:?}");
            assert_eq!(path[0], RoomId::START);
            assert!(path[1] == RoomId(1) || path[1] == RoomId(2));
            assert_eq!(path[2], RoomId::GOAL);
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let config = MazeConfig::example();
        let a = Maze::generate(config.clone(), &mut MazeRng::new(77)).unwrap();
        let b = Maze::generate(config, &mut MazeRng::new(77)).unwrap();

        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.tree_edges(), b.tree_edges());
        assert_eq!(a.doors(), b.doors());
        assert_eq!(a.solution_path(), b.solution_path());
        assert_eq!(a.floor_plan(true).unwrap(), b.floor_plan(true).unwrap());
        assert_eq!(a.grid_dump(), b.grid_dump());
    }

    #[test]
    fn test_json_round_trip() {
        let mut rng = MazeRng::new(9);
        let maze = Maze::generate(MazeConfig::example(), &mut rng).unwrap();

        let json = serde_json::to_string(&maze).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();

        assert_eq!(back.grid(), maze.grid());
        assert_eq!(back.tree_edges(), maze.tree_edges());
        assert_eq!(back.doors(), maze.doors());
        assert_eq!(back.solution_path(), maze.solution_path());
        assert_eq!(
            back.floor_plan(true).unwrap(),
            maze.floor_plan(true).unwrap()
        );
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let config = MazeConfig::example();
        let a = Maze::generate(config.clone(), &mut MazeRng::new(1)).unwrap();
        let b = Maze::generate(config, &mut MazeRng::new(2)).unwrap();
        // Not a hard guarantee, but these two seeds diverge.
        assert_ne!(a.grid_dump(), b.grid_dump());
    }
}
