//! Property tests over randomly drawn configurations and seeds
//!
//! Every maze, regardless of seed, must satisfy the structural
//! invariants: a gapless partition, a symmetric adjacency relation, an
//! acyclic spanning tree covering every room, doors matching tree
//! edges, and a valid start→goal path.

use proptest::prelude::*;

use mz_core::{Cell, Maze, MazeConfig, MazeRng, Room, RoomId};

fn arb_config() -> impl Strategy<Value = MazeConfig> {
    (1usize..=3, 1usize..=5, 1usize..=5, 1usize..=3, 1usize..=3, 1usize..=3)
        .prop_filter("need at least two cells", |(h, r, c, ..)| h * r * c >= 2)
        .prop_map(|(h, r, c, cap_h, cap_r, cap_c)| MazeConfig {
            maze_size: [h, r, c],
            start_loc: [0, 0, 0],
            start_room_size: [1, 1, 1],
            goal_loc: [h - 1, r - 1, c - 1],
            goal_room_size: [1, 1, 1],
            max_room_size: [cap_h, cap_r, cap_c],
        })
}

fn generate(config: &MazeConfig, seed: u64) -> Maze {
    let mut rng = MazeRng::new(seed);
    Maze::generate(config.clone(), &mut rng).expect("generation failed")
}

proptest! {
    #[test]
    fn prop_partition_covers_grid((config, seed) in (arb_config(), any::<u64>())) {
        let maze = generate(&config, seed);
        let [mh, mr, mc] = maze.size();
        for h in 0..mh {
            for r in 0..mr {
                for c in 0..mc {
                    let cell = Cell::new(h, r, c);
                    let id = maze.grid().room_at(cell);
                    let room = maze.room(id).unwrap();
                    prop_assert!(room.contains(cell));
                }
            }
        }
        let total: usize = maze.rooms().map(Room::volume).sum();
        prop_assert_eq!(total, mh * mr * mc);
    }

    #[test]
    fn prop_generated_rooms_within_cap((config, seed) in (arb_config(), any::<u64>())) {
        let maze = generate(&config, seed);
        for room in maze.rooms() {
            if room.id.is_generated() {
                for d in 0..3 {
                    prop_assert!(room.size[d] >= 1);
                    prop_assert!(room.size[d] <= config.max_room_size[d]);
                }
            }
        }
    }

    #[test]
    fn prop_adjacency_symmetric((config, seed) in (arb_config(), any::<u64>())) {
        let maze = generate(&config, seed);
        for room in maze.rooms() {
            for (other, dir) in room.neighbors() {
                prop_assert_ne!(other, room.id);
                let back = maze.room(other).unwrap().direction_to(room.id);
                prop_assert_eq!(back, Some(dir.opposite()));
            }
        }
    }

    #[test]
    fn prop_tree_spans_and_is_acyclic((config, seed) in (arb_config(), any::<u64>())) {
        let maze = generate(&config, seed);
        let room_count = maze.room_count();
        prop_assert_eq!(maze.tree_edges().len(), room_count - 1);
        for room in maze.rooms() {
            let mut current = room.id;
            let mut hops = 0;
            while current != RoomId::START {
                current = maze.parent(current).expect("orphaned room");
                hops += 1;
                prop_assert!(hops <= room_count, "cycle reached via room {}", room.id);
            }
        }
    }

    #[test]
    fn prop_doors_match_tree_edges((config, seed) in (arb_config(), any::<u64>())) {
        let maze = generate(&config, seed);
        for (&child, &parent) in maze.tree_edges() {
            let (cell, dir) = maze
                .room(parent)
                .unwrap()
                .door_to(child)
                .expect("tree edge without door");
            let (back_cell, back_dir) = maze
                .room(child)
                .unwrap()
                .door_to(parent)
                .expect("door missing on child side");
            prop_assert_eq!(back_dir, dir.opposite());

            let axis = dir.axis();
            let (lower_cell, lower_id, upper_cell, upper_id) = if dir.is_positive() {
                (cell, parent, back_cell, child)
            } else {
                (back_cell, child, cell, parent)
            };
            prop_assert_eq!(lower_cell.stepped(axis), upper_cell);
            prop_assert!(maze.room(lower_id).unwrap().contains(lower_cell));
            prop_assert!(maze.room(upper_id).unwrap().contains(upper_cell));
            let flags = maze.doors().get(&lower_cell).copied().unwrap_or_default();
            prop_assert!(flags.contains(axis.into()));
        }
    }

    #[test]
    fn prop_solution_path_valid((config, seed) in (arb_config(), any::<u64>())) {
        let maze = generate(&config, seed);
        let path = maze.solution_path();
        prop_assert_eq!(path.first(), Some(&RoomId::START));
        prop_assert_eq!(path.last(), Some(&RoomId::GOAL));
        for pair in path.windows(2) {
            prop_assert_eq!(maze.parent(pair[1]), Some(pair[0]));
        }
    }

    #[test]
    fn prop_generation_deterministic((config, seed) in (arb_config(), any::<u64>())) {
        let a = generate(&config, seed);
        let b = generate(&config, seed);
        prop_assert_eq!(a.grid(), b.grid());
        prop_assert_eq!(a.tree_edges(), b.tree_edges());
        prop_assert_eq!(a.doors(), b.doors());
        prop_assert_eq!(a.solution_path(), b.solution_path());
        prop_assert_eq!(a.grid_dump(), b.grid_dump());
        prop_assert_eq!(a.floor_plan(true).unwrap(), b.floor_plan(true).unwrap());
    }

    #[test]
    fn prop_rendering_idempotent((config, seed) in (arb_config(), any::<u64>())) {
        let maze = generate(&config, seed);
        prop_assert_eq!(
            maze.floor_plan(true).unwrap(),
            maze.floor_plan(true).unwrap()
        );
        prop_assert_eq!(
            maze.floor_plan(false).unwrap(),
            maze.floor_plan(false).unwrap()
        );
    }
}
