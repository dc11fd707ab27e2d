//! Spanning-tree builder: connect all rooms with doors, no loops
//!
//! Two phases over the adjacency graph. First a randomized DFS from the
//! start room that stops the moment the goal is visited; the rooms it
//! leaves on its stack become the seed frontier. Then a bushy expansion
//! that repeatedly picks a random *index* into that frontier and grows
//! from it, which spreads dead ends across the whole maze instead of
//! chaining them off the solution path. Every tree edge gets exactly
//! one door.

use std::collections::{HashMap, HashSet};

use crate::error::MazeError;
use crate::rng::MazeRng;

use super::grid::{Axis, AxisSet, Cell, Direction};
use super::room::{Room, RoomId, RoomTable};

/// Output of the spanning-tree stage
#[derive(Debug, Clone)]
pub(crate) struct SpanningTree {
    /// Child room id → parent room id; the start room has no entry
    pub paths: HashMap<RoomId, RoomId>,
    /// Door registry keyed by the lower-side cell of the pierced wall
    pub doors: HashMap<Cell, AxisSet>,
    /// Room ids from start (0) to goal (−1)
    pub solution: Vec<RoomId>,
}

/// Grow the tree, place doors, and extract the solution path
pub(crate) fn grow_spanning_tree(
    rooms: &mut RoomTable,
    rng: &mut MazeRng,
) -> Result<SpanningTree, MazeError> {
    let mut stack = vec![RoomId::START];
    let mut visited: HashSet<RoomId> = stack.iter().copied().collect();
    let mut paths = HashMap::new();
    let mut doors: HashMap<Cell, AxisSet> = HashMap::new();
    let mut reached_goal = false;

    // Phase 1: randomized DFS until the goal is on top of the stack.
    while let Some(&current) = stack.last() {
        if current == RoomId::GOAL {
            stack.pop();
            reached_goal = true;
            break;
        }
        let candidates = unvisited_neighbors(rooms.get(current)?, &visited);
        match rng.choose(&candidates).copied() {
            Some(next) => {
                stack.push(next);
                visited.insert(next);
                paths.insert(next, current);
                place_door(rooms, &mut doors, current, next, rng)?;
            }
            None => {
                stack.pop();
            }
        }
    }

    // The grid partition makes the room graph a connected lattice, so
    // in practice this never fires; the check keeps an impossible
    // lookup failure out of the solution walk below.
    if !reached_goal {
        return Err(MazeError::GoalUnreachable);
    }

    // Phase 2: the leftover stack is an unordered frontier pool. Grow
    // from a random member until every room has been attached.
    while !stack.is_empty() {
        let i = rng.index(stack.len());
        let current = stack[i];
        let candidates = unvisited_neighbors(rooms.get(current)?, &visited);
        match rng.choose(&candidates).copied() {
            Some(next) => {
                stack.push(next);
                visited.insert(next);
                paths.insert(next, current);
                place_door(rooms, &mut doors, current, next, rng)?;
            }
            None => {
                stack.remove(i);
            }
        }
    }

    // Walk parent links backward from the goal.
    let mut solution = vec![RoomId::GOAL];
    while solution[0] != RoomId::START {
        let parent = *paths
            .get(&solution[0])
            .ok_or(MazeError::GoalUnreachable)?;
        solution.insert(0, parent);
    }

    Ok(SpanningTree {
        paths,
        doors,
        solution,
    })
}

/// Not-yet-visited neighbors in discovery order
fn unvisited_neighbors(room: &Room, visited: &HashSet<RoomId>) -> Vec<RoomId> {
    room.neighbor_ids()
        .iter()
        .copied()
        .filter(|id| !visited.contains(id))
        .collect()
}

/// Place one door on the shared face of a tree edge
///
/// The pair is normalized so `lo` sits on the negative side of the
/// pierced axis. The door cell is random within the cross-axis overlap
/// of the two boxes; doors through row or column walls always sit at
/// the lowest overlapping height. Both rooms record the door with the
/// cell and face code seen from their own side, and the global registry
/// records the pierced axis at the lower-side cell.
fn place_door(
    rooms: &mut RoomTable,
    doors: &mut HashMap<Cell, AxisSet>,
    a: RoomId,
    b: RoomId,
    rng: &mut MazeRng,
) -> Result<(), MazeError> {
    let dir = rooms
        .get(a)?
        .direction_to(b)
        .ok_or(MazeError::NotAdjacent(a, b))?;
    let (lo_id, hi_id) = if dir.is_positive() { (a, b) } else { (b, a) };
    let axis = dir.axis();

    let (lo_loc, lo_end) = {
        let room = rooms.get(lo_id)?;
        (room.loc, room.end())
    };
    let (hi_loc, hi_end) = {
        let room = rooms.get(hi_id)?;
        (room.loc, room.end())
    };

    let cell = match axis {
        Axis::Height => {
            let r = rng.between(lo_loc.r.max(hi_loc.r), lo_end.r.min(hi_end.r) - 1);
            let c = rng.between(lo_loc.c.max(hi_loc.c), lo_end.c.min(hi_end.c) - 1);
            Cell::new(lo_end.h - 1, r, c)
        }
        Axis::Row => {
            let h = lo_end.h.min(hi_end.h) - 1;
            let c = rng.between(lo_loc.c.max(hi_loc.c), lo_end.c.min(hi_end.c) - 1);
            Cell::new(h, lo_end.r - 1, c)
        }
        Axis::Col => {
            let h = lo_end.h.min(hi_end.h) - 1;
            let r = rng.between(lo_loc.r.max(hi_loc.r), lo_end.r.min(hi_end.r) - 1);
            Cell::new(h, r, lo_end.c - 1)
        }
    };

    *doors.entry(cell).or_default() |= AxisSet::from(axis);
    rooms
        .get_mut(lo_id)?
        .add_door(hi_id, cell, Direction::from_axis(axis, true));
    rooms
        .get_mut(hi_id)?
        .add_door(lo_id, cell.stepped(axis), Direction::from_axis(axis, false));
    Ok(())
}
