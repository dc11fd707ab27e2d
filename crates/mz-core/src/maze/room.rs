//! Rooms and the id-indexed room table
//!
//! Rooms never reference each other directly; every edge and door holds
//! a [`RoomId`] resolved through the [`RoomTable`], which keeps the
//! graph free of ownership cycles.

use core::fmt;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::MazeError;

use super::grid::{Cell, Direction};

/// Unique room identifier
///
/// The start room is always 0 and the goal room always −1; generated
/// rooms take 1..N in the order the partitioner creates them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoomId(pub i32);

impl RoomId {
    pub const START: RoomId = RoomId(0);
    pub const GOAL: RoomId = RoomId(-1);

    pub const fn is_start(self) -> bool {
        self.0 == 0
    }

    pub const fn is_goal(self) -> bool {
        self.0 == -1
    }

    /// True for rooms created by the partitioner (neither start nor goal)
    pub const fn is_generated(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An axis-aligned box of grid cells, the maze's basic navigable unit
///
/// Geometry is fixed at creation; neighbor and door bookkeeping is
/// filled in by the adjacency and spanning-tree stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique id
    pub id: RoomId,
    /// Minimal corner of the room's box
    pub loc: Cell,
    /// Extent on each axis; the room occupies `[loc, loc + size)`
    pub size: [usize; 3],
    /// Neighboring rooms sharing at least one unit of wall, in
    /// discovery order
    neighbors: Vec<RoomId>,
    /// Face direction toward each neighbor, parallel to `neighbors`
    neighbor_dirs: Vec<Direction>,
    /// Door cell and face direction per connected neighbor
    doors: HashMap<RoomId, (Cell, Direction)>,
}

impl Room {
    pub fn new(id: RoomId, loc: Cell, size: [usize; 3]) -> Self {
        Self {
            id,
            loc,
            size,
            neighbors: Vec::new(),
            neighbor_dirs: Vec::new(),
            doors: HashMap::new(),
        }
    }

    /// Exclusive upper corner of the room's box
    pub const fn end(&self) -> Cell {
        Cell::new(
            self.loc.h + self.size[0],
            self.loc.r + self.size[1],
            self.loc.c + self.size[2],
        )
    }

    /// Whether a cell lies inside the room's box
    pub fn contains(&self, cell: Cell) -> bool {
        let end = self.end();
        cell.h >= self.loc.h
            && cell.h < end.h
            && cell.r >= self.loc.r
            && cell.r < end.r
            && cell.c >= self.loc.c
            && cell.c < end.c
    }

    /// Number of cells in the room
    pub const fn volume(&self) -> usize {
        self.size[0] * self.size[1] * self.size[2]
    }

    /// Register a neighbor on the given face, once per room pair
    pub fn add_neighbor(&mut self, id: RoomId, dir: Direction) {
        if !self.neighbors.contains(&id) {
            self.neighbors.push(id);
            self.neighbor_dirs.push(dir);
        }
    }

    /// Neighbors with the face direction they sit on
    pub fn neighbors(&self) -> impl Iterator<Item = (RoomId, Direction)> + '_ {
        self.neighbors
            .iter()
            .copied()
            .zip(self.neighbor_dirs.iter().copied())
    }

    /// Neighbor ids in discovery order
    pub fn neighbor_ids(&self) -> &[RoomId] {
        &self.neighbors
    }

    /// Face direction toward a specific neighbor
    pub fn direction_to(&self, id: RoomId) -> Option<Direction> {
        self.neighbors
            .iter()
            .position(|&n| n == id)
            .map(|i| self.neighbor_dirs[i])
    }

    /// Record a door to a neighbor, as seen from this room's side
    pub fn add_door(&mut self, neighbor: RoomId, cell: Cell, dir: Direction) {
        self.doors.insert(neighbor, (cell, dir));
    }

    /// Door toward a specific neighbor, if one was placed
    pub fn door_to(&self, id: RoomId) -> Option<(Cell, Direction)> {
        self.doors.get(&id).copied()
    }

    /// All doors of this room
    pub fn doors(&self) -> impl Iterator<Item = (RoomId, Cell, Direction)> + '_ {
        self.doors.iter().map(|(&id, &(cell, dir))| (id, cell, dir))
    }
}

/// Arena of rooms keyed by id
///
/// Rooms are stored in creation order and looked up through an id
/// index. Iteration follows creation order, which keeps every stage
/// that walks the table deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomTable {
    rooms: Vec<Room>,
    index: HashMap<RoomId, usize>,
}

impl RoomTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Insert a room; later inserts with the same id replace the room
    /// but keep its original position
    pub fn insert(&mut self, room: Room) {
        match self.index.get(&room.id) {
            Some(&i) => self.rooms[i] = room,
            None => {
                self.index.insert(room.id, self.rooms.len());
                self.rooms.push(room);
            }
        }
    }

    pub fn get(&self, id: RoomId) -> Result<&Room, MazeError> {
        self.index
            .get(&id)
            .map(|&i| &self.rooms[i])
            .ok_or(MazeError::UnknownRoom(id))
    }

    pub fn get_mut(&mut self, id: RoomId) -> Result<&mut Room, MazeError> {
        match self.index.get(&id) {
            Some(&i) => Ok(&mut self.rooms[i]),
            None => Err(MazeError::UnknownRoom(id)),
        }
    }

    /// Rooms in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Ids in creation order
    pub fn ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms.iter().map(|r| r.id)
    }
}
