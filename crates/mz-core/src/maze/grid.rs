//! Grid geometry: cell coordinates, face directions, and the cell → room-id grid
//!
//! Coordinates follow the (height, row, column) convention throughout;
//! height index 0 is the top floor and grows downward.

use core::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::MazeError;

use super::room::RoomId;

/// A single cell coordinate in the maze grid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    pub h: usize,
    pub r: usize,
    pub c: usize,
}

impl Cell {
    pub const fn new(h: usize, r: usize, c: usize) -> Self {
        Self { h, r, c }
    }

    /// Coordinate value along one axis
    pub const fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::Height => self.h,
            Axis::Row => self.r,
            Axis::Col => self.c,
        }
    }

    /// The cell one step further along the positive side of an axis
    pub const fn stepped(&self, axis: Axis) -> Self {
        match axis {
            Axis::Height => Self::new(self.h + 1, self.r, self.c),
            Axis::Row => Self::new(self.h, self.r + 1, self.c),
            Axis::Col => Self::new(self.h, self.r, self.c + 1),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.h, self.r, self.c)
    }
}

impl From<[usize; 3]> for Cell {
    fn from(v: [usize; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// One of the three grid axes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Axis {
    Height = 0,
    Row = 1,
    Col = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Height, Axis::Row, Axis::Col];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Face direction code: which of a room's six faces a relation applies to
///
/// The numeric codes pair the negative and positive side of each axis:
/// even is the negative side, odd the positive side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Direction {
    /// Toward smaller height index (the floor above)
    Up = 0,
    /// Toward larger height index (the floor below)
    Down = 1,
    /// Toward smaller row index
    North = 2,
    /// Toward larger row index
    South = 3,
    /// Toward smaller column index
    West = 4,
    /// Toward larger column index
    East = 5,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The axis this face lies on
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Height,
            Direction::North | Direction::South => Axis::Row,
            Direction::West | Direction::East => Axis::Col,
        }
    }

    /// True for the positive side of the axis (odd codes)
    pub const fn is_positive(self) -> bool {
        (self as u8) % 2 == 1
    }

    /// The same axis, opposite side
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Direction for a given axis and side
    pub const fn from_axis(axis: Axis, positive: bool) -> Self {
        match (axis, positive) {
            (Axis::Height, false) => Direction::Up,
            (Axis::Height, true) => Direction::Down,
            (Axis::Row, false) => Direction::North,
            (Axis::Row, true) => Direction::South,
            (Axis::Col, false) => Direction::West,
            (Axis::Col, true) => Direction::East,
        }
    }

    /// Arrow drawn on the floor plan when the solution path crosses a
    /// door on this face
    pub const fn glyph(self) -> char {
        match self {
            Direction::Up => '↥',
            Direction::Down => '↧',
            Direction::North => '↑',
            Direction::South => '↓',
            Direction::West => '←',
            Direction::East => '→',
        }
    }
}

bitflags! {
    /// Set of positive axes pierced by doors at one grid cell
    ///
    /// Doors are registered on the lower-side cell of the wall they
    /// pierce, so independent doors on different axes can share a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct AxisSet: u8 {
        const HEIGHT = 1;
        const ROW = 2;
        const COL = 4;
    }
}

impl From<Axis> for AxisSet {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Height => AxisSet::HEIGHT,
            Axis::Row => AxisSet::ROW,
            Axis::Col => AxisSet::COL,
        }
    }
}

/// Mutable cell grid used while partitioning
///
/// Cells start unassigned; the partitioner claims boxes of them, and
/// `finish` freezes the result into an immutable [`Grid`].
#[derive(Debug, Clone)]
pub struct GridBuilder {
    size: [usize; 3],
    cells: Vec<Option<RoomId>>,
}

impl GridBuilder {
    pub fn new(size: [usize; 3]) -> Self {
        Self {
            size,
            cells: vec![None; size[0] * size[1] * size[2]],
        }
    }

    pub const fn size(&self) -> [usize; 3] {
        self.size
    }

    fn offset(&self, h: usize, r: usize, c: usize) -> usize {
        (h * self.size[1] + r) * self.size[2] + c
    }

    /// Room id claimed at a cell, if any
    pub fn get(&self, h: usize, r: usize, c: usize) -> Option<RoomId> {
        self.cells[self.offset(h, r, c)]
    }

    pub fn is_free(&self, h: usize, r: usize, c: usize) -> bool {
        self.get(h, r, c).is_none()
    }

    /// Claim every cell of an axis-aligned box for a room
    pub fn claim_box(&mut self, loc: Cell, size: [usize; 3], id: RoomId) {
        for h in loc.h..loc.h + size[0] {
            for r in loc.r..loc.r + size[1] {
                for c in loc.c..loc.c + size[2] {
                    let offset = self.offset(h, r, c);
                    self.cells[offset] = Some(id);
                }
            }
        }
    }

    /// Freeze into an immutable grid, reporting the first gap if the
    /// partition did not cover every cell
    pub fn finish(self) -> Result<Grid, MazeError> {
        let mut cells = Vec::with_capacity(self.cells.len());
        for (i, cell) in self.cells.iter().enumerate() {
            match cell {
                Some(id) => cells.push(*id),
                None => {
                    let c = i % self.size[2];
                    let r = (i / self.size[2]) % self.size[1];
                    let h = i / (self.size[1] * self.size[2]);
                    return Err(MazeError::PartitionGap(Cell::new(h, r, c)));
                }
            }
        }
        Ok(Grid {
            size: self.size,
            cells,
        })
    }
}

/// Immutable cell → room-id grid
///
/// Every cell belongs to exactly one room once partitioning has
/// finished; downstream stages only read from this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: [usize; 3],
    cells: Vec<RoomId>,
}

impl Grid {
    pub const fn size(&self) -> [usize; 3] {
        self.size
    }

    /// Room id owning a cell
    pub fn room_at(&self, cell: Cell) -> RoomId {
        self.cells[(cell.h * self.size[1] + cell.r) * self.size[2] + cell.c]
    }

    /// Whether two cells belong to the same room
    pub fn same_room(&self, a: Cell, b: Cell) -> bool {
        self.room_at(a) == self.room_at(b)
    }
}
