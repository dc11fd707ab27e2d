//! Adjacency builder: derive the face-sharing neighbor graph
//!
//! Two rooms become mutual neighbors iff they share at least one unit
//! of wall area. Each room scans the cell layer just outside each of
//! its six faces; `Room::add_neighbor` ignores repeats, so a neighbor
//! touching many cells of a face is still registered once.

use crate::error::MazeError;

use super::grid::{Cell, Direction, Grid};
use super::room::{RoomId, RoomTable};

/// Populate every room's neighbor list from the partitioned grid
pub(crate) fn link_neighbors(grid: &Grid, rooms: &mut RoomTable) -> Result<(), MazeError> {
    let ids: Vec<RoomId> = rooms.ids().collect();
    for id in ids {
        let (loc, end) = {
            let room = rooms.get(id)?;
            (room.loc, room.end())
        };
        let room = rooms.get_mut(id)?;
        for dir in Direction::ALL {
            for cell in face_layer(loc, end, dir, grid.size()) {
                room.add_neighbor(grid.room_at(cell), dir);
            }
        }
    }
    Ok(())
}

/// Cells of the layer directly outside one face of the box
/// `[loc, end)`, empty when the face lies on the grid boundary
fn face_layer(loc: Cell, end: Cell, dir: Direction, maze_size: [usize; 3]) -> Vec<Cell> {
    let mut cells = Vec::new();
    match dir {
        Direction::Up if loc.h > 0 => {
            for r in loc.r..end.r {
                for c in loc.c..end.c {
                    cells.push(Cell::new(loc.h - 1, r, c));
                }
            }
        }
        Direction::Down if end.h < maze_size[0] => {
            for r in loc.r..end.r {
                for c in loc.c..end.c {
                    cells.push(Cell::new(end.h, r, c));
                }
            }
        }
        Direction::North if loc.r > 0 => {
            for h in loc.h..end.h {
                for c in loc.c..end.c {
                    cells.push(Cell::new(h, loc.r - 1, c));
                }
            }
        }
        Direction::South if end.r < maze_size[1] => {
            for h in loc.h..end.h {
                for c in loc.c..end.c {
                    cells.push(Cell::new(h, end.r, c));
                }
            }
        }
        Direction::West if loc.c > 0 => {
            for h in loc.h..end.h {
                for r in loc.r..end.r {
                    cells.push(Cell::new(h, r, loc.c - 1));
                }
            }
        }
        Direction::East if end.c < maze_size[2] => {
            for h in loc.h..end.h {
                for r in loc.r..end.r {
                    cells.push(Cell::new(h, r, end.c));
                }
            }
        }
        _ => {}
    }
    cells
}
