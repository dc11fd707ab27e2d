//! Grid partitioner: fill the maze grid with non-overlapping rooms
//!
//! The start and goal rooms are claimed first, verbatim from the
//! configuration. The remaining cells are scanned in fixed (height,
//! row, column) order; each unclaimed cell seeds a new room grown
//! greedily and randomly in three stages. Randomness only picks the
//! extent magnitude within a cap computed from the cells still free,
//! so occupancy is never violated and the scan always terminates with
//! a full partition.

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::rng::MazeRng;

use super::grid::{Cell, Grid, GridBuilder};
use super::room::{Room, RoomId, RoomTable};

/// Partition the grid into rooms, returning the frozen grid and the
/// room table
pub(crate) fn partition(
    config: &MazeConfig,
    rng: &mut MazeRng,
) -> Result<(Grid, RoomTable), MazeError> {
    let mut grid = GridBuilder::new(config.maze_size);
    let mut rooms = RoomTable::new();

    claim_room(
        &mut grid,
        &mut rooms,
        RoomId::START,
        config.start_loc.into(),
        config.start_room_size,
    );
    claim_room(
        &mut grid,
        &mut rooms,
        RoomId::GOAL,
        config.goal_loc.into(),
        config.goal_room_size,
    );

    fill_rooms(&mut grid, &mut rooms, config, rng);

    let grid = grid.finish()?;
    Ok((grid, rooms))
}

fn claim_room(
    grid: &mut GridBuilder,
    rooms: &mut RoomTable,
    id: RoomId,
    loc: Cell,
    size: [usize; 3],
) {
    grid.claim_box(loc, size, id);
    rooms.insert(Room::new(id, loc, size));
}

/// Scan for unclaimed cells and grow a room from each
fn fill_rooms(
    grid: &mut GridBuilder,
    rooms: &mut RoomTable,
    config: &MazeConfig,
    rng: &mut MazeRng,
) {
    let [mh, mr, mc] = grid.size();
    let cap = config.max_room_size;
    let mut next_id = 1;

    for hi in 0..mh {
        for ri in 0..mr {
            for ci in 0..mc {
                if !grid.is_free(hi, ri, ci) {
                    continue;
                }

                // Stage 1: extend downward through free cells, then pick
                // the height uniformly within reach.
                let mut max_h = 1;
                while max_h < cap[0] && hi + max_h < mh && grid.is_free(hi + max_h, ri, ci) {
                    max_h += 1;
                }
                let room_h = rng.between(1, max_h);

                // Stage 2: extend along the row axis; every new row
                // slice must be free across the chosen height.
                let mut max_r = 1;
                'rows: while max_r < cap[1] && ri + max_r < mr {
                    for hj in 0..room_h {
                        if !grid.is_free(hi + hj, ri + max_r, ci) {
                            break 'rows;
                        }
                    }
                    max_r += 1;
                }
                let room_r = rng.between(1, max_r);

                // Stage 3: column extent. Unit-by-unit probing when the
                // room is a single cell so far; the full height×row
                // footprint otherwise. A room that is unit on exactly
                // one of height/row keeps column extent 1 unless it
                // abuts the last floor or last row, where it greedily
                // takes the whole reachable footprint with no random
                // draw. Deliberate quirk: it shapes the irregular
                // hallway-like cells near the far edges.
                let room_c = if room_h == 1 && room_r == 1 {
                    let mut max_c = 1;
                    while max_c < cap[2] && ci + max_c < mc && grid.is_free(hi, ri, ci + max_c) {
                        max_c += 1;
                    }
                    rng.between(1, max_c)
                } else if room_h == 1 || room_r == 1 {
                    let mut width = 1;
                    if hi == mh - 1 || ri == mr - 1 {
                        'cols: while width < cap[2] && ci + width < mc {
                            for hj in 0..room_h {
                                for rj in 0..room_r {
                                    if !grid.is_free(hi + hj, ri + rj, ci + width) {
                                        break 'cols;
                                    }
                                }
                            }
                            width += 1;
                        }
                    }
                    width
                } else {
                    let mut max_c = 1;
                    'cols: while max_c < cap[2] && ci + max_c < mc {
                        for hj in 0..room_h {
                            for rj in 0..room_r {
                                if !grid.is_free(hi + hj, ri + rj, ci + max_c) {
                                    break 'cols;
                                }
                            }
                        }
                        max_c += 1;
                    }
                    rng.between(1, max_c)
                };

                claim_room(
                    grid,
                    rooms,
                    RoomId(next_id),
                    Cell::new(hi, ri, ci),
                    [room_h, room_r, room_c],
                );
                next_id += 1;
            }
        }
    }
}
