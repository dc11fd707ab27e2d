//! Floor-plan renderer: character-art output for a finished maze
//!
//! Each floor is drawn as `2·rows + 1` text lines of `3·cols + 1`
//! characters. Room-floor rows spend two characters per cell (solid
//! block, or blank where the cell opens to the floor below) plus one
//! separator toward the next column; boundary rows between maze rows
//! pick a box-drawing junction character from the four cells meeting at
//! each corner. Doors suppress the wall they pierce. The solution
//! overlay rewrites one character per traversed door with a direction
//! arrow.

use std::collections::HashMap;

use crate::error::MazeError;

use super::grid::{AxisSet, Cell, Grid};
use super::room::{RoomId, RoomTable};

const FLOOR_RULE: &str = "===============================================";

/// Render every floor, optionally overlaying the solution path
pub(crate) fn render_floor_plan(
    grid: &Grid,
    doors: &HashMap<Cell, AxisSet>,
    rooms: &RoomTable,
    solution: &[RoomId],
    with_solution: bool,
) -> Result<String, MazeError> {
    let [mh, mr, mc] = grid.size();
    let mut floors: Vec<Vec<String>> = Vec::with_capacity(mh);

    for hi in 0..mh {
        let mut lines = Vec::with_capacity(2 * mr + 1);
        lines.push(border_row(grid, hi, 0, true));

        for ri in 0..mr {
            let mut row = String::from("│");
            for ci in 0..mc {
                let cell = Cell::new(hi, ri, ci);
                let open_below = (hi < mh - 1
                    && grid.same_room(cell, Cell::new(hi + 1, ri, ci)))
                    || door_pierces(doors, cell, AxisSet::HEIGHT);
                row.push_str(if open_below { "  " } else { "██" });

                let open_east = (ci < mc - 1
                    && grid.same_room(cell, Cell::new(hi, ri, ci + 1)))
                    || door_pierces(doors, cell, AxisSet::COL);
                row.push(if open_east { ' ' } else { '│' });
            }
            lines.push(row);

            if ri < mr - 1 {
                let mut row = String::new();
                let left_open = grid.same_room(Cell::new(hi, ri, 0), Cell::new(hi, ri + 1, 0));
                row.push(if left_open { '│' } else { '├' });
                for ci in 0..mc {
                    let cell = Cell::new(hi, ri, ci);
                    let open_south = grid.same_room(cell, Cell::new(hi, ri + 1, ci))
                        || door_pierces(doors, cell, AxisSet::ROW);
                    row.push_str(if open_south { "  " } else { "──" });
                    row.push(junction(grid, hi, ri, ci, mc));
                }
                lines.push(row);
            }
        }

        lines.push(border_row(grid, hi, mr - 1, false));
        floors.push(lines);
    }

    if with_solution && !solution.is_empty() {
        overlay_solution(&mut floors, rooms, solution)?;
    }

    let rendered: Vec<String> = floors.into_iter().map(|lines| lines.join("\n")).collect();
    Ok(rendered.join("\n\n"))
}

/// Top or bottom border of a floor, drawn against the implicit outside
fn border_row(grid: &Grid, hi: usize, ri: usize, top: bool) -> String {
    let [_, _, mc] = grid.size();
    let (open, tee, close) = if top {
        ('┌', '┬', '┐')
    } else {
        ('└', '┴', '┘')
    };
    let mut row = String::new();
    row.push(open);
    for ci in 0..mc - 1 {
        if grid.same_room(Cell::new(hi, ri, ci), Cell::new(hi, ri, ci + 1)) {
            row.push_str("───");
        } else {
            row.push_str("──");
            row.push(tee);
        }
    }
    row.push_str("──");
    row.push(close);
    row
}

/// Junction character for the corner shared by the cells at
/// (ri, ci), (ri, ci+1), (ri+1, ci), (ri+1, ci+1)
///
/// Same-room pairs leave no wall segment in that direction; the sixteen
/// raw configurations collapse to the seven glyphs used here.
fn junction(grid: &Grid, hi: usize, ri: usize, ci: usize, mc: usize) -> char {
    let cur = Cell::new(hi, ri, ci);
    let south = Cell::new(hi, ri + 1, ci);
    if ci == mc - 1 {
        return if grid.same_room(cur, south) { '│' } else { '┤' };
    }
    let east = Cell::new(hi, ri, ci + 1);
    let se = Cell::new(hi, ri + 1, ci + 1);

    if grid.same_room(cur, se) {
        ' '
    } else if grid.same_room(cur, south) {
        if grid.same_room(east, se) { '│' } else { '├' }
    } else if grid.same_room(cur, east) {
        if grid.same_room(south, se) { '─' } else { '┬' }
    } else if grid.same_room(south, se) {
        '┴'
    } else if grid.same_room(east, se) {
        '┤'
    } else {
        '┼'
    }
}

fn door_pierces(doors: &HashMap<Cell, AxisSet>, cell: Cell, axis: AxisSet) -> bool {
    doors
        .get(&cell)
        .is_some_and(|flags| flags.contains(axis))
}

/// Overwrite one character per traversed door with a direction arrow
fn overlay_solution(
    floors: &mut [Vec<String>],
    rooms: &RoomTable,
    solution: &[RoomId],
) -> Result<(), MazeError> {
    let mut prev = solution[0];
    for &next in &solution[1..] {
        let (cell, dir) = rooms
            .get(prev)?
            .door_to(next)
            .ok_or(MazeError::MissingDoor(prev, next))?;
        let line = &mut floors[cell.h][cell.r * 2 + 1];
        let col = cell.c * 3 + 1 + usize::from(dir.is_positive());
        let mut chars: Vec<char> = line.chars().collect();
        chars[col] = dir.glyph();
        *line = chars.into_iter().collect();
        prev = next;
    }
    Ok(())
}

/// Raw room-id grid, floor by floor, tab-separated with a rule line
/// after each floor
pub(crate) fn render_grid(grid: &Grid) -> String {
    let [mh, mr, mc] = grid.size();
    let mut out = String::new();
    for hi in 0..mh {
        for ri in 0..mr {
            let ids: Vec<String> = (0..mc)
                .map(|ci| grid.room_at(Cell::new(hi, ri, ci)).to_string())
                .collect();
            out.push_str(&ids.join("\t"));
            out.push('\n');
        }
        out.push_str(FLOOR_RULE);
        out.push('\n');
    }
    out
}

/// Step count plus the room-id chain of the solution path
pub(crate) fn solution_summary(solution: &[RoomId]) -> String {
    let chain: Vec<String> = solution.iter().map(RoomId::to_string).collect();
    format!(
        "{} steps:\n{}",
        solution.len().saturating_sub(1),
        chain.join(" -> ")
    )
}
