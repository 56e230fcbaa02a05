//! Collision detector - pure placement queries
//!
//! Every query checks bounds before looking at the grid, so a candidate placement
//! partly outside the field reports a collision instead of indexing out of range.
//! Rows above the top edge are open space.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::Direction;

/// Would one more downward step collide?
///
/// True if any filled cell already sits on the last row, or the cell directly
/// below any filled cell is settled.
pub fn will_bottom_collide<const W: usize, const H: usize>(
    piece: &Piece,
    grid: &Grid<W, H>,
) -> bool {
    piece.filled_cells().iter().any(|&(row, col)| {
        let below = row as i32 + 1;
        below >= H as i32 || (below >= 0 && grid.is_occupied(row + 1, col))
    })
}

/// Would a one-column shift in `direction` leave the grid or hit a settled cell?
///
/// Only the column changes; each filled cell is checked at its current row.
pub fn will_have_horizontal_collision<const W: usize, const H: usize>(
    piece: &Piece,
    grid: &Grid<W, H>,
    direction: Direction,
) -> bool {
    let new_col = piece.col + direction.delta();
    piece
        .filled_cells_at(piece.row, new_col)
        .iter()
        .any(|&(row, col)| {
            col < 0
                || col as usize >= W
                || row as i32 >= H as i32
                || grid.is_occupied(row, col)
        })
}

/// Does the piece, where it is now, leave the field or overlap a settled cell?
///
/// Cells above row 0 only count against the side walls.
pub fn overlaps<const W: usize, const H: usize>(piece: &Piece, grid: &Grid<W, H>) -> bool {
    piece.filled_cells().iter().any(|&(row, col)| {
        col < 0 || col as usize >= W || row as i32 >= H as i32 || grid.is_occupied(row, col)
    })
}
