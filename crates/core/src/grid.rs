//! Grid module - the settled-cell matrix
//!
//! The grid is a fixed `W x H` array of cells where row 0 is the top and row
//! `H - 1` is the bottom. Dimensions are part of the type, so they can never
//! change after construction. Every public access is bounds-checked.
//!
//! Only two operations change settled cells during play: [`Grid::merge`] commits a
//! landed piece, and [`Grid::clear_completed_lines`] removes full rows.

use arrayvec::ArrayVec;

use crate::error::{CoreError, Result};
use crate::piece::Piece;
use crate::types::{CellValue, GRID_HEIGHT, GRID_WIDTH};

/// The play field used by the game
pub type Board = Grid<GRID_WIDTH, GRID_HEIGHT>;

/// A `W` columns x `H` rows grid of settled cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<const W: usize, const H: usize> {
    rows: [[CellValue; W]; H],
}

impl<const W: usize, const H: usize> Grid<W, H> {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            rows: [[CellValue::Empty; W]; H],
        }
    }

    /// Create a grid from explicit row contents
    pub fn from_rows(rows: [[CellValue; W]; H]) -> Self {
        Self { rows }
    }

    pub fn width(&self) -> usize {
        W
    }

    pub fn height(&self) -> usize {
        H
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<(usize, usize)> {
        if row < 0 || col < 0 || row as usize >= H || col as usize >= W {
            return None;
        }
        Some((row as usize, col as usize))
    }

    fn out_of_range(row: i8, col: i8) -> CoreError {
        CoreError::OutOfRange {
            row: row.into(),
            col: col.into(),
            width: W,
            height: H,
        }
    }

    /// Check if (row, col) lies inside the grid
    pub fn in_bounds(&self, row: i8, col: i8) -> bool {
        Self::index(row, col).is_some()
    }

    /// Cell value at (row, col), failing with `OutOfRange` outside the grid
    pub fn cell_at(&self, row: i8, col: i8) -> Result<CellValue> {
        Self::index(row, col)
            .map(|(r, c)| self.rows[r][c])
            .ok_or_else(|| Self::out_of_range(row, col))
    }

    /// Cell value at (row, col), `None` outside the grid
    pub fn get(&self, row: i8, col: i8) -> Option<CellValue> {
        Self::index(row, col).map(|(r, c)| self.rows[r][c])
    }

    /// Overwrite a single cell
    pub fn set(&mut self, row: i8, col: i8, value: CellValue) -> Result<()> {
        let (r, c) = Self::index(row, col).ok_or_else(|| Self::out_of_range(row, col))?;
        self.rows[r][c] = value;
        Ok(())
    }

    /// Check if position is inside the grid and holds a settled cell
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(v) if v.is_filled())
    }

    /// Check if a row has no empty cell
    pub fn is_row_complete(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|cells| cells.iter().all(CellValue::is_filled))
    }

    /// Commit a piece's filled cells into the grid
    ///
    /// Overlap is not checked: callers decide a piece may land before merging it.
    /// Every target cell must lie inside the grid, otherwise nothing is written and
    /// `OutOfRange` is returned.
    pub fn merge(&mut self, piece: &Piece) -> Result<()> {
        let cells = piece.filled_cells();
        if let Some(&(row, col)) = cells.iter().find(|&&(r, c)| !self.in_bounds(r, c)) {
            return Err(Self::out_of_range(row, col));
        }

        for &(row, col) in &cells {
            self.rows[row as usize][col as usize] = piece.tag;
        }
        Ok(())
    }

    /// Indices of every complete row, top to bottom
    pub fn locate_completed_lines(&self) -> ArrayVec<usize, H> {
        (0..H).filter(|&row| self.is_row_complete(row)).collect()
    }

    /// Remove one row and shift everything above it down by one
    ///
    /// The vacated top row becomes empty.
    pub fn clear_row(&mut self, row: usize) -> Result<()> {
        if row >= H {
            return Err(CoreError::OutOfRange {
                row: row as i32,
                col: 0,
                width: W,
                height: H,
            });
        }

        for r in (1..=row).rev() {
            self.rows[r] = self.rows[r - 1];
        }
        self.rows[0] = [CellValue::Empty; W];
        Ok(())
    }

    /// Remove every complete row in one pass and return their indices, top to bottom
    ///
    /// Rows that survive keep their relative order and settle at the bottom; the
    /// rows freed at the top are refilled with `Empty`. The result is the same as
    /// repeatedly calling [`Grid::clear_row`] on the lowest complete row.
    pub fn clear_completed_lines(&mut self) -> ArrayVec<usize, H> {
        let completed = self.locate_completed_lines();
        if completed.is_empty() {
            return completed;
        }

        // Two pointers: `read` scans upward, `write` is the next free slot from the bottom.
        let mut write = H;
        for read in (0..H).rev() {
            if completed.contains(&read) {
                continue;
            }
            write -= 1;
            if write != read {
                self.rows[write] = self.rows[read];
            }
        }

        for row in &mut self.rows[..write] {
            *row = [CellValue::Empty; W];
        }

        completed
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.rows = [[CellValue::Empty; W]; H];
    }

    /// Read-only view of all rows, top to bottom
    pub fn rows(&self) -> &[[CellValue; W]; H] {
        &self.rows
    }

    /// Number of settled cells
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_filled()).count()
    }
}

impl<const W: usize, const H: usize> Default for Grid<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::STANDARD_TEMPLATES;
    use crate::types::CellValue::{Blue as B, Empty as E, Red as R};

    #[test]
    fn test_index_bounds() {
        assert_eq!(Board::index(0, 0), Some((0, 0)));
        assert_eq!(Board::index(19, 9), Some((19, 9)));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(0, -1), None);
        assert_eq!(Board::index(20, 0), None);
        assert_eq!(Board::index(0, 10), None);
    }

    #[test]
    fn test_cell_at_reports_out_of_range() {
        let grid: Grid<4, 4> = Grid::new();
        assert_eq!(grid.cell_at(3, 3), Ok(E));
        assert_eq!(
            grid.cell_at(4, 0),
            Err(CoreError::OutOfRange {
                row: 4,
                col: 0,
                width: 4,
                height: 4
            })
        );
        assert!(grid.cell_at(0, -1).is_err());
    }

    #[test]
    fn test_clear_bottom_row_shifts_row_above_down() {
        let mut grid = Grid::<4, 4>::from_rows([
            [E, E, E, E],
            [E, E, E, E],
            [B, E, E, E],
            [R, R, R, R],
        ]);

        let cleared = grid.clear_completed_lines();
        assert_eq!(cleared.as_slice(), &[3]);
        assert_eq!(grid.rows()[3], [B, E, E, E]);
        assert_eq!(grid.rows()[0], [E, E, E, E]);
        assert_eq!(grid.filled_count(), 1);
    }

    #[test]
    fn test_clear_with_nothing_complete_is_identity() {
        let mut grid = Grid::<4, 4>::from_rows([
            [E, E, E, E],
            [R, E, R, E],
            [B, B, B, E],
            [R, R, E, R],
        ]);
        let before = grid.clone();

        assert!(grid.clear_completed_lines().is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_clear_all_rows_empties_grid() {
        let mut grid = Grid::<4, 3>::from_rows([[R; 4], [B; 4], [R; 4]]);
        let cleared = grid.clear_completed_lines();
        assert_eq!(cleared.as_slice(), &[0, 1, 2]);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut grid = Grid::<3, 5>::from_rows([
            [R, E, E],
            [B, B, B],
            [E, B, E],
            [R, R, R],
            [E, E, R],
        ]);

        let cleared = grid.clear_completed_lines();
        assert_eq!(cleared.as_slice(), &[1, 3]);
        assert_eq!(
            grid.rows(),
            &[[E, E, E], [E, E, E], [R, E, E], [E, B, E], [E, E, R]]
        );
    }

    #[test]
    fn test_one_pass_matches_repeated_single_row_clears() {
        let rows = [
            [B, B, B],
            [R, E, E],
            [B, B, B],
            [B, B, B],
            [E, R, E],
            [R, R, R],
        ];
        let mut one_pass = Grid::<3, 6>::from_rows(rows);
        let mut stepwise = Grid::<3, 6>::from_rows(rows);

        // Always remove the lowest complete row; indices above it move after each step.
        while let Some(&row) = stepwise.locate_completed_lines().last() {
            stepwise.clear_row(row).unwrap();
        }
        assert_eq!(one_pass.clear_completed_lines().as_slice(), &[0, 2, 3, 5]);

        assert_eq!(one_pass, stepwise);
    }

    #[test]
    fn test_merge_writes_tag() {
        let mut grid = Board::new();
        let piece = Piece::new(&STANDARD_TEMPLATES[0], 16, 0);
        grid.merge(&piece).unwrap();

        for (row, col) in [(18, 1), (18, 2), (19, 1), (19, 2)] {
            assert_eq!(grid.cell_at(row, col), Ok(CellValue::Green));
        }
        assert_eq!(grid.filled_count(), 4);
    }

    #[test]
    fn test_merge_out_of_bounds_writes_nothing() {
        let mut grid = Board::new();
        // Line in mask col 1 with anchor col 9 lands on column 10.
        let piece = Piece::new(&STANDARD_TEMPLATES[1], 0, 9);
        assert!(matches!(
            grid.merge(&piece),
            Err(CoreError::OutOfRange { col: 10, .. })
        ));
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_merge_completes_row() {
        let mut grid = Grid::<4, 4>::new();
        for col in 2..4 {
            grid.set(3, col, R).unwrap();
        }
        assert!(grid.locate_completed_lines().is_empty());

        // Square fills mask cols 1..=2 of rows 2..=3; anchor col -1 covers columns 0..=1.
        let piece = Piece::new(&STANDARD_TEMPLATES[0], 0, -1);
        grid.merge(&piece).unwrap();
        assert_eq!(grid.locate_completed_lines().as_slice(), &[3]);
    }

    #[test]
    fn test_clear_row_out_of_range() {
        let mut grid = Grid::<4, 4>::new();
        assert!(grid.clear_row(4).is_err());
    }
}
