//! Active piece - a live instance of a template
//!
//! The piece owns a mutable copy of its template's mask (rotation edits it in
//! place) and an anchor: the grid position of the mask's top-left corner.
//! Rows above the grid (negative `row`) are allowed while falling.

use arrayvec::ArrayVec;

use crate::catalog::PieceTemplate;
use crate::types::{CellValue, Mask, PieceKind, MASK_SIZE, SPAWN_COL, SPAWN_ROW};

/// Absolute (row, col) of every filled cell; at most 16 for a 4x4 mask
pub type FilledCells = ArrayVec<(i8, i8), { MASK_SIZE * MASK_SIZE }>;

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub tag: CellValue,
    pub mask: Mask,
    pub row: i8,
    pub col: i8,
}

impl Piece {
    /// Instantiate a template at an arbitrary anchor
    pub fn new(template: &PieceTemplate, row: i8, col: i8) -> Self {
        Self {
            kind: template.kind,
            tag: template.tag,
            mask: template.mask,
            row,
            col,
        }
    }

    /// Instantiate a template at the spawn anchor
    pub fn spawn(template: &PieceTemplate) -> Self {
        Self::new(template, SPAWN_ROW, SPAWN_COL)
    }

    /// Mask-relative (row, col) of every filled cell, top-left first
    pub fn mask_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.mask.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &filled)| filled)
                .map(move |(c, _)| (r as i8, c as i8))
        })
    }

    /// Absolute grid (row, col) of every filled cell at the current anchor
    pub fn filled_cells(&self) -> FilledCells {
        self.filled_cells_at(self.row, self.col)
    }

    /// Absolute grid (row, col) of every filled cell if the anchor were `(row, col)`
    pub fn filled_cells_at(&self, row: i8, col: i8) -> FilledCells {
        self.mask_cells()
            .map(|(dr, dc)| (row + dr, col + dc))
            .collect()
    }

    /// Leftmost and rightmost absolute column holding a filled cell
    ///
    /// `None` only for a blank mask, which templates never produce.
    pub fn column_span(&self) -> Option<(i8, i8)> {
        let cells = self.filled_cells();
        let min = cells.iter().map(|&(_, c)| c).min()?;
        let max = cells.iter().map(|&(_, c)| c).max()?;
        Some((min, max))
    }
}
