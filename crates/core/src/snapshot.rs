use crate::piece::Piece;
use crate::types::{CellValue, Mask, PieceKind, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub tag: CellValue,
    pub mask: Mask,
    pub row: i8,
    pub col: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            tag: value.tag,
            mask: value.mask,
            row: value.row,
            col: value.col,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute (row, col) of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.mask.iter().enumerate().flat_map(move |(r, mask_row)| {
            mask_row
                .iter()
                .enumerate()
                .filter(|(_, &filled)| filled)
                .map(move |(c, _)| (self.row + r as i8, self.col + c as i8))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[CellValue; GRID_WIDTH]; GRID_HEIGHT],
    pub active: ActiveSnapshot,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
    pub piece_id: u32,
    pub lines_cleared: u32,
    pub next_tick_ms: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Cell at (row, col) with the active piece drawn over the settled grid
    pub fn composed_cell(&self, row: usize, col: usize) -> CellValue {
        let on_piece = self
            .active
            .cells()
            .any(|(r, c)| r >= 0 && c >= 0 && r as usize == row && c as usize == col);
        if on_piece {
            self.active.tag
        } else {
            self.grid
                .get(row)
                .and_then(|cells| cells.get(col))
                .copied()
                .unwrap_or_default()
        }
    }
}
