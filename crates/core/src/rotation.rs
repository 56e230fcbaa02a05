//! Rotation engine - in-place clockwise rotation of a piece mask
//!
//! The mask is rotated ring by ring: for each concentric layer of the 4x4 canvas,
//! every element on the layer's top edge starts a four-way cycle
//! (left -> top -> right -> bottom -> left). Only one scalar is held per cycle, no
//! second matrix is built. The result is identical to transposing the matrix and
//! reversing every row.
//!
//! Rotation never kicks. The only correction applied afterwards is a horizontal
//! shift that brings overflowing cells back between the side walls.

use crate::piece::Piece;
use crate::types::{Mask, MASK_SIZE};

/// Rotate a mask 90° clockwise in place
pub fn rotate_mask(mask: &mut Mask) {
    let n = MASK_SIZE;
    for layer in 0..n / 2 {
        let first = layer;
        let last = n - 1 - layer;
        for i in first..last {
            let offset = i - first;
            let top = mask[first][i];
            // left -> top
            mask[first][i] = mask[last - offset][first];
            // bottom -> left
            mask[last - offset][first] = mask[last][last - offset];
            // right -> bottom
            mask[last][last - offset] = mask[i][last];
            // top -> right
            mask[i][last] = top;
        }
    }
}

/// Rotate the piece's mask 90° clockwise; the anchor is untouched
pub fn rotate(piece: &mut Piece) {
    rotate_mask(&mut piece.mask);
}

/// Horizontal shift that brings every filled cell inside `[0, width)`
///
/// Returns 0 when nothing overflows. Otherwise the overflow on the worse side
/// decides the direction: positive pushes right, negative pushes left.
/// Widths beyond `i8::MAX` cannot be addressed by piece coordinates, so the right
/// wall is clamped there.
pub fn out_of_bounds_shift(piece: &Piece, width: usize) -> i8 {
    let Some((min_col, max_col)) = piece.column_span() else {
        return 0;
    };

    let last_col = i8::try_from(width).unwrap_or(i8::MAX).saturating_sub(1);
    let left_overflow = (-min_col).max(0);
    let right_overflow = max_col.saturating_sub(last_col).max(0);

    if left_overflow == 0 && right_overflow == 0 {
        0
    } else if left_overflow >= right_overflow {
        left_overflow
    } else {
        -right_overflow
    }
}

/// Move the anchor column so the piece re-enters the side walls
///
/// Settled cells are not consulted here; callers that care about overlap check it
/// afterwards. Returns the applied shift.
pub fn adjust_out_of_bounds(piece: &mut Piece, width: usize) -> i8 {
    let shift = out_of_bounds_shift(piece, width);
    piece.col += shift;
    shift
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::STANDARD_TEMPLATES;
    use crate::types::GRID_WIDTH;

    /// Reference rotation: transpose, then reverse each row
    fn rotate_by_transpose(mask: &Mask) -> Mask {
        let mut out = [[false; MASK_SIZE]; MASK_SIZE];
        for r in 0..MASK_SIZE {
            for c in 0..MASK_SIZE {
                out[c][r] = mask[r][c];
            }
        }
        for row in out.iter_mut() {
            row.reverse();
        }
        out
    }

    #[test]
    fn ring_rotation_matches_transpose_and_reverse() {
        for template in STANDARD_TEMPLATES.iter() {
            let mut mask = template.mask;
            rotate_mask(&mut mask);
            assert_eq!(mask, rotate_by_transpose(&template.mask), "{:?}", template.kind);
        }
    }

    #[test]
    fn line_rotates_to_horizontal() {
        let mut mask = STANDARD_TEMPLATES[1].mask;
        rotate_mask(&mut mask);
        // Column 1 becomes row 1.
        assert_eq!(mask[1], [true; 4]);
        assert_eq!(mask.iter().flatten().filter(|&&f| f).count(), 4);
    }

    #[test]
    fn four_rotations_restore_every_template() {
        for template in STANDARD_TEMPLATES.iter() {
            let mut piece = Piece::spawn(template);
            for _ in 0..4 {
                rotate(&mut piece);
            }
            assert_eq!(piece.mask, template.mask, "{:?}", template.kind);
        }
    }

    #[test]
    fn rotation_keeps_anchor() {
        let mut piece = Piece::new(&STANDARD_TEMPLATES[3], 7, 2);
        rotate(&mut piece);
        assert_eq!((piece.row, piece.col), (7, 2));
    }

    #[test]
    fn adjust_pushes_back_from_left_wall() {
        // Vertical line in mask col 1; anchor at -1 puts it on column 0.
        let mut piece = Piece::new(&STANDARD_TEMPLATES[1], 0, -1);
        rotate(&mut piece);
        // Horizontal now, occupying columns -1..=2.
        assert_eq!(piece.column_span(), Some((-1, 2)));

        assert_eq!(adjust_out_of_bounds(&mut piece, GRID_WIDTH), 1);
        assert_eq!(piece.col, 0);
        assert_eq!(piece.column_span(), Some((0, 3)));
    }

    #[test]
    fn adjust_pushes_back_from_right_wall() {
        // Line in mask col 1 sitting on the last column.
        let mut piece = Piece::new(&STANDARD_TEMPLATES[1], 0, GRID_WIDTH as i8 - 2);
        rotate(&mut piece);
        assert_eq!(piece.column_span(), Some((8, 11)));

        assert_eq!(adjust_out_of_bounds(&mut piece, GRID_WIDTH), -2);
        assert_eq!(piece.column_span(), Some((6, 9)));
    }

    #[test]
    fn wide_fields_do_not_truncate_the_right_wall() {
        // Column span 8..=11 overflows a 10-wide field but fits 200 or 128 columns.
        let mut piece = Piece::new(&STANDARD_TEMPLATES[1], 0, GRID_WIDTH as i8 - 2);
        rotate(&mut piece);
        assert_eq!(out_of_bounds_shift(&piece, 200), 0);
        assert_eq!(out_of_bounds_shift(&piece, 128), 0);
        assert_eq!(out_of_bounds_shift(&piece, 12), 0);
        assert_eq!(out_of_bounds_shift(&piece, 11), -1);
    }

    #[test]
    fn adjust_is_noop_inside_bounds() {
        let mut piece = Piece::spawn(&STANDARD_TEMPLATES[2]);
        rotate(&mut piece);
        assert_eq!(adjust_out_of_bounds(&mut piece, GRID_WIDTH), 0);
        assert_eq!(piece.col, 3);
    }
}
