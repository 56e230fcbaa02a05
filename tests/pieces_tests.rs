//! Piece tests - catalog templates, rotation and wall adjustment

use tui_blockfall::core::types::{CellValue, PieceKind, GRID_WIDTH, SPAWN_COL, SPAWN_ROW};
use tui_blockfall::core::{
    adjust_out_of_bounds, rotate, rotate_mask, CoreError, Piece, PieceTemplate, ShapeCatalog,
    SimpleRng, STANDARD_TEMPLATES,
};

fn sorted_cells(piece: &Piece) -> Vec<(i8, i8)> {
    let mut cells: Vec<_> = piece.mask_cells().collect();
    cells.sort();
    cells
}

#[test]
fn test_standard_templates() {
    let expected = [
        (PieceKind::Square, CellValue::Green, vec![(2, 1), (2, 2), (3, 1), (3, 2)]),
        (PieceKind::Line, CellValue::Blue, vec![(0, 1), (1, 1), (2, 1), (3, 1)]),
        (PieceKind::T, CellValue::Purple, vec![(1, 1), (2, 0), (2, 1), (2, 2)]),
        (PieceKind::L, CellValue::Red, vec![(1, 1), (2, 1), (3, 1), (3, 2)]),
        (PieceKind::Skew, CellValue::Yellow, vec![(1, 0), (1, 1), (2, 1), (2, 2)]),
    ];

    for (template, (kind, tag, cells)) in STANDARD_TEMPLATES.iter().zip(expected) {
        assert_eq!(template.kind, kind);
        assert_eq!(template.tag, tag);
        assert_eq!(template.tag, kind.tag());
        assert_eq!(template.cell_count(), 4);
        assert_eq!(sorted_cells(&Piece::new(template, 0, 0)), cells);
    }
}

#[test]
fn test_spawn_position() {
    for template in &STANDARD_TEMPLATES {
        let piece = Piece::spawn(template);
        assert_eq!((piece.row, piece.col), (SPAWN_ROW, SPAWN_COL));
        let (min, max) = piece.column_span().unwrap();
        assert!(min >= 0 && (max as usize) < GRID_WIDTH);
    }
}

#[test]
fn test_catalog_draws_every_template() {
    let catalog = ShapeCatalog::standard();
    let mut rng = SimpleRng::new(99);
    let mut seen = [0u32; 5];
    for _ in 0..500 {
        let template = catalog.random(&mut rng);
        let index = catalog
            .templates()
            .iter()
            .position(|t| t == template)
            .unwrap();
        seen[index] += 1;
    }
    assert!(seen.iter().all(|&n| n > 50), "{seen:?}");
}

#[test]
fn test_catalog_rejects_bad_templates() {
    assert!(matches!(
        ShapeCatalog::new(Vec::new()),
        Err(CoreError::InvalidTemplate { .. })
    ));

    let blank = vec![vec![false; 4]; 4];
    assert!(PieceTemplate::from_rows(PieceKind::T, CellValue::Red, &blank).is_err());

    // Literal templates get the same checks once they enter a catalog.
    let blank_literal = PieceTemplate::new(PieceKind::T, CellValue::Red, [[false; 4]; 4]);
    assert!(matches!(
        ShapeCatalog::new(vec![blank_literal]),
        Err(CoreError::InvalidTemplate { .. })
    ));

    let short = vec![vec![true; 4]; 3];
    assert!(PieceTemplate::from_rows(PieceKind::T, CellValue::Red, &short).is_err());

    let full = vec![vec![true; 4]; 4];
    assert!(PieceTemplate::from_rows(PieceKind::T, CellValue::Empty, &full).is_err());
    let big = PieceTemplate::from_rows(PieceKind::T, CellValue::Red, &full).unwrap();
    assert_eq!(big.cell_count(), 16);
}

#[test]
fn test_t_rotation() {
    let mut piece = Piece::new(&STANDARD_TEMPLATES[2], 5, 3);
    rotate(&mut piece);
    assert_eq!(sorted_cells(&piece), vec![(0, 1), (1, 1), (1, 2), (2, 1)]);
    assert_eq!((piece.row, piece.col), (5, 3));
}

#[test]
fn test_rotation_cycles_back() {
    for template in &STANDARD_TEMPLATES {
        let mut mask = template.mask;
        for _ in 0..4 {
            rotate_mask(&mut mask);
        }
        assert_eq!(mask, template.mask, "{:?}", template.kind);
    }
}

#[test]
fn test_line_rotation_against_right_wall() {
    let mut piece = Piece::new(&STANDARD_TEMPLATES[1], 5, 8);
    rotate(&mut piece);
    // Horizontal in mask row 1, spanning columns 8..=11.
    assert_eq!(piece.column_span(), Some((8, 11)));

    assert_eq!(adjust_out_of_bounds(&mut piece, GRID_WIDTH), -2);
    assert_eq!(piece.column_span(), Some((6, 9)));
}

#[test]
fn test_line_rotation_against_left_wall() {
    // Vertical line hugging column 0.
    let mut piece = Piece::new(&STANDARD_TEMPLATES[1], 5, -1);
    rotate(&mut piece);
    assert_eq!(piece.column_span(), Some((-1, 2)));

    assert_eq!(adjust_out_of_bounds(&mut piece, GRID_WIDTH), 1);
    assert_eq!(piece.column_span(), Some((0, 3)));
}

#[test]
fn test_adjust_is_noop_inside_walls() {
    let mut piece = Piece::new(&STANDARD_TEMPLATES[4], 5, 3);
    let before = piece;
    assert_eq!(adjust_out_of_bounds(&mut piece, GRID_WIDTH), 0);
    assert_eq!(piece, before);
}
