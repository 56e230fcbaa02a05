use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::types::{CellValue, GameAction, FRAME_MS};
use tui_blockfall::core::{rotate_mask, Board, GameState, STANDARD_TEMPLATES};
use tui_blockfall::term::{FrameBuffer, GameView, Viewport};

fn bench_advance(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("advance_frame", |b| {
        b.iter(|| {
            if state.game_over() {
                state.apply_action(GameAction::Restart);
            }
            state.advance(black_box(FRAME_MS)).unwrap();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, CellValue::Blue).unwrap();
                }
            }
            black_box(board.clear_completed_lines());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(state.spawn_piece());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut left = false;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            let action = if left {
                GameAction::MoveLeft
            } else {
                GameAction::MoveRight
            };
            if !state.apply_action(action) {
                left = !left;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut mask = STANDARD_TEMPLATES[2].mask;
    c.bench_function("rotate_mask", |b| {
        b.iter(|| {
            rotate_mask(black_box(&mut mask));
        })
    });

    let mut state = GameState::new(12345);
    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            black_box(state.apply_action(GameAction::Rotate));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
