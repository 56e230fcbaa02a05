//! Terminal runner (default binary).
//!
//! Fixed frame pacing: every frame feeds `FRAME_MS` to the simulation, drains the
//! pending key events and redraws. Input is polled with a timeout until the next
//! frame is due, so key presses are applied as soon as they arrive.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_blockfall::core::{GameSnapshot, GameState};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term));

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game_state = GameState::new(clock_seed());
    let view = GameView::default();

    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut next_frame = Instant::now() + frame;

    let mut snap: GameSnapshot = game_state.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Apply input until the next frame is due.
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game_state.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        next_frame += frame;
        let now = Instant::now();
        if next_frame < now {
            // Fell behind (suspended terminal); resync instead of catching up.
            next_frame = now + frame;
        }

        game_state.advance(FRAME_MS)?;
    }
}
