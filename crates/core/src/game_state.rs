//! Game state module - the game loop controller
//!
//! This module ties together the grid, the active piece, the catalog, the RNG and
//! the simulation clock. Callers drive it with two entry points:
//!
//! - [`GameState::advance`] once per frame with the elapsed milliseconds
//! - [`GameState::apply_action`] once per discrete input event
//!
//! Descent is checked before it is applied: a tick first lands a piece that is
//! already resting, otherwise it moves the piece down one row and lands it right
//! away if the new position rests. A freshly spawned piece that overlaps settled
//! cells ends the game.

use crate::catalog::ShapeCatalog;
use crate::clock::SimulationClock;
use crate::collision::{overlaps, will_bottom_collide, will_have_horizontal_collision};
use crate::error::Result;
use crate::grid::Board;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::rotation::{adjust_out_of_bounds, rotate};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// The active piece is falling and accepts input
    Falling,
    /// A spawned piece overlapped settled cells; only `Restart` does anything
    GameOver,
}

/// Record of the most recent landing (consumed by observers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingEvent {
    pub kind: PieceKind,
    pub row: i8,
    pub col: i8,
    pub cleared_rows: u32,
    pub topped_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Board,
    active: Piece,
    catalog: ShapeCatalog,
    rng: SimpleRng,
    clock: SimulationClock,
    phase: GamePhase,
    paused: bool,
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Pieces spawned this episode, the current one included.
    piece_id: u32,
    lines_cleared: u32,
    last_event: Option<LandingEvent>,
}

impl GameState {
    /// Create a new game with the standard catalog and spawn the first piece
    pub fn new(seed: u32) -> Self {
        Self::with_catalog(seed, ShapeCatalog::standard())
    }

    /// Create a new game drawing pieces from `catalog`
    pub fn with_catalog(seed: u32, catalog: ShapeCatalog) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Piece::spawn(catalog.random(&mut rng));

        let mut state = Self {
            grid: Board::new(),
            active,
            catalog,
            rng,
            clock: SimulationClock::default(),
            phase: GamePhase::Falling,
            paused: false,
            seed,
            episode_id: 0,
            piece_id: 1,
            lines_cleared: 0,
            last_event: None,
        };
        if overlaps(&state.active, &state.grid) {
            state.phase = GamePhase::GameOver;
        }
        state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Read-only view of the settled cells
    pub fn grid(&self) -> &Board {
        &self.grid
    }

    /// Read-only view of the active piece
    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Replace the settled cells (test setup)
    #[doc(hidden)]
    pub fn grid_mut(&mut self) -> &mut Board {
        &mut self.grid
    }

    /// Replace the active piece (test setup)
    #[doc(hidden)]
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<LandingEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = *self.grid.rows();
        out.active = ActiveSnapshot::from(self.active);
        out.paused = self.paused;
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.piece_id = self.piece_id;
        out.lines_cleared = self.lines_cleared;
        out.next_tick_ms = self.clock.until_next_tick_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: *self.grid.rows(),
            active: ActiveSnapshot::from(self.active),
            paused: self.paused,
            game_over: self.game_over(),
            episode_id: self.episode_id,
            seed: self.seed,
            piece_id: self.piece_id,
            lines_cleared: self.lines_cleared,
            next_tick_ms: self.clock.until_next_tick_ms(),
        }
    }

    /// Advance the simulation by `delta_ms`
    ///
    /// Returns whether a descent tick fired. An error means a landing tried to
    /// write outside the grid, which is an invariant violation.
    pub fn advance(&mut self, delta_ms: u32) -> Result<bool> {
        if self.paused || self.game_over() {
            return Ok(false);
        }
        if !self.clock.advance(delta_ms) {
            return Ok(false);
        }
        self.descend()?;
        Ok(true)
    }

    /// Run one descent tick immediately, regardless of the clock
    pub fn descend(&mut self) -> Result<()> {
        if self.game_over() {
            return Ok(());
        }

        if will_bottom_collide(&self.active, &self.grid) {
            return self.land();
        }

        self.active.row += 1;
        if will_bottom_collide(&self.active, &self.grid) {
            self.land()?;
        }
        Ok(())
    }

    /// Merge the active piece, clear completed rows and spawn the next piece
    fn land(&mut self) -> Result<()> {
        let landed = self.active;
        self.grid.merge(&landed)?;

        let cleared = self.grid.clear_completed_lines().len() as u32;
        self.lines_cleared += cleared;

        let spawned = self.spawn_piece();

        self.last_event = Some(LandingEvent {
            kind: landed.kind,
            row: landed.row,
            col: landed.col,
            cleared_rows: cleared,
            topped_out: !spawned,
        });
        Ok(())
    }

    /// Replace the active piece with a uniformly chosen template at the spawn anchor
    ///
    /// Returns false (and ends the game) if the new piece overlaps settled cells.
    pub fn spawn_piece(&mut self) -> bool {
        let template = *self.catalog.random(&mut self.rng);
        self.active = Piece::spawn(&template);
        self.piece_id = self.piece_id.wrapping_add(1);

        if overlaps(&self.active, &self.grid) {
            self.phase = GamePhase::GameOver;
            return false;
        }
        true
    }

    /// Try to shift the active piece one column
    pub(crate) fn try_move(&mut self, direction: Direction) -> bool {
        if will_have_horizontal_collision(&self.active, &self.grid, direction) {
            return false;
        }
        self.active.col += direction.delta();
        true
    }

    /// Try to rotate the active piece clockwise
    ///
    /// The rotated piece is pushed back between the side walls; if it then overlaps
    /// settled cells or the floor, the rotation is rejected and nothing changes.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let mut candidate = self.active;
        rotate(&mut candidate);
        adjust_out_of_bounds(&mut candidate, self.grid.width());

        if overlaps(&candidate, &self.grid) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Start over: empty grid, fresh clock, same RNG stream
    pub fn restart(&mut self) {
        self.grid.clear();
        self.clock.reset();
        self.phase = GamePhase::Falling;
        self.paused = false;
        self.lines_cleared = 0;
        self.piece_id = 0;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn_piece();
    }

    /// Apply a game action
    ///
    /// Returns whether the action changed anything. Rejected moves and rotations
    /// return false and leave the state untouched.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Pause => {
                if self.game_over() {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            _ if self.paused || self.game_over() => false,
            GameAction::MoveLeft => self.try_move(Direction::Left),
            GameAction::MoveRight => self.try_move(Direction::Right),
            GameAction::Rotate => self.try_rotate(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
