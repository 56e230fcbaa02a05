//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the simulation core of the falling-block game: the grid, the
//! falling piece and the rules for moving, rotating, landing and clearing rows.
//! It has **zero dependencies** on terminals, windows or I/O:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable without a front end
//! - **Allocation-free hot paths**: cell lists and cleared rows live in `ArrayVec`s
//!
//! # Module Structure
//!
//! - [`catalog`]: Immutable piece templates (4x4 masks plus a cell tag)
//! - [`piece`]: The active piece, a mutable instance of a template
//! - [`rotation`]: In-place clockwise ring rotation and wall correction
//! - [`grid`]: Settled cells, merge, completed-row detection and compaction
//! - [`collision`]: Pure placement queries against the grid
//! - [`clock`]: Fixed-interval descent ticks from caller-supplied time
//! - [`game_state`]: The controller wiring everything together
//! - [`rng`]: Deterministic LCG for uniform template choice
//! - [`snapshot`]: Copyable read-only views for renderers
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::GameState;
//! use tui_blockfall_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! // The first non-zero advance fires a descent tick.
//! assert_eq!(game.advance(16), Ok(true));
//! assert!(!game.game_over());
//! ```

pub mod catalog;
pub mod clock;
pub mod collision;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use catalog::{PieceTemplate, ShapeCatalog, STANDARD_TEMPLATES};
pub use clock::SimulationClock;
pub use collision::{overlaps, will_bottom_collide, will_have_horizontal_collision};
pub use error::CoreError;
pub use game_state::{GamePhase, GameState, LandingEvent};
pub use grid::{Board, Grid};
pub use piece::Piece;
pub use rng::SimpleRng;
pub use rotation::{adjust_out_of_bounds, rotate, rotate_mask};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
