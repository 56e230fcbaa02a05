//! Terminal falling-block puzzle (workspace facade crate).
//!
//! Re-exports the member crates as `tui_blockfall::{core,input,term,types}` so the
//! binary, integration tests and benches share one import root.

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
