//! Error taxonomy for the simulation core.
//!
//! Both variants are programming-invariant violations: they surface immediately and
//! are never retried. A rejected move or rotation is not an error.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A cell index outside `[0, height) x [0, width)`.
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfRange {
        row: i32,
        col: i32,
        width: usize,
        height: usize,
    },
    /// A piece template that cannot be used to build pieces.
    #[error("invalid piece template: {reason}")]
    InvalidTemplate { reason: String },
}

impl CoreError {
    pub(crate) fn invalid_template(reason: impl Into<String>) -> Self {
        CoreError::InvalidTemplate {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
