//! Error codes for the arena core

use thiserror::Error;

/// Errors surfaced by match construction, population setup and the
/// random source.
///
/// Broken engine contracts (an entity remembering itself, `observe`
/// without a pending decision) are not represented here: they panic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArenaError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("random source cannot draw from empty range [{low}, {high}]")]
    EmptyRange { low: i64, high: i64 },

    #[error("random source exhausted")]
    Exhausted,
}

pub type Result<T> = core::result::Result<T, ArenaError>;

impl ArenaError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        ArenaError::InvalidConfiguration(msg.into())
    }
}
