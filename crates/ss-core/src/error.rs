//! Framework error type.
//!
//! The simulation core has no recoverable-error taxonomy of its own: inputs
//! are generated internally.  What remains are precondition violations
//! (activating twice, ticking while idle) and bad configuration, both of
//! which fail fast instead of corrupting state.

use thiserror::Error;

/// The top-level error type for `ss-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("panic episode already active")]
    AlreadyActive,

    #[error("no panic episode is active")]
    NotActive,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("rescuer list length {got} does not match configured count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
    },
}

/// Shorthand result type for all `ss-*` crates.
pub type SwarmResult<T> = Result<T, SwarmError>;
