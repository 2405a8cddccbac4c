//! Errors raised while configuring a generator.
//!
//! Evaluation itself cannot fail; everything here is rejected before the first
//! sample is taken.

use thiserror::Error;

use crate::mode::{Dimension, Mode};

/// An error that can occur while selecting or building a generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// A mode name did not match any known mode.
    #[error("Unknown noise mode: {0}")]
    UnknownMode(String),
    /// A generator of one dimension was requested for a mode of another.
    #[error("Mode {mode} evaluates in {found}, but a {expected} generator was requested")]
    DimensionMismatch {
        /// The configured mode.
        mode: Mode,
        /// The dimension the caller asked for.
        expected: Dimension,
        /// The dimension of `mode`.
        found: Dimension,
    },
}

impl NoiseError {
    /// A mismatch between `mode` and the `expected` dimension.
    pub(crate) const fn mismatch(mode: Mode, expected: Dimension) -> Self {
        Self::DimensionMismatch {
            mode,
            expected,
            found: mode.dimension(),
        }
    }
}

/// Result alias for generator construction.
pub type Result<T> = std::result::Result<T, NoiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_dimensions() {
        let err = NoiseError::mismatch(Mode::Classic4D, Dimension::Two);
        assert_eq!(
            err.to_string(),
            "Mode classic_4d evaluates in 4D, but a 2D generator was requested"
        );
    }

    #[test]
    fn unknown_mode_message() {
        let err = NoiseError::UnknownMode("cubic".to_owned());
        assert_eq!(err.to_string(), "Unknown noise mode: cubic");
    }
}
