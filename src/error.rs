//! Contains the errors returned by enharmony.

use thiserror::Error;

use crate::music::{modes::Mode, notes::NoteName};

/// An error returned when a theory operation is called with arguments outside its domain.
///
/// Broken internal invariants (for example, an out-of-key note that the chromatic table labels with
/// a natural) are not represented here. Those are bugs in the spelling tables and abort with a panic
/// instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum TheoryError {
    #[error("cannot engrave notes in the {0} mode, only major and minor keys are supported")]
    UnsupportedEngravingMode(Mode),

    #[error("step {step} in the circle of fifths for the {mode} mode needs more than one sharp or flat")]
    StepOutOfRange { step: i32, mode: Mode },

    #[error(
        "cannot spell the {root} {} scale with at most two sharps or flats per note",
        .mode.common_name()
    )]
    UnspellableKey { root: NoteName, mode: Mode },

    #[error("cannot parse note name {0:?}")]
    InvalidNoteName(String),
}

/// A result whose error is a [`TheoryError`].
pub type Result<T> = std::result::Result<T, TheoryError>;
