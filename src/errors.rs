//! # Error types
//!
//! All failures in the command core are local and non-fatal: a failed motion
//! leaves the cursor in place, a failed action leaves the buffer untouched,
//! and a parse error resets the command parser after a single diagnostic.
use crate::key::Rune;

/// Errors returned from parsing and editing operations.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum EditError {
    /// A rune that cannot continue the command being parsed.
    #[error("invalid command")]
    InvalidCommand,

    /// A motion that could not produce a position.
    #[error("motion failed")]
    MotionFailed,

    /// Failure due to an unset mark.
    #[error("mark not set")]
    MarkNotSet(Rune),

    /// Failure due to a missing or empty selection.
    #[error("no selection")]
    NoSelection,

    /// `;` or `,` without a previous character find.
    #[error("no previous find")]
    NoPreviousFind,

    /// The searched text does not occur in the buffer.
    #[error("text not found")]
    NotFound,

    /// `.` with no repeatable command in memory.
    #[error("nothing to repeat")]
    NothingToRepeat,

    /// Undo or redo past the end of the history.
    #[error("no further undo history")]
    UndoExhausted,
}

/// Common result type for parsing and editing operations.
pub type EditResult<T = ()> = Result<T, EditError>;
