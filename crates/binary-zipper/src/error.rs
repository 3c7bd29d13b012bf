use thiserror::Error;

/// Failure of a [`Cursor`](crate::Cursor) or [`Forest`](crate::Forest)
/// operation. Every failure is reported before the forest is touched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// `up` was requested from the root position.
    #[error("CURSOR_AT_ROOT")]
    Root,
    /// The operation needs a focus node (or a child of it) that is absent.
    #[error("INVALID_POSITION")]
    InvalidPosition,
    /// A tree cannot be pasted into a cursor that lives inside it.
    #[error("PASTE_CYCLE")]
    Cycle,
    /// The cursor or tree handle no longer matches the shape of the forest.
    #[error("STALE_CURSOR")]
    Stale,
}
