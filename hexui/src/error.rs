//! Frame error types.

use thiserror::Error;

/// Everything that can go wrong while laying out a frame.
///
/// None of these abort the frame. `FrameContext` records the most recent one
/// and flips its `is_ok()` flag until the next successful `begin`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("End is needed for another UI layout progress")]
    BeginWithoutEnd,

    #[error("no current window: declare a window before its controls")]
    NoCurrentWindow,

    #[error("window declared outside of a frame: call begin with a render target first")]
    NotInFrame,

    #[error("window {0:?} declared more than once in this frame")]
    DuplicateWindow(String),

    #[error("Invalid cursor API")]
    MissingCursorApi,
}

pub type Result<T> = std::result::Result<T, HexError>;
