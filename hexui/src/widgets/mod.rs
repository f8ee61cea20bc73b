//! HexUI Widgets
//!
//! Body controls placed at a window's layout cursor.

mod button;
mod text;

pub use button::{ButtonState, ButtonVisual};

pub(crate) use button::button;
pub(crate) use text::text;

/// Height of body text and button labels.
pub const TEXT_HEIGHT: u32 = 18;

/// Padding between a button's border and its label, summed over both sides.
pub const CONTENT_GAP: i32 = 10;
