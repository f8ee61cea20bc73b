//! HexUI: immediate-mode window and widget layout
//!
//! Every frame the host declares its windows and controls against a
//! [`FrameContext`]. The context arbitrates the frame's pointer events
//! between overlapping widgets (first declared, first served), runs the
//! drag/fold/resize state machine of each window's chrome, lays controls
//! out top to bottom, and composes the window surfaces onto a render target.
//!
//! Interaction state that must survive between frames lives in caller-owned
//! profiles ([`WindowState`], [`ButtonState`]). Everything else is rebuilt
//! on each [`FrameContext::begin`].
//!
//! # Usage
//!
//! ```ignore
//! use hexui::{ButtonState, Canvas, FrameContext, InputEvent, WindowState};
//!
//! let mut ctx = FrameContext::<Canvas>::new();
//! let mut main = WindowState::default();
//! let mut ok = ButtonState::default();
//!
//! ctx.begin(Canvas::new(640, 480));
//! ctx.push_message(InputEvent::moved(20, 60));
//! ctx.window("Main", &mut main);
//! if ctx.button("OK", &mut ok) {
//!     // clicked
//! }
//! ctx.end();
//! ctx.render();
//! ```

// Core primitives
pub mod primitives;
pub mod theme;
pub mod error;

// Input and capabilities
pub mod input;
pub mod painter;
pub mod canvas;

// Layout and widgets
pub mod layout;
pub mod window;
pub mod widgets;

pub mod context;

#[cfg(test)]
mod testing;

pub use canvas::Canvas;
pub use context::FrameContext;
pub use error::{HexError, Result};
pub use input::{InputEvent, InputQueue, MessageSender};
pub use layout::LayoutCursor;
pub use painter::{CursorApi, CursorStyle, Painter};
pub use primitives::{Color, Point, Rect, Size};
pub use theme::{Font, FontStyle, TextProfile, Theme};
pub use widgets::{ButtonState, ButtonVisual};
pub use window::{ResizeEdge, WindowController, WindowInteraction, WindowRuntime, WindowState};
