//! Painter and cursor capabilities.
//!
//! The engine never rasterizes anything itself. Every window owns an
//! offscreen painter created from the frame's render target, widgets draw
//! into it, and `FrameContext::render` blits the window painters back onto
//! the target.

use crate::primitives::{Color, Point, Rect};
use crate::theme::Font;

/// A drawing surface.
///
/// Coordinates are local to the surface. Rectangles are edge-based and
/// inclusive, so `Rect::new(0, 0, 9, 9)` covers a 10x10 block.
pub trait Painter {
    /// Host-side buffer a painter can wrap.
    type Buffer;

    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Outline only.
    fn draw_rectangle(&mut self, rect: Rect, color: Color);

    fn draw_filled_rectangle(&mut self, rect: Rect, border: Color, fill: Color);

    fn draw_filled_polygon(&mut self, points: &[Point], color: Color);

    fn draw_filled_rounded_rectangle(&mut self, rect: Rect, border: Color, fill: Color, radius: i32);

    /// Draw `text` with its top-left corner at `at`.
    fn draw_text(&mut self, text: &str, font: &Font, at: Point, color: Color, height: u32);

    /// Bounding box of `text`, anchored at the origin.
    fn measure_text(&self, text: &str, font: &Font, height: u32) -> Rect;

    fn clear(&mut self, color: Color);

    /// Acquire the surface for drawing.
    fn begin(&mut self) {}

    /// Release the surface acquired by `begin`.
    fn end(&mut self) {}

    /// Create an owned offscreen surface of the given size.
    fn create_sub_painter(&self, width: i32, height: i32) -> Self
    where
        Self: Sized;

    /// Wrap a host buffer, typically the real render target.
    fn create_from_buffer(&self, buffer: Self::Buffer) -> Self
    where
        Self: Sized;

    /// Copy `other` onto this surface with its top-left corner at `at`.
    fn draw_painter(&mut self, other: &Self, at: Point)
    where
        Self: Sized;

    /// Run `draw` between `begin` and `end`.
    fn scoped<R>(&mut self, draw: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.begin();
        let result = draw(self);
        self.end();
        result
    }
}

/// OS cursor shapes the window chrome asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorStyle {
    #[default]
    Normal,
    /// I-beam.
    Editing,
    /// Diagonal resize (bottom-right corner).
    ResizeNW,
    /// Vertical resize (bottom edge).
    ResizeN,
    /// Horizontal resize (right edge).
    ResizeE,
}

/// The host's cursor-styling hook.
pub trait CursorApi {
    fn set_cursor_style(&mut self, style: CursorStyle);
}

impl<F: FnMut(CursorStyle)> CursorApi for F {
    fn set_cursor_style(&mut self, style: CursorStyle) {
        self(style)
    }
}
