//! Test doubles for the painter and cursor capabilities.

use std::cell::RefCell;
use std::rc::Rc;

use crate::painter::{CursorApi, CursorStyle, Painter};
use crate::primitives::{Color, Point, Rect, Size};
use crate::theme::Font;

/// Width of every character as measured by `MockPainter`.
pub const MOCK_CHAR_WIDTH: i32 = 20;

/// A recorded painter call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Begin,
    End,
    Clear(Color),
    Line(Point, Point, Color),
    Rectangle(Rect, Color),
    FilledRectangle { rect: Rect, border: Color, fill: Color },
    Polygon(Vec<Point>, Color),
    RoundedRectangle { rect: Rect, radius: i32 },
    Text { text: String, at: Point, color: Color, height: u32 },
    Blit { title: Option<String>, at: Point, size: Size },
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Begin => "begin",
            Op::End => "end",
            Op::Clear(_) => "clear",
            Op::Line(..) => "line",
            Op::Rectangle(..) => "rectangle",
            Op::FilledRectangle { .. } => "filled_rectangle",
            Op::Polygon(..) => "polygon",
            Op::RoundedRectangle { .. } => "rounded_rectangle",
            Op::Text { .. } => "text",
            Op::Blit { .. } => "blit",
        }
    }
}

/// Records every call and measures text as `chars * 20` by `height`.
#[derive(Debug, Clone, Default)]
pub struct MockPainter {
    pub size: Size,
    pub ops: Vec<Op>,
}

impl MockPainter {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            ops: Vec::new(),
        }
    }

    pub fn log(&self) -> Vec<&'static str> {
        self.ops.iter().map(Op::name).collect()
    }

    /// First text drawn on this surface (a window's title).
    pub fn first_text(&self) -> Option<String> {
        self.ops.iter().find_map(|op| match op {
            Op::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
    }

    pub fn texts(&self) -> Vec<(String, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, at, .. } => Some((text.clone(), *at)),
                _ => None,
            })
            .collect()
    }

    pub fn filled_rectangles(&self) -> Vec<(Rect, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FilledRectangle { rect, fill, .. } => Some((*rect, *fill)),
                _ => None,
            })
            .collect()
    }

    pub fn blits(&self) -> Vec<(Option<String>, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Blit { title, at, .. } => Some((title.clone(), *at)),
                _ => None,
            })
            .collect()
    }
}

impl Painter for MockPainter {
    type Buffer = Size;

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.ops.push(Op::Line(from, to, color));
    }

    fn draw_rectangle(&mut self, rect: Rect, color: Color) {
        self.ops.push(Op::Rectangle(rect, color));
    }

    fn draw_filled_rectangle(&mut self, rect: Rect, border: Color, fill: Color) {
        self.ops.push(Op::FilledRectangle { rect, border, fill });
    }

    fn draw_filled_polygon(&mut self, points: &[Point], color: Color) {
        self.ops.push(Op::Polygon(points.to_vec(), color));
    }

    fn draw_filled_rounded_rectangle(&mut self, rect: Rect, _border: Color, _fill: Color, radius: i32) {
        self.ops.push(Op::RoundedRectangle { rect, radius });
    }

    fn draw_text(&mut self, text: &str, _font: &Font, at: Point, color: Color, height: u32) {
        self.ops.push(Op::Text {
            text: text.to_string(),
            at,
            color,
            height,
        });
    }

    fn measure_text(&self, text: &str, _font: &Font, height: u32) -> Rect {
        Rect::new(0, 0, text.chars().count() as i32 * MOCK_CHAR_WIDTH, height as i32)
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(Op::Clear(color));
    }

    fn begin(&mut self) {
        self.ops.push(Op::Begin);
    }

    fn end(&mut self) {
        self.ops.push(Op::End);
    }

    fn create_sub_painter(&self, width: i32, height: i32) -> Self {
        Self::new(width, height)
    }

    fn create_from_buffer(&self, buffer: Size) -> Self {
        Self::new(buffer.width, buffer.height)
    }

    fn draw_painter(&mut self, other: &Self, at: Point) {
        self.ops.push(Op::Blit {
            title: other.first_text(),
            at,
            size: other.size,
        });
    }
}

/// Cursor hook that remembers every style it was asked for.
#[derive(Debug, Clone, Default)]
pub struct RecordingCursor {
    styles: Rc<RefCell<Vec<CursorStyle>>>,
}

impl RecordingCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styles(&self) -> Vec<CursorStyle> {
        self.styles.borrow().clone()
    }

    pub fn clear(&self) {
        self.styles.borrow_mut().clear();
    }
}

impl CursorApi for RecordingCursor {
    fn set_cursor_style(&mut self, style: CursorStyle) {
        self.styles.borrow_mut().push(style);
    }
}
