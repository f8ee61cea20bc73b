//! Window Controller
//!
//! Window chrome is a small state machine driven by the frame's input queue:
//!
//! - a left press on the fold glyph toggles `folded`;
//! - a left press anywhere else on the title bar starts a drag;
//! - a left press on the bottom-right corner, the right edge or the bottom
//!   edge starts a resize of both axes, the width, or the height;
//! - hovering an edge with no button held restyles the OS cursor;
//! - a left release ends any drag or resize.
//!
//! Regions are tested in that order and the first match wins. The caller
//! owns a `WindowState` that persists across frames. The engine builds a
//! fresh `WindowRuntime` every frame.

use crate::input::{InputEvent, InputQueue};
use crate::layout::LayoutCursor;
use crate::painter::{CursorApi, CursorStyle, Painter};
use crate::primitives::{Point, Rect, Size};

/// Height of the title bar, and of a folded window.
pub const TITLE_BAR_HEIGHT: i32 = 40;

/// Thickness of the resize bands along the right and bottom edges.
pub const EDGE_BAND: i32 = 10;

/// Minimum width and height used when the caller leaves `min_size` unset.
pub const MIN_SIZE_FLOOR: i32 = 50;

/// Height of the title text.
pub const TITLE_TEXT_HEIGHT: u32 = 20;

/// Title text origin, window-local.
pub const TITLE_TEXT_ORIGIN: Point = Point::new(10, 10);

/// Horizontal distance from the window's right edge to the fold glyph's left side.
const FOLD_GLYPH_INSET: i32 = 30;
const FOLD_GLYPH_WIDTH: i32 = 12;
const FOLD_GLYPH_TOP: i32 = 15;
/// `ceil(15 + 6 * sqrt(3))`: an equilateral triangle 12 units wide.
const FOLD_GLYPH_BOTTOM: i32 = 26;

/// Which resize band a press or hover landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    /// Bottom-right corner: both axes.
    Corner,
    /// Right edge: width only.
    Right,
    /// Bottom edge: height only.
    Bottom,
}

impl ResizeEdge {
    pub fn cursor_style(self) -> CursorStyle {
        match self {
            ResizeEdge::Corner => CursorStyle::ResizeNW,
            ResizeEdge::Right => CursorStyle::ResizeE,
            ResizeEdge::Bottom => CursorStyle::ResizeN,
        }
    }

    /// New size after the pointer travelled from `origin` to `pointer`.
    pub fn resize(self, size_at_press: Size, origin: Point, pointer: Point) -> Size {
        let width = size_at_press.width - (origin.x - pointer.x);
        let height = size_at_press.height - (origin.y - pointer.y);
        match self {
            ResizeEdge::Corner => Size::new(width, height),
            ResizeEdge::Right => Size::new(width, size_at_press.height),
            ResizeEdge::Bottom => Size::new(size_at_press.width, height),
        }
    }
}

/// What the window chrome is doing with the pointer.
///
/// A window is never dragging and resizing at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowInteraction {
    #[default]
    Idle,
    /// Title bar held; `grab` is the press offset from the title bar origin.
    Dragging { grab: Point },
    /// A resize band held since the pointer was at `origin`.
    Resizing {
        edge: ResizeEdge,
        origin: Point,
        size_at_press: Size,
    },
}

/// Caller-owned window profile, persisted across frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    pub size: Size,
    /// Non-positive components mean "unset"; unset minimums fall back to
    /// `MIN_SIZE_FLOOR`.
    pub min_size: Size,
    /// Non-positive components mean "no maximum".
    pub max_size: Size,
    pub position: Point,
    pub folded: bool,
    pub interaction: WindowInteraction,
    /// Edge the pointer is hovering (or resizing) with the cursor restyled.
    pub cursor_hover: Option<ResizeEdge>,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            size: Size::new(300, 200),
            min_size: Size::UNSET,
            max_size: Size::UNSET,
            position: Point::ORIGIN,
            folded: false,
            interaction: WindowInteraction::Idle,
            cursor_hover: None,
        }
    }
}

impl WindowState {
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            ..Self::default()
        }
    }

    pub fn in_drag(&self) -> bool {
        matches!(self.interaction, WindowInteraction::Dragging { .. })
    }

    pub fn in_all_size_resize(&self) -> bool {
        self.resizing_edge() == Some(ResizeEdge::Corner)
    }

    pub fn in_width_resize(&self) -> bool {
        self.resizing_edge() == Some(ResizeEdge::Right)
    }

    pub fn in_height_resize(&self) -> bool {
        self.resizing_edge() == Some(ResizeEdge::Bottom)
    }

    pub fn in_cursor_styling(&self) -> bool {
        self.cursor_hover.is_some()
    }

    pub fn resizing_edge(&self) -> Option<ResizeEdge> {
        match self.interaction {
            WindowInteraction::Resizing { edge, .. } => Some(edge),
            _ => None,
        }
    }

    /// Press offset of the current drag.
    pub fn drag_offset(&self) -> Option<Point> {
        match self.interaction {
            WindowInteraction::Dragging { grab } => Some(grab),
            _ => None,
        }
    }

    /// Size when the current resize started.
    pub fn last_size(&self) -> Option<Size> {
        match self.interaction {
            WindowInteraction::Resizing { size_at_press, .. } => Some(size_at_press),
            _ => None,
        }
    }

    /// `min_size` with unset components replaced by the floor.
    pub fn effective_min_size(&self) -> Size {
        let floor = |v: i32| if v > 0 { v } else { MIN_SIZE_FLOOR };
        Size::new(floor(self.min_size.width), floor(self.min_size.height))
    }

    /// Clamp `size` into `[min_size, max_size]`. The minimum wins a conflict.
    pub fn clamp_size(&mut self) {
        let min = self.effective_min_size();
        let max = self.max_size;
        if max.width > 0 && self.size.width > max.width {
            self.size.width = max.width;
        }
        if max.height > 0 && self.size.height > max.height {
            self.size.height = max.height;
        }
        self.size.width = self.size.width.max(min.width);
        self.size.height = self.size.height.max(min.height);
    }
}

/// Screen-space hit regions of a window, fixed for one controller pass.
#[derive(Debug, Clone, Copy)]
pub struct ChromeRegions {
    pub title_bar: Rect,
    pub fold_box: Rect,
    pub window: Rect,
}

impl ChromeRegions {
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            title_bar: Rect::from_origin_size(position, Size::new(size.width, TITLE_BAR_HEIGHT)),
            fold_box: fold_glyph_box(size.width).translate(position),
            window: Rect::from_origin_size(position, size),
        }
    }

    /// Resize band under `p`, if any. The corner shadows both edges.
    pub fn edge_at(&self, p: Point) -> Option<ResizeEdge> {
        let w = self.window;
        let corner = Rect::new(w.right - EDGE_BAND, w.bottom - EDGE_BAND, w.right, w.bottom);
        let right = Rect::new(w.right - EDGE_BAND, w.top, w.right, w.bottom);
        let bottom = Rect::new(w.left, w.bottom - EDGE_BAND, w.right, w.bottom);

        if corner.contains(p) {
            Some(ResizeEdge::Corner)
        } else if right.contains(p) {
            Some(ResizeEdge::Right)
        } else if bottom.contains(p) {
            Some(ResizeEdge::Bottom)
        } else {
            None
        }
    }
}

/// Window-local bounds of the fold glyph.
pub fn fold_glyph_box(width: i32) -> Rect {
    let left = width - FOLD_GLYPH_INSET;
    Rect::new(left, FOLD_GLYPH_TOP, left + FOLD_GLYPH_WIDTH, FOLD_GLYPH_BOTTOM)
}

/// Fold glyph triangle: pointing down while expanded, up while folded.
pub fn fold_glyph(width: i32, folded: bool) -> [Point; 3] {
    let b = fold_glyph_box(width);
    let mid = b.left + FOLD_GLYPH_WIDTH / 2;
    if folded {
        [
            Point::new(b.left, b.bottom),
            Point::new(b.right, b.bottom),
            Point::new(mid, b.top),
        ]
    } else {
        [
            Point::new(b.left, b.top),
            Point::new(b.right, b.top),
            Point::new(mid, b.bottom),
        ]
    }
}

/// Runs the chrome state machine over one frame's input.
pub struct WindowController<'a> {
    state: &'a mut WindowState,
    cursor: Option<&'a mut (dyn CursorApi + 'static)>,
    regions: ChromeRegions,
}

impl<'a> WindowController<'a> {
    pub fn new(state: &'a mut WindowState, cursor: Option<&'a mut (dyn CursorApi + 'static)>) -> Self {
        let regions = ChromeRegions::new(state.position, state.size);
        Self {
            state,
            cursor,
            regions,
        }
    }

    /// Process every unconsumed event, then clamp the size.
    pub fn run(mut self, queue: &mut InputQueue) {
        queue.scan(|event| self.handle(event));
        self.state.clamp_size();
    }

    /// Returns `true` if the window claims `event`.
    fn handle(&mut self, event: &InputEvent) -> bool {
        if !event.is_pointer() {
            return false;
        }
        let p = event.position();

        match self.state.interaction {
            WindowInteraction::Dragging { grab } => {
                self.state.position = p - grab;
                if event.left_released {
                    self.state.interaction = WindowInteraction::Idle;
                    self.regions = ChromeRegions::new(self.state.position, self.state.size);
                    tracing::debug!(x = p.x, y = p.y, "window drag ended");
                }
                return true;
            }
            WindowInteraction::Resizing {
                edge,
                origin,
                size_at_press,
            } => {
                self.state.size = edge.resize(size_at_press, origin, p);
                if event.left_released {
                    self.state.interaction = WindowInteraction::Idle;
                    self.regions = ChromeRegions::new(self.state.position, self.state.size);
                    let hover = if self.state.folded { None } else { self.regions.edge_at(p) };
                    self.restyle(hover);
                    tracing::debug!(?edge, width = self.state.size.width, height = self.state.size.height, "window resize ended");
                }
                return true;
            }
            WindowInteraction::Idle => {}
        }

        if event.left_pressed && self.regions.title_bar.contains(p) {
            if self.regions.fold_box.contains(p) {
                self.state.folded = !self.state.folded;
                tracing::debug!(folded = self.state.folded, "window fold toggled");
            } else {
                let grab = p - self.regions.title_bar.origin();
                self.state.interaction = WindowInteraction::Dragging { grab };
                tracing::debug!(dx = grab.x, dy = grab.y, "window drag started");
            }
            return true;
        }

        if self.state.folded {
            self.restyle(None);
            return false;
        }

        match self.regions.edge_at(p) {
            Some(edge) => {
                self.restyle(Some(edge));
                if event.left_pressed {
                    self.state.interaction = WindowInteraction::Resizing {
                        edge,
                        origin: p,
                        size_at_press: self.state.size,
                    };
                    tracing::debug!(?edge, "window resize started");
                }
                true
            }
            None => {
                self.restyle(None);
                false
            }
        }
    }

    /// Call the cursor hook only when the hovered edge changes.
    fn restyle(&mut self, hover: Option<ResizeEdge>) {
        if self.state.cursor_hover == hover {
            return;
        }
        self.state.cursor_hover = hover;
        let style = hover.map_or(CursorStyle::Normal, ResizeEdge::cursor_style);
        tracing::debug!(?style, "cursor restyled");
        if let Some(cursor) = self.cursor.as_deref_mut() {
            cursor.set_cursor_style(style);
        }
    }
}

/// Engine-owned, per-frame view of a declared window.
pub struct WindowRuntime<P> {
    pub title: String,
    pub position: Point,
    /// Full size, even when folded.
    pub size: Size,
    pub folded: bool,
    pub painter: P,
    pub cursor: LayoutCursor,
}

impl<P: Painter> WindowRuntime<P> {
    /// Allocate the window surface from `target`, sized for `state`.
    pub fn new(title: &str, state: &WindowState, target: &P) -> Self {
        let height = if state.folded {
            TITLE_BAR_HEIGHT
        } else {
            state.size.height
        };
        Self {
            title: title.to_string(),
            position: state.position,
            size: state.size,
            folded: state.folded,
            painter: target.create_sub_painter(state.size.width, height),
            cursor: LayoutCursor::new(),
        }
    }

    /// Screen-space rectangle the window occupies this frame.
    pub fn bounds(&self) -> Rect {
        let height = if self.folded {
            TITLE_BAR_HEIGHT
        } else {
            self.size.height
        };
        Rect::from_origin_size(self.position, Size::new(self.size.width, height))
    }

    /// Convert a screen point into window-local coordinates.
    #[inline]
    pub fn to_local(&self, p: Point) -> Point {
        p - self.position
    }

    /// Paint background, title bar, fold glyph and title.
    pub fn draw_chrome(&mut self, theme: &crate::theme::Theme) {
        let width = self.size.width;
        let folded = self.folded;
        let title = &self.title;
        self.painter.scoped(|p| {
            p.clear(theme.window_background);
            p.draw_filled_rectangle(
                Rect::new(0, 0, width, TITLE_BAR_HEIGHT),
                theme.window_title_background,
                theme.window_title_background,
            );
            p.draw_filled_polygon(&fold_glyph(width, folded), theme.window_title_text);
            p.draw_text(
                title,
                &crate::theme::Font::default(),
                TITLE_TEXT_ORIGIN,
                theme.window_title_text,
                TITLE_TEXT_HEIGHT,
            );
        });
    }
}
