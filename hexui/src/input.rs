//! Input Queue
//!
//! Pointer messages for one frame, in arrival order. Each event can be
//! claimed by exactly one widget; the first widget declared in the frame
//! that claims an event wins it.
//!
//! The queue is rebuilt every frame by `FrameContext::begin`, so there is
//! no removal API.

use crate::primitives::Point;

/// A normalized pointer message.
///
/// `pointer_moved` is set for every message that carries a pointer position
/// (plain moves as well as left-button presses and releases).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputEvent {
    pub left_pressed: bool,
    pub left_released: bool,
    pub pointer_moved: bool,
    pub x: i32,
    pub y: i32,
    consumed: bool,
}

impl InputEvent {
    /// Pointer moved to `(x, y)` with no button transition.
    pub fn moved(x: i32, y: i32) -> Self {
        Self {
            pointer_moved: true,
            x,
            y,
            ..Self::default()
        }
    }

    /// Left button went down at `(x, y)`.
    pub fn pressed(x: i32, y: i32) -> Self {
        Self {
            left_pressed: true,
            ..Self::moved(x, y)
        }
    }

    /// Left button went up at `(x, y)`.
    pub fn released(x: i32, y: i32) -> Self {
        Self {
            left_released: true,
            ..Self::moved(x, y)
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// True for any pointer message: a move, a left press or a left release.
    #[inline]
    pub fn is_pointer(&self) -> bool {
        self.pointer_moved || self.left_pressed || self.left_released
    }
}

/// Ordered per-frame event list with one-shot consumption.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Consumption state is always reset.
    pub fn push(&mut self, mut event: InputEvent) {
        event.consumed = false;
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events, consumed or not, in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Number of events still available to widgets.
    pub fn unconsumed(&self) -> usize {
        self.events.iter().filter(|e| !e.consumed).count()
    }

    /// Claim the first unconsumed event matching `predicate`.
    ///
    /// Returns a copy of the claimed event, or `None` if nothing matched.
    pub fn try_consume(&mut self, mut predicate: impl FnMut(&InputEvent) -> bool) -> Option<InputEvent> {
        let event = self
            .events
            .iter_mut()
            .find(|e| !e.consumed && predicate(e))?;
        event.consumed = true;
        Some(*event)
    }

    /// Visit every unconsumed event in order.
    ///
    /// The visitor returns `true` to claim the event it was handed. Events
    /// claimed earlier in the same scan are skipped, as are events claimed by
    /// any previous widget.
    pub fn scan(&mut self, mut visit: impl FnMut(&InputEvent) -> bool) {
        for event in self.events.iter_mut().filter(|e| !e.consumed) {
            if visit(event) {
                event.consumed = true;
                tracing::trace!(x = event.x, y = event.y, "input event consumed");
            }
        }
    }
}

/// Translates a host's raw platform message into an `InputEvent`.
///
/// Returning `None` drops the message (keyboard input, wheel, and so on).
pub trait MessageSender {
    type Message;

    fn translate(&self, message: &Self::Message) -> Option<InputEvent>;
}
