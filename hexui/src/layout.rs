//! Layout cursor.
//!
//! Controls inside a window body flow top to bottom. Each window runtime owns
//! one cursor that starts below the title bar and advances by the height of
//! every placed control plus a fixed gap.

/// Y offset of the first control, in window-local units.
pub const BODY_BASELINE: i32 = 50;

/// Vertical gap between stacked controls.
pub const CONTROL_GAP: i32 = 5;

/// Left inset of every control.
pub const LEFT_GAP: i32 = 10;

/// Per-window vertical stacking offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutCursor {
    y: i32,
}

impl LayoutCursor {
    pub fn new() -> Self {
        Self { y: BODY_BASELINE }
    }

    /// Where the next control goes.
    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Reserve `height` units for a control.
    ///
    /// Returns the Y the control occupies and moves the cursor past it.
    pub fn place(&mut self, height: i32) -> i32 {
        let top = self.y;
        self.y += height + CONTROL_GAP;
        top
    }
}

impl Default for LayoutCursor {
    fn default() -> Self {
        Self::new()
    }
}
