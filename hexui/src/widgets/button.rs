//! Push button.

use crate::input::InputQueue;
use crate::layout::LEFT_GAP;
use crate::painter::Painter;
use crate::primitives::{Point, Rect};
use crate::theme::{Font, Theme};
use crate::window::WindowRuntime;

use super::{CONTENT_GAP, TEXT_HEIGHT};

/// Caller-owned button profile, persisted across frames.
///
/// `on_hover` and `on_hold` stick until contradicted by a later pointer
/// event. `on_pressed` only reports the frame the click completed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub on_hover: bool,
    pub on_pressed: bool,
    /// Left button went down on the button and has not come up yet.
    pub on_hold: bool,
}

/// Which look a button is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVisual {
    Normal,
    Hover,
    Pressed,
}

impl ButtonState {
    pub fn visual(&self) -> ButtonVisual {
        if self.on_hold {
            ButtonVisual::Pressed
        } else if self.on_hover {
            ButtonVisual::Hover
        } else {
            ButtonVisual::Normal
        }
    }
}

/// Hit rectangle of a button whose label measures `label`, placed at `top`.
pub(crate) fn button_rect(label: Rect, top: i32) -> Rect {
    Rect::new(
        LEFT_GAP,
        top,
        LEFT_GAP + label.right + CONTENT_GAP,
        top + CONTENT_GAP + label.bottom,
    )
}

/// Declare a button in `window`. Returns `true` on the frame a click completes.
pub(crate) fn button<P: Painter>(
    window: &mut WindowRuntime<P>,
    queue: &mut InputQueue,
    theme: &Theme,
    title: &str,
    state: &mut ButtonState,
) -> bool {
    if window.folded {
        state.on_pressed = false;
        return false;
    }

    let font = Font::default();
    let label = window.painter.measure_text(title, &font, TEXT_HEIGHT);
    let rect = button_rect(label, window.cursor.y());
    let origin = window.position;

    let mut pressed = false;
    queue.scan(|event| {
        if !event.is_pointer() {
            return false;
        }
        if rect.contains(event.position() - origin) {
            state.on_hover = true;
            if event.left_pressed {
                state.on_hold = true;
            }
            if event.left_released {
                state.on_hold = false;
                pressed = true;
            }
            true
        } else {
            state.on_hover = false;
            state.on_hold = false;
            false
        }
    });
    state.on_pressed = pressed;

    if pressed {
        tracing::debug!(window = %window.title, button = title, "button clicked");
    }

    let (border, background, text) = match state.visual() {
        ButtonVisual::Pressed => (
            theme.button_pressed_border,
            theme.button_pressed_background,
            theme.button_pressed_text,
        ),
        ButtonVisual::Hover => (
            theme.button_hover_border,
            theme.button_hover_background,
            theme.button_hover_text,
        ),
        ButtonVisual::Normal => (theme.button_border, theme.button_background, theme.button_text),
    };
    let label_at = Point::new(LEFT_GAP + CONTENT_GAP / 2, rect.top + CONTENT_GAP / 2);
    window.painter.scoped(|p| {
        p.draw_filled_rectangle(rect, border, background);
        p.draw_text(title, &font, label_at, text, TEXT_HEIGHT);
    });

    window.cursor.place(rect.height());
    pressed
}
