//! Theme palette and text styling.

use serde::{Deserialize, Serialize};

use crate::primitives::Color;

/// Flat color table used by every widget.
///
/// Loadable from JSON; missing fields fall back to the stock palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    // Window chrome
    pub window_background: Color,
    pub window_title_text: Color,
    pub window_title_background: Color,

    // Button, normal
    pub button_border: Color,
    pub button_background: Color,
    pub button_text: Color,

    // Button, hovered
    pub button_hover_border: Color,
    pub button_hover_background: Color,
    pub button_hover_text: Color,

    // Button, held down
    pub button_pressed_border: Color,
    pub button_pressed_background: Color,
    pub button_pressed_text: Color,
}

impl Theme {
    pub const DARK: Self = Self {
        window_background: Color::rgb8(21, 22, 23),
        window_title_text: Color::rgb8(255, 255, 255),
        window_title_background: Color::rgb8(41, 74, 122),
        button_border: Color::rgb8(39, 73, 114),
        button_background: Color::rgb8(39, 73, 114),
        button_text: Color::rgb8(255, 255, 255),
        button_hover_border: Color::rgb8(49, 83, 124),
        button_hover_background: Color::rgb8(49, 83, 124),
        button_hover_text: Color::rgb8(255, 255, 255),
        button_pressed_border: Color::rgb8(59, 93, 134),
        button_pressed_background: Color::rgb8(59, 93, 134),
        button_pressed_text: Color::rgb8(255, 255, 255),
    };

    /// Parse a theme from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Black,
    Light,
    Medium,
}

/// Font selection passed through to the painter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    pub family: String,
    pub style: FontStyle,
    pub italic: bool,
}

impl Font {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: String::from("sans-serif"),
            style: FontStyle::Regular,
            italic: false,
        }
    }
}

/// Styling for a single `text_with` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextProfile {
    pub font: Font,
    pub color: Color,
    pub height: u32,
}

impl TextProfile {
    /// Default text styling for a theme.
    pub fn for_theme(theme: &Theme) -> Self {
        Self {
            font: Font::default(),
            color: theme.window_title_text,
            height: crate::widgets::TEXT_HEIGHT,
        }
    }
}

impl Default for TextProfile {
    fn default() -> Self {
        Self::for_theme(&Theme::DARK)
    }
}
