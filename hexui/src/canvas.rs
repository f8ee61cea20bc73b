//! Software painter backed by an `image::RgbaImage`.
//!
//! Good enough for headless rendering, previews and pixel tests. Text is
//! drawn as solid glyph cells with monospace metrics: each column of
//! `unicode-width` advances by half the text height.

use std::path::Path;

use image::{ImageResult, RgbaImage};
use unicode_width::UnicodeWidthChar;

use crate::painter::Painter;
use crate::primitives::{Color, Point, Rect};
use crate::theme::Font;

/// Integer square root (no floating point needed).
fn isqrt(n: i32) -> i32 {
    if n <= 0 {
        return 0;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Horizontal advance of one text column at `height`.
#[inline]
fn column_advance(height: u32) -> i32 {
    (height as i32 / 2).max(1)
}

/// An RGBA pixel surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    /// Nesting depth of `begin`/`end`.
    depth: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(RgbaImage::new(width, height))
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image, depth: 0 }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Read a pixel; `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }
        self.image
            .get_pixel_checked(x as u32, y as u32)
            .map(|p| Color::from(*p))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        self.image.save_with_format(path, image::ImageFormat::Png)
    }

    /// Load any image format `image` can decode.
    pub fn open(path: impl AsRef<Path>) -> ImageResult<Self> {
        Ok(Self::from_image(image::open(path)?.to_rgba8()))
    }

    /// True while inside a `begin`/`end` pair.
    pub fn is_drawing(&self) -> bool {
        self.depth > 0
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.image.width() as i32 || y >= self.image.height() as i32 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, color.to_rgba());
    }

    /// Fill `x0..=x1` on row `y`, clipped.
    fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        if y < 0 || y >= self.image.height() as i32 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.image.width() as i32 - 1);
        for x in x0..=x1 {
            self.image.put_pixel(x as u32, y as u32, color.to_rgba());
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        for y in rect.top..=rect.bottom {
            self.fill_span(y, rect.left, rect.right, color);
        }
    }

    fn fill_rounded(&mut self, rect: Rect, radius: i32, color: Color) {
        let r = radius.min(rect.width() / 2).min(rect.height() / 2).max(0);
        for y in rect.top..=rect.bottom {
            let dy = if y < rect.top + r {
                rect.top + r - y
            } else if y > rect.bottom - r {
                y - (rect.bottom - r)
            } else {
                0
            };
            let inset = if dy > 0 { r - isqrt(r * r - dy * dy) } else { 0 };
            self.fill_span(y, rect.left + inset, rect.right - inset, color);
        }
    }
}

impl Painter for Canvas {
    type Buffer = RgbaImage;

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = from.x;
        let mut y = from.y;

        loop {
            self.put_pixel(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_rectangle(&mut self, rect: Rect, color: Color) {
        self.fill_span(rect.top, rect.left, rect.right, color);
        self.fill_span(rect.bottom, rect.left, rect.right, color);
        for y in rect.top..=rect.bottom {
            self.put_pixel(rect.left, y, color);
            self.put_pixel(rect.right, y, color);
        }
    }

    fn draw_filled_rectangle(&mut self, rect: Rect, border: Color, fill: Color) {
        self.fill_rect(rect, fill);
        self.draw_rectangle(rect, border);
    }

    fn draw_filled_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(0);

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in min_y..=max_y {
            // Sample at the pixel center, even-odd rule.
            let scan = y as f32 + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                let (ay, by) = (a.y as f32, b.y as f32);
                if (ay <= scan && by > scan) || (by <= scan && ay > scan) {
                    let t = (scan - ay) / (by - ay);
                    crossings.push(a.x as f32 + t * (b.x - a.x) as f32);
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                self.fill_span(y, pair[0].round() as i32, pair[1].round() as i32, color);
            }
        }
    }

    fn draw_filled_rounded_rectangle(&mut self, rect: Rect, border: Color, fill: Color, radius: i32) {
        self.fill_rounded(rect, radius, border);
        let inner = Rect::new(rect.left + 1, rect.top + 1, rect.right - 1, rect.bottom - 1);
        if inner.width() >= 0 && inner.height() >= 0 {
            self.fill_rounded(inner, radius - 1, fill);
        }
    }

    fn draw_text(&mut self, text: &str, font: &Font, at: Point, color: Color, height: u32) {
        let advance = column_advance(height);
        let h = height as i32;
        // Bold faces fill the whole cell; lighter faces leave a margin.
        let margin = match font.style {
            crate::theme::FontStyle::Bold | crate::theme::FontStyle::Black => 0,
            _ => 1,
        };
        let mut x = at.x;
        for ch in text.chars() {
            let columns = ch.width().unwrap_or(0) as i32;
            let cell = advance * columns;
            if cell > 0 && !ch.is_whitespace() {
                let glyph = Rect::new(
                    x + margin,
                    at.y + h / 5,
                    x + cell - 1 - margin,
                    at.y + h - 1 - h / 5,
                );
                self.fill_rect(glyph, color);
            }
            x += cell;
        }
    }

    fn measure_text(&self, text: &str, _font: &Font, height: u32) -> Rect {
        let columns: usize = text.chars().map(|ch| ch.width().unwrap_or(0)).sum();
        Rect::new(0, 0, columns as i32 * column_advance(height), height as i32)
    }

    fn clear(&mut self, color: Color) {
        let pixel = color.to_rgba();
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    fn begin(&mut self) {
        self.depth += 1;
    }

    fn end(&mut self) {
        if self.depth == 0 {
            tracing::debug!("canvas end() without matching begin()");
        }
        self.depth = self.depth.saturating_sub(1);
    }

    fn create_sub_painter(&self, width: i32, height: i32) -> Self {
        Self::new(width.max(0) as u32, height.max(0) as u32)
    }

    fn create_from_buffer(&self, buffer: RgbaImage) -> Self {
        Self::from_image(buffer)
    }

    fn draw_painter(&mut self, other: &Self, at: Point) {
        for (sx, sy, pixel) in other.image.enumerate_pixels() {
            let x = at.x + sx as i32;
            let y = at.y + sy as i32;
            if x >= 0 && y >= 0 && x < self.image.width() as i32 && y < self.image.height() as i32 {
                self.image.put_pixel(x as u32, y as u32, *pixel);
            }
        }
    }
}
