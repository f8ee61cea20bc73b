use crate::layout::LEFT_GAP;
use crate::painter::Painter;
use crate::primitives::Point;
use crate::theme::TextProfile;
use crate::window::WindowRuntime;

/// Draw a static label at the window's layout cursor.
pub(crate) fn text<P: Painter>(window: &mut WindowRuntime<P>, title: &str, profile: &TextProfile) {
    if window.folded {
        return;
    }

    let at = Point::new(LEFT_GAP, window.cursor.y());
    let measured = window.painter.measure_text(title, &profile.font, profile.height);
    window
        .painter
        .scoped(|p| p.draw_text(title, &profile.font, at, profile.color, profile.height));
    window.cursor.place(measured.bottom);
}
