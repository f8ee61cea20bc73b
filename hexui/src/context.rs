//! Frame context.
//!
//! `FrameContext` holds everything that lives for one Begin/End/Render cycle:
//! the input queue, the window runtimes declared this frame, the current
//! window and the render target. Callers keep one context for the lifetime
//! of their UI and thread it through every declarative call.
//!
//! ```ignore
//! ctx.begin(target);
//! ctx.push_message(event);
//! ctx.window("Main", &mut main);
//! if ctx.button("OK", &mut ok) { /* ... */ }
//! ctx.end();
//! ctx.render();
//! ```

use crate::error::{HexError, Result};
use crate::input::{InputEvent, InputQueue, MessageSender};
use crate::painter::{CursorApi, Painter};
use crate::primitives::Point;
use crate::theme::{TextProfile, Theme};
use crate::widgets::{self, ButtonState};
use crate::window::{WindowController, WindowRuntime, WindowState};

pub struct FrameContext<P: Painter> {
    queue: InputQueue,
    windows: Vec<WindowRuntime<P>>,
    current: Option<usize>,
    target: Option<P>,
    cursor_api: Option<Box<dyn CursorApi>>,
    theme: Theme,
    initialized: bool,
    last_error: Option<HexError>,
}

impl<P: Painter> FrameContext<P> {
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            queue: InputQueue::new(),
            windows: Vec::new(),
            current: None,
            target: None,
            cursor_api: None,
            theme,
            initialized: false,
            last_error: None,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Register the OS cursor hook. Passing `None` is recorded as an error
    /// and leaves the context without one.
    pub fn set_cursor_api(&mut self, api: Option<Box<dyn CursorApi>>) {
        if api.is_none() {
            self.record(HexError::MissingCursorApi);
        }
        self.cursor_api = api;
    }

    // --- Lifecycle ---

    /// Start a frame drawing into `target`.
    ///
    /// A second `begin` without `end` is recorded as `BeginWithoutEnd`; the
    /// previous frame's state is kept and `target` is dropped.
    pub fn begin(&mut self, target: P) {
        if self.initialized {
            self.record(HexError::BeginWithoutEnd);
            return;
        }
        self.windows.clear();
        self.queue.clear();
        self.current = None;
        self.last_error = None;
        self.target = Some(target);
        self.initialized = true;
    }

    /// Close the frame. Runtimes stay alive for `render`.
    pub fn end(&mut self) {
        self.initialized = false;
        self.current = None;
    }

    /// Compose every window onto the render target, last-declared on top.
    pub fn render(&mut self) {
        let Some(target) = self.target.as_mut() else {
            self.record(HexError::NotInFrame);
            return;
        };
        let windows = &self.windows;
        target.scoped(|t| {
            for window in windows {
                t.draw_painter(&window.painter, window.position);
            }
        });
        tracing::trace!(windows = windows.len(), "frame composed");
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // --- Input ---

    pub fn push_message(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Translate and queue a raw platform message.
    ///
    /// Returns `false` if the sender dropped it.
    pub fn push_raw<S: MessageSender>(&mut self, sender: &S, raw: &S::Message) -> bool {
        match sender.translate(raw) {
            Some(event) => {
                self.queue.push(event);
                true
            }
            None => false,
        }
    }

    pub fn input(&self) -> &InputQueue {
        &self.queue
    }

    // --- Declarative calls ---

    /// Declare a window and make it current.
    ///
    /// Runs drag/fold/resize handling against the queue first, so `state`
    /// holds this frame's position and size by the time the chrome is drawn.
    pub fn window(&mut self, title: &str, state: &mut WindowState) {
        if let Err(err) = self.declare_window(title, state) {
            self.record(err);
        }
    }

    fn declare_window(&mut self, title: &str, state: &mut WindowState) -> Result<()> {
        if !self.initialized {
            return Err(HexError::NotInFrame);
        }
        if self.windows.iter().any(|w| w.title == title) {
            self.record(HexError::DuplicateWindow(title.to_string()));
        }
        let target = self.target.as_ref().ok_or(HexError::NotInFrame)?;

        WindowController::new(state, self.cursor_api.as_deref_mut()).run(&mut self.queue);

        let mut runtime = WindowRuntime::new(title, state, target);
        runtime.draw_chrome(&self.theme);
        self.windows.push(runtime);
        self.current = Some(self.windows.len() - 1);
        Ok(())
    }

    /// Declare a button in the current window. Returns `true` on click.
    pub fn button(&mut self, title: &str, state: &mut ButtonState) -> bool {
        match self.current_index() {
            Ok(index) => widgets::button(
                &mut self.windows[index],
                &mut self.queue,
                &self.theme,
                title,
                state,
            ),
            Err(err) => {
                state.on_pressed = false;
                self.record(err);
                false
            }
        }
    }

    /// Declare a label styled from the theme.
    pub fn text(&mut self, title: &str) {
        let profile = TextProfile::for_theme(&self.theme);
        self.text_with(title, &profile);
    }

    pub fn text_with(&mut self, title: &str, profile: &TextProfile) {
        match self.current_index() {
            Ok(index) => widgets::text(&mut self.windows[index], title, profile),
            Err(err) => self.record(err),
        }
    }

    /// Move the current window for this frame only.
    ///
    /// The caller's `WindowState` is not touched.
    pub fn locate_window(&mut self, at: Point) {
        match self.current_index() {
            Ok(index) => self.windows[index].position = at,
            Err(err) => self.record(err),
        }
    }

    fn current_index(&self) -> Result<usize> {
        self.current.ok_or(HexError::NoCurrentWindow)
    }

    // --- Inspection ---

    pub fn windows(&self) -> impl Iterator<Item = &WindowRuntime<P>> {
        self.windows.iter()
    }

    pub fn current_window(&self) -> Option<&WindowRuntime<P>> {
        self.current.map(|i| &self.windows[i])
    }

    // --- Render target ---

    pub fn set_render_target(&mut self, target: P) {
        self.target = Some(target);
    }

    /// Replace the render target with one wrapping `buffer`.
    pub fn set_buffer(&mut self, buffer: P::Buffer) {
        let Some(target) = self.target.as_ref() else {
            self.record(HexError::NotInFrame);
            return;
        };
        let wrapped = target.create_from_buffer(buffer);
        self.target = Some(wrapped);
    }

    pub fn render_target(&self) -> Option<&P> {
        self.target.as_ref()
    }

    pub fn render_target_mut(&mut self) -> Option<&mut P> {
        self.target.as_mut()
    }

    pub fn take_render_target(&mut self) -> Option<P> {
        self.target.take()
    }

    // --- Errors ---

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.last_error.is_none()
    }

    pub fn last_error(&self) -> Option<&HexError> {
        self.last_error.as_ref()
    }

    /// Human-readable last error, empty when OK.
    pub fn last_error_message(&self) -> String {
        self.last_error.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    fn record(&mut self, err: HexError) {
        tracing::warn!(error = %err, "frame error");
        self.last_error = Some(err);
    }
}

impl<P: Painter> Default for FrameContext<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::CursorStyle;
    use crate::primitives::{Rect, Size};
    use crate::testing::{MockPainter, RecordingCursor};

    fn frame(events: &[InputEvent]) -> FrameContext<MockPainter> {
        let mut ctx = FrameContext::new();
        ctx.begin(MockPainter::new(800, 600));
        for e in events {
            ctx.push_message(*e);
        }
        ctx
    }

    fn blits(ctx: &FrameContext<MockPainter>) -> Vec<(Option<String>, Point)> {
        ctx.render_target().map(MockPainter::blits).unwrap_or_default()
    }

    #[test]
    fn render_puts_last_declared_on_top() {
        let mut a = WindowState::new(Point::new(0, 0), Size::new(200, 150));
        let mut b = WindowState::new(Point::new(100, 100), Size::new(200, 150));
        let mut ctx = frame(&[]);
        ctx.window("A", &mut a);
        ctx.window("B", &mut b);
        ctx.end();
        ctx.render();

        assert_eq!(
            blits(&ctx),
            vec![
                (Some("A".to_string()), Point::new(0, 0)),
                (Some("B".to_string()), Point::new(100, 100)),
            ]
        );
        assert!(ctx.is_ok());
    }

    #[test]
    fn earlier_declaration_wins_the_event() {
        // Both buttons sit at the same local rectangle in overlapping windows.
        let mut a = WindowState::new(Point::ORIGIN, Size::new(300, 200));
        let mut b = WindowState::new(Point::ORIGIN, Size::new(300, 200));
        let mut first = ButtonState::default();
        let mut second = ButtonState::default();

        let mut ctx = frame(&[InputEvent::pressed(20, 60), InputEvent::released(20, 60)]);
        ctx.window("A", &mut a);
        assert!(ctx.button("OK", &mut first));
        ctx.window("B", &mut b);
        assert!(!ctx.button("OK", &mut second));
        ctx.end();

        assert!(!second.on_hover);
        assert_eq!(ctx.input().unconsumed(), 0);
    }

    #[test]
    fn window_chrome_claims_before_later_buttons() {
        let mut back = WindowState::new(Point::ORIGIN, Size::new(300, 200));
        let mut front = WindowState::new(Point::new(0, 40), Size::new(300, 200));
        let mut ok = ButtonState::default();

        // (20, 60) is inside the front window's title bar.
        let mut ctx = frame(&[InputEvent::pressed(20, 60)]);
        ctx.window("Front", &mut front);
        ctx.window("Back", &mut back);
        ctx.button("OK", &mut ok);
        ctx.end();

        assert!(front.in_drag());
        assert!(!ok.on_hold);
    }

    #[test]
    fn begin_twice_is_recorded_and_keeps_frame() {
        let mut main = WindowState::default();
        let mut ctx = frame(&[]);
        ctx.window("Main", &mut main);
        ctx.begin(MockPainter::new(10, 10));

        assert!(!ctx.is_ok());
        assert_eq!(ctx.last_error(), Some(&HexError::BeginWithoutEnd));
        assert_eq!(ctx.last_error_message(), "End is needed for another UI layout progress");
        assert_eq!(ctx.windows().count(), 1);
        assert_eq!(ctx.render_target().map(|t| t.size), Some(Size::new(800, 600)));

        // The flag sticks until a clean begin.
        ctx.end();
        assert!(!ctx.is_ok());
        ctx.begin(MockPainter::new(10, 10));
        assert!(ctx.is_ok());
        assert_eq!(ctx.last_error_message(), "");
        assert_eq!(ctx.windows().count(), 0);
    }

    #[test]
    fn controls_without_window_report_error() {
        let mut ok = ButtonState {
            on_pressed: true,
            ..ButtonState::default()
        };
        let mut ctx = frame(&[InputEvent::released(20, 60)]);
        assert!(!ctx.button("OK", &mut ok));
        assert!(!ok.on_pressed);
        assert_eq!(ctx.last_error(), Some(&HexError::NoCurrentWindow));

        let mut ctx = frame(&[]);
        ctx.text("hello");
        assert_eq!(ctx.last_error(), Some(&HexError::NoCurrentWindow));

        let mut ctx = frame(&[]);
        ctx.locate_window(Point::new(5, 5));
        assert_eq!(ctx.last_error(), Some(&HexError::NoCurrentWindow));
    }

    #[test]
    fn window_outside_frame_is_rejected() {
        let mut main = WindowState::default();
        let mut ctx = FrameContext::<MockPainter>::new();
        ctx.window("Main", &mut main);
        assert_eq!(ctx.last_error(), Some(&HexError::NotInFrame));
        assert_eq!(ctx.windows().count(), 0);

        ctx.render();
        assert_eq!(ctx.last_error(), Some(&HexError::NotInFrame));
    }

    #[test]
    fn duplicate_window_is_flagged_but_rendered() {
        let mut first = WindowState::default();
        let mut second = WindowState::default();
        let mut ctx = frame(&[]);
        ctx.window("Main", &mut first);
        ctx.window("Main", &mut second);

        assert_eq!(ctx.last_error(), Some(&HexError::DuplicateWindow("Main".to_string())));
        assert_eq!(ctx.windows().count(), 2);
    }

    #[test]
    fn empty_frames_leave_state_alone() {
        let mut main = WindowState::new(Point::new(12, 34), Size::new(320, 240));
        let mut ok = ButtonState::default();
        let before = (main.clone(), ok);

        let mut ctx = FrameContext::<MockPainter>::new();
        for _ in 0..3 {
            ctx.begin(MockPainter::new(800, 600));
            ctx.end();
            ctx.render();
        }
        assert_eq!((main.clone(), ok), before);

        // Declaring without input is idempotent as well.
        for _ in 0..3 {
            ctx.begin(MockPainter::new(800, 600));
            ctx.window("Main", &mut main);
            ctx.button("OK", &mut ok);
            ctx.end();
        }
        assert_eq!((main, ok), before);
        assert!(ctx.is_ok());
    }

    #[test]
    fn drag_scenario() {
        let mut main = WindowState::new(Point::ORIGIN, Size::new(300, 200));
        let mut ctx = FrameContext::<MockPainter>::new();

        ctx.begin(MockPainter::new(800, 600));
        ctx.push_message(InputEvent::pressed(10, 20));
        ctx.window("Main", &mut main);
        ctx.end();
        assert!(main.in_drag());
        assert_eq!(main.drag_offset(), Some(Point::new(10, 20)));

        ctx.begin(MockPainter::new(800, 600));
        ctx.push_message(InputEvent::moved(50, 70));
        ctx.window("Main", &mut main);
        ctx.end();
        assert_eq!(main.position, Point::new(40, 50));
        assert!(ctx.current_window().is_none());
        assert_eq!(ctx.windows().next().map(|w| w.position), Some(Point::new(40, 50)));

        ctx.begin(MockPainter::new(800, 600));
        ctx.push_message(InputEvent::released(50, 70));
        ctx.window("Main", &mut main);
        ctx.end();
        assert!(!main.in_drag());
    }

    #[test]
    fn click_without_move_flag_reaches_button() {
        let mut press = InputEvent::pressed(20, 60);
        press.pointer_moved = false;
        let mut release = InputEvent::released(20, 60);
        release.pointer_moved = false;

        let mut main = WindowState::new(Point::ORIGIN, Size::new(300, 200));
        let mut ok = ButtonState::default();
        let mut ctx = frame(&[press, release]);
        ctx.window("Main", &mut main);
        assert!(ctx.button("OK", &mut ok));
        ctx.end();

        assert_eq!(ctx.input().unconsumed(), 0);
        assert!(ctx.is_ok());
    }

    #[test]
    fn fold_click_folds_without_dragging() {
        let mut main = WindowState::new(Point::ORIGIN, Size::new(300, 200));
        let mut ok = ButtonState::default();
        let mut ctx = frame(&[InputEvent::pressed(275, 20), InputEvent::released(275, 20)]);
        ctx.window("Main", &mut main);
        ctx.button("OK", &mut ok);
        ctx.end();

        assert!(main.folded);
        assert!(!main.in_drag());
        let window = ctx.windows().next().map(|w| (w.bounds(), w.cursor.y()));
        assert_eq!(window, Some((Rect::new(0, 0, 300, 40), 50)));
    }

    #[test]
    fn locate_moves_runtime_only() {
        let mut main = WindowState::new(Point::new(5, 5), Size::new(300, 200));
        let mut ctx = frame(&[]);
        ctx.window("Main", &mut main);
        ctx.locate_window(Point::new(200, 100));
        ctx.end();
        ctx.render();

        assert_eq!(main.position, Point::new(5, 5));
        assert_eq!(blits(&ctx), vec![(Some("Main".to_string()), Point::new(200, 100))]);
    }

    #[test]
    fn cursor_api_registration() {
        let cursor = RecordingCursor::new();
        let mut ctx = FrameContext::<MockPainter>::new();
        ctx.set_cursor_api(Some(Box::new(cursor.clone())));
        assert!(ctx.is_ok());

        let mut main = WindowState::new(Point::ORIGIN, Size::new(300, 200));
        ctx.begin(MockPainter::new(800, 600));
        ctx.push_message(InputEvent::moved(295, 100));
        ctx.window("Main", &mut main);
        ctx.end();
        assert_eq!(cursor.styles(), vec![CursorStyle::ResizeE]);

        ctx.set_cursor_api(None);
        assert_eq!(ctx.last_error(), Some(&HexError::MissingCursorApi));
        ctx.begin(MockPainter::new(800, 600));
        ctx.push_message(InputEvent::moved(100, 100));
        ctx.window("Main", &mut main);
        ctx.end();
        assert_eq!(cursor.styles(), vec![CursorStyle::ResizeE]);
        assert_eq!(main.cursor_hover, None);
    }

    #[test]
    fn raw_messages_go_through_sender() {
        enum Raw {
            Move(i32, i32),
            Key(char),
        }
        struct Host;
        impl MessageSender for Host {
            type Message = Raw;
            fn translate(&self, raw: &Raw) -> Option<InputEvent> {
                match *raw {
                    Raw::Move(x, y) => Some(InputEvent::moved(x, y)),
                    Raw::Key(_) => None,
                }
            }
        }

        let mut ctx = frame(&[]);
        assert!(ctx.push_raw(&Host, &Raw::Move(3, 4)));
        assert!(!ctx.push_raw(&Host, &Raw::Key('q')));
        assert_eq!(ctx.input().len(), 1);
    }

    #[test]
    fn render_target_can_be_swapped() {
        let mut ctx = frame(&[]);
        ctx.set_buffer(Size::new(64, 48));
        assert_eq!(ctx.render_target().map(|t| t.size), Some(Size::new(64, 48)));

        ctx.set_render_target(MockPainter::new(32, 32));
        if let Some(target) = ctx.render_target_mut() {
            target.size = Size::new(33, 33);
        }
        assert_eq!(ctx.take_render_target().map(|t| t.size), Some(Size::new(33, 33)));
        assert!(ctx.render_target().is_none());
    }
}
