//! HexUI demo
//!
//! Plays a short scripted session (hover, press, hold, release, drag) against
//! the software painter and writes the last composed frame as a PNG.
//!
//! ```text
//! hexui-demo [OUTPUT.png]
//! HEXUI_THEME=theme.json RUST_LOG=hexui=debug hexui-demo
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use hexui::{
    ButtonState, Canvas, Color, CursorStyle, Font, FontStyle, FrameContext, InputEvent, MessageSender, Painter,
    TextProfile, Theme, WindowState,
};
use tracing_subscriber::EnvFilter;

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 480;
const DESKTOP: Color = Color::rgb8(0, 129, 129);

/// A pointer gesture as a host platform would report it.
#[derive(Debug, Clone, Copy)]
enum Gesture {
    Move(i32, i32),
    Down(i32, i32),
    Up(i32, i32),
    /// Non-pointer input, dropped by the sender.
    Key(char),
}

struct ScriptSender;

impl MessageSender for ScriptSender {
    type Message = Gesture;

    fn translate(&self, raw: &Gesture) -> Option<InputEvent> {
        match *raw {
            Gesture::Move(x, y) => Some(InputEvent::moved(x, y)),
            Gesture::Down(x, y) => Some(InputEvent::pressed(x, y)),
            Gesture::Up(x, y) => Some(InputEvent::released(x, y)),
            Gesture::Key(_) => None,
        }
    }
}

/// One batch of gestures per frame.
fn script() -> Vec<Vec<Gesture>> {
    vec![
        vec![],
        vec![Gesture::Move(40, 60)],
        vec![Gesture::Down(40, 60)],
        vec![Gesture::Key('a')],
        vec![Gesture::Up(40, 60)],
        vec![Gesture::Down(60, 20), Gesture::Move(160, 100)],
        vec![Gesture::Up(160, 100)],
        vec![Gesture::Move(395, 230)],
        vec![Gesture::Move(140, 130)],
    ]
}

/// What the session ended with.
#[derive(Debug)]
struct Report {
    frames: usize,
    clicks: usize,
    window: WindowState,
    errors: Vec<String>,
}

fn run(output: &Path, theme: Theme) -> anyhow::Result<Report> {
    let mut ctx = FrameContext::<Canvas>::with_theme(theme);
    ctx.set_cursor_api(Some(Box::new(|style: CursorStyle| {
        tracing::info!(?style, "cursor style");
    })));

    let mut window = WindowState::default();
    let mut button = ButtonState::default();
    let mut clicks = 0;
    let mut errors = Vec::new();

    let hold_profile = TextProfile {
        font: Font::new("Times New Roman").style(FontStyle::Black).italic(true),
        color: Color::rgb8(255, 0, 0),
        height: 20,
    };

    let frames = script();
    for (index, gestures) in frames.iter().enumerate() {
        let mut screen = Canvas::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        screen.clear(DESKTOP);
        ctx.begin(screen);
        for gesture in gestures {
            if !ctx.push_raw(&ScriptSender, gesture) {
                tracing::debug!(frame = index, ?gesture, "message dropped");
            }
        }

        ctx.window("Hello World", &mut window);
        if ctx.button("Hello World!", &mut button) {
            clicks += 1;
            ctx.text("You clicked the button!");
        }
        if button.on_hold {
            ctx.text_with("You are holding the button!", &hold_profile);
        }
        if button.on_hover {
            ctx.text("You are hovering the button!");
        }
        ctx.end();
        ctx.render();

        if !ctx.is_ok() {
            tracing::warn!(frame = index, error = %ctx.last_error_message(), "frame reported an error");
            errors.push(ctx.last_error_message());
        }
    }

    let canvas = ctx
        .take_render_target()
        .context("no frame was rendered")?;
    canvas
        .save_png(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(path = %output.display(), clicks, "frame written");

    Ok(Report {
        frames: frames.len(),
        clicks,
        window,
        errors,
    })
}

fn load_theme() -> anyhow::Result<Theme> {
    match std::env::var_os("HEXUI_THEME") {
        Some(path) => load_theme_file(Path::new(&path)),
        None => Ok(Theme::default()),
    }
}

fn load_theme_file(path: &Path) -> anyhow::Result<Theme> {
    let json = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Theme::from_json(&json).with_context(|| format!("invalid theme in {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("hexui-demo.png"));
    let theme = load_theme()?;

    let report = run(&output, theme)?;
    let summary = serde_json::json!({
        "output": output.display().to_string(),
        "frames": report.frames,
        "clicks": report.clicks,
        "window": {
            "x": report.window.position.x,
            "y": report.window.position.y,
            "width": report.window.size.width,
            "height": report.window.size.height,
            "folded": report.window.folded,
        },
        "errors": report.errors,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
