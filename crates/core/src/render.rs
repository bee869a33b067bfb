//! Render phase: turns a [`GameState`] into draw calls on an abstract surface.
//!
//! The core owns no pixels. A [`Surface`] receives rectangles in world pixels
//! and decides how to show them (terminal cells, a test recorder, ...).

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::game_state::GameState;
use crate::types::{Rect, Rgb, Sprite, SCORE_TEXT_SIZE, SCORE_TEXT_X, SCORE_TEXT_Y};

/// 2D drawing target.
pub trait Surface {
    /// Fill `rect` with a solid color.
    fn fill_color(&mut self, rect: Rect, color: Rgb);

    /// Stretch `sprite` over `rect`.
    ///
    /// Surfaces without artwork fall back to the sprite's flat color.
    fn fill_image(&mut self, rect: Rect, sprite: Sprite) {
        self.fill_color(rect, sprite_color(sprite));
    }

    /// Draw `text` with its baseline-left corner at `(x, y)`.
    fn draw_text(&mut self, x: f32, y: f32, text: &str, size: f32, color: Rgb);
}

/// Flat color used for a sprite when no artwork is available.
pub fn sprite_color(sprite: Sprite) -> Rgb {
    match sprite {
        Sprite::Background => Rgb::new(112, 197, 206),
        Sprite::Player => Rgb::new(250, 210, 60),
        Sprite::PipeTop | Sprite::PipeBottom => Rgb::new(90, 180, 60),
    }
}

/// Issue the draw calls for one frame.
///
/// Order: background, player, visible pipes, score. Pipes in the visible
/// window that have not been generated yet are skipped; the frame cycle
/// generates them before rendering.
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let screen = state.screen();
    surface.fill_image(
        Rect::new(0.0, 0.0, screen.width as f32, screen.height as f32),
        Sprite::Background,
    );

    surface.fill_image(state.player_rect(), Sprite::Player);

    for index in state.visible_pipes() {
        if let Some(boxes) = state.pipe_boxes(index) {
            surface.fill_image(boxes.top, Sprite::PipeTop);
            surface.fill_image(boxes.bottom, Sprite::PipeBottom);
        }
    }

    let mut text = ArrayString::<32>::new();
    // "score: " plus at most 10 digits always fits.
    let _ = write!(text, "score: {}", state.score());
    surface.draw_text(SCORE_TEXT_X, SCORE_TEXT_Y, &text, SCORE_TEXT_SIZE, Rgb::BLACK);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Image(Rect, Sprite),
    Color(Rect, Rgb),
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        color: Rgb,
    },
}

/// Surface that records every call, for tests and debugging.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangles drawn with `sprite`, in call order.
    pub fn images(&self, sprite: Sprite) -> impl Iterator<Item = Rect> + '_ {
        self.calls.iter().filter_map(move |c| match c {
            DrawCall::Image(r, s) if *s == sprite => Some(*r),
            _ => None,
        })
    }

    /// Every text string drawn, in call order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn fill_color(&mut self, rect: Rect, color: Rgb) {
        self.calls.push(DrawCall::Color(rect, color));
    }

    fn fill_image(&mut self, rect: Rect, sprite: Sprite) {
        self.calls.push(DrawCall::Image(rect, sprite));
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, size: f32, color: Rgb) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            text: text.to_string(),
            size,
            color,
        });
    }
}
