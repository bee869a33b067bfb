//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! The core draws in world pixels; this view implements [`Surface`] on top of
//! a [`FrameBuffer`], mapping `px_per_col` x `px_per_row` world pixels onto
//! each character cell. It is pure (no I/O) and can be unit-tested.

use crate::core::{render, sprite_color, GameState, Surface, TickEvents};
use crate::dialog::ScoreDialog;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Rect, ScreenSize, Sprite};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Default horizontal scale: world pixels per terminal column.
pub const DEFAULT_PX_PER_COL: u32 = 20;
/// Default vertical scale: world pixels per terminal row.
pub const DEFAULT_PX_PER_ROW: u32 = 40;
/// Largest accepted scale on either axis.
pub const MAX_PX_PER_CELL: u32 = 1000;

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    px_per_col: u32,
    px_per_row: u32,
}

impl Default for GameView {
    fn default() -> Self {
        // 1:2 helps compensate for typical terminal glyph aspect ratio.
        Self::new(DEFAULT_PX_PER_COL, DEFAULT_PX_PER_ROW)
    }
}

impl GameView {
    pub fn new(px_per_col: u32, px_per_row: u32) -> Self {
        Self {
            px_per_col: px_per_col.max(1),
            px_per_row: px_per_row.max(1),
        }
    }

    pub fn px_per_col(&self) -> u32 {
        self.px_per_col
    }

    pub fn px_per_row(&self) -> u32 {
        self.px_per_row
    }

    /// World size covered by a terminal viewport.
    pub fn screen_size(&self, viewport: Viewport) -> ScreenSize {
        ScreenSize::new(
            (viewport.width as u32).saturating_mul(self.px_per_col),
            (viewport.height as u32).saturating_mul(self.px_per_row),
        )
    }

    /// Run one game-loop cycle (render, then tick) into `fb`, then draw the
    /// score dialog on top if it is up.
    ///
    /// The tick may append newly visible pipes to the game's pipe field.
    pub fn frame_into(
        &self,
        state: &mut GameState,
        dialog: &ScoreDialog,
        now_ms: u64,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> TickEvents {
        self.begin(viewport, fb);
        let events = state.frame(now_ms, &mut self.surface(fb));
        dialog.draw(fb);
        events
    }

    /// Render the current game state without ticking it.
    ///
    /// This is the allocation-free path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        state: &GameState,
        dialog: &ScoreDialog,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        self.begin(viewport, fb);
        render(state, &mut self.surface(fb));
        dialog.draw(fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, dialog: &ScoreDialog, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, dialog, viewport, &mut fb);
        fb
    }

    fn begin(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));
    }

    fn surface<'a>(&self, fb: &'a mut FrameBuffer) -> TermSurface<'a> {
        TermSurface {
            fb,
            px_per_col: self.px_per_col as f32,
            px_per_row: self.px_per_row as f32,
        }
    }
}

/// Cell-space rectangle `(x, y, w, h)`, clipped to the framebuffer.
type CellRect = (u16, u16, u16, u16);

struct TermSurface<'a> {
    fb: &'a mut FrameBuffer,
    px_per_col: f32,
    px_per_row: f32,
}

impl TermSurface<'_> {
    /// Map a world rectangle onto cells by rounding each edge.
    fn cells(&self, rect: Rect) -> Option<CellRect> {
        let clip = |v: f32, max: u16| v.round().clamp(0.0, max as f32) as u16;
        let (w, h) = (self.fb.width(), self.fb.height());
        let x0 = clip(rect.left / self.px_per_col, w);
        let x1 = clip(rect.right / self.px_per_col, w);
        let y0 = clip(rect.top / self.px_per_row, h);
        let y1 = clip(rect.bottom / self.px_per_row, h);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0, y0, x1 - x0, y1 - y0))
    }

    fn bg_at(&self, x: u16, y: u16) -> Rgb {
        self.fb.get(x, y).map(|c| c.style.bg).unwrap_or_default()
    }
}

impl Surface for TermSurface<'_> {
    fn fill_color(&mut self, rect: Rect, color: Rgb) {
        if let Some((x, y, w, h)) = self.cells(rect) {
            self.fb.fill_rect(x, y, w, h, ' ', CellStyle::new(color, color));
        }
    }

    fn fill_image(&mut self, rect: Rect, sprite: Sprite) {
        let Some((x, y, w, h)) = self.cells(rect) else {
            return;
        };
        let sky = sprite_color(Sprite::Background);
        match sprite {
            Sprite::Background => {
                self.fb.fill_rect(x, y, w, h, ' ', CellStyle::new(sky, sky));
            }
            Sprite::Player => {
                let style = CellStyle::new(sprite_color(sprite), sky).bold();
                self.fb.fill_rect(x, y, w, h, '█', style);
            }
            Sprite::PipeTop | Sprite::PipeBottom => {
                let body = CellStyle::new(sprite_color(sprite), sky);
                self.fb.fill_rect(x, y, w, h, '█', body);
                // Darker lip on the side facing the gap.
                let lip = CellStyle::new(Rgb::new(50, 120, 40), sky);
                let lip_y = if sprite == Sprite::PipeTop { y + h - 1 } else { y };
                self.fb.fill_rect(x, lip_y, w, 1, '█', lip);
            }
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, _size: f32, color: Rgb) {
        // `y` is the baseline: use the row holding the pixel just above it.
        let col = (x / self.px_per_col).floor().max(0.0) as u16;
        let row = ((y - 1.0) / self.px_per_row).floor().max(0.0) as u16;
        if row >= self.fb.height() {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let cx = col.saturating_add(i as u16);
            if cx >= self.fb.width() {
                break;
            }
            let style = CellStyle::new(color, self.bg_at(cx, row)).bold();
            self.fb.put_char(cx, row, ch, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::Tuning;

    fn surface_cells(view: &GameView, fb: &mut FrameBuffer, rect: Rect) -> Option<CellRect> {
        view.surface(fb).cells(rect)
    }

    #[test]
    fn screen_size_scales_viewport() {
        let view = GameView::default();
        assert_eq!(
            view.screen_size(Viewport::new(80, 24)),
            ScreenSize::new(1600, 960)
        );
    }

    #[test]
    fn screen_size_saturates_huge_scales() {
        let view = GameView::new(u32::MAX, u32::MAX);
        assert_eq!(
            view.screen_size(Viewport::new(80, 24)),
            ScreenSize::new(u32::MAX, u32::MAX)
        );
    }

    #[test]
    fn world_rects_round_to_cells_and_clip() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(80, 24);

        // Player box at default offset.
        assert_eq!(
            surface_cells(&view, &mut fb, Rect::new(20.0, 480.0, 120.0, 550.0)),
            Some((1, 12, 5, 2))
        );
        // Partially off-screen to the left.
        assert_eq!(
            surface_cells(&view, &mut fb, Rect::new(-60.0, 0.0, 40.0, 200.0)),
            Some((0, 0, 2, 5))
        );
        // Entirely off-screen.
        assert_eq!(
            surface_cells(&view, &mut fb, Rect::new(1700.0, 0.0, 1800.0, 100.0)),
            None
        );
    }

    #[test]
    fn score_text_lands_on_first_row() {
        let view = GameView::default();
        let state = GameState::new(1, Tuning::default(), view.screen_size(Viewport::new(80, 24)));
        let fb = view.render(&state, &ScoreDialog::default(), Viewport::new(80, 24));
        assert!(fb.row_text(0).starts_with("  score: 0"));
        // Text keeps the sky behind it.
        let cell = fb.get(2, 0).unwrap();
        assert_eq!(cell.style.bg, sprite_color(Sprite::Background));
        assert_eq!(cell.style.fg, Rgb::BLACK);
    }

    #[test]
    fn player_is_drawn_at_its_cells() {
        let view = GameView::default();
        let state = GameState::new(1, Tuning::default(), view.screen_size(Viewport::new(80, 24)));
        let fb = view.render(&state, &ScoreDialog::default(), Viewport::new(80, 24));
        for x in 1..6 {
            assert_eq!(fb.get(x, 12).unwrap().ch, '█');
            assert_eq!(fb.get(x, 13).unwrap().ch, '█');
        }
        assert_eq!(fb.get(0, 12).unwrap().ch, ' ');
        assert_eq!(fb.get(6, 12).unwrap().ch, ' ');
    }
}
