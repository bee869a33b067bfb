//! End-of-run score dialog.
//!
//! The core only announces the final score; this overlay shows it and offers
//! a single action, "Play Again", which the host turns into a restart.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

const TITLE: &str = "Game over!";
const SCORE_LABEL: &str = "Your score was: ";
const BUTTON: &str = "[R] Play Again";

/// Modal score dialog state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreDialog {
    score: Option<u32>,
}

impl ScoreDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the dialog with the final score of a run.
    pub fn show(&mut self, score: u32) {
        self.score = Some(score);
    }

    /// Close the dialog, returning the score it was showing.
    pub fn dismiss(&mut self) -> Option<u32> {
        self.score.take()
    }

    pub fn visible(&self) -> bool {
        self.score.is_some()
    }

    pub fn score(&self) -> Option<u32> {
        self.score
    }

    /// Draw the dialog centered on `fb`. Does nothing while hidden.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        let Some(score) = self.score else {
            return;
        };
        let l = Layout::new(score, fb.width(), fb.height());

        let panel = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(20, 20, 30));
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(20, 20, 30)).dim();
        let title = CellStyle::new(Rgb::WHITE, Rgb::new(20, 20, 30)).bold();
        let button = CellStyle::new(Rgb::new(20, 20, 30), Rgb::new(250, 210, 60)).bold();

        fb.fill_rect(l.x, l.y, l.w, HEIGHT, ' ', panel);
        draw_border(fb, l.x, l.y, l.w, HEIGHT, border);

        fb.put_str(l.center(TITLE.len() as u16), l.y + 1, TITLE, title);

        let sx = l.center(l.score_w);
        fb.put_str(sx, l.y + 3, SCORE_LABEL, panel);
        fb.put_u32(sx + SCORE_LABEL.len() as u16, l.y + 3, score, panel);

        let (bx, by) = l.button();
        fb.put_str(bx, by, BUTTON, button);
    }

    /// True when terminal cell `(col, row)` is on the "Play Again" button of
    /// the dialog as drawn on a `width` x `height` framebuffer.
    pub fn button_hit(&self, width: u16, height: u16, col: u16, row: u16) -> bool {
        let Some(score) = self.score else {
            return false;
        };
        let (bx, by) = Layout::new(score, width, height).button();
        row == by && col >= bx && col - bx < BUTTON.len() as u16
    }
}

const HEIGHT: u16 = 7;

/// Placement of the dialog box on a framebuffer.
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    inner_w: u16,
    score_w: u16,
}

impl Layout {
    fn new(score: u32, width: u16, height: u16) -> Self {
        let score_w = SCORE_LABEL.len() as u16 + digit_count(score);
        let inner_w = score_w.max(BUTTON.len() as u16) + 4;
        let w = inner_w + 2;
        Self {
            x: width.saturating_sub(w) / 2,
            y: height.saturating_sub(HEIGHT) / 2,
            w,
            inner_w,
            score_w,
        }
    }

    fn center(&self, len: u16) -> u16 {
        self.x + 1 + self.inner_w.saturating_sub(len) / 2
    }

    fn button(&self) -> (u16, u16) {
        (self.center(BUTTON.len() as u16), self.y + 5)
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
