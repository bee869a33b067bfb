//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Implement the core's drawing surface on character cells
//! - Allow precise control over aspect ratio (world pixels per column/row)

pub mod dialog;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use flappy_tui_core as core;
pub use flappy_tui_types as types;

pub use dialog::ScoreDialog;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{
    GameView, Viewport, DEFAULT_PX_PER_COL, DEFAULT_PX_PER_ROW, MAX_PX_PER_CELL,
};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
