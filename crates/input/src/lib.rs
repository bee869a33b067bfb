//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]. A
//! mouse press stands in for the touch-down "tap" gesture.

pub mod map;

pub use flappy_tui_types as types;

pub use map::{dialog_action, handle_key_event, handle_mouse_event, should_quit};
