//! Flappy TUI (workspace facade crate).
//!
//! Re-exports the game crates under `flappy_tui::{core,input,term,types}` and
//! holds the session glue the binary runs: configuration, logging and [`app::App`].

pub use flappy_tui_core as core;
pub use flappy_tui_input as input;
pub use flappy_tui_term as term;
pub use flappy_tui_types as types;

pub mod app;
pub mod config;
pub mod logging;
