//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole game loop: physics, scrolling, procedural
//! pipe generation, collision detection, scoring, and the render phase that
//! turns the state into draw calls. It has **zero dependencies** on terminals,
//! windows or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical pipe sequences
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Any [`Surface`] can display it (terminal, GUI, headless)
//! - **Fast**: Rendering does not allocate; ticks only grow the pipe field
//!
//! # Module Structure
//!
//! - [`game_state`]: [`GameState`], the per-frame cycle and the run phase
//! - [`player`]: vertical physics of the player box
//! - [`pipes`]: lazily generated pipe field, pipe geometry, visible window
//! - [`collision`]: floor/ceiling and pipe overlap tests
//! - [`render`]: the [`Surface`] trait and the render phase
//! - [`rng`]: seeded gap-offset generator
//!
//! # Game Rules
//!
//! - **Gravity**: velocity grows by `gravity * dt`, then position by `velocity * dt`
//! - **Flap**: instantly sets velocity to the flap velocity (no queuing)
//! - **Scrolling**: distance grows by `scroll_speed * dt`; pipe `i` is drawn at
//!   `i * (pipe_width + pipe_spacing) - floor(distance)`
//! - **Scoring**: one point each time the next pipe's right edge passes the player
//! - **Game over**: leaving the screen vertically or overlapping a pipe
//!
//! # Example
//!
//! ```
//! use flappy_tui_core::{GameState, RecordingSurface};
//! use flappy_tui_core::types::{GameAction, RunPhase, ScreenSize, Tuning};
//!
//! let mut game = GameState::new(12345, Tuning::default(), ScreenSize::new(1600, 960));
//! let mut surface = RecordingSurface::new();
//!
//! // First frame renders and records the clock, second frame moves.
//! game.frame(0, &mut surface);
//! game.apply_action(GameAction::Flap);
//! game.frame(16, &mut surface);
//!
//! assert_eq!(game.phase(), RunPhase::Running);
//! assert!(game.player().y < 480.0); // the flap lifted the player
//! ```
//!
//! # Timing
//!
//! [`GameState::tick_at`] takes a millisecond timestamp; the first tick after
//! start or restart only records it. Hosts with a fixed timestep can call
//! [`GameState::update`] with `dt` in seconds instead.

pub mod collision;
pub mod game_state;
pub mod pipes;
pub mod player;
pub mod render;
pub mod rng;

pub use flappy_tui_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, TickEvents};
pub use pipes::{pipe_boxes, pipe_left, visible_range, PipeBoxes, PipeField};
pub use player::PlayerState;
pub use render::{render, sprite_color, DrawCall, RecordingSurface, Surface};
pub use rng::GapRng;
