//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data: the core simulation, the terminal view and
//! the host binary all speak in these types.
//!
//! # Coordinates
//!
//! The game world is measured in *pixels* with the origin at the top-left of
//! the screen and `y` growing downwards. The terminal view maps a fixed number
//! of world pixels onto each character cell.
//!
//! # Default Tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIPE_OPENING_HEIGHT` | 350 | Vertical gap between top and bottom pipe |
//! | `PIPE_WIDTH` | 100 | Pipe width |
//! | `DIST_BETWEEN_PIPE` | 500 | Horizontal distance between two pipes |
//! | `PLAYER_WIDTH` | 100 | Player box width |
//! | `PLAYER_HEIGHT` | 70 | Player box height |
//! | `PLAYER_OFFSET` | 20 | Player's fixed distance from the left edge |
//! | `PLAYER_START_POSITION` | -1000 | Initial scroll distance (no pipe right away) |
//! | `GRAVITY` | 500 | Downward acceleration, px/s² |
//! | `FLAP_VELOCITY` | -400 | Velocity after a flap, px/s |
//! | `SCROLL_SPEED` | 200 | Horizontal scroll speed, px/s |
//!
//! # Examples
//!
//! ```
//! use flappy_tui_types::{Rect, RunPhase, Tuning};
//!
//! let tuning = Tuning::default();
//! assert_eq!(tuning.pipe_period(), 600.0);
//!
//! let a = Rect::new(0.0, 0.0, 10.0, 10.0);
//! let b = Rect::new(5.0, 5.0, 15.0, 15.0);
//! assert!(a.intersects(&b));
//!
//! assert!(RunPhase::Running.is_running());
//! ```

use serde::Deserialize;

/// Vertical space (px) between the top and bottom pipe.
pub const PIPE_OPENING_HEIGHT: u32 = 350;

/// Pipe width (px).
pub const PIPE_WIDTH: u32 = 100;

/// Horizontal distance between the right edge of one pipe and the left edge of the next (px).
pub const DIST_BETWEEN_PIPE: u32 = 500;

/// Player box width (px).
pub const PLAYER_WIDTH: u32 = 100;

/// Player box height (px).
pub const PLAYER_HEIGHT: u32 = 70;

/// Player box offset from the left side of the screen (px).
pub const PLAYER_OFFSET: u32 = 20;

/// Starting scroll distance. Pipes start at distance 0, so a negative start
/// gives the player a run-up before the first obstacle.
pub const PLAYER_START_POSITION: i32 = -1000;

/// Downward acceleration (px/s²).
pub const GRAVITY: f32 = 500.0;

/// Vertical velocity applied by a flap (px/s, negative is up).
pub const FLAP_VELOCITY: f32 = -400.0;

/// Horizontal scroll speed (px/s).
pub const SCROLL_SPEED: f32 = 200.0;

/// Default host frame interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Score text position and size (px).
pub const SCORE_TEXT_X: f32 = 40.0;
pub const SCORE_TEXT_Y: f32 = 40.0;
pub const SCORE_TEXT_SIZE: f32 = 40.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_matches_constants() {
        let t = Tuning::default();
        assert_eq!(t.pipe_opening_height, PIPE_OPENING_HEIGHT);
        assert_eq!(t.pipe_width, PIPE_WIDTH);
        assert_eq!(t.pipe_spacing, DIST_BETWEEN_PIPE);
        assert_eq!(t.player_width, PLAYER_WIDTH);
        assert_eq!(t.player_height, PLAYER_HEIGHT);
        assert_eq!(t.player_offset, PLAYER_OFFSET);
        assert_eq!(t.start_distance, PLAYER_START_POSITION as f32);
        assert_eq!(t.gravity, GRAVITY);
        assert_eq!(t.flap_velocity, FLAP_VELOCITY);
        assert_eq!(t.scroll_speed, SCROLL_SPEED);
    }

    #[test]
    fn tuning_deserializes_partial_json() {
        let t: Tuning = serde_json::from_str(r#"{"gravity": 900.0, "pipe_width": 80}"#).unwrap();
        assert_eq!(t.gravity, 900.0);
        assert_eq!(t.pipe_width, 80);
        // Everything else keeps its default.
        assert_eq!(t.pipe_spacing, DIST_BETWEEN_PIPE);
        assert_eq!(t.flap_velocity, FLAP_VELOCITY);
    }

    #[test]
    fn pipe_period_does_not_wrap() {
        let t = Tuning {
            pipe_width: u32::MAX,
            pipe_spacing: 1,
            ..Tuning::default()
        };
        assert!(t.pipe_period() > u32::MAX as f32 / 2.0);
        assert_eq!(Tuning::default().pipe_period(), 600.0);
    }

    #[test]
    fn rect_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 20.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 20.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!right.intersects(&a));
    }

    #[test]
    fn rect_overlap_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.5, 9.5, 30.0, 30.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }
}

/// Gameplay tuning: geometry and physics constants.
///
/// Every field has a default, so a config file only needs to name what it
/// overrides.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub pipe_opening_height: u32,
    pub pipe_width: u32,
    pub pipe_spacing: u32,
    pub player_width: u32,
    pub player_height: u32,
    pub player_offset: u32,
    pub start_distance: f32,
    pub gravity: f32,
    pub flap_velocity: f32,
    pub scroll_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            pipe_opening_height: PIPE_OPENING_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_spacing: DIST_BETWEEN_PIPE,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_offset: PLAYER_OFFSET,
            start_distance: PLAYER_START_POSITION as f32,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            scroll_speed: SCROLL_SPEED,
        }
    }
}

impl Tuning {
    /// Horizontal period between consecutive pipes (`pipe_width + pipe_spacing`).
    ///
    /// Summed in `f32`, so any pair of widths is representable.
    pub fn pipe_period(&self) -> f32 {
        self.pipe_width as f32 + self.pipe_spacing as f32
    }
}

/// Screen (viewport) size in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in world pixels.
///
/// Edges are stored explicitly (`left <= right`, `top <= bottom`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rectangle from its top-left corner and size.
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Image handles the core asks a surface to draw.
///
/// Loading the actual artwork is up to the surface implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Player,
    PipeTop,
    PipeBottom,
}

/// Coarse state machine governing whether physics, score and collision run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunPhase {
    #[default]
    Running,
    /// Frozen after a collision until the player restarts.
    GameOver,
}

impl RunPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, RunPhase::Running)
    }
}

/// Game actions that can be applied to modify game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Set vertical velocity to the flap velocity
    Flap,
    /// Reset the run (the score dialog's "Play Again")
    Restart,
}

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionCause {
    /// Player left the screen through the floor or the ceiling.
    Boundary,
    /// Player hit the top or bottom obstacle of pipe `index`.
    Pipe { index: u32 },
}

/// Core-side events emitted by the game loop.
///
/// The host maps these to side effects (flap cue, score dialog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    Flapped,
    PipePassed { score: u32 },
    GameOver { score: u32, cause: CollisionCause },
}
