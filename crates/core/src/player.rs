//! Player physics.

use crate::types::{Rect, Tuning};

/// Vertical state of the player. Horizontal offset and size are fixed by [`Tuning`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerState {
    /// Top edge, pixels from the top of the screen.
    pub y: f32,
    /// Vertical velocity in px/s (negative is up).
    pub vel: f32,
}

impl PlayerState {
    /// Player centered vertically (integer half of the screen height), at rest.
    pub fn centered(screen_height: u32) -> Self {
        Self {
            y: (screen_height / 2) as f32,
            vel: 0.0,
        }
    }

    /// Semi-implicit Euler step: velocity first, then position with the new velocity.
    pub fn integrate(&mut self, gravity: f32, dt: f32) {
        self.vel += gravity * dt;
        self.y += self.vel * dt;
    }

    pub fn flap(&mut self, flap_velocity: f32) {
        self.vel = flap_velocity;
    }

    /// Bounding box at the player's fixed horizontal offset.
    pub fn rect(&self, tuning: &Tuning) -> Rect {
        Rect::from_xywh(
            tuning.player_offset as f32,
            self.y,
            tuning.player_width as f32,
            tuning.player_height as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_uses_integer_half_height() {
        let p = PlayerState::centered(961);
        assert_eq!(p.y, 480.0);
        assert_eq!(p.vel, 0.0);
    }

    #[test]
    fn integrate_applies_velocity_before_position() {
        let mut p = PlayerState { y: 100.0, vel: -50.0 };
        p.integrate(500.0, 0.5);
        // v' = -50 + 250 = 200, y' = 100 + 200 * 0.5 = 200
        assert_eq!(p.vel, 200.0);
        assert_eq!(p.y, 200.0);
    }

    #[test]
    fn flap_overrides_velocity() {
        let mut p = PlayerState { y: 10.0, vel: 321.0 };
        p.flap(-400.0);
        assert_eq!(p.vel, -400.0);
        p.flap(-400.0);
        assert_eq!(p.vel, -400.0);
        assert_eq!(p.y, 10.0);
    }

    #[test]
    fn rect_sits_at_fixed_offset() {
        let t = Tuning::default();
        let p = PlayerState { y: 300.0, vel: 0.0 };
        assert_eq!(p.rect(&t), Rect::new(20.0, 300.0, 120.0, 370.0));
    }
}
