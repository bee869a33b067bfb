//! Collision detection against the screen bounds and the visible pipes.

use std::ops::Range;

use crate::pipes::{pipe_boxes, PipeField};
use crate::types::{CollisionCause, Rect, Tuning};

/// True when the player's top edge left `[0, screen_height - player_height]`.
#[inline]
pub fn hits_boundary(player_y: f32, screen_height: u32, player_height: u32) -> bool {
    player_y < 0.0 || player_y > screen_height as f32 - player_height as f32
}

/// First pipe in `window` whose top or bottom box overlaps `player`.
///
/// Pipes that have not been generated yet are skipped.
pub fn first_pipe_hit(
    player: &Rect,
    pipes: &PipeField,
    window: Range<u32>,
    distance: f32,
    screen_height: u32,
    tuning: &Tuning,
) -> Option<u32> {
    window.into_iter().find(|&index| {
        let Some(gap_top) = pipes.height(index) else {
            return false;
        };
        let boxes = pipe_boxes(index, gap_top, distance, screen_height, tuning);
        player.intersects(&boxes.top) || player.intersects(&boxes.bottom)
    })
}

/// Full collision check. Boundary hits win over pipe hits.
pub fn detect(
    player: &Rect,
    pipes: &PipeField,
    window: Range<u32>,
    distance: f32,
    screen_height: u32,
    tuning: &Tuning,
) -> Option<CollisionCause> {
    if hits_boundary(player.top, screen_height, tuning.player_height) {
        return Some(CollisionCause::Boundary);
    }
    first_pipe_hit(player, pipes, window, distance, screen_height, tuning)
        .map(|index| CollisionCause::Pipe { index })
}
