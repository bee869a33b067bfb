//! Game state module - the game loop's state and its per-frame cycle
//!
//! [`GameState`] owns the player, the pipe field, the scroll distance, the
//! score and the run phase. The host drives it once per frame with
//! [`GameState::frame`] (render, then tick) or, for a fixed timestep, with
//! [`GameState::update`].

use std::ops::Range;

use arrayvec::ArrayVec;

use crate::collision;
use crate::pipes::{self, PipeBoxes, PipeField};
use crate::player::PlayerState;
use crate::render::{render, Surface};
use crate::rng::GapRng;
use crate::types::{GameAction, GameEvent, Rect, RunPhase, ScreenSize, Tuning};

/// Events produced by a single tick. At most a pipe pass and a game over.
pub type TickEvents = ArrayVec<GameEvent, 4>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    tuning: Tuning,
    screen: ScreenSize,
    player: PlayerState,
    pipes: PipeField,
    /// Cumulative horizontal distance travelled (px).
    distance: f32,
    /// Index of the next pipe not yet passed. This is the score.
    next_pipe_to_pass: u32,
    phase: RunPhase,
    /// Timestamp of the previous tick; `None` right after start/restart.
    last_frame_ms: Option<u64>,
    /// Monotonic run id (increments on restart).
    run_id: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64, tuning: Tuning, screen: ScreenSize) -> Self {
        Self::with_rng(GapRng::new(seed), tuning, screen)
    }

    pub fn with_rng(rng: GapRng, tuning: Tuning, screen: ScreenSize) -> Self {
        let mut gs = Self {
            tuning,
            screen,
            player: PlayerState::default(),
            pipes: PipeField::new(rng),
            distance: 0.0,
            next_pipe_to_pass: 0,
            phase: RunPhase::Running,
            last_frame_ms: None,
            run_id: 0,
        };
        gs.reset_run();
        gs
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn player(&self) -> PlayerState {
        self.player
    }

    pub fn pipes(&self) -> &PipeField {
        &self.pipes
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn score(&self) -> u32 {
        self.next_pipe_to_pass
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == RunPhase::GameOver
    }

    pub fn run_id(&self) -> u32 {
        self.run_id
    }

    pub fn seed(&self) -> u64 {
        self.pipes.seed()
    }

    #[cfg(test)]
    pub(crate) fn set_distance(&mut self, distance: f32) {
        self.distance = distance;
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// Player bounding box at its current position.
    pub fn player_rect(&self) -> Rect {
        self.player.rect(&self.tuning)
    }

    /// Candidate pipe indices for the current distance and screen width.
    pub fn visible_pipes(&self) -> Range<u32> {
        pipes::visible_range(self.distance, self.screen.width, &self.tuning)
    }

    /// Screen-space x of pipe `index`'s left edge.
    pub fn pipe_left(&self, index: u32) -> f32 {
        pipes::pipe_left(index, self.distance, &self.tuning)
    }

    /// Obstacle boxes of pipe `index`, or `None` if it has not been generated.
    pub fn pipe_boxes(&self, index: u32) -> Option<PipeBoxes> {
        let gap_top = self.pipes.height(index)?;
        Some(pipes::pipe_boxes(
            index,
            gap_top,
            self.distance,
            self.screen.height,
            &self.tuning,
        ))
    }

    /// Generate gap offsets for every pipe in the visible window.
    pub fn prepare_visible(&mut self) {
        let window = self.visible_pipes();
        if let Some(last) = window.end.checked_sub(1) {
            if window.start <= last {
                self.pipes.ensure_generated_up_to(
                    last,
                    self.screen.height,
                    self.tuning.pipe_opening_height,
                );
            }
        }
    }

    /// Update the viewport. Geometry follows on the next tick.
    pub fn resize(&mut self, screen: ScreenSize) {
        if screen != self.screen {
            log::debug!(
                "resize {}x{} -> {}x{}",
                self.screen.width,
                self.screen.height,
                screen.width,
                screen.height
            );
            self.screen = screen;
        }
    }

    /// Apply the flap impulse. Ignored once the run is over.
    pub fn flap(&mut self) -> Option<GameEvent> {
        if !self.phase.is_running() {
            return None;
        }
        self.player.flap(self.tuning.flap_velocity);
        Some(GameEvent::Flapped)
    }

    /// Reset every run value and go back to Running.
    pub fn restart(&mut self) {
        self.run_id = self.run_id.wrapping_add(1);
        self.reset_run();
        log::info!("restart run={} seed={}", self.run_id, self.seed());
    }

    pub fn apply_action(&mut self, action: GameAction) -> Option<GameEvent> {
        match action {
            GameAction::Flap => self.flap(),
            GameAction::Restart => {
                self.restart();
                None
            }
        }
    }

    /// One full game-loop cycle: render the current state, then tick.
    pub fn frame<S: Surface + ?Sized>(&mut self, now_ms: u64, surface: &mut S) -> TickEvents {
        self.prepare_visible();
        render(self, surface);
        self.tick_at(now_ms)
    }

    /// Wall-clock tick.
    ///
    /// The first tick after start or restart only records `now_ms`; later
    /// ticks advance physics by the elapsed time. Collisions are checked on
    /// every tick while running.
    pub fn tick_at(&mut self, now_ms: u64) -> TickEvents {
        let mut events = TickEvents::new();
        if !self.phase.is_running() {
            return events;
        }

        if let Some(prev) = self.last_frame_ms {
            let dt = now_ms.saturating_sub(prev) as f32 / 1000.0;
            self.advance(dt, &mut events);
        }
        self.last_frame_ms = Some(now_ms);

        self.check_collisions(&mut events);
        events
    }

    /// Fixed-timestep update by `dt` seconds. No-op once the run is over.
    pub fn update(&mut self, dt: f32) -> TickEvents {
        let mut events = TickEvents::new();
        if !self.phase.is_running() {
            return events;
        }
        self.advance(dt, &mut events);
        self.check_collisions(&mut events);
        events
    }

    fn reset_run(&mut self) {
        self.player = PlayerState::centered(self.screen.height);
        self.distance = self.tuning.start_distance;
        self.pipes.clear();
        self.next_pipe_to_pass = 0;
        self.phase = RunPhase::Running;
        self.last_frame_ms = None;
    }

    fn advance(&mut self, dt: f32, events: &mut TickEvents) {
        self.player.integrate(self.tuning.gravity, dt);
        self.distance += self.tuning.scroll_speed * dt;

        // At most one pipe per tick; spacing dwarfs per-tick scroll.
        let right_edge = self.pipe_left(self.next_pipe_to_pass) + self.tuning.pipe_width as f32;
        if right_edge < self.tuning.player_offset as f32 {
            self.next_pipe_to_pass += 1;
            log::debug!("passed pipe, score={}", self.next_pipe_to_pass);
            events.push(GameEvent::PipePassed {
                score: self.next_pipe_to_pass,
            });
        }
    }

    fn check_collisions(&mut self, events: &mut TickEvents) {
        self.prepare_visible();
        let cause = collision::detect(
            &self.player_rect(),
            &self.pipes,
            self.visible_pipes(),
            self.distance,
            self.screen.height,
            &self.tuning,
        );

        if let Some(cause) = cause {
            self.phase = RunPhase::GameOver;
            log::info!(
                "game over run={} score={} cause={:?}",
                self.run_id,
                self.next_pipe_to_pass,
                cause
            );
            events.push(GameEvent::GameOver {
                score: self.next_pipe_to_pass,
                cause,
            });
        }
    }
}
