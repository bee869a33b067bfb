//! One interactive session: game state, score dialog, and terminal view.
//!
//! `App` holds everything the binary's loop needs except the terminal itself,
//! so the input and dialog flow can be driven from tests.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::config::AppConfig;
use crate::core::{GameState, TickEvents};
use crate::input::{dialog_action, handle_key_event, handle_mouse_event};
use crate::term::{FrameBuffer, GameView, ScoreDialog, Viewport};
use crate::types::{GameAction, GameEvent};

pub struct App {
    game: GameState,
    dialog: ScoreDialog,
    view: GameView,
    viewport: Viewport,
    fb: FrameBuffer,
}

impl App {
    pub fn new(config: &AppConfig, viewport: Viewport) -> Self {
        let view = GameView::new(config.px_per_col, config.px_per_row);
        let game = GameState::new(config.seed, config.tuning, view.screen_size(viewport));
        Self {
            game,
            dialog: ScoreDialog::new(),
            view,
            viewport,
            fb: FrameBuffer::new(viewport.width, viewport.height),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn dialog(&self) -> &ScoreDialog {
        &self.dialog
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn frame_buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    /// Render and tick once. A game over raises the score dialog.
    pub fn frame(&mut self, now_ms: u64) -> TickEvents {
        let events = self.view.frame_into(
            &mut self.game,
            &self.dialog,
            now_ms,
            self.viewport,
            &mut self.fb,
        );
        for event in &events {
            if let GameEvent::GameOver { score, .. } = *event {
                self.dialog.show(score);
            }
        }
        events
    }

    /// Track a terminal resize. The world grows or shrinks with the viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.game.resize(self.view.screen_size(viewport));
    }

    /// Route a key press. While the dialog is up only its button responds.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GameEvent> {
        let action = if self.dialog.visible() {
            dialog_action(key)
        } else {
            handle_key_event(key)
        };
        action.and_then(|a| self.apply_action(a))
    }

    /// Route a mouse event. While the dialog is up a tap only counts when it
    /// lands on "Play Again".
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<GameEvent> {
        let tap = handle_mouse_event(mouse)?;
        if !self.dialog.visible() {
            return self.apply_action(tap);
        }
        let Viewport { width, height } = self.viewport;
        if self.dialog.button_hit(width, height, mouse.column, mouse.row) {
            self.apply_action(GameAction::Restart)
        } else {
            None
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> Option<GameEvent> {
        if action == GameAction::Restart {
            if let Some(score) = self.dialog.dismiss() {
                log::debug!("dialog dismissed, last score={}", score);
            }
        }
        self.game.apply_action(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn app() -> App {
        App::new(&AppConfig::with_seed(11), Viewport::new(80, 24))
    }

    #[test]
    fn world_matches_viewport() {
        let app = app();
        assert_eq!(app.game().screen().width, 1600);
        assert_eq!(app.game().screen().height, 960);
    }

    #[test]
    fn space_flaps_while_running() {
        let mut app = app();
        app.frame(0);
        assert_eq!(
            app.handle_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameEvent::Flapped)
        );
        assert_eq!(app.game().player().vel, -400.0);
    }

    #[test]
    fn resize_updates_world() {
        let mut app = app();
        app.resize(Viewport::new(40, 12));
        assert_eq!(app.game().screen().width, 800);
        assert_eq!(app.viewport(), Viewport::new(40, 12));
    }
}
