use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use flappy_tui::app::App;
use flappy_tui::config::AppConfig;
use flappy_tui::input::should_quit;
use flappy_tui::term::Viewport;
use flappy_tui::types::{GameEvent, RunPhase};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn click() -> MouseEvent {
    click_at(3, 3)
}

fn click_at(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Run frames until the bird hits the floor.
fn play_until_game_over(app: &mut App) -> u64 {
    let mut t = 0;
    while app.game().phase() == RunPhase::Running {
        app.frame(t);
        t += 16;
        assert!(t < 60_000, "run never ended");
    }
    t
}

#[test]
fn game_over_raises_dialog_with_score() {
    let mut app = App::new(&AppConfig::with_seed(3), Viewport::new(80, 24));
    play_until_game_over(&mut app);
    assert_eq!(app.dialog().score(), Some(0));
}

#[test]
fn dialog_swallows_flaps_until_play_again() {
    let mut app = App::new(&AppConfig::with_seed(3), Viewport::new(80, 24));
    let t = play_until_game_over(&mut app);

    // Up flaps while playing but means nothing to the dialog.
    assert_eq!(app.handle_key(key(KeyCode::Up)), None);
    assert_eq!(app.handle_mouse(click()), None);
    assert!(app.dialog().visible());

    // Space presses "Play Again".
    assert_eq!(app.handle_key(key(KeyCode::Char(' '))), None);
    assert!(!app.dialog().visible());
    assert_eq!(app.game().phase(), RunPhase::Running);
    assert_eq!(app.game().score(), 0);
    assert_eq!(app.game().run_id(), 1);

    // The next frame starts the new run; flaps work again.
    app.frame(t);
    assert_eq!(app.handle_mouse(click()), Some(GameEvent::Flapped));
}

#[test]
fn clicking_play_again_restarts() {
    let mut app = App::new(&AppConfig::with_seed(3), Viewport::new(80, 24));
    let t = play_until_game_over(&mut app);

    // Render once more so the dialog is on screen, then find its button.
    app.frame(t);
    let fb = app.frame_buffer();
    let row = (0..fb.height())
        .find(|&y| fb.row_text(y).contains("[R] Play Again"))
        .unwrap();
    let col = fb.row_text(row).chars().position(|c| c == '[').unwrap() as u16;

    // A click beside the button does nothing.
    assert_eq!(app.handle_mouse(click_at(col, row - 1)), None);
    assert!(app.dialog().visible());

    assert_eq!(app.handle_mouse(click_at(col + 3, row)), None);
    assert!(!app.dialog().visible());
    assert_eq!(app.game().phase(), RunPhase::Running);
    assert_eq!(app.game().run_id(), 1);
}

#[test]
fn restart_key_works_mid_run() {
    let mut app = App::new(&AppConfig::with_seed(3), Viewport::new(80, 24));
    app.frame(0);
    app.frame(500);
    assert!(app.game().player().y > 480.0);

    app.handle_key(key(KeyCode::Char('r')));
    assert_eq!(app.game().player().y, 480.0);
    assert_eq!(app.game().run_id(), 1);
    assert!(!app.dialog().visible());
}

#[test]
fn quit_keys() {
    assert!(should_quit(key(KeyCode::Char('q'))));
    assert!(should_quit(key(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(!should_quit(key(KeyCode::Char(' '))));
}

#[test]
fn frame_buffer_tracks_resize() {
    let mut app = App::new(&AppConfig::with_seed(3), Viewport::new(80, 24));
    app.frame(0);
    app.resize(Viewport::new(50, 20));
    app.frame(16);
    assert_eq!(app.frame_buffer().width(), 50);
    assert_eq!(app.frame_buffer().height(), 20);
    assert_eq!(app.game().screen().height, 800);
}
