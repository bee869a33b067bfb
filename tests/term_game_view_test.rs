use flappy_tui::core::{sprite_color, GameState};
use flappy_tui::term::{FrameBuffer, GameView, ScoreDialog, Viewport};
use flappy_tui::types::{Sprite, Tuning};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_fills_sky_and_draws_score() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let state = GameState::new(1, Tuning::default(), view.screen_size(vp));
    let fb = view.render(&state, &ScoreDialog::default(), vp);

    assert_eq!(fb.width(), 80);
    assert_eq!(fb.height(), 24);
    let sky = sprite_color(Sprite::Background);
    assert_eq!(fb.get(79, 23).unwrap().style.bg, sky);
    assert!(fb.row_text(0).contains("score: 0"));
}

#[test]
fn term_view_draws_pipes_once_they_scroll_in() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let tuning = Tuning {
        gravity: 0.0,
        ..Tuning::default()
    };
    let mut state = GameState::new(3, tuning, view.screen_size(vp));
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    // d = -400: pipe 0 spans world x [400, 500] => columns 20..25.
    state.update(3.0);
    view.frame_into(&mut state, &ScoreDialog::default(), 0, vp, &mut fb);

    let gap_top = state.pipes().height(0).unwrap();
    // Rows that are fully pipe on either side of the gap.
    let top_rows = (gap_top as f32 / 40.0).round() as u16;
    let bottom_start = ((gap_top + 350) as f32 / 40.0).round() as u16;
    if top_rows > 0 {
        assert_eq!(fb.get(22, 0).unwrap().ch, '█');
    }
    if bottom_start < 24 {
        assert_eq!(fb.get(22, 23).unwrap().ch, '█');
    }
    // Column left of the pipe stays clear on the last row.
    assert_eq!(fb.get(18, 23).unwrap().ch, ' ');
}

#[test]
fn term_view_overlays_dialog_after_game_over() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut state = GameState::new(1, Tuning::default(), view.screen_size(vp));
    let mut dialog = ScoreDialog::new();
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    let mut t = 0;
    while !state.game_over() {
        for e in view.frame_into(&mut state, &dialog, t, vp, &mut fb) {
            if let flappy_tui::types::GameEvent::GameOver { score, .. } = e {
                dialog.show(score);
            }
        }
        t += 16;
    }
    assert!(dialog.visible());

    view.render_into(&state, &dialog, vp, &mut fb);
    let text = screen_text(&fb);
    assert!(text.contains("Game over!"));
    assert!(text.contains("Your score was: 0"));
    assert!(text.contains("[R] Play Again"));
}

#[test]
fn term_view_honors_custom_scale() {
    let view = GameView::new(10, 20);
    let vp = Viewport::new(40, 12);
    let size = view.screen_size(vp);
    assert_eq!((size.width, size.height), (400, 240));

    let state = GameState::new(1, Tuning::default(), size);
    let fb = view.render(&state, &ScoreDialog::default(), vp);
    // Player: world x [20, 120], y [120, 190] => cols 2..12, rows 6..10.
    assert_eq!(fb.get(2, 6).unwrap().ch, '█');
    assert_eq!(fb.get(11, 9).unwrap().ch, '█');
    assert_eq!(fb.get(12, 6).unwrap().ch, ' ');
}
