//! Terminal Flappy Bird runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use flappy_tui::app::App;
use flappy_tui::config::AppConfig;
use flappy_tui::input::should_quit;
use flappy_tui::logging;
use flappy_tui::term::{TerminalRenderer, Viewport};
use flappy_tui::types::GameEvent;

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    logging::init(&config)?;
    log::info!(
        "starting seed={} frame_ms={} sound={} px_per_cell={}x{}",
        config.seed,
        config.frame_ms,
        config.sound,
        config.px_per_col,
        config.px_per_row
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {:#}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(config, Viewport::new(w, h));

    let clock = Instant::now();
    let frame_duration = Duration::from_millis(config.frame_ms as u64);

    loop {
        let frame_start = Instant::now();

        // Render, then tick.
        app.frame(clock.elapsed().as_millis() as u64);
        term.draw_swap(app.frame_buffer_mut())?;

        // Input with timeout until next frame.
        loop {
            let timeout = frame_duration
                .checked_sub(frame_start.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));
            if !event::poll(timeout)? {
                break;
            }

            let outcome = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit score={}", app.game().score());
                        return Ok(());
                    }
                    app.handle_key(key)
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(w, h) => {
                    app.resize(Viewport::new(w, h));
                    term.invalidate();
                    None
                }
                _ => None,
            };

            if outcome == Some(GameEvent::Flapped) && config.sound {
                term.bell();
            }
        }
    }
}
