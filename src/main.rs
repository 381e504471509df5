//! Terminal snake runner (default binary).
//!
//! Drives the engine from two event sources: a fixed-period tick timer and
//! the terminal key-event stream. The engine itself never touches the
//! terminal or the high-score file; this loop wires those collaborators
//! together.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{EngineEvent, GameEngine, GameSnapshot};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::store::HighScoreStore;
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut engine = GameEngine::new(wall_clock_seed());

    let store = HighScoreStore::default_path();
    let mut high_score = store.get();

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snap);
        view.render_into(&snap, high_score, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next tick boundary.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(input) = handle_key_event(key) {
                        engine.handle_input(input);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick();

            if let Some(EngineEvent::GameOver { score }) = engine.take_last_event() {
                // A failed write is not fatal: fall back to the in-memory
                // figure so the status line still shows the session's best.
                high_score = store
                    .record(score)
                    .unwrap_or_else(|_| high_score.max(score));
            }
        }
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
