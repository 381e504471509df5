//! Rendering tests: snapshot -> framebuffer, no terminal required.

use tui_snake::core::GameEngine;
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{GameInput, TILE_COUNT};

fn frame_text(fb: &FrameBuffer) -> String {
    let mut out = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            out.push(fb.get(x, y).unwrap().ch);
        }
        out.push('\n');
    }
    out
}

// Exact fit: 20 tiles * 2 cols + border = 42 wide; 20 rows + border = 22,
// plus one status row.
fn viewport() -> Viewport {
    Viewport::new(TILE_COUNT as u16 * 2 + 2, TILE_COUNT as u16 + 3)
}

#[test]
fn test_render_contains_snake_and_food() {
    let engine = GameEngine::new(5);
    let snap = engine.snapshot();
    let fb = GameView::default().render(&snap, 0, viewport());

    let text = frame_text(&fb);
    assert!(text.contains('█'), "snake missing from frame");
    assert!(text.contains('●'), "food missing from frame");
}

#[test]
fn test_render_status_line_reflects_scores() {
    let engine = GameEngine::new(5);
    let fb = GameView::default().render(&engine.snapshot(), 123, viewport());

    let text = frame_text(&fb);
    assert!(text.contains("score: 0 | highscore: 123"));
}

#[test]
fn test_render_resume_prompt_toggles_with_mode() {
    let mut engine = GameEngine::new(5);
    let view = GameView::default();

    let frozen = frame_text(&view.render(&engine.snapshot(), 0, viewport()));
    assert!(frozen.contains("press space to resume"));

    engine.handle_input(GameInput::Resume);
    let running = frame_text(&view.render(&engine.snapshot(), 0, viewport()));
    assert!(!running.contains("press space to resume"));
}

#[test]
fn test_render_into_reuses_framebuffer_across_ticks() {
    let mut engine = GameEngine::new(5);
    engine.handle_input(GameInput::Resume);

    let view = GameView::default();
    let vp = viewport();
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    for _ in 0..5 {
        engine.tick();
        view.render_into(&engine.snapshot(), 0, vp, &mut fb);
        assert_eq!(fb.width(), vp.width);
        assert_eq!(fb.height(), vp.height);
    }
}

#[test]
fn test_render_survives_tiny_viewports() {
    let engine = GameEngine::new(5);
    let view = GameView::default();

    // Degenerate terminal sizes must not panic; clipping is fine.
    for (w, h) in [(0, 0), (1, 1), (10, 3), (80, 24)] {
        let _ = view.render(&engine.snapshot(), 0, Viewport::new(w, h));
    }
}
