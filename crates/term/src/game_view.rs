//! GameView: maps a core `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::TILE_COUNT;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the snake game.
///
/// The view owns no game state: the snapshot and the persisted high score are
/// supplied by the caller every frame.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

const RESUME_PROMPT: &str = "press space to resume";

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        high_score: u32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (TILE_COUNT as u16) * self.cell_w;
        let board_px_h = (TILE_COUNT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let food_style = CellStyle {
            fg: Rgb::new(220, 60, 60),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let body_style = CellStyle {
            fg: Rgb::new(40, 90, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let head_style = CellStyle {
            fg: Rgb::new(90, 150, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        // Background for play area.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Food.
        for f in &snap.food {
            if f.x >= 0 && f.x < TILE_COUNT && f.y >= 0 && f.y < TILE_COUNT {
                self.fill_cell_rect(fb, start_x, start_y, f.x as u16, f.y as u16, '●', food_style);
            }
        }

        // Snake body, then the head on top (distinguished).
        for part in snap.snake.iter().skip(1) {
            self.fill_cell_rect(
                fb,
                start_x,
                start_y,
                part.x as u16,
                part.y as u16,
                '█',
                body_style,
            );
        }
        if let Some(head) = snap.snake.first() {
            if head.x >= 0 && head.x < TILE_COUNT && head.y >= 0 && head.y < TILE_COUNT {
                self.fill_cell_rect(
                    fb,
                    start_x,
                    start_y,
                    head.x as u16,
                    head.y as u16,
                    '█',
                    head_style,
                );
            }
        }

        // Score line, outside the frame.
        self.draw_score_line(fb, snap, high_score, start_x, start_y, frame_h);

        // Resume prompt overlay while frozen (startup and post-game-over).
        if !snap.running() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, RESUME_PROMPT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, high_score: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, high_score, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        tile_x: u16,
        tile_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + tile_x * self.cell_w;
        let py = start_y + 1 + tile_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_score_line(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        high_score: u32,
        start_x: u16,
        start_y: u16,
        frame_h: u16,
    ) {
        let text = format!("score: {} | highscore: {}", snap.score, high_score);

        // Below the frame if there is room, else above it.
        let row = if start_y + frame_h < fb.height() {
            start_y + frame_h
        } else if start_y > 0 {
            start_y - 1
        } else {
            return;
        };

        fb.put_str(start_x + 1, row, &text, CellStyle::default());
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(60, 60, 60),
            bold: true,
            dim: false,
        };

        let padded_len = (text.chars().count() as u16) + 2;
        let tx = start_x + frame_w.saturating_sub(padded_len) / 2;
        let ty = start_y + frame_h / 2;

        fb.put_char(tx, ty, ' ', style);
        fb.put_str(tx + 1, ty, text, style);
        fb.put_char(tx + 1 + padded_len - 2, ty, ' ', style);
    }
}
