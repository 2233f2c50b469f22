//! GameView: maps an engine snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::scores::HighScoreTable;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{COLUMNS, ROWS};

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

/// Host-side name entry state, drawn over a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamePrompt<'a> {
    pub input: &'a str,
}

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Playfield cell width in terminal columns.
    cell_w: u16,
    /// Playfield cell height in terminal rows.
    cell_h: u16,
}

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

    /// Render into an existing framebuffer, reusable across frames.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        scores: &HighScoreTable,
        prompt: Option<NamePrompt<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let field_w = (COLUMNS as u16) * self.cell_w;
        let field_h = (ROWS as u16) * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells, with a faint dot grid behind them.
        for row in 0..ROWS as u16 {
            for col in 0..COLUMNS as u16 {
                if snap.grid[row as usize][col as usize] {
                    self.draw_block(fb, start_x, start_y, row, col, LOCKED, false);
                } else {
                    self.draw_empty_cell(fb, start_x, start_y, row, col);
                }
            }
        }

        // Active piece on top.
        if let Some(cells) = snap.active {
            for (row, col) in cells {
                if row >= 0 && row < ROWS && col >= 0 && col < COLUMNS {
                    self.draw_block(fb, start_x, start_y, row as u16, col as u16, FALLING, true);
                }
            }
        }

        self.draw_side_panel(fb, snap, scores, viewport, start_x, start_y, frame_w);

        // Overlays; the name prompt wins over the plain game-over text.
        if let Some(prompt) = prompt {
            let name_line = format!("name: {}_", prompt.input);
            self.draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["NEW HIGH SCORE", name_line.as_str(), "enter: save"],
            );
        } else if snap.paused {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, &["PAUSED"]);
        } else if snap.game_over {
            self.draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", "enter: new game"],
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        scores: &HighScoreTable,
        prompt: Option<NamePrompt<'_>>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, scores, prompt, viewport, &mut fb);
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, row, col, '·', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        fg: Rgb,
        bold: bool,
    ) {
        let style = CellStyle {
            fg,
            bg: Rgb::new(30, 30, 40),
            bold,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, row, col, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        scores: &HighScoreTable,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snap.score.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HIGH SCORES", label);
        y = y.saturating_add(1);
        if scores.entries().is_empty() {
            fb.put_str(panel_x, y, "-", value);
            y = y.saturating_add(1);
        }
        for (i, entry) in scores.entries().iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            let line = format!("{}. {} - {}", i + 1, entry.name, entry.score);
            fb.put_str(panel_x, y, &line, value);
            y = y.saturating_add(1);
        }

        y = y.saturating_add(1);
        for line in ["a/d move   w rotate", "s drop  space slam", "esc pause  q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let first_y = start_y
            .saturating_add(frame_h / 2)
            .saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            let text_w = line.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, first_y.saturating_add(i as u16), line, style);
        }
    }
}

/// Locked-cell color (the settled stack).
const LOCKED: Rgb = Rgb::new(80, 120, 220);
/// Active-piece color.
const FALLING: Rgb = Rgb::new(220, 80, 80);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::ShapeId;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    fn contains_text(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| row_text(fb, y).contains(needle))
    }

    #[test]
    fn test_renders_active_piece_blocks() {
        let mut state = GameState::new(1);
        state.spawn_shape(ShapeId::Square);

        let view = GameView::default();
        let fb = view.render(
            &state.snapshot(),
            &HighScoreTable::default(),
            None,
            Viewport::new(80, 30),
        );

        let blocks = (0..fb.height())
            .map(|y| row_text(&fb, y).matches('█').count())
            .sum::<usize>();
        // Four cells, two characters wide each.
        assert_eq!(blocks, 8);
    }

    #[test]
    fn test_paused_overlay() {
        let mut state = GameState::new(1);
        state.toggle_pause();

        let view = GameView::default();
        let fb = view.render(
            &state.snapshot(),
            &HighScoreTable::default(),
            None,
            Viewport::new(80, 30),
        );
        assert!(contains_text(&fb, "PAUSED"));
    }

    #[test]
    fn test_game_over_overlay_and_prompt() {
        let mut snap = GameState::new(1).snapshot();
        snap.game_over = true;
        snap.active = None;

        let view = GameView::default();
        let scores = HighScoreTable::default();

        let fb = view.render(&snap, &scores, None, Viewport::new(80, 30));
        assert!(contains_text(&fb, "GAME OVER"));

        let fb = view.render(
            &snap,
            &scores,
            Some(NamePrompt { input: "kir" }),
            Viewport::new(80, 30),
        );
        assert!(contains_text(&fb, "NEW HIGH SCORE"));
        assert!(contains_text(&fb, "name: kir_"));
    }

    #[test]
    fn test_side_panel_lists_high_scores() {
        let state = GameState::new(1);
        let mut scores = HighScoreTable::default();
        scores.record("ann", 300);

        let view = GameView::default();
        let fb = view.render(&state.snapshot(), &scores, None, Viewport::new(80, 30));
        assert!(contains_text(&fb, "SCORE"));
        assert!(contains_text(&fb, "1. ann - 300"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let state = GameState::new(1);
        let view = GameView::default();
        let _ = view.render(
            &state.snapshot(),
            &HighScoreTable::default(),
            None,
            Viewport::new(5, 3),
        );
    }
}
