//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Board row 0 is drawn at the bottom of the
//! well. Only the playable columns are drawn; the margin column never holds a
//! block.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};

/// Width of the score panel right of the well, in terminal columns.
const SIDEBAR_W: u16 = 16;

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

/// Screen position of the well's top-left border corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellOrigin {
    pub x: u16,
    pub y: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for tall terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    fn well_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let playable = snap.width.saturating_sub(1);
        (
            playable.saturating_mul(self.cell_w).saturating_add(2),
            snap.height.saturating_add(2),
        )
    }

    /// Where the well lands in a viewport (centered with its sidebar).
    pub fn origin(&self, snap: &GameSnapshot, viewport: Viewport) -> WellOrigin {
        let (frame_w, frame_h) = self.well_size(snap);
        WellOrigin {
            x: viewport.width.saturating_sub(frame_w.saturating_add(SIDEBAR_W)) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        }
    }

    /// Render the snapshot into `fb`, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.well_size(snap);
        let origin = self.origin(snap, viewport);

        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let well_bg = Style::new(Rgb::new(70, 70, 80), Rgb::new(25, 25, 35));

        self.draw_border(fb, origin, frame_w, frame_h, border);

        let playable = snap.width.saturating_sub(1);
        // Rows and columns past the viewport edge are clipped.
        let first_row = snap.height.saturating_sub(viewport.height);
        let cols = playable.min(viewport.width);
        for row in first_row..snap.height {
            // Row 0 is the bottom line inside the border.
            let sy = origin.y.saturating_add(snap.height - row);
            for col in 0..cols {
                let sx = origin
                    .x
                    .saturating_add(1)
                    .saturating_add(col.saturating_mul(self.cell_w));
                match snap.block(row as usize, col as usize) {
                    Some(color) => {
                        let rgb = Rgb::from(color);
                        fb.fill_rect(sx, sy, self.cell_w, 1, '█', Style::new(rgb, rgb));
                    }
                    None => {
                        fb.fill_rect(sx, sy, self.cell_w, 1, ' ', well_bg);
                        fb.put(sx, sy, '.', well_bg);
                    }
                }
            }
        }

        let sidebar_x = origin.x.saturating_add(frame_w).saturating_add(2);
        self.draw_sidebar(fb, snap, sidebar_x, origin.y.saturating_add(1));
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, origin: WellOrigin, w: u16, h: u16, style: Style) {
        let right = origin.x.saturating_add(w - 1);
        let bottom = origin.y.saturating_add(h - 1);
        for x in origin.x + 1..right {
            fb.put(x, origin.y, '─', style);
            fb.put(x, bottom, '─', style);
        }
        for y in origin.y.saturating_add(1)..bottom {
            fb.put(origin.x, y, '│', style);
            fb.put(right, y, '│', style);
        }
        fb.put(origin.x, origin.y, '┌', style);
        fb.put(right, origin.y, '┐', style);
        fb.put(origin.x, bottom, '└', style);
        fb.put(right, bottom, '┘', style);
    }

    fn draw_sidebar(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let label = Style::default();
        let value = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &snap.score.to_string(), value);
        fb.put_str(x, y + 3, "PIECES", label);
        fb.put_str(x, y + 4, &snap.pieces_spawned.to_string(), value);

        if snap.game_over {
            let alert = Style::new(Rgb::new(255, 80, 80), Rgb::new(0, 0, 0)).bold();
            fb.put_str(x, y + 6, "GAME OVER", alert);
            fb.put_str(x, y + 7, "r: restart", label);
        }

        fb.put_str(x, y + 9, "arrows: move", label);
        fb.put_str(x, y + 10, "up: rotate", label);
        fb.put_str(x, y + 11, "q: quit", label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, GameConfig};
    use crate::types::Category;

    #[test]
    fn origin_centers_well_and_sidebar() {
        let snap = Game::default().snapshot();
        // 10 playable columns * 2 + 2 = 22 wide, 22 tall
        let origin = GameView::default().origin(&snap, Viewport::new(80, 30));
        assert_eq!(origin, WellOrigin { x: 21, y: 4 });
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = Game::with_first(GameConfig::default(), Category::I).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
        assert_eq!(fb.height(), 3);
    }

    #[test]
    fn oversized_board_clips_instead_of_overflowing() {
        let config = GameConfig {
            width: 40_000,
            height: 40,
            ..GameConfig::default()
        };
        let snap = Game::with_first(config, Category::O).snapshot();
        let view = GameView::default();

        let origin = view.origin(&snap, Viewport::new(80, 24));
        assert_eq!(origin, WellOrigin { x: 0, y: 0 });

        let fb = view.render(&snap, Viewport::new(80, 24));
        assert_eq!(fb.width(), 80);
        assert_eq!(fb.height(), 24);
        assert_eq!(fb.get(0, 0).map(|g| g.ch), Some('┌'));
        // The top visible line inside the border is board row 39.
        assert_eq!(fb.get(1, 1).map(|g| g.ch), Some('.'));
        // The spawned O (rows 16..=17) lands on the last screen line.
        assert_eq!(fb.get(1 + 4 * 2, 23).map(|g| g.ch), Some('█'));
    }
}
