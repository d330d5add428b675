//! GameView: maps a [`BoardSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so layouts can be checked in unit tests.

use crate::core::{BoardSnapshot, Shape};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::scores::HighScores;
use crate::types::{Cell, PieceKind};

/// Columns reserved right of the board frame for the side panel
const PANEL_W: u16 = 22;
const PANEL_GAP: u16 = 2;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Everything shown beside the board that is not board state
#[derive(Debug, Clone, Copy)]
pub struct Hud<'a> {
    pub player: &'a str,
    pub ranking: &'a HighScores,
}

/// Where the board frame landed in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub panel_x: u16,
}

pub struct GameView {
    /// Terminal columns per board cell
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares up terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn layout(&self, snap: &BoardSnapshot, viewport: Viewport) -> Layout {
        let frame_w = (snap.columns as u16).saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = (snap.rows as u16).saturating_add(2);
        let total_w = frame_w.saturating_add(PANEL_GAP).saturating_add(PANEL_W);
        let frame_x = viewport.width.saturating_sub(total_w) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;
        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel_x: frame_x.saturating_add(frame_w).saturating_add(PANEL_GAP),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &BoardSnapshot, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(' ', Style::default());

        let layout = self.layout(snap, viewport);
        self.draw_border(fb, &layout);

        for y in 0..snap.rows {
            for x in 0..snap.columns {
                let cell = snap.cells[y * snap.columns + x];
                self.draw_cell(fb, &layout, x as u16, y as u16, cell);
            }
        }

        self.draw_panel(fb, snap, hud, &layout, viewport);

        if snap.game_over {
            self.draw_game_over(fb, &layout);
        }
    }

    pub fn render(&self, snap: &BoardSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let style = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let Layout {
            frame_x: x,
            frame_y: y,
            frame_w: w,
            frame_h: h,
            ..
        } = *layout;

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

    fn draw_cell(&self, fb: &mut FrameBuffer, layout: &Layout, x: u16, y: u16, cell: Cell) {
        let px = layout.frame_x + 1 + x * self.cell_w;
        let py = layout.frame_y + 1 + y;
        match cell {
            Some(kind) => fb.fill_rect(px, py, self.cell_w, 1, '█', piece_style(kind)),
            None => {
                let dot = Style::new(Rgb::new(70, 70, 85), BOARD_BG);
                fb.fill_rect(px, py, self.cell_w, 1, ' ', dot);
                fb.put_char(px, py, '·', dot);
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &BoardSnapshot, hud: &Hud<'_>, layout: &Layout, viewport: Viewport) {
        let x = layout.panel_x;
        if x >= viewport.width {
            return;
        }
        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = layout.frame_y;
        fb.put_str(x, y, "PLAYER", label);
        fb.put_str(x, y + 1, hud.player, value);
        y += 3;

        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(x, y, "LINES", label);
        fb.put_u32(x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(x, y, "NEXT", label);
        self.draw_preview(fb, x, y + 1, snap.next);
        y += 4;

        fb.put_str(x, y, "TOP 5", label);
        y += 1;
        for (rank, entry) in hud.ranking.entries().iter().enumerate() {
            let style = if entry.name == hud.player && entry.score == snap.score {
                value.bold()
            } else {
                value
            };
            let w = fb.put_u32(x, y, rank as u32 + 1, style);
            fb.put_char(x + w, y, '.', style);
            let name: String = entry.name.chars().take(10).collect();
            fb.put_str(x + 3, y, &name, style);
            fb.put_u32(x + 14, y, entry.score, style);
            y += 1;
        }
    }

    /// Up rotation of `kind`, normalized to the top-left of the preview box
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let shape = Shape::new(kind);
        let (min_x, min_y, _, _) = shape.bounds();
        for &(dx, dy) in shape.occupied_offsets() {
            let px = x + (dx - min_x) as u16 * self.cell_w;
            let py = y + (dy - min_y) as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', piece_style(kind));
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let mid_y = layout.frame_y + layout.frame_h / 2;
        let style = Style::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let hint = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);
        centered(fb, layout, mid_y, "GAME OVER", style);
        centered(fb, layout, mid_y + 1, "R restart", hint);
        centered(fb, layout, mid_y + 2, "Q quit", hint);
    }
}

fn centered(fb: &mut FrameBuffer, layout: &Layout, y: u16, text: &str, style: Style) {
    let text_w = text.chars().count() as u16;
    let x = layout.frame_x + layout.frame_w.saturating_sub(text_w) / 2;
    fb.put_str(x, y, text, style);
}

fn piece_style(kind: PieceKind) -> Style {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    Style::new(fg, BOARD_BG)
}
