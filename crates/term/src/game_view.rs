//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. Tiles are drawn as
//! solid blocks whose colour is the tile's RGBA value composited over the
//! light panel background, so the divergent tile differs only by its colour.

use crate::core::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Outcome, Phase};

/// Light panel background tiles are composited onto.
pub const PANEL_BG: Rgb = Rgb::new(245, 245, 245);

const PANEL_FG: Rgb = Rgb::new(40, 40, 50);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const MIN_PANEL_W: u16 = 28;
const TEXT_PANEL_W: u16 = 52;
const TEXT_PANEL_H: u16 = 12;
/// Border, GAME, ROUND, TIME and a spacer above the grid.
const HEADER_ROWS: u16 = 5;
/// Spacer, banner and border below the grid.
const FOOTER_ROWS: u16 = 3;

const INSTRUCTIONS: &str = "Play the game by clicking on the odd one out!";

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

/// Transient feedback line shown under the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Banner {
    Correct,
    Incorrect,
    Victory,
}

impl Banner {
    pub fn text(&self) -> &'static str {
        match self {
            Banner::Correct => "Correct!",
            Banner::Incorrect => "Not that one...",
            Banner::Victory => "All rounds cleared!",
        }
    }

    fn colour(&self) -> Rgb {
        match self {
            Banner::Correct | Banner::Victory => Rgb::new(30, 140, 60),
            Banner::Incorrect => Rgb::new(200, 60, 60),
        }
    }
}

/// Front-end state drawn on top of the session snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HudView {
    /// Tile index under the keyboard cursor.
    pub cursor: Option<usize>,
    pub banner: Option<Banner>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen-space placement of the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub x: u16,
    pub y: u16,
    pub grid_size: u8,
    tile_w: u16,
    tile_h: u16,
    gap_x: u16,
    gap_y: u16,
}

impl GridLayout {
    pub fn width(&self) -> u16 {
        span(self.grid_size, self.tile_w, self.gap_x)
    }

    pub fn height(&self) -> u16 {
        span(self.grid_size, self.tile_h, self.gap_y)
    }

    /// Top-left corner of tile `index`.
    pub fn tile_origin(&self, index: usize) -> (u16, u16) {
        let n = self.grid_size.max(1) as usize;
        let col = (index % n) as u16;
        let row = (index / n) as u16;
        (
            self.x + col * (self.tile_w + self.gap_x),
            self.y + row * (self.tile_h + self.gap_y),
        )
    }

    /// Tile under a terminal cell, if any. Gaps between tiles hit nothing.
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let dx = column.checked_sub(self.x)?;
        let dy = row.checked_sub(self.y)?;
        let pitch_x = self.tile_w + self.gap_x;
        let pitch_y = self.tile_h + self.gap_y;
        if dx % pitch_x >= self.tile_w || dy % pitch_y >= self.tile_h {
            return None;
        }
        let (col, r) = ((dx / pitch_x) as usize, (dy / pitch_y) as usize);
        let n = self.grid_size as usize;
        (col < n && r < n).then_some(r * n + col)
    }
}

fn span(n: u8, tile: u16, gap: u16) -> u16 {
    let n = n as u16;
    n * tile + n.saturating_sub(1) * gap
}

#[derive(Debug, Clone, Copy)]
struct Panel {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the colour grid.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    gap_x: u16,
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x2 tiles with a 2-column gap look roughly square in most fonts.
        Self {
            tile_w: 6,
            tile_h: 2,
            gap_x: 2,
            gap_y: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the grid of `snap` lands in `viewport`.
    pub fn grid_layout(&self, snap: &SessionSnapshot, viewport: Viewport) -> GridLayout {
        let mut grid = GridLayout {
            x: 0,
            y: 0,
            grid_size: snap.grid_size,
            tile_w: self.tile_w,
            tile_h: self.tile_h,
            gap_x: self.gap_x,
            gap_y: self.gap_y,
        };
        let panel = self.place(viewport, self.grid_panel_w(&grid), self.grid_panel_h(&grid));
        grid.x = panel.x + panel.w.saturating_sub(grid.width()) / 2;
        grid.y = panel.y + HEADER_ROWS;
        grid
    }

    /// Map a click to a tile index. Only a playing session has clickable tiles.
    pub fn hit_test(
        &self,
        snap: &SessionSnapshot,
        viewport: Viewport,
        column: u16,
        row: u16,
    ) -> Option<usize> {
        if !snap.playable() {
            return None;
        }
        self.grid_layout(snap, viewport)
            .hit(column, row)
            .filter(|&i| i < snap.tile_count)
    }

    /// Render the session into an existing framebuffer.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_hud(snap, &HudView::default(), viewport, fb);
    }

    pub fn render_into_with_hud(
        &self,
        snap: &SessionSnapshot,
        hud: &HudView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell {
            ch: ' ',
            style: CellStyle::new(PANEL_FG, SCREEN_BG),
        });

        match snap.phase {
            Phase::Stopped => self.draw_text_screen(
                fb,
                viewport,
                &[
                    ("COLOUR CLICKER", true),
                    ("", false),
                    (INSTRUCTIONS, false),
                    ("", false),
                    ("[Enter] Start    [q] Quit", false),
                ],
            ),
            Phase::Paused => self.draw_text_screen(
                fb,
                viewport,
                &[
                    ("PAUSED", true),
                    ("", false),
                    (INSTRUCTIONS, false),
                    ("", false),
                    ("[r] Restart    [p] Resume", false),
                ],
            ),
            Phase::Playing => self.draw_playing(fb, snap, hud, viewport),
            Phase::Finished => self.draw_finished(fb, snap, viewport),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_hud(snap, &HudView::default(), viewport)
    }

    pub fn render_with_hud(
        &self,
        snap: &SessionSnapshot,
        hud: &HudView,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_hud(snap, hud, viewport, &mut fb);
        fb
    }

    fn grid_panel_w(&self, grid: &GridLayout) -> u16 {
        (grid.width() + 4).max(MIN_PANEL_W)
    }

    fn grid_panel_h(&self, grid: &GridLayout) -> u16 {
        grid.height() + HEADER_ROWS + FOOTER_ROWS
    }

    fn place(&self, viewport: Viewport, w: u16, h: u16) -> Panel {
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Panel { x, y, w, h }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, panel: Panel) {
        let fill = CellStyle::new(PANEL_FG, PANEL_BG);
        fb.fill_rect(panel.x, panel.y, panel.w, panel.h, ' ', fill);
        self.draw_border(fb, panel, CellStyle::new(Rgb::new(120, 120, 130), PANEL_BG));
    }

    fn draw_border(&self, fb: &mut FrameBuffer, p: Panel, style: CellStyle) {
        if p.w < 2 || p.h < 2 {
            return;
        }
        let (right, bottom) = (p.x + p.w - 1, p.y + p.h - 1);

        fb.put_char(p.x, p.y, '┌', style);
        fb.put_char(right, p.y, '┐', style);
        fb.put_char(p.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for x in p.x + 1..right {
            fb.put_char(x, p.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in p.y + 1..bottom {
            fb.put_char(p.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_text_screen(&self, fb: &mut FrameBuffer, viewport: Viewport, lines: &[(&str, bool)]) {
        let panel = self.place(viewport, TEXT_PANEL_W, TEXT_PANEL_H);
        self.draw_panel(fb, panel);

        let plain = CellStyle::new(PANEL_FG, PANEL_BG);
        let top = panel.y + TEXT_PANEL_H.saturating_sub(lines.len() as u16) / 2;
        for (i, &(text, bold)) in lines.iter().enumerate() {
            let style = if bold { plain.bold() } else { plain };
            fb.put_centered(panel.x, panel.w, top + i as u16, text, style);
        }
    }

    fn draw_playing(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        hud: &HudView,
        viewport: Viewport,
    ) {
        let grid = self.grid_layout(snap, viewport);
        let panel = self.place(viewport, self.grid_panel_w(&grid), self.grid_panel_h(&grid));
        self.draw_panel(fb, panel);

        let label = CellStyle::new(Rgb::new(90, 90, 100), PANEL_BG);
        let game = format!("GAME {}", snap.session_number);
        let round = format!("ROUND {}", snap.round_number);
        let time = format!("TIME {}", snap.elapsed_time);
        fb.put_centered(panel.x, panel.w, panel.y + 1, &game, label.dim());
        fb.put_centered(panel.x, panel.w, panel.y + 2, &round, label.bold());
        fb.put_centered(
            panel.x,
            panel.w,
            panel.y + 3,
            &time,
            CellStyle::new(Rgb::new(220, 80, 80), PANEL_BG).bold(),
        );

        for index in 0..snap.tile_count {
            let Some(colour) = snap.colour_at(index) else {
                continue;
            };
            let rgb = PANEL_BG.composite(colour);
            let (x, y) = grid.tile_origin(index);
            fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', CellStyle::new(rgb, rgb));

            if hud.cursor == Some(index) {
                self.draw_cursor(fb, x, y, rgb);
            }
        }

        if let Some(banner) = hud.banner {
            fb.put_centered(
                panel.x,
                panel.w,
                grid.y + grid.height() + 1,
                banner.text(),
                CellStyle::new(banner.colour(), PANEL_BG).bold(),
            );
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, x: u16, y: u16, tile: Rgb) {
        let style = CellStyle::new(contrast(tile), tile).bold();
        let (right, bottom) = (x + self.tile_w - 1, y + self.tile_h - 1);
        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
    }

    fn draw_finished(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, viewport: Viewport) {
        let panel = self.place(viewport, TEXT_PANEL_W, TEXT_PANEL_H);
        self.draw_panel(fb, panel);

        let plain = CellStyle::new(PANEL_FG, PANEL_BG);
        let title = match snap.outcome {
            Some(Outcome::Victory) => "CONGRATULATIONS",
            _ => "GAME OVER",
        };
        let summary = format!(
            "You got through {} rounds in {} seconds!",
            snap.rounds_cleared(),
            snap.elapsed_time
        );

        let mut y = panel.y + 2;
        fb.put_centered(panel.x, panel.w, y, title, plain.bold());
        y += 2;
        fb.put_centered(panel.x, panel.w, y, &summary, plain);
        y += 2;

        if !snap.failure_history.is_empty() {
            // "MISSED " followed by a 2-column swatch per failure.
            let swatches = snap.failure_history.len() as u16 * 3;
            let w = 7 + swatches;
            let mut x = panel.x + panel.w.saturating_sub(w) / 2;
            x = fb.put_str(x, y, "MISSED ", plain.dim());
            for colour in &snap.failure_history {
                let rgb = PANEL_BG.composite(*colour);
                fb.fill_rect(x, y, 2, 1, ' ', CellStyle::new(rgb, rgb));
                x = x.saturating_add(3);
            }
        }
        y += 2;

        fb.put_centered(panel.x, panel.w, y, "[r] Restart    [q] Quit", plain);
    }
}

/// Black or white, whichever reads better on `bg`.
fn contrast(bg: Rgb) -> Rgb {
    let luma = 299 * bg.r as u32 + 587 * bg.g as u32 + 114 * bg.b as u32;
    if luma > 128_000 {
        Rgb::new(0, 0, 0)
    } else {
        Rgb::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(n: u8) -> GridLayout {
        GridLayout {
            x: 10,
            y: 5,
            grid_size: n,
            tile_w: 6,
            tile_h: 2,
            gap_x: 2,
            gap_y: 1,
        }
    }

    #[test]
    fn grid_dimensions() {
        assert_eq!(layout(2).width(), 14);
        assert_eq!(layout(2).height(), 5);
        assert_eq!(layout(6).width(), 46);
        assert_eq!(layout(6).height(), 17);
    }

    #[test]
    fn hit_maps_cells_to_tiles() {
        let g = layout(3);
        assert_eq!(g.hit(10, 5), Some(0));
        assert_eq!(g.hit(15, 6), Some(0));
        // Gap column and gap row.
        assert_eq!(g.hit(16, 5), None);
        assert_eq!(g.hit(10, 7), None);
        assert_eq!(g.hit(18, 5), Some(1));
        assert_eq!(g.hit(26, 11), Some(8));
        // Outside the grid.
        assert_eq!(g.hit(9, 5), None);
        assert_eq!(g.hit(34, 5), None);
        assert_eq!(g.hit(10, 14), None);
    }

    #[test]
    fn tile_origin_matches_hit() {
        let g = layout(4);
        for i in 0..16 {
            let (x, y) = g.tile_origin(i);
            assert_eq!(g.hit(x, y), Some(i));
            assert_eq!(g.hit(x + 5, y + 1), Some(i));
        }
    }

    #[test]
    fn contrast_picks_readable_colour() {
        assert_eq!(contrast(Rgb::new(250, 250, 250)), Rgb::new(0, 0, 0));
        assert_eq!(contrast(Rgb::new(20, 20, 60)), Rgb::new(255, 255, 255));
    }
}
