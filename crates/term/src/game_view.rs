//! GameView: maps the application state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested, and it is also the
//! authority on where cards are drawn, so mouse clicks are hit-tested here.

use std::time::Duration;

use crate::engine::{AppView, Screen};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CardIndex, Symbol, GRID_COLS, GRID_ROWS};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// How one card is shown this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Down,
    /// First pick of the current turn
    Selected(Symbol),
    Matched(Symbol),
    /// Mismatched pair still on display
    Mismatch(Symbol),
}

const BG: Rgb = Rgb::new(0, 0, 0);
const TABLE_BG: Rgb = Rgb::new(24, 30, 40);
const GAP: u16 = 1;
const PANEL_W: u16 = 18;
const TITLE: &str = "MEMORY PAIRS";

/// Screen positions of the table for a given viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// A lightweight terminal renderer for the pairs table.
pub struct GameView {
    /// Card width in terminal columns, border included.
    card_w: u16,
    /// Card height in terminal rows, border included.
    card_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            card_w: 7,
            card_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w: card_w.max(3),
            card_h: card_h.max(3),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn grid_w(&self) -> u16 {
        GRID_COLS as u16 * self.card_w + (GRID_COLS as u16 - 1) * GAP
    }

    fn grid_h(&self) -> u16 {
        GRID_ROWS as u16 * self.card_h + (GRID_ROWS as u16 - 1) * GAP
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        // One column of padding either side of the grid, one title row above.
        let frame_w = self.grid_w() + 4;
        let frame_h = self.grid_h() + 2;
        let total_w = frame_w + 2 + PANEL_W;
        let total_h = frame_h + 1;

        let frame_x = if viewport.width >= total_w {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(frame_w) / 2
        };
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            frame_x,
            frame_y: top + 1,
            frame_w,
            frame_h,
        }
    }

    fn card_origin(&self, layout: &Layout, index: CardIndex) -> (u16, u16) {
        let col = (index % GRID_COLS) as u16;
        let row = (index / GRID_COLS) as u16;
        (
            layout.frame_x + 2 + col * (self.card_w + GAP),
            layout.frame_y + 1 + row * (self.card_h + GAP),
        )
    }

    /// Card drawn at terminal cell `(x, y)`, if any
    pub fn card_at(&self, viewport: Viewport, x: u16, y: u16) -> Option<CardIndex> {
        let layout = self.layout(viewport);
        (0..GRID_COLS * GRID_ROWS).find(|&i| {
            let (cx, cy) = self.card_origin(&layout, i);
            (cx..cx + self.card_w).contains(&x) && (cy..cy + self.card_h).contains(&y)
        })
    }

    /// Render the current state into an existing framebuffer.
    pub fn render_into(
        &self,
        view: &AppView,
        name_input: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), BG).cell(' '));

        let layout = self.layout(viewport);
        let title = CellStyle::new(Rgb::new(250, 210, 90), BG).bold();
        fb.put_str_centered(
            layout.frame_x,
            layout.frame_w,
            layout.frame_y.saturating_sub(1),
            TITLE,
            title,
        );

        let table = CellStyle::new(Rgb::new(120, 130, 150), TABLE_BG);
        fb.fill_rect(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            ' ',
            table,
        );
        fb.draw_box(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            table,
        );

        match view.screen {
            Screen::Start => {
                self.draw_cards(fb, &layout, view, false);
                self.draw_start_dialog(fb, &layout, name_input);
            }
            Screen::Playing => {
                self.draw_cards(fb, &layout, view, true);
                self.draw_side_panel(fb, &layout, view, viewport);
            }
            Screen::Won => {
                self.draw_cards(fb, &layout, view, false);
                self.draw_side_panel(fb, &layout, view, viewport);
                self.draw_win_dialog(fb, &layout, view);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, view: &AppView, name_input: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(view, name_input, viewport, &mut fb);
        fb
    }

    fn draw_cards(&self, fb: &mut FrameBuffer, layout: &Layout, view: &AppView, show_cursor: bool) {
        for index in 0..GRID_COLS * GRID_ROWS {
            let face = card_face(view, index);
            let focused = show_cursor && view.cursor == index;
            let (x, y) = self.card_origin(layout, index);
            self.draw_card(fb, x, y, face, focused);
        }
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, face: CardFace, focused: bool) {
        let (border, fill, glyph) = match face {
            CardFace::Down => (Rgb::new(110, 110, 130), Rgb::new(60, 60, 80), None),
            CardFace::Selected(s) => (Rgb::new(90, 210, 110), Rgb::new(20, 60, 30), Some(s)),
            CardFace::Matched(s) => (Rgb::new(90, 150, 240), Rgb::new(20, 35, 70), Some(s)),
            CardFace::Mismatch(s) => (Rgb::new(230, 80, 80), Rgb::new(70, 20, 20), Some(s)),
        };

        let mut frame = CellStyle::new(border, TABLE_BG);
        if focused {
            frame = CellStyle::new(Rgb::new(255, 220, 80), TABLE_BG).bold();
        }
        let inner_w = self.card_w - 2;
        let inner_h = self.card_h - 2;

        match glyph {
            None => {
                let back = CellStyle::new(fill, TABLE_BG).dim();
                fb.fill_rect(x + 1, y + 1, inner_w, inner_h, '░', back);
            }
            Some(symbol) => {
                let face_style = CellStyle::new(symbol_color(symbol), fill).bold();
                fb.fill_rect(x + 1, y + 1, inner_w, inner_h, ' ', face_style);
                let mid_y = y + 1 + inner_h / 2;
                let mut buf = [0u8; 4];
                fb.put_str_centered(
                    x + 1,
                    inner_w,
                    mid_y,
                    symbol_glyph(symbol).encode_utf8(&mut buf),
                    face_style,
                );
            }
        }
        fb.draw_box(x, y, self.card_w, self.card_h, frame);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        view: &AppView,
        viewport: Viewport,
    ) {
        let panel_x = layout.frame_x + layout.frame_w + 2;
        if panel_x.saturating_add(PANEL_W) > viewport.width {
            return;
        }
        let Some(game) = view.game.as_ref() else {
            return;
        };

        let label = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let stars = CellStyle::new(Rgb::new(250, 210, 90), BG);
        let help = CellStyle::new(Rgb::new(150, 150, 150), BG).dim();

        let mut y = layout.frame_y;
        fb.put_str(panel_x, y, "PLAYER", label);
        fb.put_str(panel_x, y + 1, &game.player_name, value);
        y += 3;

        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_u32(panel_x, y + 1, game.moves, value);
        y += 3;

        fb.put_str(panel_x, y, "STARS", label);
        fb.put_str(panel_x, y + 1, &star_glyphs(game.stars), stars);
        y += 3;

        fb.put_str(panel_x, y, "TIME", label);
        fb.put_str(panel_x, y + 1, &format_clock(game.elapsed), value);
        y += 3;

        for line in ["arrows/hjkl move", "space  flip", "click  flip", "r      reset", "q      quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    fn dialog(&self, fb: &mut FrameBuffer, layout: &Layout, lines: u16) -> (u16, u16, u16) {
        let w = layout.frame_w.saturating_sub(6).max(10);
        let h = lines + 2;
        let x = layout.frame_x + (layout.frame_w.saturating_sub(w)) / 2;
        let y = layout.frame_y + (layout.frame_h.saturating_sub(h)) / 2;
        let style = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(15, 15, 20));
        fb.fill_rect(x, y, w, h, ' ', style);
        fb.draw_box(x, y, w, h, style.bold());
        (x + 1, y + 1, w - 2)
    }

    fn draw_start_dialog(&self, fb: &mut FrameBuffer, layout: &Layout, name_input: &str) {
        let (x, y, w) = self.dialog(fb, layout, 5);
        let text = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(15, 15, 20));
        let input = CellStyle::new(Rgb::new(250, 210, 90), Rgb::new(15, 15, 20)).bold();

        fb.put_str_centered(x, w, y, "Enter your name", text.bold());
        let end = fb.put_str(x + 1, y + 2, "> ", text);
        let end = fb.put_str(end, y + 2, name_input, input);
        fb.put_char(end, y + 2, '_', input);
        fb.put_str_centered(x, w, y + 4, "Enter to start", text.dim());
    }

    fn draw_win_dialog(&self, fb: &mut FrameBuffer, layout: &Layout, view: &AppView) {
        let Some(game) = view.game.as_ref() else {
            return;
        };
        let (x, y, w) = self.dialog(fb, layout, 7);
        let text = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(15, 15, 20));
        let gold = CellStyle::new(Rgb::new(250, 210, 90), Rgb::new(15, 15, 20)).bold();

        fb.put_str_centered(x, w, y, "YOU WIN!", gold);
        fb.put_str_centered(x, w, y + 1, &game.player_name, text.bold());

        let moves = format!("{} moves", game.moves);
        fb.put_str_centered(x, w, y + 3, &moves, text);
        fb.put_str_centered(x, w, y + 4, &star_glyphs(game.stars), gold);
        fb.put_str_centered(x, w, y + 5, &format_clock(game.elapsed), text);
        fb.put_str_centered(x, w, y + 6, "n: play again", text.dim());
    }
}

/// Decide how card `index` is shown
pub fn card_face(view: &AppView, index: CardIndex) -> CardFace {
    let Some(game) = view.game.as_ref() else {
        return CardFace::Down;
    };
    let Some(card) = game.cards.get(index) else {
        return CardFace::Down;
    };
    if view.reveal.is_some_and(|pair| pair.contains(&index)) {
        return CardFace::Mismatch(card.symbol);
    }
    if game.first_selection == Some(index) {
        return CardFace::Selected(card.symbol);
    }
    if game.matched(index) {
        return CardFace::Matched(card.symbol);
    }
    CardFace::Down
}

/// `HH:MM:SS`, hours wrapping at 24
pub fn format_clock(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Two rating points per whole star, a trailing half star for odd ratings
pub fn star_glyphs(stars: u8) -> String {
    if stars == 0 {
        return "-".to_string();
    }
    let mut out = "★".repeat((stars / 2) as usize);
    if stars % 2 == 1 {
        out.push('½');
    }
    out
}

pub fn symbol_glyph(symbol: Symbol) -> char {
    match symbol {
        Symbol::Heart => '♥',
        Symbol::Bolt => 'ϟ',
        Symbol::Snowflake => '❄',
        Symbol::Leaf => '♣',
        Symbol::Moon => '☾',
        Symbol::Sun => '☼',
        Symbol::Umbrella => '☂',
        Symbol::Anchor => '♆',
    }
}

fn symbol_color(symbol: Symbol) -> Rgb {
    match symbol {
        Symbol::Heart => Rgb::new(240, 90, 110),
        Symbol::Bolt => Rgb::new(250, 220, 70),
        Symbol::Snowflake => Rgb::new(170, 220, 250),
        Symbol::Leaf => Rgb::new(110, 210, 110),
        Symbol::Moon => Rgb::new(220, 220, 180),
        Symbol::Sun => Rgb::new(255, 170, 50),
        Symbol::Umbrella => Rgb::new(200, 130, 230),
        Symbol::Anchor => Rgb::new(120, 170, 230),
    }
}
