/// Rendering layer. All terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// world coordinates into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use doodle_jump::assets::SpriteSet;
use doodle_jump::config::GameConfig;
use doodle_jump::entities::{Entity, GameState, GameStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_BACKGROUND: Color = Color::DarkGrey;
const C_HUD_SCORE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_PLATFORM: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Cyan;

const CONTROLS: &str = "← → / A D : Move   Q : Quit";

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Terminal area the world is scaled into: the border sits on row 1 and
/// row `rows - 2`, the HUD on row 0 and the hint on the last row.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn current() -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Viewport { cols, rows })
    }

    fn inner_cols(&self) -> f32 {
        f32::from(self.cols.saturating_sub(2).max(1))
    }

    fn inner_rows(&self) -> f32 {
        f32::from(self.rows.saturating_sub(4).max(1))
    }

    /// Column for world x, clamped inside the side walls.
    fn col(&self, x: f32, config: &GameConfig) -> u16 {
        let c = (x / config.width * self.inner_cols()).floor().max(0.0) as u16;
        1 + c.min(self.cols.saturating_sub(3))
    }

    /// Row for world y, or `None` when it falls outside the play area.
    fn row(&self, y: f32, config: &GameConfig) -> Option<u16> {
        let r = (y / config.height * self.inner_rows()).floor();
        if r < 0.0 || r >= self.inner_rows() {
            return None;
        }
        Some(2 + r as u16)
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    view: Viewport,
    state: &GameState,
    config: &GameConfig,
    sprites: &SpriteSet,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_background(out, view, sprites)?;
    draw_border(out, view)?;
    draw_hud(out, view, state)?;

    for platform in state.platforms.iter() {
        draw_platform(out, view, &platform.body, config, sprites)?;
    }
    draw_player(out, view, &state.player.body, config, sprites)?;
    draw_hint(out, view, CONTROLS)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, view, state, sprites)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

pub fn render_menu<W: Write>(out: &mut W, view: Viewport, sprites: &SpriteSet) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cx = view.cols / 2;
    let cy = view.rows / 2;

    let lines: &[(String, Color)] = &[
        ("▲  DOODLE  JUMP  ▲".to_string(), C_TITLE),
        (String::new(), C_HINT),
        (format!("{}  bounce on the platforms", sprites.player), C_PLAYER),
        (format!("{}  and don't fall off", sprites.platform.to_string().repeat(3)), C_PLATFORM),
        (String::new(), C_HINT),
        ("SPACE / ENTER : Start   Q : Quit".to_string(), Color::White),
        ("← → / A D : Move".to_string(), C_HINT),
    ];

    let start_row = cy.saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Frame ─────────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(out: &mut W, view: Viewport, sprites: &SpriteSet) -> std::io::Result<()> {
    if sprites.background == ' ' {
        return Ok(());
    }
    let fill: String = sprites
        .background
        .to_string()
        .repeat(view.cols.saturating_sub(2) as usize);
    out.queue(style::SetForegroundColor(C_BACKGROUND))?;
    for row in 2..view.rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(1, row))?;
        out.queue(Print(&fill))?;
    }
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, view: Viewport, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", state.player.score)))?;

    let speed = format!("vy {:+6.1}", state.player.vel_y);
    let rx = view.cols.saturating_sub(speed.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(&speed))?;
    Ok(())
}

fn draw_hint<W: Write>(out: &mut W, view: Viewport, hint: &str) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_platform<W: Write>(
    out: &mut W,
    view: Viewport,
    body: &Entity,
    config: &GameConfig,
    sprites: &SpriteSet,
) -> std::io::Result<()> {
    let Some(row) = view.row(body.top(), config) else {
        return Ok(());
    };
    let left = view.col(body.left(), config);
    let right = view.col(body.right(), config).max(left + 1);
    out.queue(cursor::MoveTo(left, row))?;
    out.queue(style::SetForegroundColor(C_PLATFORM))?;
    out.queue(Print(sprites.platform.to_string().repeat((right - left) as usize)))?;
    Ok(())
}

fn draw_player<W: Write>(
    out: &mut W,
    view: Viewport,
    body: &Entity,
    config: &GameConfig,
    sprites: &SpriteSet,
) -> std::io::Result<()> {
    let Some(row) = view.row(body.y + body.height / 2.0, config) else {
        return Ok(());
    };
    let centre = view.col(body.x + body.width / 2.0, config);
    let half = sprites.player.chars().count() as u16 / 2;
    out.queue(cursor::MoveTo(centre.saturating_sub(half).max(1), row))?;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(Print(&sprites.player))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    view: Viewport,
    state: &GameState,
    sprites: &SpriteSet,
) -> std::io::Result<()> {
    let mut lines: Vec<(String, Color)> = sprites
        .game_over
        .iter()
        .map(|l| (l.clone(), Color::Red))
        .collect();
    lines.push((format!("Final Score: {}", state.player.score), Color::Yellow));
    lines.push(("R - Play Again  Q - Quit".to_string(), Color::White));

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }

    Ok(())
}
