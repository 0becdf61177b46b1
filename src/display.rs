/// Rendering layer — all terminal I/O lives here.
///
/// The renderer gets an immutable view of the session plus the frame's
/// effect events.  No game logic is performed; world coordinates are only
/// scaled onto whatever terminal size is current.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use jaguar_hunt::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use jaguar_hunt::entities::{Facing, GameEvent, GameStatus, Obstacle, PounceState, Prey, PreyKind};
use jaguar_hunt::{GameSession, Renderer};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkGreen;
const C_GRASS: Color = Color::Green;
const C_HUD_SCORE: Color = Color::White;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_HIGH: Color = Color::Yellow;
const C_JAGUAR: Color = Color::DarkYellow;
const C_JAGUAR_POUNCE: Color = Color::Yellow;
const C_RABBIT: Color = Color::Grey;
const C_DEER: Color = Color::DarkRed;
const C_MONKEY: Color = Color::Magenta;
const C_TREE: Color = Color::DarkGreen;
const C_GAUGE: Color = Color::DarkYellow;
const C_HINT: Color = Color::DarkGrey;

/// Frames an effect burst stays on screen.
const BURST_FRAMES: u32 = 20;

/// A short-lived burst of sparks drawn where an effect event happened.
#[derive(Clone, Debug)]
struct Burst {
    x: f32,
    y: f32,
    glyph: &'static str,
    color: Color,
    frames: u32,
}

impl Burst {
    fn from_event(event: &GameEvent) -> Self {
        let (x, y, glyph, color) = match *event {
            GameEvent::Pounce { x, y } => (x, y, "*", Color::Yellow),
            GameEvent::Catch { x, y, .. } => (x, y, "+10", Color::Yellow),
            GameEvent::Hit { x, y } => (x, y, "×", Color::Red),
        };
        Burst {
            x,
            y,
            glyph,
            color,
            frames: BURST_FRAMES,
        }
    }
}

/// Draws the session into a terminal through any writer.
pub struct TerminalRenderer<W: Write> {
    out: W,
    bursts: Vec<Burst>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        TerminalRenderer {
            out,
            bursts: Vec::new(),
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    /// Render one complete frame.
    fn draw(&mut self, session: &GameSession, events: &[GameEvent]) -> std::io::Result<()> {
        let (width, height) = terminal::size()?;
        let view = View { width, height };

        self.bursts.extend(events.iter().map(Burst::from_event));
        if session.status == GameStatus::Playing {
            for b in &mut self.bursts {
                b.frames = b.frames.saturating_sub(1);
            }
            self.bursts.retain(|b| b.frames > 0);
        }
        if session.status == GameStatus::Menu || session.status == GameStatus::GameOver {
            self.bursts.clear();
        }

        let out = &mut self.out;
        out.queue(terminal::Clear(terminal::ClearType::All))?;

        match session.status {
            GameStatus::Menu => draw_menu(out, &view, session)?,
            GameStatus::GameOver => draw_game_over(out, &view, session)?,
            GameStatus::Playing | GameStatus::Paused => {
                draw_border(out, &view)?;
                for obstacle in &session.obstacles {
                    draw_obstacle(out, &view, obstacle)?;
                }
                for prey in &session.prey {
                    draw_prey(out, &view, prey)?;
                }
                draw_jaguar(out, &view, session)?;
                for burst in &self.bursts {
                    draw_burst(out, &view, burst)?;
                }
                draw_hud(out, &view, session)?;
                if session.status == GameStatus::Paused {
                    draw_centered(out, &view, view.height / 2, "PAUSED", Color::White)?;
                }
            }
        }

        // Park cursor in a harmless spot and flush
        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
        out.flush()?;
        Ok(())
    }
}

// ── World → terminal mapping ──────────────────────────────────────────────────

/// The play area is rows 2 ..= height-3 and columns 1 ..= width-2.
struct View {
    width: u16,
    height: u16,
}

impl View {
    /// Map a world point to a terminal cell, `None` when it falls outside
    /// the bordered play area.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let cols = self.width.saturating_sub(2) as f32;
        let rows = self.height.saturating_sub(4) as f32;
        if x < 0.0 || y < 0.0 || x >= FIELD_WIDTH || y >= FIELD_HEIGHT {
            return None;
        }
        let col = 1 + (x / FIELD_WIDTH * cols) as u16;
        let row = 2 + (y / FIELD_HEIGHT * rows) as u16;
        Some((col, row))
    }
}

fn put<W: Write>(out: &mut W, view: &View, x: f32, y: f32, text: &str, color: Color) -> std::io::Result<()> {
    if let Some((col, row)) = view.cell(x, y) {
        // Clip so sprites never spill over the right wall
        let room = view.width.saturating_sub(1).saturating_sub(col) as usize;
        let clipped: String = text.chars().take(room).collect();
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(clipped))?;
    }
    Ok(())
}

fn draw_centered<W: Write>(out: &mut W, view: &View, row: u16, text: &str, color: Color) -> std::io::Result<()> {
    let col = (view.width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &View) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — the grass line doubles as the bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(style::SetForegroundColor(C_GRASS))?;
    out.queue(Print(format!("└{}┘", "ʷ".repeat(w.saturating_sub(2)))))?;

    out.queue(style::SetForegroundColor(C_BORDER))?;
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) and pounce gauge (last row) ───────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &View, session: &GameSession) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", session.score)))?;

    let hearts = "♥".repeat(session.lives.max(0) as usize);
    out.queue(cursor::MoveTo(16, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(format!("Lives:{}", hearts)))?;

    let high = format!("High:{:>6}", session.high_score);
    let hx = view.width.saturating_sub(high.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(hx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HIGH))?;
    out.queue(Print(&high))?;

    let Some(player) = &session.player else {
        return Ok(());
    };
    let bottom = view.height.saturating_sub(1);
    if player.pounce_state() == PounceState::Ready {
        draw_centered(out, view, bottom, "POUNCE READY!", C_HUD_HIGH)?;
    } else {
        const GAUGE: usize = 20;
        let filled = (player.cooldown_fraction() * GAUGE as f32) as usize;
        let gauge = format!("[{}{}]", "█".repeat(filled), " ".repeat(GAUGE - filled.min(GAUGE)));
        draw_centered(out, view, bottom, &gauge, C_GAUGE)?;
    }
    out.queue(cursor::MoveTo(1, bottom))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE pounce  ESC pause"))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_jaguar<W: Write>(out: &mut W, view: &View, session: &GameSession) -> std::io::Result<()> {
    let Some(p) = &session.player else {
        return Ok(());
    };
    let color = if p.is_pouncing() { C_JAGUAR_POUNCE } else { C_JAGUAR };
    // Tail wags every few frames
    let wag = (session.frame / 8) % 2 == 0;
    let sprite = match (p.facing, wag) {
        (Facing::Right, true) => "~=:=^.^",
        (Facing::Right, false) => "-=:=^.^",
        (Facing::Left, true) => "^.^=:=~",
        (Facing::Left, false) => "^.^=:=-",
    };
    put(out, view, p.x, p.y, sprite, color)?;
    put(out, view, p.x, p.y + 30.0, " ll  ll", color)
}

fn draw_prey<W: Write>(out: &mut W, view: &View, prey: &Prey) -> std::io::Result<()> {
    let (sprite, color) = match prey.kind {
        PreyKind::Rabbit => ("(\\_/)", C_RABBIT),
        PreyKind::Deer => ("}Y{", C_DEER),
        PreyKind::Monkey => ("@(m)", C_MONKEY),
    };
    put(out, view, prey.x, prey.y, sprite, color)
}

fn draw_obstacle<W: Write>(out: &mut W, view: &View, obstacle: &Obstacle) -> std::io::Result<()> {
    put(out, view, obstacle.x, obstacle.y, "/^^\\", C_TREE)?;
    put(out, view, obstacle.x, obstacle.y + 30.0, "/^^^\\", C_TREE)?;
    put(out, view, obstacle.x + 15.0, obstacle.y + 60.0, "||", Color::DarkYellow)
}

fn draw_burst<W: Write>(out: &mut W, view: &View, burst: &Burst) -> std::io::Result<()> {
    // Sparks drift upward as the burst ages
    let rise = (BURST_FRAMES - burst.frames) as f32 * 2.0;
    put(out, view, burst.x, burst.y - rise, burst.glyph, burst.color)
}

// ── Menu & game-over screens ──────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, view: &View, session: &GameSession) -> std::io::Result<()> {
    let cy = view.height / 2;
    draw_centered(out, view, cy.saturating_sub(6), "★  JAGUAR  HUNT  ★", Color::Yellow)?;
    if session.high_score > 0 {
        let hs = format!("Best Score: {}", session.high_score);
        draw_centered(out, view, cy.saturating_sub(5), &hs, Color::DarkYellow)?;
    }

    let lines = [
        "Press SPACE to Start",
        "",
        "Arrow Keys / WASD - Move",
        "SPACE - Pounce",
        "ESC / P - Pause",
        "Q - Quit",
        "",
        "Hunt prey, avoid the trees!",
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_centered(out, view, cy.saturating_sub(3) + i as u16, line, Color::White)?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, view: &View, session: &GameSession) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", session.score);
    let best_line = if session.score >= session.high_score && session.score > 0 {
        format!("★ NEW BEST: {:>6} ★", session.high_score)
    } else {
        format!("High Score:  {:>6}", session.high_score)
    };

    let lines: [(&str, Color); 6] = [
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (&score_line, Color::White),
        (&best_line, Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        draw_centered(out, view, start_row + i as u16, msg, *color)?;
    }
    Ok(())
}
