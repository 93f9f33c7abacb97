//! Terminal rendering layer - all terminal I/O for the game lives here.
//!
//! Translates each `FrameSnapshot` into crossterm commands, scaling the
//! 800x200 world down to whatever cell grid the terminal offers. No game
//! logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use dino_dash::consts::{VIEW_HEIGHT, VIEW_WIDTH};
use dino_dash::snapshot::{FrameSnapshot, RenderSink};

const C_PLAYER: Color = Color::White;
const C_CLOUD: Color = Color::DarkGrey;
const C_GROUND: Color = Color::Grey;
const C_HUD: Color = Color::Yellow;
const C_BANNER: Color = Color::Red;

/// Render sink drawing to a terminal writer
pub struct TermRenderer<W: Write> {
    out: W,
}

impl<W: Write> TermRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn try_draw(&mut self, frame: &FrameSnapshot<'_>) -> std::io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let out = &mut self.out;

        out.queue(terminal::Clear(terminal::ClearType::All))?;

        for cloud in frame.clouds {
            out.queue(style::SetForegroundColor(C_CLOUD))?;
            fill_rect(
                out,
                cols,
                rows,
                cloud.pos.x,
                cloud.pos.y,
                cloud.size.x,
                cloud.size.y,
                '~',
            )?;
        }

        out.queue(style::SetForegroundColor(C_GROUND))?;
        let g = frame.ground;
        fill_rect(out, cols, rows, g.pos.x, g.pos.y, g.size.x, g.size.y, '▒')?;

        for obstacle in frame.obstacles {
            let [_, r, g, b] = obstacle.rgb.to_be_bytes();
            out.queue(style::SetForegroundColor(Color::Rgb { r, g, b }))?;
            fill_rect(
                out,
                cols,
                rows,
                obstacle.pos.x,
                obstacle.pos.y,
                obstacle.size.x,
                obstacle.size.y,
                '█',
            )?;
        }

        let p = frame.player;
        out.queue(style::SetForegroundColor(C_PLAYER))?;
        fill_rect(out, cols, rows, p.pos.x, p.pos.y, p.size.x, p.size.y, '█')?;

        out.queue(cursor::MoveTo(1, 0))?;
        out.queue(style::SetForegroundColor(C_HUD))?;
        out.queue(Print(format!("Score: {}", frame.score)))?;

        if frame.game_over {
            let msg = format!("GAME OVER - score {} - [R]estart  [Q]uit", frame.score);
            let x = (cols / 2).saturating_sub(msg.chars().count() as u16 / 2);
            out.queue(cursor::MoveTo(x, rows / 2))?;
            out.queue(style::SetForegroundColor(C_BANNER))?;
            out.queue(Print(msg))?;
        }

        out.queue(style::ResetColor)?;
        out.flush()
    }
}

impl<W: Write> RenderSink for TermRenderer<W> {
    fn draw(&mut self, frame: &FrameSnapshot<'_>) {
        // Terminal write failures never reach the simulation
        if let Err(e) = self.try_draw(frame) {
            log::warn!("Render error: {e}");
        }
    }
}

/// Fill a world-space rectangle with `ch`, scaled to the cell grid.
#[allow(clippy::too_many_arguments)]
fn fill_rect<W: Write>(
    out: &mut W,
    cols: u16,
    rows: u16,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    ch: char,
) -> std::io::Result<()> {
    let sx = f32::from(cols) / VIEW_WIDTH;
    let sy = f32::from(rows) / VIEW_HEIGHT;

    let left = (x * sx).floor().max(0.0) as u16;
    let right = (((x + w) * sx).ceil() as i32).clamp(0, i32::from(cols)) as u16;
    let top = (y * sy).floor().max(0.0) as u16;
    let bottom = (((y + h) * sy).ceil() as i32).clamp(0, i32::from(rows)) as u16;

    let row_str: String = (left..right).map(|_| ch).collect();
    for row in top..bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print(&row_str))?;
    }
    Ok(())
}
