//! Dino Dash terminal front end
//!
//! Hosts the simulation core behind a crossterm scheduler: one tick per
//! frame at ~30 FPS, Space to jump, and a full driver rebuild for restarts.

mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};

use dino_dash::assets::{self, NoAssets};
use dino_dash::audio::{AudioCue, AudioSink};
use dino_dash::consts::ASSET_POLL_MS;
use dino_dash::{Driver, StepOutcome, Tuning};

use display::TermRenderer;

const FRAME: Duration = Duration::from_millis(33); // ~30 FPS

/// Audio sink for terminals: rings the bell on each cue.
///
/// Write failures are logged and swallowed; cues are fire-and-forget.
struct TermBell;

impl AudioSink for TermBell {
    fn play(&mut self, cue: AudioCue) {
        if let Err(e) = std::io::stderr().write_all(b"\x07") {
            log::warn!("Could not play cue {cue:?}: {e}");
        }
    }
}

enum RunResult {
    Quit,
    Restart,
}

/// Drive one run to completion, then wait at the game-over screen.
fn run_game<W: Write>(
    out: W,
    rx: &mpsc::Receiver<Event>,
    tuning: Tuning,
    clock_start: Instant,
) -> std::io::Result<RunResult> {
    let seed = clock_start.elapsed().as_nanos() as u64;
    let mut driver = Driver::new(seed, tuning, TermRenderer::new(out), TermBell);

    // The terminal host has no image assets; the gate is trivially ready
    assets::block_until_ready(&NoAssets, Duration::from_millis(ASSET_POLL_MS));
    driver.start();

    let final_score;
    loop {
        let frame_start = Instant::now();

        // Drain pending input (non-blocking)
        while let Ok(Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        })) = rx.try_recv()
        {
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Char(' ') | KeyCode::Up => driver.jump(),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(RunResult::Quit);
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(RunResult::Quit);
                }
                _ => {}
            }
        }

        let timestamp_ms = clock_start.elapsed().as_secs_f64() * 1000.0;
        match driver.step(timestamp_ms) {
            StepOutcome::Continue => {}
            StepOutcome::Finished { final_score: score } => {
                final_score = score;
                break;
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }

    log::info!("Final score: {final_score}");

    // Game-over screen: the core offers no in-place reset, so a restart
    // builds a fresh driver back in the caller
    loop {
        if let Ok(Event::Key(KeyEvent { code, kind, .. })) = rx.recv() {
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Char('r') | KeyCode::Char('R') => return Ok(RunResult::Restart),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(RunResult::Quit)
                }
                _ => {}
            }
        } else {
            return Ok(RunResult::Quit);
        }
    }
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(std::path::Path::new(&path)),
        None => Tuning::default(),
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicated thread for blocking event reads; the game loop never blocks
    // on input I/O
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    let clock_start = Instant::now();
    let result = loop {
        match run_game(&mut out, &rx, tuning.clone(), clock_start) {
            Ok(RunResult::Restart) => continue,
            Ok(RunResult::Quit) => break Ok(()),
            Err(e) => break Err(e),
        }
    };

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
