//! Terminal Gridfall runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{GameSnapshot, GameState};
use gridfall::input::{handle_key_event, should_quit};
use gridfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use gridfall::types::{GRAVITY_INTERVAL_MS, GRID_COLS, GRID_ROWS, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "gridfall", about = "A falling-block puzzle for the terminal")]
struct Args {
    /// RNG seed for the piece sequence.
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Playing field height in cells.
    #[arg(long, default_value_t = GRID_ROWS)]
    rows: usize,

    /// Playing field width in cells.
    #[arg(long, default_value_t = GRID_COLS)]
    cols: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, args: &Args) -> Result<()> {
    let mut game = GameState::new(args.rows, args.cols, args.seed);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let gravity_interval = Duration::from_millis(GRAVITY_INTERVAL_MS);
    let mut last_gravity = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next gravity step, capped at one
        // frame so held keys keep the screen current.
        let timeout = gravity_interval
            .checked_sub(last_gravity.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0))
            .min(Duration::from_millis(TICK_MS));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply(command);
                    }
                }
            }
        }

        // Gravity.
        if last_gravity.elapsed() >= gravity_interval {
            last_gravity = Instant::now();
            game.gravity_tick();
        }
    }
}
