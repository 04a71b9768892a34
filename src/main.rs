//! Cube Tetris runner (default binary).
//!
//! Interactive mode draws the well in the terminal with crossterm and ticks
//! gravity at the configured interval. Setting `CUBE_TETRIS_HEADLESS_TICKS`
//! instead runs that many unattended ticks and prints the final snapshot as
//! JSON.

use std::env;
use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cube_tetris::core::{Game, GameConfig, TickOutcome};
use cube_tetris::input::{is_restart, map_key, should_quit};
use cube_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const ENV_LOG_PATH: &str = "CUBE_TETRIS_LOG_PATH";
const ENV_HEADLESS_TICKS: &str = "CUBE_TETRIS_HEADLESS_TICKS";

fn main() -> Result<()> {
    let headless_ticks = match env::var(ENV_HEADLESS_TICKS) {
        Ok(v) => Some(
            v.trim()
                .parse::<u32>()
                .with_context(|| format!("{ENV_HEADLESS_TICKS}: cannot parse {v:?}"))?,
        ),
        Err(_) => None,
    };

    init_logging(headless_ticks.is_some())?;

    let config = GameConfig::from_env().context("invalid game configuration")?;
    info!(?config, "starting");
    let mut game = Game::new(config);

    if let Some(ticks) = headless_ticks {
        return run_headless(&mut game, ticks);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = game.score(), "exiting");
    result
}

/// Install the tracing subscriber.
///
/// Logs go to `CUBE_TETRIS_LOG_PATH` when set. Otherwise headless runs log to
/// stderr and interactive runs do not log, since the terminal is in raw mode.
fn init_logging(headless: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match env::var(ENV_LOG_PATH) {
        Ok(path) => {
            let file = File::create(&path).with_context(|| format!("cannot create log file {path}"))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        Err(_) if headless => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        Err(_) => {}
    }
    Ok(())
}

fn run_headless(game: &mut Game, ticks: u32) -> Result<()> {
    let ran = game.run_ticks(ticks);
    if game.is_game_over() {
        warn!(ran, "game ended before the tick budget");
    }

    let report = serde_json::json!({
        "ticks": ran,
        "snapshot": game.snapshot(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(game.config().tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) {
                        game.restart();
                    } else if let Some(command) = map_key(key) {
                        game.apply(command);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let TickOutcome::Locked { rows_cleared } = game.tick() {
                if rows_cleared > 0 {
                    info!(rows_cleared, score = game.score(), "rows cleared");
                }
            }
        }
    }
}
