//! Terminal block breaker runner (default binary).
//!
//! This is the loop driver. Each frame it polls at most one key without
//! blocking, hands the resulting action to the game, advances physics by the
//! measured wall-clock time, draws into a reused framebuffer, and sleeps out
//! the rest of the frame budget.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_breakout::cli::{self, CliConfig};
use tui_breakout::core::GameState;
use tui_breakout::input::{handle_key_event, is_emergency_quit};
use tui_breakout::logging;
use tui_breakout::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_breakout::types::LoopSignal;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = cli::parse_args(&args)?;
    if let Some(path) = logging::init(config.log_file.as_deref())? {
        info!("logging to {}", path.display());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &CliConfig) -> Result<()> {
    let (width, height) = crossterm::terminal::size()?;
    let game_config = config.game_config(width, height, clock_seed());
    let mut game = GameState::new(game_config);

    let view = GameView;
    let mut viewport = Viewport::new(width, height);
    let mut fb = FrameBuffer::new(width, height);
    let frame_budget = config.frame_budget();
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let elapsed = frame_start.duration_since(last_frame).as_secs_f64();
        last_frame = frame_start;

        let mut action = None;
        if event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if is_emergency_quit(key) {
                        info!("interrupted with score {}", game.score());
                        return Ok(());
                    }
                    action = handle_key_event(key);
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    game.request_resize(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        if game.handle_input(action, elapsed) == LoopSignal::Quit {
            info!("quit with score {}", game.score());
            return Ok(());
        }
        game.update(elapsed);

        view.render_into(&game, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
