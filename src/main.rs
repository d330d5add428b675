//! Terminal runner (default binary).
//!
//! crossterm for input, a diffing framebuffer renderer for output. Log lines
//! are printed only after the terminal has been restored.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use blockdrop::input::{action_for_key, should_quit};
use blockdrop::scores::JsonScoreStore;
use blockdrop::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use blockdrop::types::TICK_MS;
use blockdrop::{GameConfig, Session};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    println!(
        "[Game] {}x{} board, gravity {}ms, seed {}, {} generator",
        config.columns,
        config.rows,
        config.gravity_ms,
        config.seed,
        if config.bag { "bag" } else { "random" }
    );
    println!("[Scores] table at {}", config.scores_path.display());

    let store = JsonScoreStore::new(config.scores_path.clone());
    let mut session = Session::new(config, store).context("invalid board dimensions")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    session.finish();
    for line in session.drain_log() {
        println!("{line}");
    }
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session<JsonScoreStore>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = session.snapshot();
        let hud = Hud {
            player: session.player(),
            ranking: session.ranking(),
        };
        view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for_key(key) {
                        session.apply(action).context("restart failed")?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
