//! Terminal colour clicker (default binary).
//!
//! Reads configuration from flags/env, logs to a file, and runs a crossterm
//! event loop around the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use colour_clicker::app::App;
use colour_clicker::config::{init_logging, Config};
use colour_clicker::core::{GameSession, RandomSource};
use colour_clicker::input::{handle_key_event, handle_mouse_event, should_quit};
use colour_clicker::term::{FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};

/// Static screens are refreshed at least this often.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config.log_file)?;
    info!(?config, "starting");

    let curve = config.curve()?;
    let session = GameSession::with_curve(config.random_source(), curve);
    let mut app = App::new(session, config.tick_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App<Box<dyn RandomSource>>) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let started = Instant::now();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, app.fingerprint(viewport), app.is_static()) {
            app.render_into(viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = Duration::from_millis(u64::from(app.poll_timeout_ms()));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.handle_input(action, viewport);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = handle_mouse_event(mouse) {
                        app.handle_input(action, viewport);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick. Whole milliseconds are consumed so fractions carry over.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
        last_tick += Duration::from_millis(u64::from(elapsed_ms));
        app.advance(elapsed_ms);
    }
}
