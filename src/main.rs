//! Terminal memory pairs runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `tui_pairs::term` for output.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind,
};
use tracing::info;

use tui_pairs::cli::Cli;
use tui_pairs::engine::{App, Screen};
use tui_pairs::input::{handle_key_event, is_ctrl_c, should_quit, NameEntry, NameEvent};
use tui_pairs::logging;
use tui_pairs::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_pairs::types::TICK_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;
    info!(seed = ?cli.seed, reveal_ms = cli.reveal_ms, "starting");

    let mut app = App::new(cli.app_config());
    if let Some(name) = cli.player_name() {
        app.start_game(name);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = GameView::default();
    let mut name_entry = NameEntry::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&app.view(), name_entry.text(), viewport, &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(app, &mut name_entry, key) == Flow::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        if let Some(index) = view.card_at(viewport, mouse.column, mouse.row) {
                            app.card_clicked(index);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick: only display timers advance here; the clock is read at render time.
        let since = last_tick.elapsed();
        if since >= tick_duration {
            last_tick = Instant::now();
            app.tick(since.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}

fn handle_key(app: &mut App, name_entry: &mut NameEntry, key: KeyEvent) -> Flow {
    if is_ctrl_c(key) {
        return Flow::Quit;
    }

    if app.screen() == Screen::Start {
        if key.code == KeyCode::Esc {
            return Flow::Quit;
        }
        if let NameEvent::Submitted(name) = name_entry.handle_key(key) {
            name_entry.clear();
            app.start_game(name);
        }
        return Flow::Continue;
    }

    if should_quit(key) {
        return Flow::Quit;
    }
    if let Some(action) = handle_key_event(key) {
        app.apply_action(action);
    }
    Flow::Continue
}
