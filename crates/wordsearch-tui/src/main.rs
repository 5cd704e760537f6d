mod app;
mod celebration;
mod cli;
mod logging;
mod render;
mod rng;
mod screen;
mod theme;

use app::App;
use clap::Parser;
use cli::Args;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rng::RandSource;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use wordsearch_core::PuzzleSession;

fn main() -> io::Result<()> {
    let args = Args::parse();
    let config = args
        .puzzle_config()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    if let Some(path) = logging::init() {
        log::info!("logging to {}", path.display());
    }

    let session = PuzzleSession::from_config_with_rng(&config, RandSource::new(args.seed))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    if !session.unplaced().is_empty() {
        log::warn!("words left out of the grid: {}", session.unplaced().join(", "));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let result = run_app(&mut stdout, App::new(session));

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(e) = result {
        log::error!("terminal error: {}", e);
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, mut app: App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        render::render(stdout, &mut app)?;
        stdout.flush()?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                        break;
                    }

                    match app.handle_key(key) {
                        app::AppAction::Continue => {}
                        app::AppAction::Quit => break,
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
