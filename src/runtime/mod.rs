use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logging;
use crate::player::Ticker;

mod event_loop;
mod settings;
mod startup;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_warning) = settings::load_settings();
    logging::init(&settings.logging);
    if let Some(msg) = config_warning {
        log::warn!("encore: {msg}");
    }

    let cli_path = env::args().nth(1).map(PathBuf::from);
    let (playlist, source) = startup::resolve_playlist(cli_path, &settings);
    log::info!("encore: starting with {} tracks from {}", playlist.len(), source);

    let mut app = startup::build_app(playlist, source, &settings);
    let mut ticker = Ticker::spawn(Duration::from_millis(settings.playback.tick_ms));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &settings, &mut app, &ticker, &mut state)
    })();

    ticker.stop();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    log::info!("encore: bye");
    run_result
}
