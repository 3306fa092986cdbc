use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::player::Ticker;
use crate::ui::{self, Hit, UiLayout};

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Clickable regions from the most recent draw.
    pub layout: UiLayout,
}

/// Main terminal event loop: drains timer ticks, draws the UI and maps input
/// to player actions. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    ticker: &Ticker,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        for _ in 0..ticker.pending() {
            app.player.tick();
        }
        app.apply_events();

        terminal.draw(|f| {
            state.layout = ui::draw(f, app, &settings.ui, &settings.controls);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key_event(key, settings, app) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, &state.layout),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Apply one key press. Returns `true` when the user asked to quit.
pub(super) fn handle_key_event(key: KeyEvent, settings: &config::Settings, app: &mut App) -> bool {
    let scrub = i64::try_from(settings.controls.scrub_seconds).unwrap_or(i64::MAX);
    let step = settings.controls.volume_step;

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char(' ') | KeyCode::Char('p') => app.player.toggle_play(),
        KeyCode::Left | KeyCode::Char('h') => app.player.previous(),
        KeyCode::Right | KeyCode::Char('l') => app.player.next(),
        KeyCode::Char('H') => app.scrub(-scrub),
        KeyCode::Char('L') => app.scrub(scrub),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Enter => {
            if let Err(e) = app.load_cursor_track() {
                log::warn!("encore: {e}");
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            let number = c.to_digit(10).map_or(0, |d| d as usize);
            if let Err(e) = app.load_track_number(number) {
                log::debug!("encore: ignoring track key {c}: {e}");
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => app.volume_up(step),
        KeyCode::Char('-') => app.volume_down(step),
        KeyCode::Char('a') => app.toggle_autoplay(),
        _ => {}
    }

    false
}

/// Apply a mouse event against the regions captured by the last draw.
pub(super) fn handle_mouse_event(mouse: MouseEvent, app: &mut App, layout: &UiLayout) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    match ui::hit_test(layout, app.track_count(), mouse.column, mouse.row) {
        Some(Hit::Seek(fraction)) => app.player.seek(fraction),
        Some(Hit::Track(index)) => {
            app.cursor = index;
            if let Err(e) = app.load_cursor_track() {
                log::warn!("encore: {e}");
            }
        }
        None => {}
    }
}
