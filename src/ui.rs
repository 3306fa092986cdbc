//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`, plus the
//! hit-testing used to turn mouse clicks back into player actions.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::App;
use crate::config::{ControlsSettings, UiSettings};
use crate::library::{format_time, now_playing_text, time_text};
use crate::player::PlaybackState;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next song");
    // H/L is filled dynamically from config.
    map.insert("j/k", "up/down");
    map.insert("enter", "load selected");
    map.insert("1-9", "load track");
    map.insert("+/-", "volume");
    map.insert("a", "autoplay");
    map.insert("click", "seek / pick");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "space/p", "h/l", "H/L", "j/k", "enter", "1-9", "+/-", "a", "click", "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] scrub -/+{}s", scrub_seconds))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Screen regions that accept mouse input, captured during the last draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiLayout {
    /// Inner area of the progress bar.
    pub progress: Rect,
    /// Inner area of the playlist.
    pub playlist: Rect,
    /// Track index rendered on the first playlist row.
    pub playlist_start: usize,
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    /// Seek to this fraction of the current track.
    Seek(f64),
    /// Load the track at this index.
    Track(usize),
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x
        && column < r.x.saturating_add(r.width)
        && row >= r.y
        && row < r.y.saturating_add(r.height)
}

/// Map a click at (`column`, `row`) to a player action.
pub fn hit_test(layout: &UiLayout, track_count: usize, column: u16, row: u16) -> Option<Hit> {
    if contains(layout.progress, column, row) {
        let offset = f64::from(column - layout.progress.x);
        return Some(Hit::Seek(offset / f64::from(layout.progress.width)));
    }

    if contains(layout.playlist, column, row) {
        let index = layout.playlist_start + usize::from(row - layout.playlist.y);
        if index < track_count {
            return Some(Hit::Track(index));
        }
    }

    None
}

/// Window of playlist rows to render so that `selected` stays visible,
/// centered when possible. Returns `(start, end, selected_pos_in_window)`.
pub fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize, usize) {
    let selected = selected.min(total.saturating_sub(1));
    if total <= height || height == 0 {
        return (0, total, selected);
    }

    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height, selected - start)
}

/// Render the entire UI into `frame` and report the clickable regions.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) -> UiLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let left_pad = Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    };

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" encore ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Now playing
    let player = &app.player;
    let track = player.current_track();
    let (icon, state) = match player.state() {
        PlaybackState::Playing => ("⏸", "Playing"),
        PlaybackState::Paused => ("▶", "Paused"),
    };

    let mut flags: Vec<String> = vec![
        format!("{} {}", icon, state),
        format!("Autoplay: {}", if player.autoplay() { "ON" } else { "OFF" }),
        format!("Volume: {}%", player.volume()),
    ];
    if let Some(src) = &app.playlist_source {
        flags.push(format!("Playlist: {}", src));
    }

    let mut lines = vec![
        Line::from(format!(
            "{}  {}",
            track.art,
            now_playing_text(
                track,
                &ui_settings.now_playing_fields,
                &ui_settings.now_playing_separator
            )
        ))
        .bold(),
        Line::from(flags.join(" • ")),
    ];
    if !app.status.is_empty() {
        lines.push(Line::from(app.status.as_str()).italic());
    }

    let now_playing = Paragraph::new(lines)
        .block(Block::bordered().padding(left_pad).title(" now playing "))
        .wrap(Wrap { trim: true });
    frame.render_widget(now_playing, chunks[1]);

    // Progress
    let progress_block = Block::bordered().title(" progress ");
    let progress_inner = progress_block.inner(chunks[2]);
    let label = time_text(
        player.elapsed(),
        track.duration_secs,
        &ui_settings.time_fields,
        &ui_settings.time_separator,
    )
    .unwrap_or_default();
    let gauge = Gauge::default()
        .block(progress_block)
        .ratio((player.progress_percent() / 100.0).clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, chunks[2]);

    // Playlist
    let list_block = Block::default().borders(Borders::ALL).title(" playlist ");
    let list_inner = list_block.inner(chunks[3]);
    let tracks = player.playlist().tracks();
    let (start, end, selected_pos_in_visible) =
        visible_window(tracks.len(), list_inner.height as usize, app.cursor);

    let visible_items: Vec<ListItem> = tracks[start..end]
        .iter()
        .enumerate()
        .map(|(offset, t)| {
            let i = start + offset;
            let marker = if i == player.current_index() { "♪" } else { " " };
            ListItem::new(format!(
                "{} {:>2}. {} {} - {} ({})",
                marker,
                i + 1,
                t.art,
                t.title,
                t.artist,
                format_time(f64::from(t.duration_secs))
            ))
        })
        .collect();

    let list = List::new(visible_items)
        .block(list_block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(selected_pos_in_visible));
    frame.render_stateful_widget(list, chunks[3], &mut state);

    // Footer
    let footer = Paragraph::new(controls_text(controls_settings.scrub_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_pad),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    UiLayout {
        progress: progress_inner,
        playlist: list_inner,
        playlist_start: start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> UiLayout {
        UiLayout {
            progress: Rect::new(1, 9, 40, 1),
            playlist: Rect::new(1, 12, 40, 5),
            playlist_start: 0,
        }
    }

    #[test]
    fn click_on_progress_bar_seeks_by_column() {
        let l = layout();
        assert_eq!(hit_test(&l, 3, 1, 9), Some(Hit::Seek(0.0)));
        assert_eq!(hit_test(&l, 3, 21, 9), Some(Hit::Seek(0.5)));
        assert_eq!(hit_test(&l, 3, 41, 9), None);
        assert_eq!(hit_test(&l, 3, 21, 8), None);
    }

    #[test]
    fn click_on_playlist_row_picks_track() {
        let mut l = layout();
        assert_eq!(hit_test(&l, 3, 5, 12), Some(Hit::Track(0)));
        assert_eq!(hit_test(&l, 3, 5, 14), Some(Hit::Track(2)));
        // Empty rows below the last track do nothing.
        assert_eq!(hit_test(&l, 3, 5, 15), None);

        l.playlist_start = 4;
        assert_eq!(hit_test(&l, 10, 5, 13), Some(Hit::Track(5)));
    }

    #[test]
    fn visible_window_centers_selection_when_scrolling() {
        assert_eq!(visible_window(3, 10, 2), (0, 3, 2));
        assert_eq!(visible_window(20, 5, 0), (0, 5, 0));
        assert_eq!(visible_window(20, 5, 10), (8, 13, 2));
        assert_eq!(visible_window(20, 5, 19), (15, 20, 4));
        assert_eq!(visible_window(3, 0, 1), (0, 3, 1));
    }

    #[test]
    fn controls_text_includes_scrub_seconds() {
        let text = controls_text(7);
        assert!(text.starts_with("[space/p] play/pause"));
        assert!(text.contains("[H/L] scrub -/+7s"));
        assert!(text.ends_with("[q] quit"));
    }
}
