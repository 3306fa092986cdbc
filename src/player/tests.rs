use super::*;
use crate::library::{Playlist, Track};
use std::time::{Duration, Instant};

fn sample() -> PlaybackController {
    PlaybackController::new(Playlist::sample())
}

fn ticks(c: &mut PlaybackController, n: u32) {
    for _ in 0..n {
        c.tick();
    }
}

#[test]
fn starts_paused_on_first_track() {
    let c = sample();
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.state(), PlaybackState::Paused);
    assert!(!c.is_playing());
    assert_eq!(c.elapsed(), 0.0);
    assert!(c.autoplay());
    assert_eq!(c.current_track().title, "Demo Song");
}

#[test]
fn load_track_rewinds_and_keeps_play_state() {
    let mut c = sample();
    for index in 0..c.playlist().len() {
        c.seek(0.4);
        c.load_track(index).unwrap();
        assert_eq!(c.current_index(), index);
        assert_eq!(c.elapsed(), 0.0);
    }

    c.play();
    c.load_track(1).unwrap();
    assert!(c.is_playing());
}

#[test]
fn load_track_rejects_out_of_range_index() {
    let mut c = sample();
    c.load_track(1).unwrap();
    c.seek(0.5);
    c.take_events();

    assert_eq!(
        c.load_track(3),
        Err(PlayerError::TrackOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.elapsed(), 99.0);
    assert!(c.take_events().is_empty());
}

#[test]
fn load_track_emits_track_changed_then_reset() {
    let mut c = sample();
    c.load_track(2).unwrap();
    assert_eq!(
        c.take_events(),
        vec![
            PlayerEvent::TrackChanged {
                index: 2,
                track: Track::new("Third Song", "Third Artist", 267, "🎤"),
            },
            PlayerEvent::ProgressReset,
        ]
    );
}

#[test]
fn toggle_play_twice_is_identity() {
    let mut c = sample();
    c.toggle_play();
    assert!(c.is_playing());
    c.toggle_play();
    assert!(!c.is_playing());

    c.play();
    c.toggle_play();
    c.toggle_play();
    assert!(c.is_playing());
}

#[test]
fn play_and_pause_are_idempotent() {
    let mut c = sample();
    c.play();
    c.play();
    assert!(c.is_playing());
    c.pause();
    c.pause();
    assert!(!c.is_playing());
    assert_eq!(
        c.take_events(),
        vec![
            PlayerEvent::PlaybackStarted { index: 0 },
            PlayerEvent::PlaybackStarted { index: 0 },
            PlayerEvent::PlaybackPaused,
            PlayerEvent::PlaybackPaused,
        ]
    );
}

#[test]
fn previous_wraps_to_last_and_next_wraps_to_first() {
    let mut c = sample();
    c.previous();
    assert_eq!(c.current_index(), 2);
    c.next();
    assert_eq!(c.current_index(), 0);

    c.load_track(2).unwrap();
    c.next();
    assert_eq!(c.current_index(), 0);
}

#[test]
fn previous_then_next_returns_to_start_from_every_index() {
    let mut c = sample();
    for index in 0..3 {
        c.load_track(index).unwrap();
        c.previous();
        c.next();
        assert_eq!(c.current_index(), index);
        c.next();
        c.previous();
        assert_eq!(c.current_index(), index);
    }
}

#[test]
fn next_while_playing_continues_playback() {
    let mut c = sample();
    c.play();
    c.take_events();

    c.next();
    assert!(c.is_playing());
    let events = c.take_events();
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], PlayerEvent::TrackChanged { index: 1, .. }));
    assert_eq!(events[1], PlayerEvent::ProgressReset);
    assert_eq!(events[2], PlayerEvent::PlaybackStarted { index: 1 });
}

#[test]
fn next_while_paused_stays_paused() {
    let mut c = sample();
    c.next();
    assert!(!c.is_playing());
    assert!(
        !c.take_events()
            .iter()
            .any(|e| matches!(e, PlayerEvent::PlaybackStarted { .. }))
    );
}

#[test]
fn seek_sets_elapsed_from_fraction() {
    let playlist = Playlist::new(vec![Track::new("Two Hundred", "X", 200, "🎵")]).unwrap();
    let mut c = PlaybackController::new(playlist);
    c.seek(0.5);
    assert_eq!(c.elapsed(), 100.0);
    assert_eq!(c.progress_percent(), 50.0);
    assert_eq!(
        c.take_events(),
        vec![PlayerEvent::ProgressUpdated {
            elapsed: 100.0,
            percent: 50.0
        }]
    );
}

#[test]
fn seek_clamps_out_of_range_fractions() {
    let mut c = sample();
    c.seek(-0.25);
    assert_eq!(c.elapsed(), 0.0);
    c.seek(1.7);
    assert_eq!(c.elapsed(), 225.0);
    c.seek(f64::NAN);
    assert_eq!(c.elapsed(), 0.0);
}

#[test]
fn set_volume_clamps_and_notifies() {
    let mut c = sample();
    c.set_volume(40);
    assert_eq!(c.volume(), 40);
    c.set_volume(250);
    assert_eq!(c.volume(), 100);
    assert_eq!(
        c.take_events(),
        vec![PlayerEvent::VolumeChanged(40), PlayerEvent::VolumeChanged(100)]
    );
}

#[test]
fn tick_does_nothing_while_paused() {
    let mut c = sample();
    ticks(&mut c, 10);
    assert_eq!(c.elapsed(), 0.0);
    assert!(c.take_events().is_empty());
}

#[test]
fn tick_advances_one_second_and_reports_progress() {
    let mut c = sample();
    c.play();
    c.take_events();
    c.tick();
    assert_eq!(c.elapsed(), 1.0);
    assert_eq!(
        c.take_events(),
        vec![PlayerEvent::ProgressUpdated {
            elapsed: 1.0,
            percent: 1.0 / 225.0 * 100.0
        }]
    );
}

#[test]
fn full_track_of_ticks_rolls_over_with_autoplay() {
    let mut c = sample();
    c.play();
    ticks(&mut c, 225);
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.current_track().title, "Another Track");
    assert!(c.is_playing());
    assert_eq!(c.elapsed(), 0.0);
}

#[test]
fn autoplay_wraps_from_last_track_to_first() {
    let mut c = sample();
    c.load_track(2).unwrap();
    c.play();
    ticks(&mut c, 267);
    assert_eq!(c.current_index(), 0);
    assert!(c.is_playing());
    assert_eq!(c.elapsed(), 0.0);
}

#[test]
fn full_track_of_ticks_without_autoplay_stops_and_rewinds() {
    let mut c = sample();
    c.set_autoplay(false);
    c.load_track(1).unwrap();
    c.play();
    ticks(&mut c, 198);
    assert_eq!(c.current_index(), 1);
    assert!(!c.is_playing());
    assert_eq!(c.elapsed(), 0.0);

    let events = c.take_events();
    assert_eq!(events[events.len() - 2], PlayerEvent::PlaybackPaused);
    assert_eq!(
        events[events.len() - 1],
        PlayerEvent::ProgressUpdated {
            elapsed: 0.0,
            percent: 0.0
        }
    );
}

#[test]
fn rollover_reports_reset_progress_last() {
    let mut c = sample();
    c.play();
    ticks(&mut c, 224);
    c.take_events();
    c.tick();
    let events = c.take_events();
    assert_eq!(
        events.last(),
        Some(&PlayerEvent::ProgressUpdated {
            elapsed: 0.0,
            percent: 0.0
        })
    );
}

#[test]
fn zero_length_track_rolls_over_on_first_tick() {
    let playlist = Playlist::new(vec![
        Track::new("Silence", "Nobody", 0, "🎵"),
        Track::new("Noise", "Somebody", 5, "🎵"),
    ])
    .unwrap();
    let mut c = PlaybackController::new(playlist);
    assert_eq!(c.progress_percent(), 0.0);
    c.play();
    c.tick();
    assert_eq!(c.current_index(), 1);
    assert!(c.is_playing());
}

#[test]
fn ticker_delivers_ticks_and_stops() {
    let mut ticker = Ticker::spawn(Duration::from_millis(5));
    let deadline = Instant::now() + Duration::from_secs(2);
    let mut seen = 0;
    while seen == 0 && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
        seen += ticker.pending();
    }
    assert!(seen > 0);

    ticker.stop();
    ticker.stop();
    ticker.pending();
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(ticker.pending(), 0);
}
