use crate::config::{TimeField, TrackDisplayField};

use super::model::Track;

/// Format a position in seconds as `M:SS`.
///
/// Minutes are not padded and may exceed 59. Negative and NaN inputs render as
/// `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Build the "now playing" line for `track` from the configured `fields`.
///
/// Falls back to the title when every requested field is blank.
pub fn now_playing_text(track: &Track, fields: &[TrackDisplayField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        let value = match f {
            TrackDisplayField::Art => track.art.trim(),
            TrackDisplayField::Title => track.title.trim(),
            TrackDisplayField::Artist => track.artist.trim(),
        };
        if !value.is_empty() {
            parts.push(value.to_string());
        }
    }

    if parts.is_empty() {
        track.title.clone()
    } else {
        parts.join(sep)
    }
}

/// Build the elapsed/total/remaining label shown next to the progress bar.
///
/// Returns `None` when no time fields are configured.
pub fn time_text(elapsed: f64, total_secs: u32, fields: &[TimeField], sep: &str) -> Option<String> {
    if fields.is_empty() {
        return None;
    }

    let total = f64::from(total_secs);
    let parts: Vec<String> = fields
        .iter()
        .map(|f| match f {
            TimeField::Elapsed => format_time(elapsed),
            TimeField::Total => format_time(total),
            TimeField::Remaining => format!("-{}", format_time((total - elapsed).max(0.0))),
        })
        .collect();

    Some(parts.join(sep))
}
