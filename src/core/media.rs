use super::constants::DEFAULT_VOLUME;

pub const PLAYING_GLYPH: &str = "❚❚";
pub const PAUSED_GLYPH: &str = "►";

/// `m:ss`. Unknown (NaN/infinite) and negative times read as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// `current / total` label shown next to the progress bar.
pub fn time_label(current: f64, duration: f64) -> String {
    format!("{} / {}", format_time(current), format_time(duration))
}

/// Progress bar width in percent. An unknown or zero duration counts as one
/// second.
pub fn progress_percent(current: f64, duration: f64) -> f64 {
    let total = if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        1.0
    };
    let current = if current.is_finite() { current } else { 0.0 };
    (current / total * 100.0).clamp(0.0, 100.0)
}

/// Volume from a range input's value; falls back to the default when the
/// slider is missing or unparsable.
pub fn parse_volume(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 1.0))
        .unwrap_or(DEFAULT_VOLUME)
}

pub fn play_glyph(paused: bool) -> &'static str {
    if paused {
        PAUSED_GLYPH
    } else {
        PLAYING_GLYPH
    }
}
