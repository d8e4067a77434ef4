//! Millisecond time rendering for segment labels.
//!
//! Times are plain `i64` millisecond offsets from the start of a video.
//! Labels render an offset as if it were a UTC time of day, so values wrap
//! every 24 hours and are never interpreted as wall-clock time.

/// Milliseconds per second.
pub const MS_PER_SECOND: i64 = 1_000;
/// Milliseconds per minute.
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
/// Milliseconds per hour.
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Milliseconds per day; labels wrap at this value.
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Length of a label with milliseconds (`HH:MM:SS.mmm`).
pub const LABEL_LEN: usize = 12;
/// Length of a label without milliseconds (`HH:MM:SS`).
pub const SHORT_LABEL_LEN: usize = 8;

/// Format a millisecond offset as `HH:MM:SS.mmm`, or `HH:MM:SS` when
/// `show_millis` is false.
///
/// The offset is read as a UTC time of day: `86_400_000` renders as
/// `00:00:00.000` and `-1` as `23:59:59.999`.
pub fn format_millis(ms: i64, show_millis: bool) -> String {
    let of_day = ms.rem_euclid(MS_PER_DAY);
    let hours = of_day / MS_PER_HOUR;
    let minutes = of_day % MS_PER_HOUR / MS_PER_MINUTE;
    let seconds = of_day % MS_PER_MINUTE / MS_PER_SECOND;
    let millis = of_day % MS_PER_SECOND;

    if show_millis {
        format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Format a floating-point millisecond value.
///
/// Returns an empty string for NaN or infinite input, otherwise truncates
/// toward zero and delegates to [`format_millis`].
pub fn format_millis_f64(ms: f64, show_millis: bool) -> String {
    if !ms.is_finite() {
        return String::new();
    }
    format_millis(ms.trunc() as i64, show_millis)
}

/// Parse a `HH:MM:SS.mmm` label back into milliseconds.
///
/// Only the 12-character form is accepted. Fields are not range-checked
/// (`00:75:00.000` is 75 minutes); bounds are the caller's concern.
pub fn parse_time(text: &str) -> Option<i64> {
    let bytes = text.as_bytes();
    if bytes.len() != LABEL_LEN {
        return None;
    }
    if bytes[2] != b':' || bytes[5] != b':' || bytes[8] != b'.' {
        return None;
    }

    let hours = digits(&bytes[0..2])?;
    let minutes = digits(&bytes[3..5])?;
    let seconds = digits(&bytes[6..8])?;
    let millis = digits(&bytes[9..12])?;

    Some(millis + seconds * MS_PER_SECOND + minutes * MS_PER_MINUTE + hours * MS_PER_HOUR)
}

/// Convert milliseconds to the seconds a media player consumes.
#[inline]
pub fn millis_to_seconds(ms: i64) -> f64 {
    ms as f64 / MS_PER_SECOND as f64
}

fn digits(field: &[u8]) -> Option<i64> {
    field.iter().try_fold(0i64, |acc, b| {
        b.is_ascii_digit().then(|| acc * 10 + i64::from(b - b'0'))
    })
}
