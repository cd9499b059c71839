//! WebVTT timestamp and payload scanning.

/// Parse a cue timestamp into seconds.
///
/// Accepts `HH:MM:SS`, `MM:SS`, and bare seconds, each with an optional
/// fractional part.
pub(crate) fn parse_timestamp(text: &str) -> Option<f64> {
    let parts: Vec<&str> = text.trim().split(':').collect();

    let seconds = match parts.as_slice() {
        [hours, minutes, seconds] => {
            let hours: f64 = hours.parse().ok()?;
            let minutes: f64 = minutes.parse().ok()?;
            let seconds: f64 = seconds.parse().ok()?;
            hours * 3600.0 + minutes * 60.0 + seconds
        }
        [minutes, seconds] => {
            let minutes: f64 = minutes.parse().ok()?;
            let seconds: f64 = seconds.parse().ok()?;
            minutes * 60.0 + seconds
        }
        [seconds] => seconds.parse().ok()?,
        _ => return None,
    };

    (seconds.is_finite() && seconds >= 0.0).then_some(seconds)
}

/// Split a `url#xywh=x,y,w,h` payload into its parts.
pub(crate) fn parse_payload(text: &str) -> Option<(String, f64, f64, f64, f64)> {
    let (url, fragment) = text.split_once("#xywh=")?;

    let mut numbers = fragment.split(',').map(|part| part.trim().parse::<f64>());
    let x = numbers.next()?.ok()?;
    let y = numbers.next()?.ok()?;
    let width = numbers.next()?.ok()?;
    let height = numbers.next()?.ok()?;
    if numbers.next().is_some() {
        return None;
    }

    Some((url.to_string(), x, y, width, height))
}

/// Format seconds as `H:MM:SS` (or `M:SS` under an hour) for cue labels.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
