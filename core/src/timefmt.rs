use chrono::Duration;

/// Sekunder → `HH:MM:SS`. Med `compact` droppes timefeltet når det er null (`MM:SS`).
/// Negative eller ikke-endelige verdier gir `00:00`.
pub fn seconds_to_hms(seconds: f64, compact: bool) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }

    // klem til et område chrono aksepterer
    let d = Duration::seconds(seconds.min(1.0e12).round() as i64);
    let h = d.num_hours();
    let m = d.num_minutes() % 60;
    let s = d.num_seconds() % 60;

    if compact && h == 0 {
        format!("{m:02}:{s:02}")
    } else {
        format!("{h:02}:{m:02}:{s:02}")
    }
}
