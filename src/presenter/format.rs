//! Shared display formatting
//!
//! Every instant the dashboard shows goes through [`format_instant`], so the
//! agenda and the weather card never drift apart.

use chrono::{DateTime, SecondsFormat, Utc};

/// The single display format for instants, e.g. `2022-02-01 01:00 UTC`
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Human-readable form of an instant
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.format(DISPLAY_TIME_FORMAT).to_string()
}

/// Machine-readable form for `<time datetime=...>` attributes
pub fn machine_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// A number in its own shortest representation: `20`, `20.5`, `-3`
///
/// Negative zero prints as `0`. `f64`'s `Display` never switches to exponent
/// notation, so `1e-7` prints as `0.0000001` and `1e21` as all its digits;
/// that positional form is the one shown on the card.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// A temperature with its unit, e.g. `-3°C`
pub fn format_celsius(value: f64) -> String {
    format!("{}°C", format_number(value))
}
