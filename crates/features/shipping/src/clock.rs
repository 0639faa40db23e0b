//! Time-of-day helpers for the same-day cut-off.
//!
//! The tree holds `HH:MM`; storage holds `HH:MM:SS`.

/// Length of an `HH:MM` value.
const MINUTES_LEN: usize = 5;

/// Whether `value` is a 24-hour `HH:MM` time (`00:00` to `23:59`).
#[must_use]
pub fn is_valid_hhmm(value: &str) -> bool {
    let [h1, h2, b':', m1, m2] = value.as_bytes() else {
        return false;
    };
    match (two_digits(*h1, *h2), two_digits(*m1, *m2)) {
        (Some(hours), Some(minutes)) => hours < 24 && minutes < 60,
        _ => false,
    }
}

/// Drops seconds from a stored time (`"14:30:00"` becomes `"14:30"`).
///
/// Anything shorter than `HH:MM` is returned as-is.
#[must_use]
pub fn truncate_to_minutes(stored: &str) -> String {
    stored.chars().take(MINUTES_LEN).collect()
}

/// Storage form of a tree cut-off. Valid `HH:MM` values gain `:00` seconds; anything
/// else is written unchanged so that reading it back yields the same tree value.
#[must_use]
pub fn to_storage_time(value: &str) -> String {
    if is_valid_hhmm(value) { format!("{value}:00") } else { value.to_owned() }
}

const fn two_digits(high: u8, low: u8) -> Option<u8> {
    if high.is_ascii_digit() && low.is_ascii_digit() {
        Some((high - b'0') * 10 + (low - b'0'))
    } else {
        None
    }
}
