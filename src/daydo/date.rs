//! Date service: the canonical day key and its display rendering.
//!
//! The day key is what rollover compares against; the label is display-only
//! and never used in comparisons.

use chrono::{Local, NaiveDate};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Source of "today". Abstracted so tests (and a future presentation layer
/// replaying stored days) can pin the date.
pub trait Clock {
    /// The current calendar day in the local timezone. Stable for repeated
    /// calls within the same day.
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Canonical `YYYY-MM-DD` wire form of a day key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a stored day key. Anything unparseable reads as absent.
pub fn parse_date_key(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_KEY_FORMAT).ok()
}

/// Human-readable rendering: weekday, day number, month name, year.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%A %-d %B %Y").to_string()
}
