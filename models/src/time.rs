use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

/// Parses a feed `created_at` value.
pub fn parse_instant(created_at: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(created_at.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `05/01/2025 - 02:00:00 PM`, rendered in `tz`.
pub fn format_timestamp<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant
        .with_timezone(tz)
        .format("%m/%d/%Y - %I:%M:%S %p")
        .to_string()
}

/// RFC 3339 in UTC with whole seconds, the same shape the feed uses.
pub fn format_iso(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockDisplay {
    /// `May 01, 2025`
    pub date: String,
    /// `02:00:00 P.M.`
    pub time: String,
}

impl ClockDisplay {
    pub fn new<Tz>(now: &DateTime<Tz>) -> ClockDisplay
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let date = now.format("%B %d, %Y").to_string();
        let time = now
            .format("%I:%M:%S %p")
            .to_string()
            .replace("AM", "A.M.")
            .replace("PM", "P.M.");
        ClockDisplay { date, time }
    }
}

impl fmt::Display for ClockDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.date, self.time)
    }
}
