//! Turns raw feed entries into deduplicated samples.
//!
//! An entry is only kept when its rounded temperature or humidity differs from
//! the last kept entry. A value that comes back after a change is kept again.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

use crate::{feed::FeedEntry, reading::Reading, time::parse_instant};

/// A measurement rounded to two decimals, along with its text form.
#[derive(Clone, Debug, PartialEq)]
pub struct Rounded {
    pub text: String,
    pub value: f64,
}

impl Rounded {
    pub fn parse(field: &str) -> Option<Rounded> {
        let raw: f64 = field.trim().parse().ok()?;
        if !raw.is_finite() {
            return None;
        }

        let text = to_fixed_2(raw);
        let value = text.parse().ok()?;
        Some(Rounded { text, value })
    }
}

/// Two decimals, with exact halves rounded away from zero.
///
/// `{:.2}` already rounds the exact binary value correctly; it only differs
/// on true ties, where it picks the even digit. A third decimal of exactly 5
/// is only representable for odd multiples of 1/8.
fn to_fixed_2(raw: f64) -> String {
    let eighths = raw * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let rounded = (raw * 100.0).round() / 100.0;
        return format!("{rounded:.2}");
    }
    format!("{raw:.2}")
}

/// An entry that survived parsing, before any display formatting.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub recorded_at: DateTime<Utc>,
    pub temperature: Rounded,
    pub humidity: Rounded,
}

impl Sample {
    pub fn from_entry(entry: &FeedEntry) -> Option<Sample> {
        let temperature = Rounded::parse(entry.field1.as_deref()?)?;
        let humidity = Rounded::parse(entry.field2.as_deref()?)?;
        let recorded_at = parse_instant(&entry.created_at)?;

        Some(Sample {
            recorded_at,
            temperature,
            humidity,
        })
    }

    fn repeats(&self, other: &Sample) -> bool {
        self.temperature.text == other.temperature.text && self.humidity.text == other.humidity.text
    }
}

/// Parses `feeds` (oldest first) and drops every entry that repeats the one
/// kept before it.
pub fn deduplicate<'a, I>(feeds: I) -> Vec<Sample>
where
    I: IntoIterator<Item = &'a FeedEntry>,
{
    let mut kept: Vec<Sample> = Vec::new();
    for sample in feeds.into_iter().filter_map(Sample::from_entry) {
        if kept.last().map_or(false, |last| sample.repeats(last)) {
            continue;
        }
        kept.push(sample);
    }
    kept
}

/// Builds the reading list shown by the history table, with timestamps
/// rendered in `tz`.
pub fn normalize<'a, I, Tz>(feeds: I, tz: &Tz) -> Vec<Reading>
where
    I: IntoIterator<Item = &'a FeedEntry>,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    deduplicate(feeds)
        .iter()
        .enumerate()
        .map(|(index, sample)| Reading::from_sample(index + 1, sample, tz))
        .collect()
}

/// The newest complete entry, timestamped with when it was recorded rather
/// than when its values last changed.
pub fn latest_reading<Tz>(feeds: &[FeedEntry], tz: &Tz) -> Option<Reading>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let sample = feeds.iter().rev().find_map(Sample::from_entry)?;
    Some(Reading::from_sample(1, &sample, tz))
}
