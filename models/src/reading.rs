use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::{normalize::Sample, time::format_timestamp};

/// A deduplicated sample, formatted for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// 1-based position in the batch it was normalized from
    pub id: usize,
    pub recorded_at: DateTime<Utc>,
    pub timestamp: String,
    /// `21.00°C`
    pub temperature: String,
    /// `60.00%`
    pub humidity: String,
    /// Degrees Celcius, rounded to 2 decimals
    pub celcius: f64,
    /// Relative humidity in percent, rounded to 2 decimals
    pub relative_humidity: f64,
}

impl Reading {
    pub fn from_sample<Tz>(id: usize, sample: &Sample, tz: &Tz) -> Reading
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Reading {
            id,
            recorded_at: sample.recorded_at,
            timestamp: format_timestamp(&sample.recorded_at, tz),
            temperature: format!("{}°C", sample.temperature.text),
            humidity: format!("{}%", sample.humidity.text),
            celcius: sample.temperature.value,
            relative_humidity: sample.humidity.value,
        }
    }
}
