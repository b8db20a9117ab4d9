use crate::{feed::FeedEntry, normalize::deduplicate, time::format_iso};

pub const EXPORT_FILE_NAME: &str = "complete_history.csv";
pub const HEADER: &str = "Timestamp,Temperature (°C),Humidity (%)";

/// Renders the deduplicated feed as CSV, header first. Values are the bare
/// 2-decimal numbers, without units.
pub fn export_csv<'a, I>(feeds: I) -> String
where
    I: IntoIterator<Item = &'a FeedEntry>,
{
    let samples = deduplicate(feeds);

    let mut lines = Vec::with_capacity(samples.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(samples.iter().map(|sample| {
        format!(
            "{},{},{}",
            format_iso(&sample.recorded_at),
            sample.temperature.text,
            sample.humidity.text
        )
    }));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(created_at: &str, temperature: &str, humidity: &str) -> FeedEntry {
        FeedEntry {
            created_at: created_at.into(),
            field1: Some(temperature.into()),
            field2: Some(humidity.into()),
        }
    }

    #[test]
    fn duplicate_entry_is_left_out() {
        let feeds = [
            entry("2025-05-01T12:00:00Z", "20", "60"),
            entry("2025-05-01T12:00:15Z", "20.0", "60.00"),
        ];

        let csv = export_csv(&feeds);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines,
            [
                "Timestamp,Temperature (°C),Humidity (%)",
                "2025-05-01T12:00:00Z,20.00,60.00",
            ]
        );
    }

    #[test]
    fn timestamps_are_written_in_utc() {
        let feeds = [
            entry("2025-05-01T20:00:00+08:00", "28.9", "60"),
            entry("2025-05-01T12:00:15Z", "28.95", "61.5"),
        ];

        let csv = export_csv(&feeds);
        assert_eq!(
            csv,
            "Timestamp,Temperature (°C),Humidity (%)\n\
             2025-05-01T12:00:00Z,28.90,60.00\n\
             2025-05-01T12:00:15Z,28.95,61.50"
        );
    }

    #[test]
    fn empty_feed_is_header_only() {
        assert_eq!(export_csv(&[]), HEADER);
    }
}
