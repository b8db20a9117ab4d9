use serde::{Deserialize, Serialize};

/// Number of entries requested by the history table.
pub const HISTORY_RESULTS: u32 = 1000;
/// Number of entries requested for a CSV export.
pub const EXPORT_RESULTS: u32 = 8000;
/// Number of entries requested for the current reading. The newest complete
/// entry among them is shown.
pub const LATEST_RESULTS: u32 = 10;

/// One sample as it comes off the channel feed.
///
/// `field1` carries the temperature in degrees Celcius and `field2` the
/// relative humidity in percent. Either may be missing or `null` when the
/// device skipped a measurement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub created_at: String,
    #[serde(default)]
    pub field1: Option<String>,
    #[serde(default)]
    pub field2: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub feeds: Vec<FeedEntry>,
}

pub fn parse_feed(body: &str) -> Result<FeedResponse, serde_json::Error> {
    serde_json::from_str(body)
}

/// Where to find the channel feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedSource {
    pub base_url: String,
    pub channel: String,
    pub api_key: String,
}

impl FeedSource {
    pub fn new(
        base_url: impl Into<String>,
        channel: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        FeedSource {
            base_url: base_url.into(),
            channel: channel.into(),
            api_key: api_key.into(),
        }
    }

    pub fn url(&self, results: u32) -> String {
        let base = self.base_url.trim_end_matches('/');
        let channel = &self.channel;
        let api_key = &self.api_key;
        format!("{base}/channels/{channel}/feeds.json?api_key={api_key}&results={results}")
    }
}
