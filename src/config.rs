use std::env;

use anyhow::Context;
use models::FeedSource;

pub const DEFAULT_BASE_URL: &str = "https://api.thingspeak.com";

/// Reads the channel settings from the process environment, which `main`
/// seeds from `.env`.
pub fn feed_source_from_env() -> anyhow::Result<FeedSource> {
    feed_source_from(|name| env::var(name).ok())
}

pub fn feed_source_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<FeedSource> {
    let require = |name: &str| lookup(name).with_context(|| format!("{name} is not set"));

    let base_url = lookup("TELEMETRY_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
    let channel = require("TELEMETRY_CHANNEL")?;
    let api_key = require("TELEMETRY_API_KEY")?;

    Ok(FeedSource::new(base_url, channel, api_key))
}
