use anyhow::{bail, Context};
use models::{feed::parse_feed, FeedResponse, FeedSource};

pub async fn fetch_feed(
    client: &reqwest::Client,
    source: &FeedSource,
    results: u32,
) -> anyhow::Result<FeedResponse> {
    let response = client
        .get(source.url(results))
        .send()
        .await
        .context("telemetry request failed")?;

    let status = response.status();
    if !status.is_success() {
        bail!("telemetry API returned {status}");
    }

    let body = response.text().await.context("failed to read telemetry response")?;
    parse_feed(&body).context("failed to decode telemetry feed")
}
