use anyhow::{bail, Context};
use models::{feed::parse_feed, FeedResponse, FeedSource};
use reqwest::StatusCode;

pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

async fn get_feed(source: &FeedSource, results: u32) -> anyhow::Result<FeedResponse> {
    let response = reqwest::Client::new()
        .get(source.url(results))
        .send()
        .await
        .context("reqwest err")?;

    if response.status() != StatusCode::OK {
        bail!("status code {}", response.status());
    }

    let body = response.text().await.context("body read fail")?;
    parse_feed(&body).context("json fail")
}

/// Fetches the feed, logging to the console and yielding `None` on any
/// failure. Callers keep whatever they were showing before.
pub async fn load_feed(source: &FeedSource, results: u32, what: &str) -> Option<FeedResponse> {
    match get_feed(source, results).await {
        Ok(feed) => Some(feed),
        Err(err) => {
            log(&format!("F ({err:#}) ({what})"));
            None
        }
    }
}
