use anyhow::{bail, Context};
use chrono::Local;
use models::{
    csv::export_csv,
    feed::LATEST_RESULTS,
    normalize::latest_reading,
};

use crate::cli::Command;

pub mod cli;
pub mod config;
pub mod feed;

pub async fn run(command: Command) -> anyhow::Result<()> {
    let source = config::feed_source_from_env()?;
    let client = reqwest::Client::new();

    match command {
        Command::Current => {
            let feed = feed::fetch_feed(&client, &source, LATEST_RESULTS).await?;
            let Some(reading) = latest_reading(&feed.feeds, &Local) else {
                bail!("no complete reading in the latest {LATEST_RESULTS} entries");
            };

            println!("Temperature: {}", reading.temperature);
            println!("Humidity:    {}", reading.humidity);
            println!("Recorded at: {}", reading.timestamp);
        }
        Command::Export { path, results } => {
            let feed = feed::fetch_feed(&client, &source, results).await?;
            let csv = export_csv(&feed.feeds);
            let rows = csv.lines().count().saturating_sub(1);

            tokio::fs::write(&path, csv)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {rows} readings to {}", path.display());
        }
    }

    Ok(())
}
