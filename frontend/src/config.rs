use models::FeedSource;

const TELEMETRY_BASE_URL: &str = dotenv_codegen::dotenv!("TELEMETRY_BASE_URL");
const TELEMETRY_CHANNEL: &str = dotenv_codegen::dotenv!("TELEMETRY_CHANNEL");
const TELEMETRY_API_KEY: &str = dotenv_codegen::dotenv!("TELEMETRY_API_KEY");

/// The channel baked in from `.env` at build time.
pub fn feed_source() -> FeedSource {
    FeedSource::new(TELEMETRY_BASE_URL, TELEMETRY_CHANNEL, TELEMETRY_API_KEY)
}
