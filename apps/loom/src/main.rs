use std::env;

use market_history::{fetch_series, merge::merge_daily_into_hourly, FetchSeriesInput};
use sources_common::interval::Interval;
use tracing::info;
use url::Url;

mod output;

const SYMBOL: &str = "EUR/USD";
const OUTPUT_FILE: &str = "eurusd_1h_plus_1d.csv";
const CANDLES_LIMIT: u32 = 5000;

async fn runner(api_key: String) -> anyhow::Result<()> {
    let api_host: Url = twelvedata::API_HOST.parse()?;

    let hourly = fetch_series(FetchSeriesInput {
        api_host: api_host.clone(),
        api_key: api_key.clone(),
        symbol: SYMBOL.to_string(),
        interval: Interval::hours(1),
        outputsize: CANDLES_LIMIT,
    })
    .await?;

    let daily = fetch_series(FetchSeriesInput {
        api_host,
        api_key,
        symbol: SYMBOL.to_string(),
        interval: Interval::days(1),
        outputsize: CANDLES_LIMIT,
    })
    .await?;

    info!(hourly = hourly.len(), daily = daily.len(), "Merge series");
    let merged = merge_daily_into_hourly(&hourly, &daily);

    output::write_csv(&merged, OUTPUT_FILE)?;

    println!("Saved {OUTPUT_FILE}");
    output::print_tail(&merged, 3);

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let api_key = match env::var("TD_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            eprintln!("Set TD_API_KEY environment variable first.");
            std::process::exit(1);
        }
    };

    if let Err(e) = runner(api_key).await {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
