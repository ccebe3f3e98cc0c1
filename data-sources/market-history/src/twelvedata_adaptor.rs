use tracing::info;
use twelvedata::{
    error::Error,
    time_series::{ApiCandle, Order, TimeSeriesQuery},
};

use crate::{candle::Candle, series::Series, FetchSeriesInput};

pub async fn fetch_series(input: FetchSeriesInput) -> Result<Series, Error> {
    let series = twelvedata::fetch_time_series(
        input.api_host,
        TimeSeriesQuery {
            symbol: input.symbol,
            interval: input.interval,
            outputsize: input.outputsize,
            order: Order::Asc,
            apikey: input.api_key,
        },
    )
    .await?;

    info!("Fetched {} candles", series.values.len());

    Ok(series
        .values
        .into_iter()
        .map(Into::into)
        .collect::<Vec<_>>()
        .into())
}

impl From<ApiCandle> for Candle {
    fn from(c: ApiCandle) -> Self {
        Self {
            ts: c.ts,
            open: c.open,
            high: c.high,
            low: c.low,
            close: c.close,
            volume: c.volume.unwrap_or(0.0),
        }
    }
}

impl From<Vec<Candle>> for Series {
    fn from(candles: Vec<Candle>) -> Self {
        Series::from_unordered(candles)
    }
}
