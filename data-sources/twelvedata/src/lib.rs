use core::fmt;

use serde::{de::DeserializeOwned, Serialize};
use tracing::info;
use url::Url;

use crate::{
    error::Error,
    protocol::Response,
    time_series::{TimeSeries, TimeSeriesQuery},
};

pub mod error;
pub mod protocol;
pub mod time_series;

pub static API_HOST: &str = "https://api.twelvedata.com";

pub async fn fetch<Q, R>(api_host: Url, path: &str, query: Q) -> Result<R, Error>
where
    Q: Serialize + fmt::Debug,
    R: DeserializeOwned,
{
    let mut url = api_host.join(path)?;
    let qs = serde_qs::to_string(&query)?;

    info!(?query, "Run query");

    url.set_query(Some(&qs));
    let result = reqwest::Client::new().get(url).send().await?.text().await?;

    match serde_json::from_str::<Response<R>>(&result) {
        Ok(Response::Success(t)) => Ok(t),
        Ok(Response::Error { code, message, .. }) => Err(Error::Api {
            path: path.to_string(),
            code,
            message,
        }),
        Err(e) => Err(Error::SerdeError(e, result)),
    }
}

pub async fn fetch_time_series(
    api_host: Url,
    query: TimeSeriesQuery,
) -> Result<TimeSeries, Error> {
    let symbol = query.symbol.clone();
    let interval = query.interval.fmt();

    let series: TimeSeries = fetch(api_host, "/time_series", query).await?;

    if series.values.is_empty() {
        return Err(Error::EmptySeries { symbol, interval });
    }

    Ok(series)
}

#[cfg(test)]
mod tests {

    use httpmock::prelude::*;
    use sources_common::interval::Interval;

    use crate::time_series::{Order, TimeSeriesQuery};

    use super::*;

    fn eurusd_query(interval: Interval) -> TimeSeriesQuery {
        TimeSeriesQuery {
            symbol: "EUR/USD".to_string(),
            interval,
            outputsize: 5000,
            order: Order::Asc,
            apikey: "demo".to_string(),
        }
    }

    #[tokio::test]
    async fn fetching_time_series() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/time_series")
                    .query_param("symbol", "EUR/USD")
                    .query_param("interval", "1h")
                    .query_param("outputsize", "5000")
                    .query_param("order", "ASC")
                    .query_param("apikey", "demo");
                then.status(200).body(
                    r#"{
                        "meta": {"symbol": "EUR/USD", "interval": "1h"},
                        "values": [
                            {"datetime": "2022-12-06 14:00:00", "open": "1.05080", "high": "1.05311", "low": "1.05005", "close": "1.05280"}
                        ],
                        "status": "ok"
                    }"#,
                );
            })
            .await;

        let host: Url = server.base_url().parse().unwrap();
        let series = fetch_time_series(host, eurusd_query(Interval::hours(1)))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(series.values.len(), 1);
        assert_eq!(series.values[0].close, 1.05280);
    }

    #[tokio::test]
    async fn rejected_key_becomes_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/time_series");
                then.status(200).body(
                    r#"{"code": 401, "message": "**apikey** parameter is incorrect or not specified", "status": "error"}"#,
                );
            })
            .await;

        let host: Url = server.base_url().parse().unwrap();
        let err = fetch_time_series(host, eurusd_query(Interval::hours(1)))
            .await
            .unwrap_err();

        let Error::Api { code, .. } = err else {
            panic!("nope: {err}");
        };
        assert_eq!(code, 401);
    }

    #[tokio::test]
    async fn series_without_candles_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/time_series");
                then.status(200).body(
                    r#"{"meta": {"symbol": "EUR/USD", "interval": "1day"}, "values": [], "status": "ok"}"#,
                );
            })
            .await;

        let host: Url = server.base_url().parse().unwrap();
        let err = fetch_time_series(host, eurusd_query(Interval::days(1)))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::EmptySeries { .. }));
    }
}
