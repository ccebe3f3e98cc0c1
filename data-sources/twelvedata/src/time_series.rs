use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sources_common::interval::{ser_interval, Interval};
use toolset::{deser_float_from_string, deser_opt_float_from_string, deser_utc_from_datetime_string};

#[derive(Serialize)]
pub struct TimeSeriesQuery {
    pub symbol: String,
    #[serde(serialize_with = "ser_interval")]
    pub interval: Interval,
    pub outputsize: u32,
    pub order: Order,
    pub apikey: String,
}

// Queries end up in request logs; keep the credential out of them.
impl fmt::Debug for TimeSeriesQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeSeriesQuery")
            .field("symbol", &self.symbol)
            .field("interval", &self.interval)
            .field("outputsize", &self.outputsize)
            .field("order", &self.order)
            .field("apikey", &"***")
            .finish()
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Order {
    Asc,
    Desc,
}

#[derive(Deserialize, Debug)]
pub struct TimeSeries {
    pub meta: Meta,
    #[serde(default)]
    pub values: Vec<ApiCandle>,
    pub status: String,
}

#[derive(Deserialize, Debug)]
pub struct Meta {
    pub symbol: String,
    pub interval: Interval,
}

#[derive(Deserialize, Debug)]
pub struct ApiCandle {
    #[serde(rename = "datetime", deserialize_with = "deser_utc_from_datetime_string")]
    pub ts: DateTime<Utc>,
    #[serde(deserialize_with = "deser_float_from_string")]
    pub open: f64,
    #[serde(deserialize_with = "deser_float_from_string")]
    pub high: f64,
    #[serde(deserialize_with = "deser_float_from_string")]
    pub low: f64,
    #[serde(deserialize_with = "deser_float_from_string")]
    pub close: f64,

    // FX symbols come without volume.
    #[serde(default, deserialize_with = "deser_opt_float_from_string")]
    pub volume: Option<f64>,
}
