use sources_common::interval::Interval;
use url::Url;

pub mod candle;
pub mod merge;
pub mod series;

pub struct FetchSeriesInput {
    pub api_host: Url,
    pub api_key: String,
    pub symbol: String,
    pub interval: Interval,
    pub outputsize: u32,
}

#[cfg(feature = "twelvedata")]
mod twelvedata_adaptor;

#[cfg(feature = "twelvedata")]
pub use twelvedata_adaptor::*;
