use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot parse response <{1}>: {0}")]
    SerdeError(serde_json::Error, String),

    #[error("Request to {path} rejected: {code} ({message})")]
    Api {
        path: String,
        code: i64,
        message: String,
    },

    #[error("Cannot reach provider: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cannot build request url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Cannot encode query: {0}")]
    Query(#[from] serde_qs::Error),

    #[error("No candles returned for {symbol} at {interval}")]
    EmptySeries { symbol: String, interval: String },
}
