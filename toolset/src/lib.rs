use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{de, Deserialize, Deserializer};

pub fn deser_float_from_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<f64, D::Error> {
    let string_value = Cow::<str>::deserialize(deserializer)?;
    string_value.as_ref().parse().map_err(de::Error::custom)
}

pub fn deser_opt_float_from_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    let string_value = Option::<Cow<str>>::deserialize(deserializer)?;
    string_value
        .map(|s| s.as_ref().parse().map_err(de::Error::custom))
        .transpose()
}

/// Provider datetimes come in two shapes: `2022-12-06 14:00:00` for
/// intraday buckets and a bare `2022-12-06` for daily and coarser ones.
/// Both carry no zone and are read as UTC.
pub fn parse_utc_datetime(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN))
        })
        .map(|naive| naive.and_utc())
}

pub fn deser_utc_from_datetime_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    let string_value = Cow::<str>::deserialize(deserializer)?;
    parse_utc_datetime(&string_value).map_err(de::Error::custom)
}
