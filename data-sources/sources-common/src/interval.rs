use std::{borrow::Cow, str::FromStr, time::Duration};

use serde::{de, Deserialize, Deserializer, Serializer};

/// Candle bucket size, stored as a span in seconds. `fmt` renders the
/// token the provider understands (`1h`, `1day`, ...).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Interval(#[serde(deserialize_with = "deser_interval_secs_from_string")] u32);

pub static MINUTE: u32 = 60;
pub static HOUR: u32 = 60 * MINUTE;
pub static DAY: u32 = 24 * HOUR;
pub static WEEK: u32 = 7 * DAY;

impl Interval {
    pub fn mins(v: u32) -> Self {
        Interval(v * MINUTE)
    }

    pub fn hours(v: u32) -> Self {
        Interval(v * HOUR)
    }

    pub fn days(v: u32) -> Self {
        Interval(v * DAY)
    }

    pub fn weeks(v: u32) -> Self {
        Interval(v * WEEK)
    }

    pub fn months(v: u32) -> Self {
        Interval(v * 4 * WEEK) // maybe
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.0 as u64)
    }

    pub fn fmt(&self) -> String {
        match self.0 {
            v if MINUTE == v => "1min".to_string(),
            v if 5 * MINUTE == v => "5min".to_string(),
            v if 15 * MINUTE == v => "15min".to_string(),
            v if 30 * MINUTE == v => "30min".to_string(),
            v if 45 * MINUTE == v => "45min".to_string(),
            v if HOUR == v => "1h".to_string(),
            v if 2 * HOUR == v => "2h".to_string(),
            v if 4 * HOUR == v => "4h".to_string(),
            v if 8 * HOUR == v => "8h".to_string(),
            v if DAY == v => "1day".to_string(),
            v if WEEK == v => "1week".to_string(),
            v if 4 * WEEK == v => "1month".to_string(),
            _ => unreachable!("incorrect interval: {}", self.0),
        }
    }
}

impl FromStr for Interval {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1min" => Ok(Interval::mins(1)),
            "5min" => Ok(Interval::mins(5)),
            "15min" => Ok(Interval::mins(15)),
            "30min" => Ok(Interval::mins(30)),
            "45min" => Ok(Interval::mins(45)),
            "1h" => Ok(Interval::hours(1)),
            "2h" => Ok(Interval::hours(2)),
            "4h" => Ok(Interval::hours(4)),
            "8h" => Ok(Interval::hours(8)),
            "1day" => Ok(Interval::days(1)),
            "1week" => Ok(Interval::weeks(1)),
            "1month" => Ok(Interval::months(1)),
            _ => Err(format!("Incorrect interval: {s}")),
        }
    }
}

pub fn ser_interval<S: Serializer>(interval: &Interval, serializer: S) -> Result<S::Ok, S::Error> {
    let value = interval.fmt();
    serializer.serialize_str(&value)
}

fn deser_interval_secs_from_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<u32, D::Error> {
    let string_value = Cow::<str>::deserialize(deserializer)?;
    Interval::from_str(&string_value)
        .map_err(de::Error::custom)
        .map(|interval| interval.0)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Interval;

    #[test]
    fn interval_tokens_round_trip() {
        for token in ["1min", "45min", "1h", "1day", "1week", "1month"] {
            assert_eq!(Interval::from_str(token).unwrap().fmt(), token);
        }
    }

    #[test]
    fn unsupported_token_is_rejected() {
        assert!(Interval::from_str("2day").is_err());
    }

    #[test]
    fn hourly_is_denser_than_daily() {
        assert!(Interval::hours(1).duration() < Interval::days(1).duration());
    }
}
