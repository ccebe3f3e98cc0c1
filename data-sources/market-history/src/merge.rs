use chrono::{DateTime, Utc};

use crate::series::Series;

/// One hourly candle plus the daily fields carried forward onto it. The
/// `d_*` fields stay `None` for rows older than the first daily candle.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub ts: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub d_open: Option<f64>,
    pub d_high: Option<f64>,
    pub d_low: Option<f64>,
    pub d_close: Option<f64>,
    pub d_volume: Option<f64>,
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct MergedTable(Vec<MergedRow>);

impl MergedTable {
    pub fn rows(&self) -> &[MergedRow] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tail(&self, n: usize) -> &[MergedRow] {
        &self.0[self.0.len().saturating_sub(n)..]
    }
}

/// Re-expresses `daily` on the timestamp index of `hourly`: every hourly
/// row gets the latest daily candle at or before its timestamp. Both
/// inputs must be ascending, which `Series` guarantees.
pub fn merge_daily_into_hourly(hourly: &Series, daily: &Series) -> MergedTable {
    let daily_candles = daily.candles();
    let mut next_daily = 0;

    let mut rows: Vec<MergedRow> = hourly
        .iter()
        .map(|hour| {
            while next_daily < daily_candles.len() && daily_candles[next_daily].ts <= hour.ts {
                next_daily += 1;
            }
            let carried = next_daily.checked_sub(1).map(|i| &daily_candles[i]);

            MergedRow {
                ts: hour.ts,
                open: hour.open,
                high: hour.high,
                low: hour.low,
                close: hour.close,
                volume: hour.volume,
                d_open: carried.map(|d| d.open),
                d_high: carried.map(|d| d.high),
                d_low: carried.map(|d| d.low),
                d_close: carried.map(|d| d.close),
                d_volume: carried.map(|d| d.volume),
            }
        })
        .collect();

    // The daily close column is repurposed: it always mirrors the hourly
    // close, replacing whatever the carry-forward put there.
    for row in rows.iter_mut() {
        row.d_close = Some(row.close);
    }

    MergedTable(rows)
}
