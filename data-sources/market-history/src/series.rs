use std::cmp::Ordering;

use tracing::info;

use crate::candle::Candle;

/// Candles ordered by timestamp, one candle per timestamp.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Series(Vec<Candle>);

impl Series {
    pub fn new(candles: Vec<Candle>) -> Self {
        Self(candles)
    }

    /// Normalizes whatever the provider sent: sorts ascending, then folds
    /// through `join` so a duplicated timestamp keeps the last occurrence.
    pub fn from_unordered(mut candles: Vec<Candle>) -> Self {
        candles.sort_by_key(|c| c.ts);

        let mut series = Series::default();
        for candle in candles {
            series.join(candle);
        }
        series
    }

    pub fn join(&mut self, candle: Candle) {
        let Some(last) = self.0.last_mut() else {
            self.0.push(candle);
            return;
        };
        match last.ts.cmp(&candle.ts) {
            Ordering::Equal => {
                *last = candle;
            }
            Ordering::Less => {
                self.0.push(candle);
            }
            Ordering::Greater => {
                info!(?candle, "Ignore too old candle");
            }
        }
    }

    pub fn candles(&self) -> &[Candle] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candle> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Candle> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.0.last()
    }
}
