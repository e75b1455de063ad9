use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::indicators::IndicatorError;

/// One weekly OHLC observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }

    fn validate(&self, position: usize) -> Result<(), IndicatorError> {
        for (field, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(IndicatorError::InvalidSeries(format!(
                    "candle {} has invalid {} price {}",
                    position, field, value
                )));
            }
        }
        if self.low > self.high {
            return Err(IndicatorError::InvalidSeries(format!(
                "candle {} has low {} above high {}",
                position, self.low, self.high
            )));
        }
        Ok(())
    }
}

/// Chronologically ordered candles, oldest first.
///
/// Construction validates every candle, so downstream arithmetic can assume
/// positive finite prices and strictly increasing timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    candles: Vec<Candle>,
}

impl PriceSeries {
    pub fn new(candles: Vec<Candle>) -> Result<Self, IndicatorError> {
        for (i, candle) in candles.iter().enumerate() {
            candle.validate(i)?;
        }
        if let Some(i) = candles
            .windows(2)
            .position(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            return Err(IndicatorError::InvalidSeries(format!(
                "timestamps are not strictly increasing at candle {}",
                i + 1
            )));
        }
        Ok(Self { candles })
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.low).collect()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// The most recent `count` candles (or all of them if fewer exist).
    pub fn tail(&self, count: usize) -> &[Candle] {
        let start = self.candles.len().saturating_sub(count);
        &self.candles[start..]
    }
}

/// A clustered support price and how many fractal lows it absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportLevel {
    pub average_price: f64,
    pub strength: usize,
}

impl SupportLevel {
    pub fn new(average_price: f64, strength: usize) -> Self {
        Self {
            average_price,
            strength,
        }
    }
}
