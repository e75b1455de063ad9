//! Yahoo Finance response payloads

use chrono::DateTime;
use serde::Deserialize;

use crate::models::indicators::Candle;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartData>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

impl ChartError {
    pub fn is_not_found(&self) -> bool {
        self.code.eq_ignore_ascii_case("Not Found")
    }
}

#[derive(Debug, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuoteData {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl ChartData {
    /// Rows with any OHLC field missing are dropped; a missing volume reads
    /// as zero.
    pub fn into_candles(self) -> Vec<Candle> {
        let Some(quote) = self.indicators.quote.into_iter().next() else {
            return Vec::new();
        };

        self.timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let field = |values: &Vec<Option<f64>>| values.get(i).copied().flatten();
                let timestamp = DateTime::from_timestamp(ts, 0)?;
                Some(Candle::new(
                    field(&quote.open)?,
                    field(&quote.high)?,
                    field(&quote.low)?,
                    field(&quote.close)?,
                    field(&quote.volume).unwrap_or(0.0),
                    timestamp,
                ))
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub quotes: Vec<SearchQuote>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuote {
    pub symbol: String,
    pub longname: Option<String>,
    pub shortname: Option<String>,
}

impl SearchResponse {
    /// Long name of the exact-match quote, falling back to its short name.
    pub fn company_name(self, symbol: &str) -> Option<String> {
        self.quotes
            .into_iter()
            .find(|q| q.symbol.eq_ignore_ascii_case(symbol))
            .and_then(|q| q.longname.or(q.shortname))
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    }
}
