//! Yahoo Finance market data provider implementation

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::models::indicators::Candle;
use crate::services::market_data::{MarketDataError, MarketDataProvider};

use super::client::YahooRestClient;

pub struct YahooMarketDataProvider {
    client: Arc<YahooRestClient>,
}

impl YahooMarketDataProvider {
    pub fn new(config: &ServiceConfig) -> Result<Self, MarketDataError> {
        let client = YahooRestClient::new(&config.yahoo_base_url, config.yahoo_timeout)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    pub fn with_client(client: Arc<YahooRestClient>) -> Self {
        Self { client }
    }
}

/// Sort oldest first; a repeated timestamp keeps the later row.
fn normalize_candles(mut candles: Vec<Candle>) -> Vec<Candle> {
    candles.sort_by_key(|c| c.timestamp);
    let mut result: Vec<Candle> = Vec::with_capacity(candles.len());
    for candle in candles {
        match result.last_mut() {
            Some(last) if last.timestamp == candle.timestamp => *last = candle,
            _ => result.push(candle),
        }
    }
    result
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn weekly_history(&self, symbol: &str) -> Result<Vec<Candle>, MarketDataError> {
        let candles = normalize_candles(self.client.weekly_chart(symbol).await?);
        debug!(symbol = %symbol, candles = candles.len(), "Fetched weekly history");

        if candles.is_empty() {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        Ok(candles)
    }

    async fn company_name(&self, symbol: &str) -> Option<String> {
        match self.client.search(symbol).await {
            Ok(response) => response.company_name(symbol),
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Company name lookup failed");
                None
            }
        }
    }
}
