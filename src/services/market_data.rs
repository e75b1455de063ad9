//! Market data provider interface.

use crate::models::indicators::Candle;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("no price history found for symbol '{0}'")]
    SymbolNotFound(String),

    #[error("market data request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("market data provider returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("failed to parse market data response: {0}")]
    Parse(String),
}

impl MarketDataError {
    /// Whether retrying the same request could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            MarketDataError::Request(e) => !e.is_builder() && !e.is_decode(),
            MarketDataError::Upstream { status, .. } => *status == 429 || *status >= 500,
            MarketDataError::SymbolNotFound(_) | MarketDataError::Parse(_) => false,
        }
    }
}

#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Five years of weekly candles for `symbol`, oldest first.
    async fn weekly_history(&self, symbol: &str) -> Result<Vec<Candle>, MarketDataError>;

    /// Best-effort display name for `symbol`. `None` when the lookup fails or
    /// the provider has no name on record.
    async fn company_name(&self, symbol: &str) -> Option<String>;
}
