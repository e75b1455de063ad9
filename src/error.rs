//! Errors surfaced at the analysis boundary

use thiserror::Error;

use crate::indicators::IndicatorError;
use crate::services::market_data::MarketDataError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid request body: {0}")]
    InvalidRequest(String),

    #[error("invalid symbol '{0}'")]
    InvalidSymbol(String),

    #[error("stock '{0}' not found")]
    SymbolNotFound(String),

    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error(transparent)]
    MarketData(MarketDataError),
}

impl From<MarketDataError> for AnalysisError {
    fn from(error: MarketDataError) -> Self {
        match error {
            MarketDataError::SymbolNotFound(symbol) => AnalysisError::SymbolNotFound(symbol),
            other => AnalysisError::MarketData(other),
        }
    }
}
