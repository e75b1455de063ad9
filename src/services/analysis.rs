//! Symbol analysis: fetch history, then run the support analysis engine.

use chrono::NaiveDate;
use tracing::info;

use crate::error::AnalysisError;
use crate::models::analysis::AnalysisResult;
use crate::models::indicators::PriceSeries;
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::AnalysisEngine;

pub const MAX_SYMBOL_LEN: usize = 20;

/// Trim and uppercase a ticker, rejecting anything that is not a plausible
/// exchange symbol (letters, digits and `.-^=`).
pub fn normalize_symbol(raw: &str) -> Result<String, AnalysisError> {
    let symbol = raw.trim().to_uppercase();
    let valid = !symbol.is_empty()
        && symbol.len() <= MAX_SYMBOL_LEN
        && symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='));

    if valid {
        Ok(symbol)
    } else {
        Err(AnalysisError::InvalidSymbol(raw.trim().to_string()))
    }
}

/// Run a full analysis for `raw_symbol` as of `analysis_date`.
///
/// History and company name are fetched concurrently; a failed name lookup
/// never fails the analysis.
pub async fn analyze_symbol(
    provider: &dyn MarketDataProvider,
    raw_symbol: &str,
    analysis_date: NaiveDate,
) -> Result<AnalysisResult, AnalysisError> {
    let symbol = normalize_symbol(raw_symbol)?;

    let (history, company_name) =
        tokio::join!(provider.weekly_history(&symbol), provider.company_name(&symbol));

    let series = PriceSeries::new(history?)?;
    let result = AnalysisEngine::analyze(&symbol, company_name, &series, analysis_date)?;

    info!(
        symbol = %result.symbol,
        candles = series.len(),
        levels = result.strategic_plan.len(),
        current_price = result.current_price,
        "Analysis complete"
    );

    Ok(result)
}
