//! Support analysis engine: turns a weekly price series into a buy plan.

use chrono::NaiveDate;
use tracing::debug;

use crate::common::math::round_to;
use crate::error::AnalysisError;
use crate::indicators::structure::detect_levels;
use crate::models::analysis::AnalysisResult;
use crate::models::indicators::PriceSeries;
use crate::signals::plan::build_plan;

/// Weekly bars making up the trailing year.
pub const YEAR_WINDOW: usize = 52;

pub const ANALYSIS_DATE_FORMAT: &str = "%d/%m/%Y";

pub struct AnalysisEngine;

impl AnalysisEngine {
    /// Analyze `series` for `symbol`.
    ///
    /// `company_name` falls back to the symbol when the provider had none.
    pub fn analyze(
        symbol: &str,
        company_name: Option<String>,
        series: &PriceSeries,
        analysis_date: NaiveDate,
    ) -> Result<AnalysisResult, AnalysisError> {
        let last = series
            .last()
            .ok_or_else(|| AnalysisError::SymbolNotFound(symbol.to_string()))?;
        let current_price = last.close;

        let year = series.tail(YEAR_WINDOW);
        let year_high = year.iter().map(|c| c.high).fold(f64::MIN, f64::max);
        let year_low = year.iter().map(|c| c.low).fold(f64::MAX, f64::min);

        let levels = detect_levels(series);
        debug!(
            symbol = %symbol,
            candles = series.len(),
            levels = levels.len(),
            "Detected support levels"
        );

        let plan = build_plan(&levels, current_price, year_high)?;

        Ok(AnalysisResult {
            symbol: symbol.to_string(),
            company_name: company_name.unwrap_or_else(|| symbol.to_string()),
            analysis_date: analysis_date.format(ANALYSIS_DATE_FORMAT).to_string(),
            current_price: round_to(current_price, 2),
            year_high: round_to(year_high, 2),
            year_low: round_to(year_low, 2),
            status: plan.status.message().to_string(),
            strategic_plan: plan.levels,
        })
    }
}
