//! Unit tests for the analysis engine

use chrono::NaiveDate;
use stock_hunter::error::AnalysisError;
use stock_hunter::models::indicators::{Candle, PriceSeries};
use stock_hunter::signals::engine::{AnalysisEngine, YEAR_WINDOW};

use crate::fixtures::{series_from_lows, week};

fn analysis_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn test_analysis_builds_plan_from_series() {
    let series = series_from_lows(&[12.0, 11.0, 10.0, 11.0, 12.0, 11.0, 10.2, 11.0, 12.0, 13.0]);
    let result = AnalysisEngine::analyze("ACME", None, &series, analysis_date()).unwrap();

    assert_eq!(result.symbol, "ACME");
    assert_eq!(result.company_name, "ACME");
    assert_eq!(result.analysis_date, "19/10/2026");
    assert_eq!(result.current_price, 14.0);
    assert_eq!(result.year_high, 15.0);
    assert_eq!(result.year_low, 10.0);
    assert_eq!(result.status, "Found Strategic Levels");

    assert_eq!(result.strategic_plan.len(), 1);
    let level = &result.strategic_plan[0];
    assert_eq!(level.order, 1);
    assert!((level.price - 10.1).abs() < 1e-9);
    assert_eq!(level.weight_percent, 100);
    assert!((level.discount_from_high_pct - 32.67).abs() < 1e-9);
    assert!((level.gap_from_current_pct - 27.86).abs() < 1e-9);
}

#[test]
fn test_company_name_is_used_when_present() {
    let series = series_from_lows(&[5.0, 4.0, 3.0, 4.0, 5.0, 6.0]);
    let result = AnalysisEngine::analyze(
        "ACME",
        Some("Acme Corporation".to_string()),
        &series,
        analysis_date(),
    )
    .unwrap();
    assert_eq!(result.company_name, "Acme Corporation");
}

#[test]
fn test_year_range_uses_last_52_weeks() {
    let candles: Vec<Candle> = (0..60)
        .map(|i| {
            if i < 8 {
                Candle::new(500.0, 1000.0, 1.0, 500.0, 0.0, week(i))
            } else {
                Candle::new(75.0, 100.0 + i as f64 * 0.1, 50.0, 75.0, 0.0, week(i))
            }
        })
        .collect();
    let series = PriceSeries::new(candles).unwrap();
    assert_eq!(series.tail(YEAR_WINDOW).len(), 52);

    let result = AnalysisEngine::analyze("ACME", None, &series, analysis_date()).unwrap();
    assert!((result.year_high - 105.9).abs() < 1e-9);
    assert_eq!(result.year_low, 50.0);
    assert_eq!(result.current_price, 75.0);
    assert!(result.strategic_plan.is_empty());
    assert!(result.status.starts_with("No strategic level found"));
}

#[test]
fn test_empty_series_is_not_found() {
    let series = PriceSeries::new(Vec::new()).unwrap();
    let err = AnalysisEngine::analyze("NOPE", None, &series, analysis_date()).unwrap_err();
    assert!(matches!(err, AnalysisError::SymbolNotFound(symbol) if symbol == "NOPE"));
}

#[test]
fn test_analysis_is_idempotent() {
    let series = series_from_lows(&crate::fixtures::noisy_lows(260, 40.0, 20.0, 11));
    let first = AnalysisEngine::analyze("ACME", None, &series, analysis_date()).unwrap();
    let second = AnalysisEngine::analyze("ACME", None, &series, analysis_date()).unwrap();
    assert_eq!(first, second);
    assert!(first.strategic_plan.len() <= 3);
    assert!(first
        .strategic_plan
        .windows(2)
        .all(|pair| pair[0].price > pair[1].price));
}
