//! Unit tests for Yahoo Finance payload parsing

use serde_json::json;
use stock_hunter::services::yahoo::messages::{ChartResponse, SearchResponse};

#[test]
fn test_chart_rows_with_missing_prices_are_skipped() {
    let body = json!({
        "chart": {
            "result": [{
                "meta": { "symbol": "AAPL" },
                "timestamp": [1609718400, 1610323200, 1610928000],
                "indicators": {
                    "quote": [{
                        "open":   [130.0, null, 128.0],
                        "high":   [133.0, 131.0, 132.0],
                        "low":    [126.0, 125.0, 127.0],
                        "close":  [131.0, 129.0, 130.0],
                        "volume": [1000, 900, null]
                    }]
                }
            }],
            "error": null
        }
    });

    let response: ChartResponse = serde_json::from_value(body).unwrap();
    let data = response.chart.result.unwrap().into_iter().next().unwrap();
    let candles = data.into_candles();

    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].low, 126.0);
    assert_eq!(candles[1].open, 128.0);
    assert_eq!(candles[1].volume, 0.0);
    assert_eq!(candles[1].timestamp.timestamp(), 1610928000);
}

#[test]
fn test_chart_without_timestamps_has_no_candles() {
    let body = json!({
        "chart": {
            "result": [{ "meta": {}, "indicators": { "quote": [{}] } }],
            "error": null
        }
    });
    let response: ChartResponse = serde_json::from_value(body).unwrap();
    let data = response.chart.result.unwrap().into_iter().next().unwrap();
    assert!(data.into_candles().is_empty());
}

#[test]
fn test_chart_error_not_found() {
    let body = json!({
        "chart": {
            "result": null,
            "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
        }
    });
    let response: ChartResponse = serde_json::from_value(body).unwrap();
    assert!(response.chart.error.unwrap().is_not_found());
}

#[test]
fn test_search_prefers_long_name_of_exact_match() {
    let body = json!({
        "quotes": [
            { "symbol": "AAPL.MX", "longname": "Apple Mexico" },
            { "symbol": "AAPL", "shortname": "Apple Inc.", "longname": "Apple Inc. Common Stock" }
        ]
    });
    let response: SearchResponse = serde_json::from_value(body).unwrap();
    assert_eq!(
        response.company_name("AAPL").as_deref(),
        Some("Apple Inc. Common Stock")
    );
}

#[test]
fn test_search_falls_back_to_short_name() {
    let body = json!({ "quotes": [{ "symbol": "PTT.BK", "shortname": "PTT PUBLIC COMPANY LIMITED" }] });
    let response: SearchResponse = serde_json::from_value(body).unwrap();
    assert_eq!(
        response.company_name("PTT.BK").as_deref(),
        Some("PTT PUBLIC COMPANY LIMITED")
    );
}

#[test]
fn test_search_without_match_has_no_name() {
    let body = json!({ "quotes": [{ "symbol": "MSFT", "longname": "Microsoft" }] });
    let response: SearchResponse = serde_json::from_value(body).unwrap();
    assert!(response.company_name("AAPL").is_none());

    let response: SearchResponse = serde_json::from_value(json!({})).unwrap();
    assert!(response.company_name("AAPL").is_none());
}
