//! Yahoo Finance REST client

use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::models::indicators::Candle;
use crate::services::market_data::MarketDataError;

use super::messages::{ChartResponse, SearchResponse};

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";
const HISTORY_RANGE: &str = "5y";
const HISTORY_INTERVAL: &str = "1wk";
const MAX_RETRIES: usize = 3;
const MAX_ERROR_BODY: usize = 200;

pub struct YahooRestClient {
    base_url: Url,
    http: Client,
}

impl YahooRestClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, MarketDataError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Self::with_client(base_url, http)
    }

    pub fn with_client(base_url: &str, http: Client) -> Result<Self, MarketDataError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| MarketDataError::Parse(format!("invalid base url '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(MarketDataError::Parse(format!(
                "base url '{}' cannot carry a path",
                base_url
            )));
        }
        Ok(Self { base_url, http })
    }

    /// Weekly candles covering the last five years.
    pub async fn weekly_chart(&self, symbol: &str) -> Result<Vec<Candle>, MarketDataError> {
        let url = self.endpoint(&["v8", "finance", "chart", symbol]);
        let query = [("range", HISTORY_RANGE), ("interval", HISTORY_INTERVAL)];

        let response: ChartResponse = self
            .get_with_retry(symbol, url, &query)
            .await?;

        if let Some(error) = response.chart.error {
            if error.is_not_found() {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            return Err(MarketDataError::Upstream {
                status: StatusCode::OK.as_u16(),
                message: format!("{}: {}", error.code, error.description),
            });
        }

        let data = response
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        Ok(data.into_candles())
    }

    /// Symbol search, used for the company name.
    pub async fn search(&self, symbol: &str) -> Result<SearchResponse, MarketDataError> {
        let url = self.endpoint(&["v1", "finance", "search"]);
        let query = [("q", symbol), ("quotesCount", "1"), ("newsCount", "0")];
        self.get_with_retry(symbol, url, &query).await
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in the constructor.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_with_retry<T: DeserializeOwned>(
        &self,
        symbol: &str,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, MarketDataError> {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(200))
            .with_max_times(MAX_RETRIES);

        (|| self.get_json(symbol, url.clone(), query))
            .retry(backoff)
            .when(MarketDataError::is_transient)
            .notify(|error: &MarketDataError, delay: Duration| {
                warn!(
                    symbol = %symbol,
                    error = %error,
                    delay_ms = delay.as_millis() as u64,
                    "Yahoo request failed, retrying"
                );
            })
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        symbol: &str,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, MarketDataError> {
        debug!(url = %url, "Yahoo request");
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        if !status.is_success() {
            return Err(MarketDataError::Upstream {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| MarketDataError::Parse(e.to_string()))
    }
}
