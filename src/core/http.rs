//! HTTP endpoint server using Axum

use axum::{
    extract::{rejection::JsonRejection, Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::ServiceConfig;
use crate::error::AnalysisError;
use crate::metrics::Metrics;
use crate::models::analysis::AnalysisResult;
use crate::services::analysis::analyze_symbol;
use crate::services::market_data::MarketDataProvider;
use crate::services::yahoo::YahooMarketDataProvider;

pub const SERVICE_NAME: &str = "stock-hunter";

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub provider: Arc<dyn MarketDataProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn MarketDataProvider>, metrics: Arc<Metrics>) -> Self {
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            provider,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub symbol: String,
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = match &self {
            AnalysisError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AnalysisError::InvalidSymbol(_) => StatusCode::BAD_REQUEST,
            AnalysisError::SymbolNotFound(_) => StatusCode::NOT_FOUND,
            AnalysisError::Indicator(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AnalysisError::MarketData(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Stock Hunter API. POST /analyze to run an analysis."
    }))
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis() as u64,
            "HTTP request error"
        );
    }

    response
}

async fn run_analysis(
    state: &AppState,
    raw_symbol: &str,
) -> Result<Json<AnalysisResult>, AnalysisError> {
    let today = Utc::now().date_naive();
    match analyze_symbol(state.provider.as_ref(), raw_symbol, today).await {
        Ok(result) => {
            state.metrics.analyses_total.inc();
            Ok(Json(result))
        }
        Err(e) => {
            match &e {
                AnalysisError::SymbolNotFound(_) => state.metrics.analyses_not_found_total.inc(),
                AnalysisError::MarketData(_) => {
                    state.metrics.upstream_errors_total.inc();
                    error!(symbol = %raw_symbol, error = %e, "Market data provider failed");
                }
                _ => warn!(symbol = %raw_symbol, error = %e, "Analysis rejected"),
            }
            Err(e)
        }
    }
}

/// Analyze the symbol named in the JSON body
async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AnalysisError> {
    let Json(request) =
        payload.map_err(|rejection| AnalysisError::InvalidRequest(rejection.body_text()))?;
    run_analysis(&state, &request.symbol).await
}

/// Analyze the symbol named in the path
async fn analyze_by_path(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<AnalysisResult>, AnalysisError> {
    run_analysis(&state, &symbol).await
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/analyze", post(analyze))
        .route("/analyze/{symbol}", get(analyze_by_path))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: ServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let provider = Arc::new(YahooMarketDataProvider::new(&config)?);
    info!(base_url = %config.yahoo_base_url, "Yahoo Finance provider configured");

    let state = AppState::new(provider, metrics);
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
