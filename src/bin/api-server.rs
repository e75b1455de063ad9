//! Stock Hunter API Server
//!
//! HTTP API that finds strategic support levels for a ticker from five years
//! of weekly prices. Stateless; can be horizontally scaled.

use dotenvy::dotenv;
use stock_hunter::config::ServiceConfig;
use stock_hunter::core::http::start_server;
use stock_hunter::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = ServiceConfig::from_env();
    logging::init_logging(&config.environment);

    let port = config.port;
    info!("Starting Stock Hunter API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
