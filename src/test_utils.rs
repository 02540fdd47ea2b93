use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use common::api::{GENERATE_CHART_PATH, PREDICT_PERFORMANCE_PATH};
use common::{ChartQueryRequest, ForecastHorizon, ForecastRequest};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::client::BackendClient;
use crate::config::ClientConfig;

/// Queries containing this never get an answer before the test timeout.
pub const SLOW_QUERY_MARKER: &str = "slow";
/// Queries containing this make the fake backend report an aggregation error.
pub const FAILING_QUERY_MARKER: &str = "broken";
/// Product the fake forecast backend has no history for.
pub const UNKNOWN_PRODUCT: &str = "Unicycle";
/// Product the fake forecast backend answers with an empty series for.
pub const EMPTY_PRODUCT: &str = "Tandem";

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is read from RUST_LOG and defaults to WARN.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Mimics the query backend: categories are rewritten under `"name"` while
/// `xField` names the source column.
async fn generate_chart(Json(request): Json<ChartQueryRequest>) -> Response {
    let query = request.query.to_lowercase();

    if query.contains(SLOW_QUERY_MARKER) {
        tokio::time::sleep(Duration::from_secs(5)).await;
    }

    if query.contains(FAILING_QUERY_MARKER) {
        return Json(json!({
            "error": "MongoDB aggregation failed",
            "exception": "unknown pipeline stage",
            "query": [{"$bogus": {}}],
        }))
        .into_response();
    }

    let y_fields = if query.contains("sales") {
        json!(["profit", "sales"])
    } else {
        json!(["profit"])
    };

    Json(json!({
        "data": [
            {"name": "Canada", "profit": 120, "sales": 400},
            {"name": "France", "profit": 95, "sales": 310},
        ],
        "xField": "Country",
        "yFields": y_fields,
        "query": [{"$match": {"Year": 2014}}, {"$group": {"_id": "$Country"}}],
    }))
    .into_response()
}

async fn predict_performance(Json(request): Json<ForecastRequest>) -> Response {
    if request.product == UNKNOWN_PRODUCT {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "No data found for this product."})),
        )
            .into_response();
    }

    let Ok(horizon) = request.duration.parse::<ForecastHorizon>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Invalid duration format"})),
        )
            .into_response();
    };

    if request.product == EMPTY_PRODUCT {
        return Json(json!({
            "product": request.product,
            "target_metric": request.target_metric,
            "duration": request.duration,
            "forecast": [],
            "insight": "Not enough history to forecast.",
        }))
        .into_response();
    }

    let forecast: Vec<_> = (1..=horizon.months())
        .map(|month| json!({"month": format!("2015-{:02}", month), "predicted_value": 1000.0 + month as f64 * 25.0}))
        .collect();

    Json(json!({
        "product": request.product,
        "target_metric": request.target_metric,
        "duration": request.duration,
        "forecast": forecast,
        "insight": format!("{} {} is expected to grow steadily.", request.product, request.target_metric),
    }))
    .into_response()
}

pub fn fake_backend() -> Router {
    Router::new()
        .route(GENERATE_CHART_PATH, post(generate_chart))
        .route(PREDICT_PERFORMANCE_PATH, post(predict_performance))
}

/// Serves the fake backend on an ephemeral local port.
pub async fn spawn_fake_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake backend");
    let addr = listener.local_addr().expect("Fake backend has no local address");
    tokio::spawn(async move {
        axum::serve(listener, fake_backend())
            .await
            .expect("Fake backend stopped");
    });
    addr
}

/// Client pointed at a fresh fake backend.
pub async fn setup_test_client(timeout: Duration) -> BackendClient {
    let addr = spawn_fake_backend().await;
    let mut config = ClientConfig::new(&format!("http://{}", addr), 60, None).expect("Invalid test config");
    config.timeout = timeout;
    BackendClient::new(config).expect("Failed to build test client")
}
