//! Wire types for the query and forecast backends plus the response
//! decoding both clients share.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{ChartKind, Dataset, ForecastPoint, RequestError};

pub const GENERATE_CHART_PATH: &str = "/generate-chart";
pub const PREDICT_PERFORMANCE_PATH: &str = "/predict/performance";

/// Body of `POST /generate-chart`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartQueryRequest {
    pub query: String,
    #[serde(rename = "chartType")]
    pub chart_type: ChartKind,
}

/// Successful answer of `POST /generate-chart`. Every field except `query`
/// is required; a body without them is malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartQueryResponse {
    pub data: Dataset,
    #[serde(rename = "xField")]
    pub x_field: String,
    #[serde(rename = "yFields")]
    pub y_fields: Vec<String>,
    /// The aggregation pipeline the backend ran, echoed for debugging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
}

/// Body of `POST /predict/performance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub product: String,
    pub duration: String,
    pub target_metric: String,
}

/// Successful answer of `POST /predict/performance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub forecast: Vec<ForecastPoint>,
    pub insight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Failure body. FastAPI errors carry `detail`; the chart endpoint reports
/// its own failures as `error` (with `exception` when something raised).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub exception: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl BackendErrorBody {
    /// Best human-readable message in the body, if any.
    pub fn message(&self) -> Option<String> {
        let base = self
            .error
            .as_ref()
            .or(self.detail.as_ref())
            .map(value_text)?;

        Some(match &self.exception {
            Some(exception) => format!("{} ({})", base, exception),
            None => base,
        })
    }
}

/// Turns an HTTP status and body into the expected response type.
///
/// Non-2xx statuses become [`RequestError::Status`], a 2xx body with an
/// `error` key becomes [`RequestError::Backend`], and anything that does not
/// deserialize into `T` is [`RequestError::Malformed`].
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, RequestError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<BackendErrorBody>(body)
            .ok()
            .and_then(|error_body| error_body.message())
            .unwrap_or_else(|| match body.trim() {
                "" => "no response body".to_string(),
                text => text.to_string(),
            });
        warn!(status, %detail, "Backend returned non-success status");
        return Err(RequestError::Status { status, detail });
    }

    let value: Value = serde_json::from_str(body).map_err(RequestError::malformed)?;

    if value.get("error").is_some() {
        let message = serde_json::from_value::<BackendErrorBody>(value)
            .ok()
            .and_then(|error_body| error_body.message())
            .unwrap_or_else(|| "unknown backend error".to_string());
        warn!(%message, "Backend reported an error");
        return Err(RequestError::Backend { message });
    }

    debug!("Decoding {} byte response body", body.len());
    serde_json::from_value(value).map_err(RequestError::malformed)
}
