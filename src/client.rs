use common::api::{GENERATE_CHART_PATH, PREDICT_PERFORMANCE_PATH};
use common::{
    ChartQueryRequest, ChartQueryResponse, ForecastRequest, ForecastResponse, RequestError,
    decode_response,
};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::ClientConfig;

/// HTTP client for the query and forecast backends.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    config: ClientConfig,
}

impl BackendClient {
    pub fn new(config: ClientConfig) -> Result<Self, RequestError> {
        let http = Client::builder().build().map_err(RequestError::transport)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn generate_chart(&self, request: &ChartQueryRequest) -> Result<ChartQueryResponse, RequestError> {
        self.post(GENERATE_CHART_PATH, request).await
    }

    pub async fn predict_performance(&self, request: &ForecastRequest) -> Result<ForecastResponse, RequestError> {
        self.post(PREDICT_PERFORMANCE_PATH, request).await
    }

    /// Posts `body` as JSON and decodes the answer. The configured timeout is
    /// reported as [`RequestError::TimedOut`], not as a transport failure.
    #[instrument(skip(self, body))]
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);

        let exchange = async {
            let response = self
                .http
                .post(&url)
                .json(body)
                .send()
                .await
                .map_err(RequestError::transport)?;
            let status = response.status().as_u16();
            let text = response.text().await.map_err(RequestError::transport)?;
            debug!(status, bytes = text.len(), "Response received");
            Ok::<_, RequestError>((status, text))
        };

        let (status, text) = tokio::time::timeout(self.config.timeout, exchange)
            .await
            .map_err(|_| RequestError::TimedOut {
                after_ms: self.config.timeout_ms(),
            })??;

        decode_response(status, &text)
    }
}
