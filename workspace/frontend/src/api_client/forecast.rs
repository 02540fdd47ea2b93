use common::api::PREDICT_PERFORMANCE_PATH;
use common::{ForecastRequest, ForecastResponse, RequestError};

use crate::api_client;

pub async fn predict_performance(request: &ForecastRequest) -> Result<ForecastResponse, RequestError> {
    log::trace!(
        "Predicting {} for {} over {}",
        request.target_metric,
        request.product,
        request.duration
    );
    let response: ForecastResponse = api_client::post(PREDICT_PERFORMANCE_PATH, request).await?;
    log::debug!("Forecast returned {} points", response.forecast.len());
    Ok(response)
}
