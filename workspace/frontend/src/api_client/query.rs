use common::api::GENERATE_CHART_PATH;
use common::{ChartQueryRequest, ChartQueryResponse, RequestError};

use crate::api_client;

/// Asks the query backend to turn a question into chart data.
pub async fn generate_chart(request: &ChartQueryRequest) -> Result<ChartQueryResponse, RequestError> {
    log::trace!("Generating {} chart for query: {}", request.chart_type, request.query);
    let response: ChartQueryResponse = api_client::post(GENERATE_CHART_PATH, request).await?;
    log::debug!(
        "Chart data: {} rows, x = {}, y = {:?}",
        response.data.len(),
        response.x_field,
        response.y_fields
    );
    Ok(response)
}
