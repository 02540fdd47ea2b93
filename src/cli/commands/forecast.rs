use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use charts::forecast::{ForecastController, ForecastView};
use charts::Figure;
use common::{ForecastHorizon, RequestError};
use tracing::info;

use crate::client::BackendClient;
use crate::output::write_page;

#[derive(Debug, PartialEq)]
pub enum ForecastOutcome {
    Written { path: PathBuf, insight: String },
    /// The backend returned an empty series; nothing is written.
    NoData { insight: Option<String> },
}

/// Requests a forecast and writes the predicted series with its insight.
pub async fn forecast(
    client: &BackendClient,
    product: &str,
    metric: &str,
    horizon: ForecastHorizon,
    out: &Path,
) -> Result<ForecastOutcome> {
    let mut controller = ForecastController::new();

    let (ticket, request) = controller
        .trigger(product, metric, horizon)
        .context("A forecast request is already in flight")?;
    info!(product, metric, %horizon, "Requesting forecast");

    match client.predict_performance(&request).await {
        Err(RequestError::TimedOut { after_ms }) => {
            controller.expire(ticket, after_ms);
        }
        result => {
            controller.resolve(ticket, result);
        }
    }

    match controller.view(&client.config().theme) {
        ForecastView::Chart { chart, insight } => {
            let title = controller.title();
            let figure = Figure::from_chart(&chart, Some(&title));
            write_page(out, &title, &figure, Some(&insight))?;
            Ok(ForecastOutcome::Written {
                path: out.to_path_buf(),
                insight,
            })
        }
        ForecastView::NoData { insight } => Ok(ForecastOutcome::NoData { insight }),
        ForecastView::Failed(reason) => bail!(reason),
        ForecastView::InProgress => bail!("Forecast request did not complete"),
    }
}
