use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use charts::query::{ChartContent, QueryController};
use charts::{ChartDispatcher, Figure, RenderedChart};
use common::{ChartKind, RequestError};
use tracing::{debug, info, warn};

use crate::client::BackendClient;
use crate::output::write_page;

#[derive(Debug)]
pub enum ChartOutcome {
    /// The chart was rendered and written to `path`.
    Written { path: PathBuf, chart: RenderedChart },
    /// The data came back but cannot be drawn as requested.
    Diagnostic(String),
}

/// Sends `query` to the query backend and writes the chart it answers with.
///
/// Backend failures are errors; a result that cannot be drawn as `kind` is a
/// [`ChartOutcome::Diagnostic`] and nothing is written.
pub async fn chart(client: &BackendClient, query: &str, kind: ChartKind, out: &Path) -> Result<ChartOutcome> {
    let dispatcher = ChartDispatcher::new(&client.config().theme);
    let mut controller = QueryController::new();

    let (ticket, request) = controller
        .trigger(query, kind)
        .context("A chart request is already in flight")?;
    info!(%kind, "Generating chart for \"{}\"", query);

    match client.generate_chart(&request).await {
        Err(RequestError::TimedOut { after_ms }) => {
            controller.expire(ticket, after_ms);
        }
        result => {
            controller.resolve(ticket, result);
        }
    }

    match controller.view(&dispatcher).content {
        ChartContent::Rendered(chart) => {
            debug!(series = chart.series_count(), points = chart.categories().len(), "Chart rendered");
            let figure = Figure::from_chart(&chart, Some(query));
            write_page(out, query, &figure, None)?;
            Ok(ChartOutcome::Written {
                path: out.to_path_buf(),
                chart,
            })
        }
        ChartContent::Diagnostic(diagnostic) => {
            warn!(?diagnostic, "Chart not drawn");
            Ok(ChartOutcome::Diagnostic(diagnostic.message()))
        }
        ChartContent::Failed(reason) => bail!(reason),
        ChartContent::Placeholder => bail!("No chart data received"),
    }
}
