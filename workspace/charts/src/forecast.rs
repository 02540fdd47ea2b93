//! Forecast request flow: product, metric and horizon in, predicted series
//! plus narrative insight out.

use common::{
    DEFAULT_METRIC, DEFAULT_PRODUCT, Dataset, ForecastHorizon, ForecastPoint, ForecastRequest,
    ForecastResponse, RequestError, Row,
};
use tracing::debug;

use crate::chart::RenderedChart;
use crate::palette::ChartTheme;
use crate::render::{CartesianRenderer, ChartRenderer};
use crate::request::{RequestController, RequestState, Resolution, Ticket, TriggerPolicy};

pub const PERIOD_FIELD: &str = "period";
pub const PREDICTED_VALUE_FIELD: &str = "predicted_value";

/// Series and insight from one successful forecast. Bound together.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub series: Vec<ForecastPoint>,
    pub insight: String,
}

impl From<ForecastResponse> for ForecastResult {
    fn from(response: ForecastResponse) -> Self {
        Self {
            series: response.forecast,
            insight: response.insight,
        }
    }
}

impl ForecastResult {
    /// The series as chartable rows, in the order the backend returned it.
    pub fn dataset(&self) -> Dataset {
        self.series
            .iter()
            .map(|point| {
                Row::new()
                    .with(PERIOD_FIELD, point.period.as_str())
                    .with(PREDICTED_VALUE_FIELD, point.predicted_value)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForecastView {
    InProgress,
    /// Nothing to plot. Carries the insight when a response had one.
    NoData { insight: Option<String> },
    Chart { chart: RenderedChart, insight: String },
    Failed(String),
}

/// Owns the product, metric and horizon selections and the bound forecast.
#[derive(Debug, Clone)]
pub struct ForecastController {
    product: String,
    metric: String,
    horizon: ForecastHorizon,
    request: RequestController<ForecastResult>,
}

impl Default for ForecastController {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastController {
    pub fn new() -> Self {
        Self {
            product: DEFAULT_PRODUCT.to_string(),
            metric: DEFAULT_METRIC.to_string(),
            horizon: ForecastHorizon::default(),
            request: RequestController::new(TriggerPolicy::ClearPrevious),
        }
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn metric(&self) -> &str {
        &self.metric
    }

    pub fn horizon(&self) -> ForecastHorizon {
        self.horizon
    }

    /// `"{product} - {metric} Forecast"`
    pub fn title(&self) -> String {
        format!("{} - {} Forecast", self.product, self.metric)
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_loading()
    }

    pub fn state(&self) -> RequestState<&ForecastResult> {
        self.request.state()
    }

    pub fn result(&self) -> Option<&ForecastResult> {
        self.request.bound()
    }

    /// Records the selections and starts a request, clearing the previous
    /// forecast. `None` while a request is already in flight.
    pub fn trigger(
        &mut self,
        product: impl Into<String>,
        metric: impl Into<String>,
        horizon: ForecastHorizon,
    ) -> Option<(Ticket, ForecastRequest)> {
        if self.request.is_loading() {
            debug!("Forecast request already in flight");
            return None;
        }

        self.product = product.into();
        self.metric = metric.into();
        self.horizon = horizon;
        let ticket = self.request.trigger()?;
        Some((
            ticket,
            ForecastRequest {
                product: self.product.clone(),
                duration: self.horizon.to_string(),
                target_metric: self.metric.clone(),
            },
        ))
    }

    pub fn resolve(&mut self, ticket: Ticket, result: Result<ForecastResponse, RequestError>) -> Resolution {
        self.request.resolve(ticket, result.map(ForecastResult::from))
    }

    pub fn expire(&mut self, ticket: Ticket, after_ms: u64) -> bool {
        self.request.expire(ticket, after_ms)
    }

    pub fn reset(&mut self) -> bool {
        self.request.reset()
    }

    pub fn view(&self, theme: &ChartTheme) -> ForecastView {
        match self.request.state() {
            RequestState::Loading => ForecastView::InProgress,
            RequestState::Failed(err) => ForecastView::Failed(err.to_string()),
            RequestState::Idle => ForecastView::NoData { insight: None },
            RequestState::Ready(result) if result.series.is_empty() => ForecastView::NoData {
                insight: Some(result.insight.clone()).filter(|insight| !insight.is_empty()),
            },
            RequestState::Ready(result) => {
                let renderer = CartesianRenderer::line(theme.forecast.clone());
                let fields = [PREDICTED_VALUE_FIELD.to_string()];
                match renderer.render(&result.dataset(), PERIOD_FIELD, &fields) {
                    Ok(chart) => ForecastView::Chart {
                        chart,
                        insight: result.insight.clone(),
                    },
                    Err(diagnostic) => ForecastView::Failed(diagnostic.message()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::SeriesMark;
    use crate::palette::FORECAST_COLORS;
    use crate::testing::forecast_response;
    use common::ChartKind;

    fn six_months() -> ForecastHorizon {
        "6 months".parse().unwrap()
    }

    #[test]
    fn test_defaults_and_title() {
        let controller = ForecastController::new();
        assert_eq!(controller.product(), "Paseo");
        assert_eq!(controller.metric(), "Profit");
        assert_eq!(controller.horizon().months(), 6);
        assert_eq!(controller.title(), "Paseo - Profit Forecast");
        assert_eq!(controller.view(&ChartTheme::default()), ForecastView::NoData { insight: None });
    }

    #[test]
    fn test_trigger_builds_backend_request() {
        let mut controller = ForecastController::new();
        let (_, request) = controller
            .trigger("Velo", "Units Sold", "1 year".parse().unwrap())
            .unwrap();
        assert_eq!(
            request,
            ForecastRequest {
                product: "Velo".to_string(),
                duration: "1 year".to_string(),
                target_metric: "Units Sold".to_string(),
            }
        );
        assert_eq!(controller.title(), "Velo - Units Sold Forecast");
        assert!(controller.trigger("Paseo", "Profit", six_months()).is_none());
    }

    #[test]
    fn test_scenario_paseo_profit_six_months() {
        let theme = ChartTheme::default();
        let mut controller = ForecastController::new();
        let (ticket, _) = controller.trigger("Paseo", "Profit", six_months()).unwrap();
        assert_eq!(controller.view(&theme), ForecastView::InProgress);

        let points = [
            ("2015-01", 100.0),
            ("2015-02", 104.5),
            ("2015-03", 98.0),
            ("2015-04", 110.0),
            ("2015-05", 115.0),
            ("2015-06", 121.0),
        ];
        controller.resolve(ticket, Ok(forecast_response(&points, "Profit keeps rising")));

        let ForecastView::Chart { chart, insight } = controller.view(&theme) else {
            panic!("expected forecast chart");
        };
        assert_eq!(insight, "Profit keeps rising");
        assert_eq!(chart.kind(), ChartKind::Line);
        assert_eq!(chart.series_count(), 1);
        assert_eq!(chart.categories(), points.iter().map(|(p, _)| *p).collect::<Vec<_>>());

        let RenderedChart::Cartesian(line) = chart else {
            panic!("expected cartesian chart");
        };
        assert_eq!(line.mark, SeriesMark::Line);
        assert_eq!(line.series[0].field, PREDICTED_VALUE_FIELD);
        assert_eq!(line.series[0].color, FORECAST_COLORS[0]);
        assert_eq!(line.series[0].values[1], Some(104.5));
    }

    #[test]
    fn test_new_trigger_clears_previous_forecast() {
        let theme = ChartTheme::default();
        let mut controller = ForecastController::new();
        let (ticket, _) = controller.trigger("Paseo", "Profit", six_months()).unwrap();
        controller.resolve(ticket, Ok(forecast_response(&[("2015-01", 1.0)], "up")));

        controller.trigger("Velo", "Sales", six_months()).unwrap();
        assert!(controller.result().is_none());
        assert_eq!(controller.view(&theme), ForecastView::InProgress);
    }

    #[test]
    fn test_empty_series_is_no_data_not_empty_frame() {
        let mut controller = ForecastController::new();
        let (ticket, _) = controller.trigger("Paseo", "Profit", six_months()).unwrap();
        controller.resolve(ticket, Ok(forecast_response(&[], "Not enough history")));

        assert_eq!(
            controller.view(&ChartTheme::default()),
            ForecastView::NoData {
                insight: Some("Not enough history".to_string())
            }
        );
    }

    #[test]
    fn test_failure_detail_is_shown() {
        let mut controller = ForecastController::new();
        let (ticket, _) = controller.trigger("Paseo", "Profit", six_months()).unwrap();
        controller.resolve(
            ticket,
            Err(RequestError::Status {
                status: 404,
                detail: "No data found for this product.".to_string(),
            }),
        );

        assert_eq!(
            controller.view(&ChartTheme::default()),
            ForecastView::Failed("HTTP error 404: No data found for this product.".to_string())
        );
    }

    #[test]
    fn test_stale_forecast_is_discarded() {
        let mut controller = ForecastController::new();
        let (a, _) = controller.trigger("Paseo", "Profit", six_months()).unwrap();
        controller.expire(a, 60_000);
        let (b, _) = controller.trigger("Velo", "Sales", six_months()).unwrap();

        controller.resolve(b, Ok(forecast_response(&[("2015-01", 2.0)], "B")));
        assert_eq!(
            controller.resolve(a, Ok(forecast_response(&[("2015-01", 1.0)], "A"))),
            Resolution::Stale
        );
        assert_eq!(controller.result().map(|r| r.insight.as_str()), Some("B"));
    }
}
