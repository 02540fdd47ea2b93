use charts::{Figure, ForecastView};
use yew::prelude::*;

use super::plot::Plot;
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct ForecastPanelProps {
    pub title: String,
    pub view: ForecastView,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[derive(Properties, PartialEq)]
struct InsightCardProps {
    insight: String,
}

#[function_component(InsightCard)]
fn insight_card(props: &InsightCardProps) -> Html {
    html! {
        <div class="alert alert-info mt-4">
            <i class="fas fa-lightbulb"></i>
            <div>
                <h3 class="font-bold">{"Insight"}</h3>
                <p class="text-sm">{&props.insight}</p>
            </div>
        </div>
    }
}

#[function_component(ForecastPanel)]
pub fn forecast_panel(props: &ForecastPanelProps) -> Html {
    let body = match &props.view {
        ForecastView::InProgress => html! { <Loading text={Some("Getting your chart".to_string())} /> },
        ForecastView::NoData { insight } => html! {
            <>
                <div class="flex justify-center items-center h-64 text-gray-400">
                    <p>{"No data yet. Run prediction."}</p>
                </div>
                if let Some(insight) = insight {
                    <InsightCard insight={insight.clone()} />
                }
            </>
        },
        ForecastView::Chart { chart, insight } => {
            let figure = Figure::from_chart(chart, None);
            html! {
                <>
                    <Plot id="forecast-chart" {figure} />
                    if !insight.is_empty() {
                        <InsightCard insight={insight.clone()} />
                    }
                </>
            }
        }
        ForecastView::Failed(message) => html! {
            <ErrorDisplay
                title="Prediction failed"
                message={message.clone()}
                on_retry={props.on_retry.clone()}
            />
        },
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{&props.title}</h2>
                {body}
            </div>
        </div>
    }
}
