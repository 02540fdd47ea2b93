use charts::{ChartContent, ChartView, Figure};
use common::ChartKind;
use yew::prelude::*;

use super::plot::Plot;
use crate::common::error::ErrorDisplay;
use crate::common::loading::ChartPlaceholder;

#[derive(Properties, PartialEq)]
pub struct ChartPanelProps {
    pub view: ChartView,
    pub kind: ChartKind,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// The chart area of the query page.
#[function_component(ChartPanel)]
pub fn chart_panel(props: &ChartPanelProps) -> Html {
    let loading = props.view.loading;

    let body = match &props.view.content {
        ChartContent::Placeholder => html! { <ChartPlaceholder busy={loading} /> },
        ChartContent::Rendered(chart) => {
            let figure = Figure::from_chart(chart, None);
            html! { <Plot id="query-chart" {figure} /> }
        }
        ChartContent::Diagnostic(diagnostic) => html! {
            <div class="flex justify-center items-center h-96">
                <p class="text-error font-semibold">{diagnostic.message()}</p>
            </div>
        },
        ChartContent::Failed(message) => html! {
            <ErrorDisplay
                title="Could not get your chart"
                message={message.clone()}
                on_retry={props.on_retry.clone()}
            />
        },
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h2 class="card-title">{props.kind.title()}</h2>
                    if loading {
                        <span class="loading loading-spinner loading-sm"></span>
                    }
                </div>
                {body}
            </div>
        </div>
    }
}
