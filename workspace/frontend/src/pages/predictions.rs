use charts::{ChartTheme, ForecastController};
use common::{DURATIONS, ForecastHorizon, METRICS, PRODUCTS};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api_client::forecast::predict_performance;
use crate::common::controller_hook::use_controller;
use crate::common::toast::ToastContext;
use crate::components::charts::forecast_panel::ForecastPanel;

#[derive(Properties, PartialEq)]
struct ChoiceProps {
    label: &'static str,
    options: Vec<&'static str>,
    selected: String,
    onchange: Callback<String>,
}

#[function_component(Choice)]
fn choice(props: &ChoiceProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            onchange.emit(select.value());
        })
    };

    html! {
        <div class="form-control">
            <label class="label"><span class="label-text">{props.label}</span></label>
            <select class="select select-bordered" {onchange}>
                {for props.options.iter().map(|option| html! {
                    <option value={*option} selected={*option == props.selected}>{*option}</option>
                })}
            </select>
        </div>
    }
}

#[function_component(PredictionsPage)]
pub fn predictions_page() -> Html {
    let controller = use_controller(ForecastController::new);
    let toast = use_context::<ToastContext>();

    let product = use_state(|| controller.borrow().product().to_string());
    let metric = use_state(|| controller.borrow().metric().to_string());
    let duration = use_state(|| controller.borrow().horizon().to_string());

    let run = {
        let controller = controller.clone();
        let (product, metric, duration) = (product.clone(), metric.clone(), duration.clone());
        Callback::from(move |_: ()| {
            let horizon = match duration.parse::<ForecastHorizon>() {
                Ok(horizon) => horizon,
                Err(err) => {
                    log::error!("Invalid duration {}: {}", *duration, err);
                    return;
                }
            };
            let Some((ticket, request)) =
                controller.update(|c| c.trigger((*product).clone(), (*metric).clone(), horizon))
            else {
                return;
            };
            controller.run(ticket, async move { predict_performance(&request).await }, toast.clone());
        })
    };

    let on_submit = {
        let run = run.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            run.emit(());
        })
    };

    let setter = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |value: String| state.set(value))
    };

    let (title, loading, view) = {
        let c = controller.borrow();
        (c.title(), c.is_loading(), c.view(&ChartTheme::default()))
    };

    html! {
        <div class="flex flex-col gap-6">
            <form class="card bg-base-100 shadow" onsubmit={on_submit}>
                <div class="card-body grid grid-cols-1 md:grid-cols-4 gap-4 items-end">
                    <Choice label="Product" options={PRODUCTS.to_vec()} selected={(*product).clone()} onchange={setter(&product)} />
                    <Choice label="Metric" options={METRICS.to_vec()} selected={(*metric).clone()} onchange={setter(&metric)} />
                    <Choice label="Duration" options={DURATIONS.to_vec()} selected={(*duration).clone()} onchange={setter(&duration)} />
                    <button type="submit" class="btn btn-primary" disabled={loading}>
                        if loading {
                            <span class="loading loading-spinner loading-sm"></span>
                            {"Predicting..."}
                        } else {
                            <i class="fas fa-wand-magic-sparkles"></i>
                            {"Predict"}
                        }
                    </button>
                </div>
            </form>

            <ForecastPanel {title} {view} on_retry={Some(run)} />
        </div>
    }
}
