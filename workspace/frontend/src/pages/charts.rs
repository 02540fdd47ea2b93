use std::str::FromStr;

use charts::{QueryController, default_dispatcher};
use common::ChartKind;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api_client::query::generate_chart;
use crate::common::controller_hook::use_controller;
use crate::common::toast::ToastContext;
use crate::components::charts::chart_panel::ChartPanel;
use crate::settings;

const EXAMPLE_QUERIES: [&str; 3] = [
    "Total profit by country in 2014",
    "Units sold per segment",
    "Sales by product in 2013",
];

#[function_component(DemoDataHint)]
fn demo_data_hint() -> Html {
    html! {
        <div class="alert bg-base-100 shadow items-start">
            <i class="fas fa-database text-primary mt-1"></i>
            <div class="text-sm flex flex-col gap-1">
                <span class="font-semibold">{"The demo dataset covers"}</span>
                <span><b>{"Years: "}</b>{"2013, 2014"}</span>
                <span><b>{"Countries: "}</b>{"Canada, France, Germany, Mexico, United States of America"}</span>
                <span><b>{"Segments: "}</b>{"Channel Partners, Enterprise, Government, Midmarket, Small Business"}</span>
                <span><b>{"Products: "}</b>{common::PRODUCTS.join(", ")}</span>
                <span><b>{"Metrics: "}</b>
                    {"COGS, Profit, Sales, Units Sold, Gross Sales, Discounts, Discount Band, Manufacturing Price, Sale Price"}
                </span>
                <span><b>{"Try: "}</b>{EXAMPLE_QUERIES.join(" · ")}</span>
            </div>
        </div>
    }
}

#[function_component(ChartsPage)]
pub fn charts_page() -> Html {
    let controller = use_controller(QueryController::new);
    let toast = use_context::<ToastContext>();
    let dispatcher = use_memo((), |_| default_dispatcher(settings::get_settings().palette()).1);

    let run = {
        let controller = controller.clone();
        let toast = toast.clone();
        Callback::from(move |(query, kind): (String, ChartKind)| {
            let Some((ticket, request)) = controller.update(|c| c.trigger(query, kind)) else {
                return;
            };
            controller.run(ticket, async move { generate_chart(&request).await }, toast.clone());
        })
    };

    let on_submit = {
        let controller = controller.clone();
        let run = run.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (query, kind) = {
                let c = controller.borrow();
                (c.query().trim().to_string(), c.kind())
            };
            if !query.is_empty() {
                run.emit((query, kind));
            }
        })
    };

    let on_retry = {
        let controller = controller.clone();
        let run = run.clone();
        Callback::from(move |_| {
            let (query, kind) = {
                let c = controller.borrow();
                (c.query().to_string(), c.kind())
            };
            run.emit((query, kind));
        })
    };

    let on_query_input = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            controller.update(|c| c.set_query(input.value()));
        })
    };

    let on_kind_change = {
        let controller = controller.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match ChartKind::from_str(&select.value()) {
                Ok(kind) => controller.update(|c| c.set_kind(kind)),
                Err(err) => log::warn!("{}", err),
            }
        })
    };

    let (query, kind, loading, view) = {
        let c = controller.borrow();
        (c.query().to_string(), c.kind(), c.is_loading(), c.view(&dispatcher))
    };

    html! {
        <div class="flex flex-col gap-6">
            <DemoDataHint />

            <form class="card bg-base-100 shadow" onsubmit={on_submit}>
                <div class="card-body flex flex-col md:flex-row gap-4 md:items-end">
                    <div class="form-control flex-1">
                        <label class="label"><span class="label-text">{"Ask a question"}</span></label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            placeholder={EXAMPLE_QUERIES[0]}
                            value={query.clone()}
                            oninput={on_query_input}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Chart type"}</span></label>
                        <select class="select select-bordered" onchange={on_kind_change}>
                            {for ChartKind::ALL.iter().map(|k| html! {
                                <option value={k.as_str()} selected={*k == kind}>{k.title()}</option>
                            })}
                        </select>
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={loading || query.trim().is_empty()}>
                        if loading {
                            <span class="loading loading-spinner loading-sm"></span>
                            {"Generating..."}
                        } else {
                            <i class="fas fa-play"></i>
                            {"Generate"}
                        }
                    </button>
                </div>
            </form>

            <ChartPanel {view} {kind} on_retry={Some(on_retry)} />
        </div>
    }
}
