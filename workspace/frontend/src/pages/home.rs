use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
struct FeatureProps {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

#[function_component(Feature)]
fn feature(props: &FeatureProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body items-center text-center">
                <i class={classes!("fas", props.icon, "text-4xl", "text-primary")}></i>
                <h2 class="card-title">{props.title}</h2>
                <p class="text-sm text-gray-500">{props.text}</p>
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="flex flex-col gap-8">
            <div class="hero bg-base-100 rounded-box shadow py-12">
                <div class="hero-content text-center">
                    <div class="max-w-xl">
                        <h1 class="text-5xl font-bold">{"Welcome to InsightDash"}</h1>
                        <p class="py-6">
                            {"Ask questions about your sales data in plain language and get charts back. "}
                            {"Forecast how a product will perform in the months ahead."}
                        </p>
                        <div class="flex gap-4 justify-center">
                            <Link<Route> to={Route::Charts} classes="btn btn-primary">
                                <i class="fas fa-chart-column"></i>{" Explore Charts"}
                            </Link<Route>>
                            <Link<Route> to={Route::Predictions} classes="btn btn-outline">
                                <i class="fas fa-chart-line"></i>{" Predict Performance"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <Feature
                    icon="fa-comments"
                    title="Natural language queries"
                    text="Describe the numbers you want to see; the backend works out the aggregation."
                />
                <Feature
                    icon="fa-chart-pie"
                    title="Four chart kinds"
                    text="Switch between bar, line, area and pie without asking again."
                />
                <Feature
                    icon="fa-wand-magic-sparkles"
                    title="Performance forecasts"
                    text="Predict profit, sales or units sold for a product, with a short written insight."
                />
            </div>
        </div>
    }
}
