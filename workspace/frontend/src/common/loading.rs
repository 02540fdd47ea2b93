use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub size: LoadingSize,
    #[prop_or_default]
    pub text: Option<String>,
}

#[derive(Clone, PartialEq, Default)]
pub enum LoadingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LoadingSize {
    fn class(&self) -> &'static str {
        match self {
            LoadingSize::Small => "loading-sm",
            LoadingSize::Medium => "loading-md",
            LoadingSize::Large => "loading-lg",
        }
    }
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            <span class={classes!("loading", "loading-spinner", props.size.class())}></span>
            {if let Some(text) = &props.text {
                html! { <p class="text-sm text-gray-500">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}

/// Shown in the chart area while nothing can be drawn yet.
#[derive(Properties, PartialEq)]
pub struct ChartPlaceholderProps {
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(ChartPlaceholder)]
pub fn chart_placeholder(props: &ChartPlaceholderProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center h-96 gap-4 text-gray-400">
            if props.busy {
                <span class="loading loading-spinner loading-lg"></span>
            } else {
                <i class="fas fa-chart-bar text-5xl"></i>
            }
            <p class="text-sm">{"Getting your chart"}</p>
        </div>
    }
}
