use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod common;
pub mod settings;

use crate::common::toast::ToastProvider;
use components::layout::layout::Layout;
use pages::charts::ChartsPage;
use pages::home::Home;
use pages::predictions::PredictionsPage;
use pages::settings::SettingsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/charts")]
    Charts,
    #[at("/predictions")]
    Predictions,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => html! { <Layout title="Home"><Home /></Layout> },
        Route::Charts => {
            log::trace!("Rendering Charts page");
            html! { <Layout title="Charts"><ChartsPage /></Layout> }
        }
        Route::Predictions => {
            log::trace!("Rendering Predictions page");
            html! { <Layout title="Predictions"><PredictionsPage /></Layout> }
        }
        Route::Settings => html! { <Layout title="Settings"><SettingsPage /></Layout> },
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== InsightDash Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
