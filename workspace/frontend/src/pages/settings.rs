use charts::Palette;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::settings::{self, AppSettings};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Properties, PartialEq)]
struct TextSettingProps {
    label: &'static str,
    setting: &'static str,
    draft: UseStateHandle<AppSettings>,
    #[prop_or_default]
    placeholder: &'static str,
}

/// Text input bound to one stored setting of the draft.
#[function_component(TextSetting)]
fn text_setting(props: &TextSettingProps) -> Html {
    let oninput = {
        let draft = props.draft.clone();
        let setting = props.setting;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.apply_stored(setting, &input.value());
            draft.set(next);
        })
    };

    html! {
        <div class="form-control w-full">
            <label class="label"><span class="label-text">{props.label}</span></label>
            <input
                type="text"
                class="input input-bordered w-full"
                placeholder={props.placeholder}
                value={props.draft.stored_value(props.setting).unwrap_or_default()}
                {oninput}
            />
        </div>
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let draft = use_state(settings::get_settings);
    let toast = use_context::<ToastContext>();

    let on_https = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.apply_stored("api_use_https", &input.checked().to_string());
            draft.set(next);
        })
    };

    let on_log_level = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.apply_stored("log_level", &select.value());
            draft.set(next);
        })
    };

    let on_save = {
        let draft = draft.clone();
        Callback::from(move |_| {
            let next = (*draft).clone();
            if let Some(list) = next.series_palette.as_deref() {
                if let Err(err) = Palette::parse(list) {
                    if let Some(toast) = &toast {
                        toast.show_error(format!("Invalid series palette: {}", err));
                    }
                    return;
                }
            }

            log::info!("Saving settings, API base URL {}", next.api_base_url());
            match next.save_to_storage() {
                Ok(()) => {
                    log::set_max_level(next.log_level.to_level_filter());
                    settings::update_settings(|s| *s = next.clone());
                    if let Some(toast) = &toast {
                        toast.show_success("Settings saved");
                    }
                }
                Err(err) => {
                    log::error!("Failed to save settings: {:?}", err);
                    if let Some(toast) = &toast {
                        toast.show_error("Could not save settings to local storage");
                    }
                }
            }
        })
    };

    let current_level = draft.log_level.as_str().to_lowercase();

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Connection Settings"}</h2>
                    <TextSetting label="API host" setting="api_host" draft={draft.clone()} />
                    <TextSetting label="API port" setting="api_port" draft={draft.clone()} />
                    <TextSetting label="API path prefix" setting="api_path" draft={draft.clone()} placeholder="Empty when served at the root" />
                    <TextSetting label="Request timeout (ms)" setting="request_timeout_ms" draft={draft.clone()} />
                    <div class="form-control mt-2">
                        <label class="label cursor-pointer justify-start gap-4">
                            <input type="checkbox" class="toggle toggle-primary" checked={draft.api_use_https} onchange={on_https} />
                            <span class="label-text">{"Use HTTPS"}</span>
                        </label>
                    </div>
                    <p class="text-sm text-gray-500 mt-2">{"Requests go to "}<code>{draft.api_base_url()}</code></p>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Display Settings"}</h2>
                    <TextSetting label="Series colors" setting="series_palette" draft={draft.clone()} placeholder="#8884d8,#82ca9d,#ffc658" />
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"Log level"}</span></label>
                        <select class="select select-bordered" onchange={on_log_level}>
                            {for LOG_LEVELS.iter().map(|level| html! {
                                <option value={*level} selected={*level == current_level}>{*level}</option>
                            })}
                        </select>
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" onclick={on_save}>{"Save"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
