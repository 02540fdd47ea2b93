use charts::Figure;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    let text = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&text).map_err(|e| format!("{:?}", e))
}

fn draw(div_id: &str, figure: &Figure) -> Result<(), String> {
    new_plot(
        div_id,
        to_js(&figure.data)?,
        to_js(&figure.layout)?,
        to_js(&figure.config)?,
    )
    .map(|_| ())
    .map_err(|e| format!("Plotly failed: {:?}", e))
}

#[derive(Properties, PartialEq)]
pub struct PlotProps {
    /// DOM id of the plot container; must be unique on the page.
    pub id: AttrValue,
    pub figure: Figure,
}

/// Draws a [`Figure`] with Plotly whenever it changes.
#[function_component(Plot)]
pub fn plot(props: &PlotProps) -> Html {
    let height = props
        .figure
        .layout
        .get("height")
        .and_then(|h| h.as_u64())
        .unwrap_or(u64::from(charts::figure::DEFAULT_HEIGHT));

    use_effect_with((props.id.clone(), props.figure.clone()), |(id, figure)| {
        log::trace!("Drawing {} trace(s) into #{}", figure.data.len(), id);
        if let Err(err) = draw(id, figure) {
            log::error!("Failed to draw chart #{}: {}", id, err);
        }
        || ()
    });

    html! {
        <div id={props.id.clone()} class="chart-container w-full" style={format!("height: {}px;", height)}></div>
    }
}
