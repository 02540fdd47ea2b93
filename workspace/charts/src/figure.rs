//! plotly.js figures built from [`RenderedChart`]s. The same JSON is handed
//! to `Plotly.newPlot` in the browser and embedded in the CLI's HTML pages.

use serde::Serialize;
use serde_json::{Value, json};

use crate::chart::{CartesianChart, PieChart, RenderedChart, SeriesMark};

pub const DEFAULT_HEIGHT: u32 = 400;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
    pub config: Value,
}

impl Figure {
    pub fn from_chart(chart: &RenderedChart, title: Option<&str>) -> Self {
        Self::with_height(chart, title, DEFAULT_HEIGHT)
    }

    pub fn with_height(chart: &RenderedChart, title: Option<&str>, height: u32) -> Self {
        let data = match chart {
            RenderedChart::Cartesian(chart) => cartesian_traces(chart),
            RenderedChart::Pie(chart) => vec![pie_trace(chart)],
        };

        let top_margin = if title.is_some() { 50 } else { 20 };
        let mut layout = json!({
            "height": height,
            "margin": {"t": top_margin, "r": 20, "l": 60, "b": 50},
            "paper_bgcolor": "rgba(0,0,0,0)",
            "plot_bgcolor": "rgba(0,0,0,0)",
            "showlegend": true,
            "legend": {"orientation": "h", "y": -0.2},
        });

        if let RenderedChart::Cartesian(chart) = chart {
            layout["xaxis"] = json!({
                "type": "category",
                "title": {"text": chart.category_field},
                "showgrid": false,
            });
            layout["yaxis"] = json!({"showgrid": true, "gridcolor": "#eee", "rangemode": "tozero"});
        }
        if let Some(title) = title {
            layout["title"] = json!({"text": title});
        }

        Self {
            data,
            layout,
            config: json!({"responsive": true, "displayModeBar": false}),
        }
    }
}

fn cartesian_traces(chart: &CartesianChart) -> Vec<Value> {
    chart
        .series
        .iter()
        .map(|series| {
            let mut trace = json!({
                "x": chart.categories,
                "y": series.values,
                "name": series.field,
            });
            let style = match chart.mark {
                SeriesMark::Bar => json!({
                    "type": "bar",
                    "marker": {"color": series.color},
                }),
                SeriesMark::Line => json!({
                    "type": "scatter",
                    "mode": "lines+markers",
                    "line": {"color": series.color, "width": 2},
                }),
                SeriesMark::Area => json!({
                    "type": "scatter",
                    "mode": "lines",
                    "fill": "tozeroy",
                    "fillcolor": series.color,
                    "line": {"color": series.color},
                }),
            };
            if let (Some(trace), Value::Object(style)) = (trace.as_object_mut(), style) {
                trace.extend(style);
            }
            trace
        })
        .collect()
}

fn pie_trace(chart: &PieChart) -> Value {
    let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
    let values: Vec<Option<f64>> = chart.slices.iter().map(|s| s.value).collect();
    let colors: Vec<&str> = chart.slices.iter().map(|s| s.color.as_str()).collect();

    json!({
        "type": "pie",
        "name": chart.value_field,
        "labels": labels,
        "values": values,
        "marker": {"colors": colors},
        "sort": false,
        "direction": "clockwise",
        "textinfo": "label+percent",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::ChartDispatcher;
    use crate::testing::{profit_by_country, selection};
    use common::{ChartKind, Dataset};

    fn figure(kind: ChartKind, values: &[&str]) -> Figure {
        let chart = ChartDispatcher::default()
            .render(kind, &profit_by_country(), &selection("name", values))
            .unwrap();
        Figure::from_chart(&chart, Some("Profit by country"))
    }

    #[test]
    fn test_bar_figure_has_one_trace_per_series() {
        let figure = figure(ChartKind::Bar, &["profit", "sales"]);
        assert_eq!(figure.data.len(), 2);
        assert_eq!(figure.data[0]["type"], "bar");
        assert_eq!(figure.data[0]["name"], "profit");
        assert_eq!(figure.data[0]["marker"]["color"], "#6366F1");
        assert_eq!(figure.data[1]["marker"]["color"], "#22D3EE");
        assert_eq!(figure.data[0]["x"], json!(["Canada", "France", "Germany"]));
        assert_eq!(figure.data[1]["y"], json!([400.0, 310.0, 520.0]));
        assert_eq!(figure.layout["xaxis"]["type"], "category");
        assert_eq!(figure.layout["title"]["text"], "Profit by country");
    }

    #[test]
    fn test_line_and_area_use_scatter_traces() {
        let line = figure(ChartKind::Line, &["profit"]);
        assert_eq!(line.data[0]["type"], "scatter");
        assert_eq!(line.data[0]["line"]["width"], 2);
        assert!(line.data[0].get("fill").is_none());

        let area = figure(ChartKind::Area, &["profit"]);
        assert_eq!(area.data[0]["type"], "scatter");
        assert_eq!(area.data[0]["fill"], "tozeroy");
    }

    #[test]
    fn test_pie_figure_keeps_row_order() {
        let figure = figure(ChartKind::Pie, &["profit"]);
        assert_eq!(figure.data.len(), 1);
        let trace = &figure.data[0];
        assert_eq!(trace["type"], "pie");
        assert_eq!(trace["labels"], json!(["Canada", "France", "Germany"]));
        assert_eq!(trace["values"], json!([120.0, 95.0, 150.0]));
        assert_eq!(trace["sort"], false);
        assert!(figure.layout.get("xaxis").is_none());
    }

    #[test]
    fn test_gaps_serialize_as_null() {
        let dataset = Dataset::new(vec![
            common::Row::new().with("name", "Canada").with("profit", common::FieldValue::Null),
        ]);
        let chart = ChartDispatcher::default()
            .render(ChartKind::Bar, &dataset, &selection("name", &["profit"]))
            .unwrap();
        let figure = Figure::with_height(&chart, None, 300);
        assert_eq!(figure.data[0]["y"], json!([null]));
        assert_eq!(figure.layout["height"], 300);
        assert!(figure.layout.get("title").is_none());
    }
}
