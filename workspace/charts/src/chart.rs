use common::ChartKind;
use serde::Serialize;

/// How a cartesian series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesMark {
    Bar,
    Line,
    Area,
}

impl SeriesMark {
    pub fn kind(&self) -> ChartKind {
        match self {
            SeriesMark::Bar => ChartKind::Bar,
            SeriesMark::Line => ChartKind::Line,
            SeriesMark::Area => ChartKind::Area,
        }
    }
}

/// One plotted measure. `values` lines up with the chart's categories; a
/// `None` is a gap where the row had no usable number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub field: String,
    pub color: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartesianChart {
    pub mark: SeriesMark,
    pub category_field: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: Option<f64>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub category_field: String,
    pub value_field: String,
    pub slices: Vec<Slice>,
}

/// Renderer output: everything needed to draw a chart, independent of the
/// drawing library.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderedChart {
    Cartesian(CartesianChart),
    Pie(PieChart),
}

impl RenderedChart {
    pub fn kind(&self) -> ChartKind {
        match self {
            RenderedChart::Cartesian(chart) => chart.mark.kind(),
            RenderedChart::Pie(_) => ChartKind::Pie,
        }
    }

    /// Number of legend series. A pie is a single series.
    pub fn series_count(&self) -> usize {
        match self {
            RenderedChart::Cartesian(chart) => chart.series.len(),
            RenderedChart::Pie(_) => 1,
        }
    }

    pub fn slice_count(&self) -> usize {
        match self {
            RenderedChart::Cartesian(_) => 0,
            RenderedChart::Pie(chart) => chart.slices.len(),
        }
    }

    /// X-axis categories, or slice labels for a pie, in render order.
    pub fn categories(&self) -> Vec<&str> {
        match self {
            RenderedChart::Cartesian(chart) => chart.categories.iter().map(String::as_str).collect(),
            RenderedChart::Pie(chart) => chart.slices.iter().map(|s| s.label.as_str()).collect(),
        }
    }

    /// True for an empty frame: axes and legend but no data marks.
    pub fn is_empty(&self) -> bool {
        match self {
            RenderedChart::Cartesian(chart) => chart.categories.is_empty(),
            RenderedChart::Pie(chart) => chart.slices.is_empty(),
        }
    }
}
