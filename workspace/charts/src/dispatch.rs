use std::fmt;

use common::{ChartKind, Dataset, FieldSelection};
use serde::Serialize;
use tracing::{debug, trace};

use crate::chart::RenderedChart;
use crate::palette::ChartTheme;
use crate::render::{CartesianRenderer, ChartRenderer, PieRenderer};

/// Message shown when a pie is requested for several metrics.
pub const PIE_SINGLE_METRIC_MESSAGE: &str = "Pie chart supports only one metric at a time.";

/// A rendering precondition that did not hold. Shown to the user in place of
/// the chart; the user can change the selection and try again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Pie charts take exactly one value field.
    PieRequiresSingleMetric { value_fields: usize },
    /// A row lacks the category field or one of the value fields.
    MissingField { field: String, row: usize },
    /// Nothing to plot.
    NoValueFields,
}

impl Diagnostic {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::PieRequiresSingleMetric { .. } => f.write_str(PIE_SINGLE_METRIC_MESSAGE),
            Diagnostic::MissingField { field, row } => {
                write!(f, "Result row {} has no \"{}\" field, so it cannot be charted.", row + 1, field)
            }
            Diagnostic::NoValueFields => f.write_str("The result has no metric to chart."),
        }
    }
}

/// Picks the renderer for a chart kind and checks the data against its
/// precondition before rendering. Pure and synchronous.
#[derive(Debug, Clone)]
pub struct ChartDispatcher {
    bar: CartesianRenderer,
    line: CartesianRenderer,
    area: CartesianRenderer,
    pie: PieRenderer,
}

impl Default for ChartDispatcher {
    fn default() -> Self {
        Self::new(&ChartTheme::default())
    }
}

impl ChartDispatcher {
    pub fn new(theme: &ChartTheme) -> Self {
        Self {
            bar: CartesianRenderer::bar(theme.series.clone()),
            line: CartesianRenderer::line(theme.series.clone()),
            area: CartesianRenderer::area(theme.series.clone()),
            pie: PieRenderer::new(theme.slices.clone()),
        }
    }

    pub fn renderer(&self, kind: ChartKind) -> &dyn ChartRenderer {
        match kind {
            ChartKind::Bar => &self.bar,
            ChartKind::Line => &self.line,
            ChartKind::Area => &self.area,
            ChartKind::Pie => &self.pie,
        }
    }

    /// Renders `dataset` as `kind`, or explains why it cannot.
    pub fn render(
        &self,
        kind: ChartKind,
        dataset: &Dataset,
        selection: &FieldSelection,
    ) -> Result<RenderedChart, Diagnostic> {
        trace!(%kind, rows = dataset.len(), "Dispatching chart");

        let value_count = selection.value_fields().len();
        if kind == ChartKind::Pie && value_count != 1 {
            debug!(value_count, "Pie requires exactly one metric");
            return Err(Diagnostic::PieRequiresSingleMetric {
                value_fields: value_count,
            });
        }

        if let Some((row, field)) = dataset.find_missing(&selection.required_fields()) {
            debug!(row, field, "Selection does not match result rows");
            return Err(Diagnostic::MissingField {
                field: field.to_string(),
                row,
            });
        }

        self.renderer(kind)
            .render(dataset, selection.category_field(), selection.value_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fields, profit_by_country, scenario_rows, selection};
    use common::Row;

    #[test]
    fn test_pie_with_single_metric_renders_one_slice_per_row() {
        let dispatcher = ChartDispatcher::default();
        for rows in 0..6 {
            let dataset: Dataset = (0..rows)
                .map(|i| Row::new().with("name", format!("c{}", i)).with("profit", i))
                .collect();
            let chart = dispatcher
                .render(ChartKind::Pie, &dataset, &selection("name", &["profit"]))
                .unwrap();
            assert_eq!(chart.slice_count(), dataset.len());
        }
    }

    #[test]
    fn test_pie_with_many_metrics_returns_fixed_diagnostic() {
        let dispatcher = ChartDispatcher::default();
        for metrics in [&["profit", "sales"][..], &["a", "b", "c"][..]] {
            let result = dispatcher.render(ChartKind::Pie, &profit_by_country(), &selection("name", metrics));
            let diagnostic = result.unwrap_err();
            assert_eq!(diagnostic.message(), PIE_SINGLE_METRIC_MESSAGE);
        }
    }

    #[test]
    fn test_pie_check_runs_before_field_check() {
        let dispatcher = ChartDispatcher::default();
        let result = dispatcher.render(
            ChartKind::Pie,
            &profit_by_country(),
            &selection("name", &["missing", "also_missing"]),
        );
        assert_eq!(result, Err(Diagnostic::PieRequiresSingleMetric { value_fields: 2 }));
    }

    #[test]
    fn test_cartesian_kinds_render_one_series_per_value_field() {
        let dispatcher = ChartDispatcher::default();
        let dataset = profit_by_country();
        for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Area] {
            for metrics in [&["profit"][..], &["profit", "sales"][..]] {
                let chart = dispatcher
                    .render(kind, &dataset, &selection("name", metrics))
                    .unwrap();
                assert_eq!(chart.kind(), kind);
                assert_eq!(chart.series_count(), metrics.len());
            }
        }
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let dispatcher = ChartDispatcher::default();
        let dataset = profit_by_country();
        for kind in ChartKind::ALL {
            let s = selection("name", &["profit"]);
            assert_eq!(
                dispatcher.render(kind, &dataset, &s),
                dispatcher.render(kind, &dataset, &s)
            );
        }
    }

    #[test]
    fn test_categories_follow_row_order_not_sorted() {
        let dispatcher = ChartDispatcher::default();
        let mut rows: Vec<Row> = profit_by_country().rows().to_vec();
        rows.reverse();
        rows.swap(0, 1);
        let permuted = Dataset::new(rows);

        for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Area] {
            let chart = dispatcher
                .render(kind, &permuted, &selection("name", &["profit"]))
                .unwrap();
            assert_eq!(chart.categories(), vec!["France", "Germany", "Canada"]);
        }
    }

    #[test]
    fn test_missing_field_is_reported_with_row() {
        let dispatcher = ChartDispatcher::default();
        let dataset = Dataset::new(vec![
            Row::new().with("name", "Canada").with("profit", 120),
            Row::new().with("name", "France"),
        ]);

        let result = dispatcher.render(ChartKind::Bar, &dataset, &selection("name", &["profit"]));
        assert_eq!(
            result,
            Err(Diagnostic::MissingField {
                field: "profit".to_string(),
                row: 1
            })
        );

        let result = dispatcher.render(ChartKind::Line, &dataset, &selection("country", &["profit"]));
        assert!(matches!(result, Err(Diagnostic::MissingField { row: 0, .. })));
    }

    #[test]
    fn test_empty_dataset_renders_frames_for_every_kind() {
        let dispatcher = ChartDispatcher::default();
        for kind in ChartKind::ALL {
            let chart = dispatcher
                .render(kind, &Dataset::empty(), &selection("name", &["profit"]))
                .unwrap();
            assert!(chart.is_empty());
        }
    }

    #[test]
    fn test_scenario_bar_and_pie() {
        let dispatcher = ChartDispatcher::default();
        let dataset = scenario_rows();

        let bar = dispatcher
            .render(ChartKind::Bar, &dataset, &selection("name", &["profit"]))
            .unwrap();
        assert_eq!(bar.categories().len(), 2);
        assert_eq!(bar.series_count(), 1);

        let pie = dispatcher
            .render(ChartKind::Pie, &dataset, &selection("name", &["profit"]))
            .unwrap();
        assert_eq!(pie.slice_count(), 2);

        let diagnostic = dispatcher
            .render(ChartKind::Pie, &dataset, &FieldSelection::new("name", fields(&["profit", "sales"])).unwrap())
            .unwrap_err();
        assert_eq!(diagnostic.to_string(), PIE_SINGLE_METRIC_MESSAGE);
    }
}
