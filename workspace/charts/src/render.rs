//! Chart renderers: pure functions from a dataset plus field names to a
//! [`RenderedChart`].

pub mod cartesian;
pub mod pie;

pub use cartesian::CartesianRenderer;
pub use pie::PieRenderer;

use common::{ChartKind, Dataset, FieldValue, MISSING_LABEL, Row};

use crate::chart::RenderedChart;
use crate::dispatch::Diagnostic;

/// Common interface of the bar, line, area and pie renderers.
///
/// Renderers own their palette and never fail on an empty dataset; they only
/// reject field lists that break their own structural precondition.
pub trait ChartRenderer {
    fn kind(&self) -> ChartKind;

    fn render(
        &self,
        dataset: &Dataset,
        category_field: &str,
        value_fields: &[String],
    ) -> Result<RenderedChart, Diagnostic>;
}

fn category_label(row: &Row, category_field: &str) -> String {
    row.get(category_field)
        .map(FieldValue::label)
        .unwrap_or_else(|| MISSING_LABEL.to_string())
}

fn measure(row: &Row, field: &str) -> Option<f64> {
    row.get(field).and_then(FieldValue::as_measure)
}
