use common::{ChartKind, Dataset};

use super::{ChartRenderer, category_label, measure};
use crate::chart::{PieChart, RenderedChart, Slice};
use crate::dispatch::Diagnostic;
use crate::palette::Palette;

/// Pie renderer. Accepts exactly one value field; every row is a slice and
/// slice colors follow row position.
#[derive(Debug, Clone)]
pub struct PieRenderer {
    palette: Palette,
}

impl PieRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl ChartRenderer for PieRenderer {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn render(
        &self,
        dataset: &Dataset,
        category_field: &str,
        value_fields: &[String],
    ) -> Result<RenderedChart, Diagnostic> {
        let value_field = match value_fields {
            [single] => single,
            [] => return Err(Diagnostic::NoValueFields),
            many => {
                return Err(Diagnostic::PieRequiresSingleMetric {
                    value_fields: many.len(),
                });
            }
        };

        let slices = dataset
            .iter()
            .enumerate()
            .map(|(index, row)| Slice {
                label: category_label(row, category_field),
                value: measure(row, value_field),
                color: self.palette.color(index).to_string(),
            })
            .collect();

        Ok(RenderedChart::Pie(PieChart {
            category_field: category_field.to_string(),
            value_field: value_field.clone(),
            slices,
        }))
    }
}
