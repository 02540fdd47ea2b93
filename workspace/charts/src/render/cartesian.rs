use common::{ChartKind, Dataset};

use super::{ChartRenderer, category_label, measure};
use crate::chart::{CartesianChart, RenderedChart, Series, SeriesMark};
use crate::dispatch::Diagnostic;
use crate::palette::Palette;

/// Bar, line and area renderer. One series per value field, colored by the
/// field's position; categories keep dataset order.
#[derive(Debug, Clone)]
pub struct CartesianRenderer {
    mark: SeriesMark,
    palette: Palette,
}

impl CartesianRenderer {
    pub fn new(mark: SeriesMark, palette: Palette) -> Self {
        Self { mark, palette }
    }

    pub fn bar(palette: Palette) -> Self {
        Self::new(SeriesMark::Bar, palette)
    }

    pub fn line(palette: Palette) -> Self {
        Self::new(SeriesMark::Line, palette)
    }

    pub fn area(palette: Palette) -> Self {
        Self::new(SeriesMark::Area, palette)
    }
}

impl ChartRenderer for CartesianRenderer {
    fn kind(&self) -> ChartKind {
        self.mark.kind()
    }

    fn render(
        &self,
        dataset: &Dataset,
        category_field: &str,
        value_fields: &[String],
    ) -> Result<RenderedChart, Diagnostic> {
        if value_fields.is_empty() {
            return Err(Diagnostic::NoValueFields);
        }

        let categories = dataset
            .iter()
            .map(|row| category_label(row, category_field))
            .collect();

        let series = value_fields
            .iter()
            .enumerate()
            .map(|(index, field)| Series {
                field: field.clone(),
                color: self.palette.color(index).to_string(),
                values: dataset.iter().map(|row| measure(row, field)).collect(),
            })
            .collect();

        Ok(RenderedChart::Cartesian(CartesianChart {
            mark: self.mark,
            category_field: category_field.to_string(),
            categories,
            series,
        }))
    }
}
