pub mod chart;
pub mod dispatch;
pub mod figure;
pub mod forecast;
pub mod palette;
pub mod query;
pub mod render;
pub mod request;

#[cfg(test)]
pub(crate) mod testing;

pub use chart::{CartesianChart, PieChart, RenderedChart, Series, SeriesMark, Slice};
pub use dispatch::{ChartDispatcher, Diagnostic, PIE_SINGLE_METRIC_MESSAGE};
pub use figure::Figure;
pub use forecast::{ForecastController, ForecastResult, ForecastView};
pub use palette::{ChartTheme, Palette, PaletteError};
pub use query::{ChartBinding, ChartContent, ChartView, QueryController};
pub use render::ChartRenderer;
pub use request::{RequestController, RequestState, Resolution, Ticket, TriggerPolicy};

/// Returns the theme and dispatcher used by both clients.
///
/// A custom series palette, when given, also colors pie slices; the forecast
/// line keeps its own color.
pub fn default_dispatcher(series_palette: Option<Palette>) -> (ChartTheme, ChartDispatcher) {
    let theme = match series_palette {
        Some(palette) => ChartTheme::with_series_palette(palette),
        None => ChartTheme::default(),
    };
    let dispatcher = ChartDispatcher::new(&theme);
    (theme, dispatcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ChartKind;
    use crate::testing::{scenario_rows, selection, test_palette};

    #[test]
    fn test_default_dispatcher_uses_builtin_palettes() {
        let (theme, dispatcher) = default_dispatcher(None);
        assert_eq!(theme, ChartTheme::default());

        let chart = dispatcher
            .render(ChartKind::Pie, &scenario_rows(), &selection("name", &["profit"]))
            .unwrap();
        let RenderedChart::Pie(pie) = chart else {
            panic!("expected pie chart");
        };
        assert_eq!(pie.slices[1].color, "#22D3EE");
    }

    #[test]
    fn test_custom_palette_reaches_series_and_slices() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let (theme, dispatcher) = default_dispatcher(Some(test_palette()));
        assert_eq!(theme.forecast, ChartTheme::default().forecast);

        let bar = dispatcher
            .render(ChartKind::Bar, &scenario_rows(), &selection("name", &["profit"]))
            .unwrap();
        let RenderedChart::Cartesian(bar) = bar else {
            panic!("expected cartesian chart");
        };
        assert_eq!(bar.series[0].color, "#000001");

        let pie = dispatcher
            .render(ChartKind::Pie, &scenario_rows(), &selection("name", &["profit"]))
            .unwrap();
        assert_eq!(pie.categories(), vec!["Canada", "France"]);
        let RenderedChart::Pie(pie) = pie else {
            panic!("expected pie chart");
        };
        assert_eq!(pie.slices[1].color, "#000002");
    }
}
